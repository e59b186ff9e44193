//! Command line arguments and the resolved site configuration.

use std::path::PathBuf;
use std::sync::OnceLock;
use std::time::Duration;

use clap::Parser;
use folio_core::{ContentError, FormTimings, PortfolioContent, ThemeMode};
use thiserror::Error;

/// Default `tracing` filter when `--log-level` is not given.
pub const DEFAULT_LOG_FILTER: &str = "folio_site=info,folio_core=info";

/// Resolved configuration, set once before launch.
static SITE_CONFIG: OnceLock<SiteConfig> = OnceLock::new();

/// Command line arguments.
#[derive(Parser, Debug, Clone)]
#[command(name = "folio")]
#[command(about = "Single-page portfolio site")]
pub struct Args {
    /// JSON file replacing the built-in profile, skills, projects and testimonials
    #[arg(short, long)]
    pub content: Option<PathBuf>,

    /// Simulated contact delivery latency in milliseconds
    #[arg(long, default_value_t = 1500)]
    pub submit_delay_ms: u64,

    /// How long the "message sent" banner stays visible, in milliseconds
    #[arg(long, default_value_t = 5000)]
    pub banner_ms: u64,

    /// Start in dark mode (applies to this launch only)
    #[arg(long)]
    pub dark: bool,

    /// Initial window width
    #[arg(long, default_value_t = 1280.0)]
    pub width: f64,

    /// Initial window height
    #[arg(long, default_value_t = 860.0)]
    pub height: f64,

    /// Log filter directive, e.g. "folio_site=debug"
    #[arg(long)]
    pub log_level: Option<String>,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error(transparent)]
    Content(#[from] ContentError),
    #[error("the success banner must stay up longer than the submit delay ({banner_ms}ms <= {submit_delay_ms}ms)")]
    Timing { submit_delay_ms: u64, banner_ms: u64 },
}

/// Everything the root component needs from startup.
#[derive(Debug, Clone, PartialEq)]
pub struct SiteConfig {
    pub content: PortfolioContent,
    pub timings: FormTimings,
    pub initial_mode: ThemeMode,
}

impl SiteConfig {
    pub fn from_args(args: &Args) -> Result<Self, ConfigError> {
        if args.banner_ms <= args.submit_delay_ms {
            return Err(ConfigError::Timing {
                submit_delay_ms: args.submit_delay_ms,
                banner_ms: args.banner_ms,
            });
        }

        let content = match &args.content {
            Some(path) => PortfolioContent::from_path(path)?,
            None => PortfolioContent::builtin()?,
        };

        Ok(Self {
            content,
            timings: FormTimings {
                submit_delay: Duration::from_millis(args.submit_delay_ms),
                banner_duration: Duration::from_millis(args.banner_ms),
            },
            initial_mode: if args.dark { ThemeMode::Dark } else { ThemeMode::Light },
        })
    }
}

impl Args {
    pub fn log_filter(&self) -> &str {
        self.log_level.as_deref().unwrap_or(DEFAULT_LOG_FILTER)
    }
}

/// Stores the configuration for the app. Later calls are ignored.
pub fn install(config: SiteConfig) {
    SITE_CONFIG.set(config).ok();
}

/// Returns the installed configuration, or the built-in defaults when
/// nothing was installed.
pub fn site_config() -> Result<&'static SiteConfig, ContentError> {
    if let Some(config) = SITE_CONFIG.get() {
        return Ok(config);
    }
    let fallback = SiteConfig {
        content: PortfolioContent::builtin()?,
        timings: FormTimings::default(),
        initial_mode: ThemeMode::default(),
    };
    Ok(SITE_CONFIG.get_or_init(|| fallback))
}
