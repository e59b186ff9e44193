//! Theme system for the portfolio site.
//!
//! Two fixed palettes (light and dark) and a store holding the active
//! selection. The store is owned by the root component and handed down the
//! tree.

use std::fmt::Write as _;

/// Named color and shadow tokens for one theme variant.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Palette {
    pub background: &'static str,
    pub text: &'static str,
    pub accent: &'static str,
    pub accent_soft: &'static str,
    pub header_bg: &'static str,
    pub section_bg: &'static str,
    pub card_bg: &'static str,
    pub shadow_light: &'static str,
    pub shadow_medium: &'static str,
    pub input_bg: &'static str,
    pub input_border: &'static str,
    pub text_muted: &'static str,
}

impl Palette {
    pub const LIGHT: Palette = Palette {
        background: "#ffffff",
        text: "#333333",
        accent: "#9d00ff",
        accent_soft: "rgba(157, 0, 255, 0.1)",
        header_bg: "#ffffff",
        section_bg: "#f8f9fa",
        card_bg: "#ffffff",
        shadow_light: "0 4px 6px rgba(0, 0, 0, 0.05)",
        shadow_medium: "0 6px 12px rgba(0, 0, 0, 0.08)",
        input_bg: "#ffffff",
        input_border: "#e0e0e0",
        text_muted: "#666666",
    };

    pub const DARK: Palette = Palette {
        background: "#121212",
        text: "#f5f5f5",
        accent: "#9d00ff",
        accent_soft: "rgba(157, 0, 255, 0.15)",
        header_bg: "#1a1a1a",
        section_bg: "#1a1a1a",
        card_bg: "#222222",
        shadow_light: "0 4px 6px rgba(0, 0, 0, 0.2)",
        shadow_medium: "0 6px 12px rgba(0, 0, 0, 0.3)",
        input_bg: "#2a2a2a",
        input_border: "#444444",
        text_muted: "#bbbbbb",
    };

    /// Returns `(css custom property, value)` pairs for every token.
    pub fn tokens(&self) -> [(&'static str, &'static str); 12] {
        [
            ("--color-background", self.background),
            ("--color-text", self.text),
            ("--color-accent", self.accent),
            ("--color-accent-soft", self.accent_soft),
            ("--color-header-bg", self.header_bg),
            ("--color-section-bg", self.section_bg),
            ("--color-card-bg", self.card_bg),
            ("--shadow-light", self.shadow_light),
            ("--shadow-medium", self.shadow_medium),
            ("--color-input-bg", self.input_bg),
            ("--color-input-border", self.input_border),
            ("--color-text-muted", self.text_muted),
        ]
    }

    /// Renders the palette as an inline `style` value of CSS custom properties.
    pub fn css_variables(&self) -> String {
        let mut out = String::with_capacity(512);
        for (name, value) in self.tokens() {
            let _ = write!(out, "{name}: {value}; ");
        }
        out.truncate(out.trim_end().len());
        out
    }
}

/// Which palette is active.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    /// Returns the CSS data-theme attribute value.
    pub fn css_value(&self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        }
    }

    /// Returns the display name for the mode.
    pub fn display_name(&self) -> &'static str {
        match self {
            ThemeMode::Light => "Light",
            ThemeMode::Dark => "Dark",
        }
    }

    /// Returns the other mode.
    pub fn toggled(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }

    /// Resolves the palette for this mode.
    pub fn palette(self) -> &'static Palette {
        match self {
            ThemeMode::Light => &Palette::LIGHT,
            ThemeMode::Dark => &Palette::DARK,
        }
    }
}

/// Active theme selection. Lives for the process only; every launch starts
/// from the mode it is constructed with.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ThemeStore {
    mode: ThemeMode,
}

impl ThemeStore {
    pub fn new(mode: ThemeMode) -> Self {
        Self { mode }
    }

    pub fn mode(&self) -> ThemeMode {
        self.mode
    }

    pub fn is_dark(&self) -> bool {
        self.mode == ThemeMode::Dark
    }

    /// Flips the mode and returns the new one.
    pub fn toggle(&mut self) -> ThemeMode {
        self.mode = self.mode.toggled();
        tracing::debug!(mode = self.mode.css_value(), "Theme toggled");
        self.mode
    }

    pub fn palette(&self) -> &'static Palette {
        self.mode.palette()
    }
}
