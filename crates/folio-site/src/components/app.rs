//! Root application component for the portfolio page.

use dioxus::prelude::*;
use folio_core::ThemeStore;

use crate::config::site_config;
use crate::theme::ThemedRoot;

use super::{About, Contact, Footer, Hero, Navbar, Projects, Skills, Testimonials};

/// Root application component.
///
/// Owns the theme store and hands it down; every section below keeps only
/// its own view state.
#[component]
pub fn App() -> Element {
    let loaded = site_config();
    let initial_mode = loaded
        .as_ref()
        .map(|config| config.initial_mode)
        .unwrap_or_default();
    let theme = use_signal(|| ThemeStore::new(initial_mode));

    use_drop(|| {
        tracing::info!("Shutting down Folio");
    });

    let config = match loaded {
        Ok(config) => config,
        Err(err) => {
            tracing::error!(error = %err, "Portfolio content unavailable");
            return rsx! {
                div {
                    class: "load-error",
                    h1 { "Content failed to load" }
                    p { "{err}" }
                }
            };
        }
    };
    let content = &config.content;

    rsx! {
        ThemedRoot {
            theme,
            div {
                class: "page",

                Navbar { theme, brand: content.profile.brand.clone() }

                main {
                    Hero { profile: content.profile.clone() }
                    About {
                        profile: content.profile.clone(),
                        focus_areas: content.focus_areas.clone(),
                    }
                    Skills { skills: content.skills.clone() }
                    Projects { projects: content.projects.clone() }
                    Testimonials { testimonials: content.testimonials.clone() }
                    Contact { profile: content.profile.clone(), timings: config.timings }
                }

                Footer { profile: content.profile.clone() }
            }
        }
    }
}
