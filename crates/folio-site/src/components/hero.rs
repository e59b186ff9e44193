//! Landing section at the top of the page.

use dioxus::prelude::*;
use folio_core::{Motion, Profile, Section};

use crate::bridge::scroll_to;

#[component]
pub fn Hero(profile: Profile) -> Element {
    let rise = Motion::FADE_UP.with_delay(300);
    // Slightly slower cadence than the galleries
    let rise = Motion { stagger_ms: 200, ..rise };

    rsx! {
        section {
            id: Section::Home.anchor_id(),
            class: "hero",

            div { class: "hero-background" }

            div {
                class: "hero-container",

                div {
                    class: "hero-greeting",
                    style: rise.mount_style(0),
                    "{profile.greeting}"
                }
                h1 {
                    class: "hero-title",
                    style: rise.mount_style(1),
                    "{profile.headline}"
                }
                p {
                    class: "hero-text",
                    style: rise.mount_style(2),
                    "{profile.summary}"
                }
                a {
                    class: "hero-action",
                    href: "#projects",
                    style: rise.mount_style(3),
                    onclick: move |evt: MouseEvent| {
                        evt.prevent_default();
                        scroll_to(Section::Projects.anchor_id());
                    },
                    "View my work ↓"
                }
                div {
                    class: "social-links",
                    style: rise.mount_style(4),
                    for social in profile.socials.iter() {
                        a {
                            key: "{social.url}",
                            class: "social-link",
                            href: "{social.url}",
                            target: "_blank",
                            rel: "noopener noreferrer",
                            "{social.label}"
                        }
                    }
                }
            }

            div {
                class: "scroll-indicator",
                span { "Scroll Down" }
                span { class: "scroll-indicator-arrow", "↓" }
            }
        }
    }
}
