//! Page footer with navigation and social links.

use chrono::Datelike;
use dioxus::prelude::*;
use folio_core::{Motion, Profile, NAV_LINKS};

use crate::bridge::scroll_to;

#[component]
pub fn Footer(profile: Profile) -> Element {
    let year = chrono::Local::now().year();
    let column = Motion::FADE_UP.with_delay(300);

    rsx! {
        footer {
            class: "footer",

            div {
                class: "footer-content",

                div {
                    class: "footer-column",
                    style: column.mount_style(0),
                    h3 { class: "footer-logo", "{profile.brand}" }
                    p { class: "footer-text", "{profile.footer_blurb}" }
                    div {
                        class: "social-links",
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
                    class: "footer-column",
                    style: column.mount_style(1),
                    h4 { "Navigation" }
                    div {
                        class: "footer-links",
                        for link in NAV_LINKS.iter() {
                            a {
                                key: "{link.label}",
                                class: "footer-link",
                                href: "{link.anchor}",
                                onclick: move |evt: MouseEvent| {
                                    evt.prevent_default();
                                    scroll_to(link.target_id());
                                },
                                "{link.label}"
                            }
                        }
                    }
                }

                div {
                    class: "footer-column",
                    style: column.mount_style(2),
                    h4 { "Contact" }
                    p {
                        class: "footer-text",
                        "Feel free to reach out if you have any questions or want to work together on a project."
                    }
                    if let Some(email) = profile.primary_email() {
                        a { class: "footer-link", href: "mailto:{email}", "{email}" }
                    }
                }
            }

            div {
                class: "footer-bottom",
                span { "© {year} {profile.brand}. All rights reserved." }
                span { class: "footer-made-with", "Made with ♥" }
            }
        }
    }
}
