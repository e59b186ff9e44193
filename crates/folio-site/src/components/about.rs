//! About section: intro copy, focus-area cards and a portrait.

use dioxus::prelude::*;
use folio_core::{FocusArea, Motion, MotionState, Profile, Section};

use crate::bridge::use_entrance;

#[component]
pub fn About(profile: Profile, focus_areas: Vec<FocusArea>) -> Element {
    let entered = use_entrance(Section::About);
    let state = MotionState::from_visible(entered());
    let item = Motion::FADE_UP.with_delay(300);
    let text_count = profile.about_paragraphs.len() + 1;

    rsx! {
        section {
            id: Section::About.anchor_id(),
            class: "section about-section",

            div {
                class: "container about-layout",

                div {
                    class: "about-content",

                    h2 {
                        class: "about-title",
                        style: item.style(state, 0),
                        "{profile.about_title}"
                    }

                    for (i, paragraph) in profile.about_paragraphs.iter().enumerate() {
                        p {
                            key: "{i}",
                            class: "about-text",
                            style: item.style(state, i + 1),
                            "{paragraph}"
                        }
                    }

                    div {
                        class: "focus-cards",
                        for (i, area) in focus_areas.iter().enumerate() {
                            div {
                                key: "{area.title}",
                                class: "focus-card",
                                style: item.style(state, text_count + i),
                                h3 { "{area.title}" }
                                p { "{area.description}" }
                            }
                        }
                    }
                }

                div {
                    class: "about-image",
                    style: Motion::FADE_IN.with_delay(500).style(state, 0),
                    img {
                        src: "{profile.portrait}",
                        alt: "Portrait",
                    }
                    div { class: "floating-shape floating-shape-top" }
                    div { class: "floating-shape floating-shape-bottom" }
                }
            }
        }
    }
}
