//! Title block shared by the gallery sections.

use dioxus::prelude::*;
use folio_core::{Motion, MotionState};

/// Centered title and blurb at the top of a gallery section.
#[component]
pub fn SectionHeader(title: String, description: String, entered: bool) -> Element {
    let state = MotionState::from_visible(entered);

    rsx! {
        div {
            class: "section-header",
            h2 {
                class: "section-title",
                style: Motion::FADE_UP.style(state, 0),
                "{title}"
            }
            p {
                class: "section-description",
                style: Motion::FADE_UP.with_delay(200).style(state, 0),
                "{description}"
            }
        }
    }
}
