//! Skills grid with proficiency bars.

use dioxus::prelude::*;
use folio_core::motion::fill_style;
use folio_core::{Motion, MotionState, Section, Skill};

use crate::bridge::use_entrance;

use super::SectionHeader;

#[component]
pub fn Skills(skills: Vec<Skill>) -> Element {
    let entered = use_entrance(Section::Skills);
    let visible = entered();
    let state = MotionState::from_visible(visible);

    rsx! {
        section {
            id: Section::Skills.anchor_id(),
            class: "section skills-section",

            div { class: "background-circle" }

            div {
                class: "container",

                SectionHeader {
                    title: "Skills & Expertise",
                    description: "Here are the technologies and methodologies I specialize in, continuously refining my expertise to deliver exceptional digital solutions.",
                    entered: visible,
                }

                div {
                    class: "skills-grid",
                    for (i, skill) in skills.iter().enumerate() {
                        div {
                            key: "{skill.name}",
                            class: "skill-card",
                            style: Motion::FADE_UP.with_delay(200).style(state, i),

                            div {
                                class: "skill-badge",
                                style: Motion::POP.style(state, i),
                                "{skill.proficiency}"
                            }
                            h3 { class: "skill-name", "{skill.name}" }
                            p { class: "skill-description", "{skill.description}" }
                            div {
                                class: "progress-track",
                                div {
                                    class: "progress-fill",
                                    style: fill_style(skill.fill_percent(visible)),
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
