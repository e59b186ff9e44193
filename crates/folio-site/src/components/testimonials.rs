//! Client testimonials with carousel controls.

use dioxus::prelude::*;
use folio_core::{Carousel, Motion, MotionState, Section, Testimonial};

use crate::bridge::use_entrance;

use super::SectionHeader;

#[component]
pub fn Testimonials(testimonials: Vec<Testimonial>) -> Element {
    let mut carousel = use_signal(Carousel::new);
    let entered = use_entrance(Section::Testimonials);
    let visible = entered();
    let state = MotionState::from_visible(visible);
    let count = testimonials.len();
    let current = *carousel.read();

    rsx! {
        section {
            id: Section::Testimonials.anchor_id(),
            class: "section testimonials-section",

            div { class: "background-decoration" }

            div {
                class: "container",

                SectionHeader {
                    title: "Client Testimonials",
                    description: "Here's what clients and collaborators have to say about working with me.",
                    entered: visible,
                }

                div {
                    class: "testimonials-wrapper",
                    for (i, testimonial) in testimonials.iter().enumerate() {
                        div {
                            key: "{i}",
                            class: if current.is_active(i) { "testimonial-card testimonial-card-active" } else { "testimonial-card" },
                            style: Motion::FADE_UP.with_delay(300).style(state, i),
                            onclick: move |_| {
                                carousel.write().select(i, count);
                            },

                            div {
                                class: "stars",
                                for star in 0..testimonial.stars {
                                    span { key: "{star}", class: "star", "★" }
                                }
                            }
                            blockquote { class: "quote", "{testimonial.text}" }
                            div {
                                class: "author",
                                img { class: "author-image", src: "{testimonial.image}", alt: "{testimonial.author}" }
                                div {
                                    class: "author-info",
                                    span { class: "author-name", "{testimonial.author}" }
                                    span { class: "author-title", "{testimonial.title}" }
                                }
                            }
                        }
                    }
                }

                if count > 1 {
                    div {
                        class: "carousel-controls",
                        style: Motion::FADE_IN.with_delay(400).style(state, 0),
                        button {
                            class: "carousel-button",
                            "aria-label": "Previous testimonial",
                            onclick: move |_| {
                                carousel.write().prev(count);
                            },
                            "‹"
                        }
                        span { class: "carousel-position", "{current.active + 1} / {count}" }
                        button {
                            class: "carousel-button",
                            "aria-label": "Next testimonial",
                            onclick: move |_| {
                                carousel.write().next(count);
                            },
                            "›"
                        }
                    }
                }
            }
        }
    }
}
