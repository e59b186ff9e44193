//! Projects gallery with a show-more toggle and a detail modal.

use dioxus::prelude::*;
use folio_core::{ModalTarget, Motion, MotionState, Project, ProjectId, ProjectsView, Section};

use crate::bridge::use_entrance;

use super::SectionHeader;

/// Projects section. Shows a preview of the list until expanded.
#[component]
pub fn Projects(projects: Vec<Project>) -> Element {
    let mut view = use_signal(ProjectsView::new);
    let entered = use_entrance(Section::Projects);
    let visible = entered();
    let state = MotionState::from_visible(visible);

    let current = *view.read();
    let shown = current.visible(&projects);
    let selected = current.selected_project(&projects).cloned();

    rsx! {
        section {
            id: Section::Projects.anchor_id(),
            class: "section projects-section",

            div {
                class: "container",

                SectionHeader {
                    title: "Projects",
                    description: "Check out some of my recent work. Click on a project to view more details.",
                    entered: visible,
                }

                div {
                    class: "project-grid",
                    for (i, project) in shown.iter().enumerate() {
                        ProjectCard {
                            key: "{project.id}",
                            project: project.clone(),
                            style: Motion::FADE_UP.style(state, i),
                            on_open: move |id| view.write().open(id),
                        }
                    }
                }

                if ProjectsView::has_more(projects.len()) {
                    div {
                        class: "show-more-row",
                        button {
                            class: "show-more-button",
                            onclick: move |_| {
                                view.write().toggle_show_more();
                            },
                            if current.show_more { "Show Less" } else { "Show More +" }
                        }
                    }
                }
            }

            if let Some(project) = selected {
                ProjectModal {
                    project,
                    on_click: move |target| view.write().modal_click(target),
                    on_close: move |_| view.write().close(),
                }
            }
        }
    }
}

/// A single project card. Clicking anywhere but its links opens the modal.
#[component]
fn ProjectCard(project: Project, style: String, on_open: EventHandler<ProjectId>) -> Element {
    let id = project.id;

    rsx! {
        div {
            class: "project-card",
            style: "{style}",
            onclick: move |_| on_open.call(id),

            div {
                class: "project-image",
                img { src: "{project.image}", alt: "{project.title}" }
            }

            div {
                class: "project-content",
                h3 { class: "project-title", "{project.title}" }
                p { class: "project-description", "{project.description}" }
                TagList { tags: project.tags.clone() }
                ProjectLinks {
                    demo_link: project.demo_link.clone(),
                    github_link: project.github_link.clone(),
                }
            }
        }
    }
}

/// Modal with the full project description.
///
/// Clicks on the backdrop close it; clicks inside the dialog are stopped
/// before they reach the backdrop.
#[component]
fn ProjectModal(
    project: Project,
    on_click: EventHandler<ModalTarget>,
    on_close: EventHandler<()>,
) -> Element {
    rsx! {
        div {
            class: "modal-backdrop",
            onclick: move |_| on_click.call(ModalTarget::Backdrop),

            div {
                class: "modal-content",
                style: Motion::POP.with_delay(0).mount_style(0),
                onclick: move |evt| {
                    evt.stop_propagation();
                    on_click.call(ModalTarget::Content);
                },

                div {
                    class: "modal-image",
                    img { src: "{project.image}", alt: "{project.title}" }
                    button {
                        class: "modal-close",
                        "aria-label": "Close",
                        onclick: move |evt| {
                            evt.stop_propagation();
                            on_close.call(());
                        },
                        "✕"
                    }
                }

                div {
                    class: "modal-body",
                    h3 { class: "modal-title", "{project.title}" }
                    p { class: "modal-description", "{project.full_description}" }
                    TagList { tags: project.tags.clone() }
                    ProjectLinks {
                        demo_link: project.demo_link.clone(),
                        github_link: project.github_link.clone(),
                    }
                }
            }
        }
    }
}

#[component]
fn TagList(tags: Vec<String>) -> Element {
    rsx! {
        div {
            class: "tags",
            for tag in tags.iter() {
                span { key: "{tag}", class: "tag", "{tag}" }
            }
        }
    }
}

/// Outbound demo/repository links. They open externally and do not bubble
/// up to the card.
#[component]
fn ProjectLinks(demo_link: Option<String>, github_link: Option<String>) -> Element {
    rsx! {
        div {
            class: "project-links",
            if let Some(url) = demo_link {
                a {
                    class: "project-link",
                    href: "{url}",
                    target: "_blank",
                    rel: "noopener noreferrer",
                    onclick: move |evt| evt.stop_propagation(),
                    "↗ Demo"
                }
            }
            if let Some(url) = github_link {
                a {
                    class: "project-link",
                    href: "{url}",
                    target: "_blank",
                    rel: "noopener noreferrer",
                    onclick: move |evt| evt.stop_propagation(),
                    "⌥ GitHub"
                }
            }
        }
    }
}
