//! Fixed navigation bar with theme toggle and mobile menu.

use dioxus::prelude::*;
use folio_core::Motion;
use folio_core::{NavState, ThemeStore, NAV_LINKS};

use crate::bridge::{scroll_to, use_window_scroll};

/// Navigation bar. Switches to its condensed style past the scroll threshold.
#[component]
pub fn Navbar(theme: Signal<ThemeStore>, brand: String) -> Element {
    let mut nav = use_signal(NavState::new);

    use_window_scroll(move |offset| {
        let mut next = *nav.peek();
        if next.on_scroll(offset) {
            tracing::debug!(offset, scrolled = next.scrolled, "Header style changed");
            nav.set(next);
        }
    });

    let state = *nav.read();
    let nav_class = if state.scrolled {
        "navbar navbar-scrolled"
    } else {
        "navbar"
    };

    rsx! {
        nav {
            class: "{nav_class}",
            style: Motion::DROP_IN.mount_style(0),

            div {
                class: "navbar-content",

                h1 {
                    class: "navbar-logo",
                    "{brand}"
                }

                div {
                    class: "navbar-links",
                    for (i, link) in NAV_LINKS.iter().enumerate() {
                        a {
                            key: "{link.label}",
                            class: "nav-link",
                            href: "{link.anchor}",
                            style: Motion::SLIDE_LEFT.mount_style(i),
                            onclick: move |evt: MouseEvent| {
                                evt.prevent_default();
                                nav.write().follow_link(link);
                                scroll_to(link.target_id());
                            },
                            "{link.label}"
                        }
                    }
                }

                div {
                    class: "navbar-buttons",
                    ThemeToggle { theme }
                    button {
                        class: "menu-button",
                        "aria-label": "Open menu",
                        onclick: move |_| nav.write().open_menu(),
                        "☰"
                    }
                }
            }
        }

        if state.menu_open {
            MobileMenu { nav, theme }
        }
    }
}

/// Full-screen menu for narrow windows.
#[component]
fn MobileMenu(nav: Signal<NavState>, theme: Signal<ThemeStore>) -> Element {
    let mut nav_write = nav;

    rsx! {
        div {
            class: "mobile-menu",

            button {
                class: "mobile-menu-close",
                "aria-label": "Close menu",
                onclick: move |_| nav_write.write().close_menu(),
                "✕"
            }

            for (i, link) in NAV_LINKS.iter().enumerate() {
                a {
                    key: "{link.label}",
                    class: "mobile-nav-link",
                    href: "{link.anchor}",
                    style: Motion::SLIDE_LEFT.with_delay(100).mount_style(i),
                    onclick: move |evt: MouseEvent| {
                        evt.prevent_default();
                        nav_write.write().follow_link(link);
                        scroll_to(link.target_id());
                    },
                    "{link.label}"
                }
            }

            ThemeToggle { theme }
        }
    }
}

/// Sun/moon button flipping the theme store.
#[component]
fn ThemeToggle(theme: Signal<ThemeStore>) -> Element {
    let mut theme_write = theme;
    let store = *theme.read();
    let is_dark = store.is_dark();
    let label = format!(
        "Switch to {} theme",
        store.mode().toggled().display_name().to_lowercase()
    );

    rsx! {
        button {
            class: "theme-toggle",
            "aria-label": "{label}",
            onclick: move |_| {
                theme_write.write().toggle();
            },
            if is_dark { "☀" } else { "☾" }
        }
    }
}
