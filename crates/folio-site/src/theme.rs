//! Applies the active palette to the page.

use dioxus::prelude::*;
use folio_core::ThemeStore;

/// Root wrapper carrying the palette as CSS custom properties.
#[component]
pub fn ThemedRoot(theme: Signal<ThemeStore>, children: Element) -> Element {
    let store = *theme.read();
    let palette = store.palette();

    rsx! {
        div {
            class: "themed-root",
            "data-theme": "{store.mode().css_value()}",
            style: "{palette.css_variables()}",
            {children}
        }
    }
}
