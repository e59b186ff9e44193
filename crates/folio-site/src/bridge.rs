//! DOM observers driven through `document::eval`.
//!
//! Each hook installs a small script that reports browser events back over
//! the eval channel. The script stays attached while the calling component
//! is mounted and removes its listener when told to detach.

use dioxus::prelude::*;
use folio_core::{EntranceLatch, Section};

/// Message that tells an observer script to remove its listener.
const DETACH: &str = "detach";

const SCROLL_LISTENER_JS: &str = r#"
const report = () => {
    try { dioxus.send(window.scrollY); } catch (_) { window.removeEventListener('scroll', report); }
};
window.addEventListener('scroll', report, { passive: true });
report();
await dioxus.recv();
window.removeEventListener('scroll', report);
"#;

/// Runs `on_scroll` with the window's vertical offset on every scroll event,
/// and once on attach. The listener is removed when the caller unmounts.
pub fn use_window_scroll(mut on_scroll: impl FnMut(f64) + 'static) {
    let listener = use_hook(move || {
        let eval = document::eval(SCROLL_LISTENER_JS);
        let mut rx = eval.clone();
        spawn(async move {
            while let Ok(offset) = rx.recv::<f64>().await {
                on_scroll(offset);
            }
        });
        eval
    });

    use_drop(move || {
        tracing::debug!("Detaching scroll listener");
        let _ = listener.send(DETACH);
    });
}

fn entrance_script(section: Section) -> String {
    format!(
        r#"
await new Promise((resolve) => requestAnimationFrame(() => resolve()));
const el = document.getElementById('{id}');
if (!el || !('IntersectionObserver' in window)) {{
    dioxus.send(true);
}} else {{
    const observer = new IntersectionObserver((entries) => {{
        if (entries.some((entry) => entry.isIntersecting)) {{
            observer.disconnect();
            dioxus.send(true);
        }}
    }}, {{ threshold: {threshold} }});
    observer.observe(el);
    await dioxus.recv();
    observer.disconnect();
}}
"#,
        id = section.anchor_id(),
        threshold = section.reveal_threshold(),
    )
}

/// Returns whether `section` has entered the viewport at least once.
///
/// Backed by an [`EntranceLatch`]: the first intersection flips it and the
/// observer disconnects. It never goes back to false.
pub fn use_entrance(section: Section) -> Memo<bool> {
    let mut latch = use_signal(EntranceLatch::new);

    let observer = use_hook(move || {
        let eval = document::eval(&entrance_script(section));
        let mut rx = eval.clone();
        spawn(async move {
            while let Ok(intersecting) = rx.recv::<bool>().await {
                if latch.write().observe(intersecting) {
                    tracing::debug!(section = section.anchor_id(), "Section entered viewport");
                    break;
                }
            }
        });
        eval
    });

    use_drop(move || {
        let _ = observer.send(DETACH);
    });

    use_memo(move || latch.read().has_entered())
}

/// Smoothly scrolls the section with element id `target` into view.
pub fn scroll_to(target: &str) {
    let js = format!(
        "document.getElementById('{target}')?.scrollIntoView({{ behavior: 'smooth', block: 'start' }});"
    );
    document::eval(&js);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entrance_script_targets_section() {
        let js = entrance_script(Section::Skills);
        assert!(js.contains("getElementById('skills')"));
        assert!(js.contains("threshold: 0.1"));
        assert!(js.contains("observer.disconnect()"));
    }
}
