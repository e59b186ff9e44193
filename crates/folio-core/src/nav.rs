//! Navigation bar state: scroll-driven header styling and the mobile menu.

/// Scroll offset (in CSS pixels) at which the header switches to its
/// condensed, opaque style.
pub const SCROLL_THRESHOLD_PX: f64 = 50.0;

/// An in-page navigation target.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    /// Fragment including the leading `#`.
    pub anchor: &'static str,
}

impl NavLink {
    /// Anchor without the leading `#`, matching a section's element id.
    pub fn target_id(&self) -> &'static str {
        self.anchor.trim_start_matches('#')
    }
}

pub const NAV_LINKS: &[NavLink] = &[
    NavLink { label: "About", anchor: "#about" },
    NavLink { label: "Skills", anchor: "#skills" },
    NavLink { label: "Projects", anchor: "#projects" },
    NavLink { label: "Contact", anchor: "#contact" },
];

/// Whether the header is in its scrolled style at the given offset.
pub fn is_scrolled(offset: f64) -> bool {
    offset >= SCROLL_THRESHOLD_PX
}

/// Two independent flags; neither guards the other.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NavState {
    pub scrolled: bool,
    pub menu_open: bool,
}

impl NavState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Recomputes `scrolled` for a new offset. Returns true if it changed.
    pub fn on_scroll(&mut self, offset: f64) -> bool {
        let scrolled = is_scrolled(offset);
        let changed = scrolled != self.scrolled;
        self.scrolled = scrolled;
        changed
    }

    pub fn open_menu(&mut self) {
        self.menu_open = true;
    }

    pub fn close_menu(&mut self) {
        self.menu_open = false;
    }

    /// Handles a click on a navigation link and returns its anchor.
    pub fn follow_link(&mut self, link: &NavLink) -> &'static str {
        self.menu_open = false;
        link.anchor
    }
}
