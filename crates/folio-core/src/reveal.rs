//! Page sections and their one-way entrance latches.

/// Sections of the page, top to bottom.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Section {
    Home,
    About,
    Skills,
    Projects,
    Testimonials,
    Contact,
}

impl Section {
    /// Stable element id; navigation anchors point at these.
    pub fn anchor_id(&self) -> &'static str {
        match self {
            Section::Home => "home",
            Section::About => "about",
            Section::Skills => "skills",
            Section::Projects => "projects",
            Section::Testimonials => "testimonials",
            Section::Contact => "contact",
        }
    }

    /// Fraction of the section that must be inside the viewport before its
    /// entrance animation fires.
    pub fn reveal_threshold(&self) -> f64 {
        match self {
            Section::Skills | Section::Projects => 0.1,
            Section::Home | Section::About | Section::Testimonials | Section::Contact => 0.2,
        }
    }

    pub fn all() -> &'static [Section] {
        &[
            Section::Home,
            Section::About,
            Section::Skills,
            Section::Projects,
            Section::Testimonials,
            Section::Contact,
        ]
    }
}

/// Records that a section has been visible at least once.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct EntranceLatch {
    entered: bool,
}

impl EntranceLatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn has_entered(&self) -> bool {
        self.entered
    }

    /// Feeds one intersection observation. Returns true only on the call
    /// that flips the latch.
    pub fn observe(&mut self, intersecting: bool) -> bool {
        if self.entered || !intersecting {
            return false;
        }
        self.entered = true;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_latch_fires_once() {
        let mut latch = EntranceLatch::new();
        assert!(!latch.observe(false));
        assert!(!latch.has_entered());
        assert!(latch.observe(true));
        assert!(!latch.observe(true));
        assert!(latch.has_entered());
    }

    #[test]
    fn test_latch_never_regresses() {
        let mut latch = EntranceLatch::new();
        latch.observe(true);
        for _ in 0..3 {
            latch.observe(false);
            assert!(latch.has_entered());
        }
    }

    #[test]
    fn test_anchor_ids_unique() {
        let mut ids: Vec<_> = Section::all().iter().map(Section::anchor_id).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), Section::all().len());
    }

    #[test]
    fn test_nav_links_resolve_to_sections() {
        for link in crate::nav::NAV_LINKS {
            assert!(
                Section::all().iter().any(|s| s.anchor_id() == link.target_id()),
                "no section for {}",
                link.anchor
            );
        }
    }
}
