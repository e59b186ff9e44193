//! Testimonial carousel position.

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Carousel {
    pub active: usize,
}

impl Carousel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advances one card, wrapping at the end.
    pub fn next(&mut self, len: usize) -> usize {
        if len > 0 {
            self.active = (self.active + 1) % len;
        }
        self.active
    }

    /// Steps back one card, wrapping at the start.
    pub fn prev(&mut self, len: usize) -> usize {
        if len > 0 {
            self.active = (self.active + len - 1) % len;
        }
        self.active
    }

    /// Jumps to `index` if it is in range.
    pub fn select(&mut self, index: usize, len: usize) -> bool {
        if index < len {
            self.active = index;
            true
        } else {
            false
        }
    }

    pub fn is_active(&self, index: usize) -> bool {
        self.active == index
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wraps_both_ways() {
        let mut c = Carousel::new();
        assert_eq!(c.prev(3), 2);
        assert_eq!(c.next(3), 0);
        assert_eq!(c.next(3), 1);
        assert_eq!(c.next(3), 2);
        assert_eq!(c.next(3), 0);
    }

    #[test]
    fn test_empty_list() {
        let mut c = Carousel::new();
        assert_eq!(c.next(0), 0);
        assert_eq!(c.prev(0), 0);
        assert!(!c.select(0, 0));
    }

    #[test]
    fn test_select() {
        let mut c = Carousel::new();
        assert!(c.select(2, 3));
        assert!(c.is_active(2));
        assert!(!c.select(3, 3));
        assert_eq!(c.active, 2);
    }
}
