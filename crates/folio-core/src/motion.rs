//! Entrance animation presets.
//!
//! Each preset is a two-row transition table: the pose an element holds
//! while hidden and the pose it moves to once visible. The renderer emits
//! the target pose plus a CSS `transition`, so the browser interpolates.

use std::fmt::Write as _;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MotionState {
    Hidden,
    Visible,
}

impl MotionState {
    pub fn from_visible(visible: bool) -> Self {
        if visible {
            MotionState::Visible
        } else {
            MotionState::Hidden
        }
    }
}

/// Interpolated properties for one state.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Pose {
    pub opacity: f32,
    pub translate_x: f32,
    pub translate_y: f32,
    pub scale: f32,
}

impl Pose {
    pub const REST: Pose = Pose {
        opacity: 1.0,
        translate_x: 0.0,
        translate_y: 0.0,
        scale: 1.0,
    };

    fn transform(&self) -> String {
        format!(
            "translate({}px, {}px) scale({})",
            self.translate_x, self.translate_y, self.scale
        )
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Motion {
    pub hidden: Pose,
    pub visible: Pose,
    pub duration_ms: u32,
    /// Delay before the first element starts.
    pub delay_ms: u32,
    /// Extra delay per item index for staggered lists.
    pub stagger_ms: u32,
}

impl Motion {
    pub const FADE_UP: Motion = Motion {
        hidden: Pose { opacity: 0.0, translate_x: 0.0, translate_y: 20.0, scale: 1.0 },
        visible: Pose::REST,
        duration_ms: 500,
        delay_ms: 0,
        stagger_ms: 100,
    };

    pub const FADE_IN: Motion = Motion {
        hidden: Pose { opacity: 0.0, translate_x: 0.0, translate_y: 0.0, scale: 1.0 },
        visible: Pose::REST,
        duration_ms: 600,
        delay_ms: 0,
        stagger_ms: 0,
    };

    pub const SLIDE_LEFT: Motion = Motion {
        hidden: Pose { opacity: 0.0, translate_x: -20.0, translate_y: 0.0, scale: 1.0 },
        visible: Pose::REST,
        duration_ms: 500,
        delay_ms: 300,
        stagger_ms: 100,
    };

    pub const POP: Motion = Motion {
        hidden: Pose { opacity: 0.0, translate_x: 0.0, translate_y: 0.0, scale: 0.0 },
        visible: Pose::REST,
        duration_ms: 400,
        delay_ms: 200,
        stagger_ms: 100,
    };

    pub const DROP_IN: Motion = Motion {
        hidden: Pose { opacity: 0.0, translate_x: 0.0, translate_y: -20.0, scale: 1.0 },
        visible: Pose::REST,
        duration_ms: 500,
        delay_ms: 0,
        stagger_ms: 100,
    };

    pub fn with_delay(mut self, delay_ms: u32) -> Self {
        self.delay_ms = delay_ms;
        self
    }

    pub fn pose(&self, state: MotionState) -> &Pose {
        match state {
            MotionState::Hidden => &self.hidden,
            MotionState::Visible => &self.visible,
        }
    }

    /// Start delay for the item at `index`.
    pub fn delay_for(&self, index: usize) -> u32 {
        self.delay_ms + self.stagger_ms.saturating_mul(index as u32)
    }

    /// Inline CSS for an element at `index` in the given state.
    ///
    /// Hidden elements snap back without delay; only the entrance is staggered.
    pub fn style(&self, state: MotionState, index: usize) -> String {
        let pose = self.pose(state);
        let delay = match state {
            MotionState::Hidden => 0,
            MotionState::Visible => self.delay_for(index),
        };
        let mut out = String::with_capacity(160);
        let _ = write!(
            out,
            "opacity: {}; transform: {}; transition: opacity {d}ms ease-out {delay}ms, transform {d}ms ease-out {delay}ms;",
            pose.opacity,
            pose.transform(),
            d = self.duration_ms,
        );
        out
    }

    /// Inline CSS that plays the hidden-to-visible move once when the
    /// element mounts, via the stylesheet's `folio-enter` keyframes.
    pub fn mount_style(&self, index: usize) -> String {
        let from = &self.hidden;
        format!(
            "--enter-opacity: {}; --enter-x: {}px; --enter-y: {}px; --enter-scale: {}; animation: folio-enter {}ms ease-out {}ms both;",
            from.opacity,
            from.translate_x,
            from.translate_y,
            from.scale,
            self.duration_ms,
            self.delay_for(index),
        )
    }
}

/// Inline CSS for a progress bar filled to `percent`.
pub fn fill_style(percent: u8) -> String {
    format!(
        "width: {}%; transition: width 1000ms ease-out 200ms;",
        percent.min(100)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stagger_delay() {
        let m = Motion::SLIDE_LEFT;
        assert_eq!(m.delay_for(0), 300);
        assert_eq!(m.delay_for(2), 500);
        assert_eq!(Motion::FADE_IN.delay_for(7), 0);
    }

    #[test]
    fn test_hidden_style_has_no_delay() {
        let css = Motion::FADE_UP.style(MotionState::Hidden, 4);
        assert!(css.starts_with("opacity: 0;"));
        assert!(css.contains("translate(0px, 20px)"));
        assert!(css.contains("ease-out 0ms"));
    }

    #[test]
    fn test_visible_style_reaches_rest_pose() {
        let css = Motion::FADE_UP.with_delay(200).style(MotionState::Visible, 1);
        assert!(css.starts_with("opacity: 1;"));
        assert!(css.contains("translate(0px, 0px) scale(1)"));
        assert!(css.contains("ease-out 300ms"));
    }

    #[test]
    fn test_mount_style_starts_from_hidden_pose() {
        let css = Motion::SLIDE_LEFT.mount_style(1);
        assert!(css.starts_with("--enter-opacity: 0; --enter-x: -20px;"));
        assert!(css.ends_with("animation: folio-enter 500ms ease-out 400ms both;"));
    }

    #[test]
    fn test_fill_style() {
        assert_eq!(fill_style(0), "width: 0%; transition: width 1000ms ease-out 200ms;");
        assert!(fill_style(95).starts_with("width: 95%;"));
        assert!(fill_style(150).starts_with("width: 100%;"));
    }
}
