//! View-state model for the Folio portfolio site.
//!
//! Everything here is independent of the renderer: palettes and the theme
//! store, navigation and section state, entrance latches and motion presets,
//! seed content, and the contact form's submission flow. The `folio-site`
//! crate wires these into Dioxus components.

pub mod contact;
pub mod content;
pub mod error;
pub mod lifetime;
pub mod motion;
pub mod nav;
pub mod projects;
pub mod reveal;
pub mod testimonials;
pub mod theme;

pub use contact::{
    run_submission, ContactFormState, ContactMessage, FormField, FormStore, FormTimings,
    MessageTransport, PendingSubmission, SimulatedTransport,
};
pub use content::{FocusArea, PortfolioContent, Profile, Project, ProjectId, Skill, SocialLink, Testimonial};
pub use error::{ContactError, ContentError};
pub use lifetime::ViewLifetime;
pub use motion::{Motion, MotionState, Pose};
pub use nav::{NavLink, NavState, NAV_LINKS};
pub use projects::{ModalTarget, ProjectsView};
pub use reveal::{EntranceLatch, Section};
pub use testimonials::Carousel;
pub use theme::{Palette, ThemeMode, ThemeStore};
