//! UI components for the portfolio page.

mod about;
mod app;
mod contact;
mod footer;
mod hero;
mod navbar;
mod projects;
mod section_header;
mod skills;
mod testimonials;

pub use about::*;
pub use app::*;
pub use contact::*;
pub use footer::*;
pub use hero::*;
pub use navbar::*;
pub use projects::*;
pub use section_header::*;
pub use skills::*;
pub use testimonials::*;
