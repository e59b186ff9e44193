//! Folio portfolio site
//!
//! A Dioxus desktop application rendering a single-page portfolio: hero,
//! about, skills, projects, testimonials, contact form and footer, with a
//! light/dark theme and scroll-triggered entrance animations.

pub mod bridge;
pub mod components;
pub mod config;
pub mod theme;
