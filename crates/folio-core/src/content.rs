//! Seed content for the page: profile copy, skills, projects, testimonials.
//!
//! The built-in set is embedded at compile time. An override file with the
//! same JSON shape can be supplied at startup. Content is read-only once
//! loaded.

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ContentError;

/// Seed data shipped with the binary.
const BUILTIN_JSON: &str = include_str!("../assets/content.json");

/// Highest star rating a testimonial can carry.
pub const MAX_STARS: u8 = 5;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLink {
    pub label: String,
    pub url: String,
}

/// Copy and contact details for the hero, about, contact and footer blocks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub brand: String,
    pub greeting: String,
    pub headline: String,
    pub summary: String,
    pub about_title: String,
    #[serde(default)]
    pub about_paragraphs: Vec<String>,
    pub portrait: String,
    #[serde(default)]
    pub emails: Vec<String>,
    #[serde(default)]
    pub location: Vec<String>,
    pub phone: String,
    pub hours: String,
    pub footer_blurb: String,
    #[serde(default)]
    pub socials: Vec<SocialLink>,
}

impl Profile {
    /// First listed email, used by the footer and mailto links.
    pub fn primary_email(&self) -> Option<&str> {
        self.emails.first().map(String::as_str)
    }
}

/// A card in the About section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FocusArea {
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    pub description: String,
    /// Percentage, 0..=100.
    pub proficiency: u8,
}

impl Skill {
    /// Progress bar fill; empty until the section has entered the viewport.
    pub fn fill_percent(&self, entered: bool) -> u8 {
        if entered {
            self.proficiency.min(100)
        } else {
            0
        }
    }
}

pub type ProjectId = u32;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: ProjectId,
    pub title: String,
    pub description: String,
    pub full_description: String,
    #[serde(default)]
    pub tags: Vec<String>,
    pub image: String,
    #[serde(default)]
    pub demo_link: Option<String>,
    #[serde(default)]
    pub github_link: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Testimonial {
    pub text: String,
    pub author: String,
    pub title: String,
    pub image: String,
    pub stars: u8,
}

/// Everything the page renders from data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PortfolioContent {
    pub profile: Profile,
    #[serde(default)]
    pub focus_areas: Vec<FocusArea>,
    #[serde(default)]
    pub skills: Vec<Skill>,
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default)]
    pub testimonials: Vec<Testimonial>,
}

impl PortfolioContent {
    /// Parses and validates the embedded seed data.
    pub fn builtin() -> Result<Self, ContentError> {
        Self::from_json_str(BUILTIN_JSON)
    }

    /// Loads and validates a content file.
    pub fn from_path(path: &Path) -> Result<Self, ContentError> {
        let raw = std::fs::read_to_string(path).map_err(|source| ContentError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let content = Self::from_json_str(&raw)?;
        tracing::info!(
            path = %path.display(),
            projects = content.projects.len(),
            skills = content.skills.len(),
            "Loaded content override"
        );
        Ok(content)
    }

    pub fn from_json_str(raw: &str) -> Result<Self, ContentError> {
        let content: PortfolioContent = serde_json::from_str(raw)?;
        content.validate()?;
        Ok(content)
    }

    /// Checks the invariants the views rely on.
    pub fn validate(&self) -> Result<(), ContentError> {
        let mut seen = HashSet::with_capacity(self.projects.len());
        for project in &self.projects {
            if !seen.insert(project.id) {
                return Err(ContentError::Invalid(format!(
                    "duplicate project id {}",
                    project.id
                )));
            }
            if project.title.trim().is_empty() {
                return Err(ContentError::Invalid(format!(
                    "project {} has an empty title",
                    project.id
                )));
            }
        }

        if let Some(skill) = self.skills.iter().find(|s| s.proficiency > 100) {
            return Err(ContentError::Invalid(format!(
                "skill '{}' has proficiency {} (max 100)",
                skill.name, skill.proficiency
            )));
        }

        if let Some(t) = self
            .testimonials
            .iter()
            .find(|t| t.stars == 0 || t.stars > MAX_STARS)
        {
            return Err(ContentError::Invalid(format!(
                "testimonial by '{}' has {} stars (expected 1..={})",
                t.author, t.stars, MAX_STARS
            )));
        }

        Ok(())
    }
}
