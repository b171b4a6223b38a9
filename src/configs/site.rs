use std::collections::HashSet;

use serde::{ Deserialize, Serialize };

use super::{ endpoint_override, resolve_endpoint };
use crate::error::ContentError;

const EMBEDDED_CONTENT: &str = include_str!("../../assets/content.json");

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SocialLink {
    pub label: String,
    pub href: String,
    #[serde(default)]
    pub external: bool,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub title: String,
    pub description: String,
    #[serde(default = "default_link")]
    pub link: String,
}

fn default_link() -> String {
    "#".to_string()
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ExperienceItem {
    pub role: String,
    pub org: String,
    pub period: String,
    pub description: String,
}

impl ExperienceItem {
    pub fn key(&self) -> String {
        format!("{} · {}", self.role, self.org)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ContactForm {
    pub endpoint: String,
}

/// Everything the page renders, loaded from `assets/content.json`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SiteContent {
    pub owner: String,
    pub headline: String,
    #[serde(default)]
    pub intro: String,
    #[serde(default)]
    pub socials: Vec<SocialLink>,
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub experience: Vec<ExperienceItem>,
    pub contact: ContactForm,
}

impl SiteContent {
    /// The content bundled into the binary.
    pub fn embedded() -> Result<Self, ContentError> {
        Self::from_json(EMBEDDED_CONTENT)
    }

    /// Embedded content with the build-time endpoint override applied.
    /// Invalid content is logged and replaced by empty sections.
    pub fn load() -> Self {
        Self::load_from(EMBEDDED_CONTENT, endpoint_override()).unwrap_or_else(|e| {
            log::error!("Failed to load site content: {}", e);
            Self::default()
        })
    }

    /// Parses `raw`, applies the endpoint override, then validates once, so
    /// an override can replace a placeholder endpoint in the file.
    pub(crate) fn load_from(raw: &str, overridden: Option<&str>) -> Result<Self, ContentError> {
        let mut content: Self = serde_json::from_str(raw)?;
        content.contact.endpoint = resolve_endpoint(overridden, &content.contact.endpoint);
        content.validate()?;
        Ok(content)
    }

    pub fn from_json(raw: &str) -> Result<Self, ContentError> {
        let content: Self = serde_json::from_str(raw)?;
        content.validate()?;
        Ok(content)
    }

    /// Checks the fields the views rely on. Titles, skills, social labels
    /// and role/org pairs double as list keys so they must be unique.
    pub fn validate(&self) -> Result<(), ContentError> {
        if self.owner.trim().is_empty() {
            return Err(ContentError::Missing("owner"));
        }
        if self.headline.trim().is_empty() {
            return Err(ContentError::Missing("headline"));
        }

        ensure_unique("project", self.projects.iter().map(|p| p.title.clone()))?;
        ensure_unique("skill", self.skills.iter().cloned())?;
        ensure_unique("social", self.socials.iter().map(|s| s.label.clone()))?;
        ensure_unique("experience", self.experience.iter().map(ExperienceItem::key))?;

        if !self.contact.endpoint.starts_with("https://") {
            return Err(ContentError::InvalidEndpoint(self.contact.endpoint.clone()));
        }
        Ok(())
    }
}

fn ensure_unique(
    kind: &'static str,
    values: impl Iterator<Item = String>
) -> Result<(), ContentError> {
    let mut seen = HashSet::new();
    for value in values {
        if !seen.insert(value.clone()) {
            return Err(ContentError::Duplicate { kind, value });
        }
    }
    Ok(())
}
