//! Portfolio content model
//!
//! Content is plain data loaded once at startup and shared read-only. Themes
//! never modify it; they only decide how it looks.
//!
//! The bundled content lives in `content/portfolio.toml`; hosts can point at
//! their own file with [`Content::load`].

use std::collections::HashSet;
use std::path::Path;

use folio_theme::LinkKind;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::media::AspectRatio;
use crate::timeline::{TimelineEnd, YearMonth};

const EMBEDDED: &str = include_str!("../content/portfolio.toml");

#[derive(Debug, Error)]
pub enum ContentError {
    #[error("failed to read content file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse content: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid content at `{field}`: {reason}")]
    Invalid { field: String, reason: String },
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Content {
    pub name: String,
    pub bio: String,
    pub badge: String,
    pub location: Location,
    pub project: ProjectHighlight,
    #[serde(default)]
    pub links: Vec<ProfileLink>,
    #[serde(default)]
    pub about: About,
    #[serde(default)]
    pub timeline: Vec<TimelineItem>,
    #[serde(default)]
    pub projects: Vec<ProjectCard>,
    #[serde(default)]
    pub artworks: Vec<Artwork>,
    #[serde(default)]
    pub lifestyle: Vec<LifestyleItem>,
    #[serde(default)]
    pub socials: Vec<SocialLink>,
    #[serde(default)]
    pub github_username: Option<String>,
    /// Recipient name attached to contact messages
    #[serde(default)]
    pub contact_name: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    pub city: String,
    pub country: String,
}

impl Location {
    pub fn label(&self) -> String {
        format!("{}, {}", self.city, self.country)
    }
}

/// Project mentioned under the bio
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectHighlight {
    pub name: String,
    pub description: String,
    pub url: String,
    pub display_url: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileLink {
    pub label: String,
    pub href: String,
    pub caption: String,
    #[serde(default)]
    pub kind: LinkKind,
    /// Address copied by the copy button of email links
    #[serde(default)]
    pub email: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct About {
    #[serde(default)]
    pub paragraphs: Vec<String>,
    #[serde(default)]
    pub stacks: Vec<TechGroup>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TechGroup {
    pub title: String,
    pub items: Vec<TechItem>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TechItem {
    pub name: String,
    pub logo_url: String,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimelineKind {
    #[default]
    Work,
    Education,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelineItem {
    pub title: String,
    pub organization: String,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub employment_type: Option<String>,
    pub start: YearMonth,
    pub end: TimelineEnd,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub kind: TimelineKind,
    #[serde(default)]
    pub logo_url: Option<String>,
    #[serde(default)]
    pub roles: Vec<String>,
    /// Title shown while the card is expanded
    #[serde(default)]
    pub hover_title: Option<String>,
    #[serde(default)]
    pub hover_organization: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectCard {
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub url: Option<String>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArtworkKind {
    Image,
    Video,
    Youtube,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Artwork {
    pub name: String,
    pub kind: ArtworkKind,
    pub url: String,
    #[serde(default)]
    pub aspect_ratio: AspectRatio,
    #[serde(default)]
    pub instagram_url: Option<String>,
}

impl Artwork {
    /// Where clicking the tile leads
    pub fn target(&self) -> &str {
        self.instagram_url.as_deref().unwrap_or(&self.url)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LifestyleItem {
    pub id: String,
    pub interest: String,
    pub url: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLink {
    pub label: String,
    pub href: String,
    pub icon: String,
}

impl SocialLink {
    pub fn icon_path(&self) -> String {
        let icon = self.icon.to_lowercase();
        let file = if icon == "email" { "mail" } else { icon.as_str() };
        format!("/social/{file}.png")
    }
}

impl Content {
    /// Content bundled with the crate
    pub fn embedded() -> Result<Self, ContentError> {
        Self::parse(EMBEDDED)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ContentError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)?;
        let content = Self::parse(&raw)?;
        tracing::debug!(path = %path.display(), "content loaded");
        Ok(content)
    }

    pub fn parse(raw: &str) -> Result<Self, ContentError> {
        let content: Content = toml::from_str(raw)?;
        content.validate()?;
        Ok(content)
    }

    /// The first email link, if any
    pub fn email_link(&self) -> Option<&ProfileLink> {
        self.links.iter().find(|link| link.kind == LinkKind::Email)
    }

    pub fn validate(&self) -> Result<(), ContentError> {
        require("name", &self.name)?;
        require("bio", &self.bio)?;
        require("badge", &self.badge)?;
        require("project.url", &self.project.url)?;

        for (i, link) in self.links.iter().enumerate() {
            require(&format!("links[{i}].label"), &link.label)?;
            require(&format!("links[{i}].href"), &link.href)?;
            if link.kind == LinkKind::Email && link.email.as_deref().map_or(true, str::is_empty) {
                return Err(invalid(format!("links[{i}].email"), "email links need an address"));
            }
        }

        for (i, item) in self.timeline.iter().enumerate() {
            if let TimelineEnd::Month(end) = item.end {
                if end < item.start {
                    return Err(invalid(format!("timeline[{i}].end"), "ends before it starts"));
                }
            }
        }

        for (i, artwork) in self.artworks.iter().enumerate() {
            require(&format!("artworks[{i}].url"), &artwork.url)?;
        }

        let mut ids = HashSet::new();
        for (i, item) in self.lifestyle.iter().enumerate() {
            if !ids.insert(item.id.as_str()) {
                return Err(invalid(format!("lifestyle[{i}].id"), "duplicate id"));
            }
        }

        Ok(())
    }
}

fn require(field: &str, value: &str) -> Result<(), ContentError> {
    if value.trim().is_empty() {
        Err(invalid(field.to_string(), "must not be empty"))
    } else {
        Ok(())
    }
}

fn invalid(field: String, reason: &str) -> ContentError {
    ContentError::Invalid {
        field,
        reason: reason.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_content_is_valid() {
        let content = Content::embedded().unwrap();
        assert_eq!(content.name, "Alagappan N");
        assert_eq!(content.location.label(), "Hyderabad, India");
        assert_eq!(
            content.email_link().and_then(|l| l.email.as_deref()),
            Some("alagappanforwork@gmail.com")
        );
        assert!(!content.timeline.is_empty());
        assert!(!content.artworks.is_empty());
    }

    #[test]
    fn email_links_need_an_address() {
        let mut content = Content::embedded().unwrap();
        content.links[1].email = None;
        assert!(matches!(
            content.validate(),
            Err(ContentError::Invalid { field, .. }) if field == "links[1].email"
        ));
    }

    #[test]
    fn malformed_dates_fail_to_parse() {
        let raw = EMBEDDED.replacen("start = \"", "start = \"x", 1);
        assert!(matches!(Content::parse(&raw), Err(ContentError::Parse(_))));
    }

    #[test]
    fn artwork_target_prefers_instagram() {
        let artwork = Artwork {
            name: "Sketch".into(),
            kind: ArtworkKind::Image,
            url: "/art/sketch.jpg".into(),
            aspect_ratio: AspectRatio::Portrait,
            instagram_url: Some("https://instagram.com/p/1".into()),
        };
        assert_eq!(artwork.target(), "https://instagram.com/p/1");
    }

    #[test]
    fn social_icons_map_email_to_mail() {
        let link = SocialLink {
            label: "Email".into(),
            href: "mailto:a@b.c".into(),
            icon: "Email".into(),
        };
        assert_eq!(link.icon_path(), "/social/mail.png");
    }
}
