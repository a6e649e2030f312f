//! Record shapes rendered by the sections.
//!
//! Static records borrow `'static` data and are defined at compile time in
//! [`crate::profile`]. [`RepositorySummary`] is the only owned record: it is
//! decoded from the repository listing endpoint.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Project {
    pub id: u32,
    pub title: &'static str,
    pub description: &'static str,
    pub image: &'static str,
    pub technologies: &'static [&'static str],
    pub live_url: Option<&'static str>,
    pub github_url: Option<&'static str>,
    pub status: Option<&'static str>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum SkillCategory {
    Programming,
    Frontend,
    Core,
}

impl SkillCategory {
    pub const ALL: [Self; 3] = [Self::Programming, Self::Frontend, Self::Core];

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Programming => "Programming",
            Self::Frontend => "Frontend",
            Self::Core => "Core",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Skill {
    pub name: &'static str,
    /// Proficiency in percent, `0..=100`.
    pub level: u8,
    pub category: SkillCategory,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Education {
    pub id: u32,
    pub degree: &'static str,
    pub institution: &'static str,
    pub location: &'static str,
    pub year: &'static str,
    pub grade: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Certification {
    pub id: u32,
    pub title: &'static str,
    pub issuer: &'static str,
    pub year: &'static str,
    pub description: Option<&'static str>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum AchievementKind {
    Competition,
    Project,
    Academic,
    Other,
}

impl AchievementKind {
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Competition => "Competition",
            Self::Project => "Project",
            Self::Academic => "Academic",
            Self::Other => "Other",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Achievement {
    pub id: u32,
    pub title: &'static str,
    pub description: &'static str,
    pub year: &'static str,
    pub kind: AchievementKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum SocialKind {
    Github,
    Linkedin,
    Website,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SocialLink {
    pub label: &'static str,
    pub href: &'static str,
    pub kind: SocialKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ChannelKind {
    Email,
    Phone,
    Location,
}

/// A way to reach the site owner. `href` is `None` for display-only values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ContactChannel {
    pub kind: ChannelKind,
    pub label: &'static str,
    pub value: &'static str,
    pub href: Option<&'static str>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Highlight {
    pub title: &'static str,
    pub description: &'static str,
}

/// A headline number shown in a stats grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Stat {
    pub value: &'static str,
    pub label: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Profile {
    pub name: &'static str,
    pub headline: &'static str,
    pub location: &'static str,
    pub email: &'static str,
    pub phone: &'static str,
    pub phone_href: &'static str,
    pub bio: &'static [&'static str],
    pub traits: &'static [&'static str],
    pub summary: &'static str,
}

/// One entry of the public repository listing.
///
/// Field names follow the listing endpoint so the payload decodes directly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepositorySummary {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub html_url: String,
    #[serde(default)]
    pub stargazers_count: u32,
    #[serde(default)]
    pub forks_count: u32,
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default)]
    pub topics: Vec<String>,
    /// ISO 8601 timestamp of the last update.
    pub updated_at: String,
}
