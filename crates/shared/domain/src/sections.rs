use crate::constants::{
    ABOUT, ACHIEVEMENTS, CONTACT, EDUCATION, FOOTER, GITHUB, HOME, PROJECTS, SKILLS,
};
use bitflags::bitflags;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A page section, in page order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Home,
    About,
    Education,
    Skills,
    Projects,
    Github,
    Achievements,
    Contact,
    Footer,
}

impl Section {
    /// Every section in the order it is rendered.
    pub const ALL: [Self; 9] = [
        Self::Home,
        Self::About,
        Self::Education,
        Self::Skills,
        Self::Projects,
        Self::Github,
        Self::Achievements,
        Self::Contact,
        Self::Footer,
    ];

    /// The DOM id of the section root, used as the scroll anchor.
    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Self::Home => HOME,
            Self::About => ABOUT,
            Self::Education => EDUCATION,
            Self::Skills => SKILLS,
            Self::Projects => PROJECTS,
            Self::Github => GITHUB,
            Self::Achievements => ACHIEVEMENTS,
            Self::Contact => CONTACT,
            Self::Footer => FOOTER,
        }
    }

    /// Human label used by navigation links.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::About => "About",
            Self::Education => "Education",
            Self::Skills => "Skills",
            Self::Projects => "Projects",
            Self::Github => "GitHub",
            Self::Achievements => "Achievements",
            Self::Contact => "Contact",
            Self::Footer => "Footer",
        }
    }

    #[must_use]
    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.id() == id)
    }

    #[must_use]
    pub const fn flag(self) -> SectionSet {
        match self {
            Self::Home => SectionSet::HOME,
            Self::About => SectionSet::ABOUT,
            Self::Education => SectionSet::EDUCATION,
            Self::Skills => SectionSet::SKILLS,
            Self::Projects => SectionSet::PROJECTS,
            Self::Github => SectionSet::GITHUB,
            Self::Achievements => SectionSet::ACHIEVEMENTS,
            Self::Contact => SectionSet::CONTACT,
            Self::Footer => SectionSet::FOOTER,
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

bitflags! {
    /// Represents a set of enabled sections.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
    pub struct SectionSet: u16 {
        const HOME = 1 << 0;
        const ABOUT = 1 << 1;
        const EDUCATION = 1 << 2;
        const SKILLS = 1 << 3;
        const PROJECTS = 1 << 4;
        const GITHUB = 1 << 5;
        const ACHIEVEMENTS = 1 << 6;
        const CONTACT = 1 << 7;
        const FOOTER = 1 << 8;

        const ALL = Self::HOME.bits()
            | Self::ABOUT.bits()
            | Self::EDUCATION.bits()
            | Self::SKILLS.bits()
            | Self::PROJECTS.bits()
            | Self::GITHUB.bits()
            | Self::ACHIEVEMENTS.bits()
            | Self::CONTACT.bits()
            | Self::FOOTER.bits();
    }
}

impl SectionSet {
    /// Enabled sections in page order.
    pub fn sections(self) -> impl Iterator<Item = Section> {
        Section::ALL.into_iter().filter(move |s| self.contains(s.flag()))
    }

    #[must_use]
    pub const fn shows(self, section: Section) -> bool {
        self.contains(section.flag())
    }
}

impl Default for SectionSet {
    fn default() -> Self {
        Self::ALL
    }
}

impl From<&str> for SectionSet {
    fn from(s: &str) -> Self {
        match s {
            "all" | "*" => Self::ALL,
            id => Section::from_id(id).map_or_else(Self::empty, Section::flag),
        }
    }
}

impl FromIterator<Section> for SectionSet {
    fn from_iter<I: IntoIterator<Item = Section>>(iter: I) -> Self {
        iter.into_iter().fold(Self::empty(), |set, s| set | s.flag())
    }
}

/// Serialized as the list of section ids, e.g. `["home", "about"]`.
impl Serialize for SectionSet {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_seq(self.sections().map(Section::id))
    }
}

/// Unknown ids are ignored so older config files keep loading.
impl<'de> Deserialize<'de> for SectionSet {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let ids = Vec::<String>::deserialize(deserializer)?;
        Ok(ids.iter().fold(Self::empty(), |set, id| set | Self::from(id.as_str())))
    }
}
