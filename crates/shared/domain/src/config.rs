use crate::constants::{
    CONTACT_STATUS_DISPLAY_MS, CONTACT_SUBMIT_DELAY_MS, GITHUB_ACCOUNT, GITHUB_API_URL,
    REPOSITORY_PAGE_SIZE,
};
use crate::sections::SectionSet;
use serde::Deserialize;
use std::ops::{Deref, DerefMut};
use std::sync::Arc;

/// Top-level site configuration shared across apps.
#[derive(Default, Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SiteConfigInner {
    pub github: GithubConfig,
    pub contact: ContactConfig,
    pub appearance: AppearanceConfig,
    pub sections: SectionSet,
}

/// Thin Arc-wrapped config for inexpensive cloning into components.
#[derive(Default, Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SiteConfig {
    #[serde(flatten, default)]
    inner: Arc<SiteConfigInner>,
}

impl Deref for SiteConfig {
    type Target = SiteConfigInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl DerefMut for SiteConfig {
    fn deref_mut(&mut self) -> &mut SiteConfigInner {
        Arc::make_mut(&mut self.inner)
    }
}

/// Repository listing source.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct GithubConfig {
    pub account: String,
    pub api_url: String,
    pub per_page: u8,
}

/// Simulated contact submission timing.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ContactConfig {
    pub submit_delay_ms: u64,
    pub status_display_ms: u64,
}

#[derive(Default, Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AppearanceConfig {
    pub theme: Theme,
}

/// Colour scheme applied to the page root.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Root class name; dark mode styles key off `.dark`.
    #[must_use]
    pub const fn class(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    #[must_use]
    pub const fn is_dark(self) -> bool {
        matches!(self, Self::Dark)
    }
}

// --- Default ---

impl Default for GithubConfig {
    fn default() -> Self {
        Self {
            account: GITHUB_ACCOUNT.to_owned(),
            api_url: GITHUB_API_URL.to_owned(),
            per_page: REPOSITORY_PAGE_SIZE,
        }
    }
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            submit_delay_ms: CONTACT_SUBMIT_DELAY_MS,
            status_display_ms: CONTACT_STATUS_DISPLAY_MS,
        }
    }
}
