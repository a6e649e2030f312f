use serde::Deserialize;
use std::path::PathBuf;

/// Desktop-only settings read from the same file as the site config.
#[derive(Debug, Default, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct DesktopSettings {
    pub window: WindowSettings,
    pub log: LogSettings,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct WindowSettings {
    pub title: String,
    pub width: f64,
    pub height: f64,
}

impl Default for WindowSettings {
    fn default() -> Self {
        Self { title: "Ashish Raj | Portfolio".to_owned(), width: 1280.0, height: 860.0 }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LogSettings {
    /// Level name, e.g. `info`.
    pub level: String,
    /// Rolling log files go here when set.
    pub directory: Option<PathBuf>,
}

impl Default for LogSettings {
    fn default() -> Self {
        Self { level: "info".to_owned(), directory: None }
    }
}
