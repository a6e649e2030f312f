//! Native window launcher for the portfolio.

mod settings;

pub use crate::settings::{DesktopSettings, LogSettings, WindowSettings};

use dioxus::desktop::{Config, LogicalSize, WindowBuilder};
use dioxus::prelude::*;
use folio::domain::config::SiteConfig;

#[derive(Debug)]
pub struct DesktopApp {
    title: String,
    width: f64,
    height: f64,
}

impl Default for DesktopApp {
    fn default() -> Self {
        Self::from_settings(&WindowSettings::default())
    }
}

impl DesktopApp {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn from_settings(window: &WindowSettings) -> Self {
        Self { title: window.title.clone(), width: window.width, height: window.height }
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    #[must_use = "This function does nothing unless you call `launch()` on it"]
    pub const fn with_size(mut self, width: f64, height: f64) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub const fn size(&self) -> (f64, f64) {
        (self.width, self.height)
    }

    /// Opens the window and renders `root` with `site` in context.
    pub fn launch(self, site: SiteConfig, root: fn() -> Element) {
        let window = WindowBuilder::new()
            .with_title(&self.title)
            .with_inner_size(LogicalSize { width: self.width, height: self.height });

        let cfg = Config::default().with_window(window).with_custom_head(
            r#"<meta name="viewport" content="width=device-width, initial-scale=1.0">"#.into(),
        );

        LaunchBuilder::desktop().with_cfg(cfg).with_context(site).launch(root);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_overrides_settings() {
        let app = DesktopApp::new().with_title("Portfolio").with_size(800.0, 600.0);
        assert_eq!(app.title(), "Portfolio");
        assert_eq!(app.size(), (800.0, 600.0));
    }

    #[test]
    fn default_window_comes_from_settings() {
        let app = DesktopApp::default();
        let window = WindowSettings::default();
        assert_eq!(app.title(), window.title);
        assert_eq!(app.size(), (window.width, window.height));
    }
}
