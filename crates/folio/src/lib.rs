//! Facade crate for Folio features and shared modules.
//! Re-exports domain/kernel primitives and the feature slices.
//! Keep this crate thin: it should compose other crates, not implement behaviour.
//!
//! ## Usage
//! - Add `folio` with the `client` feature to get the Dioxus [`ui::App`].
//! - Apps provide a [`domain::config::SiteConfig`] through context and launch `App`.

pub use folio_domain as domain;
pub use folio_kernel as kernel;
#[cfg(feature = "client")]
pub use folio_ui as ui;

/// Feature registry for runtime introspection.
pub mod features {
    pub use folio_contact as contact;
    pub use folio_github as github;
    pub use folio_reveal as reveal;

    /// Build-time enabled features (by Cargo feature).
    pub const ENABLED: &[&str] = &[
        "reveal",
        "github",
        "contact",
        #[cfg(feature = "client")]
        "client",
    ];

    #[must_use]
    pub fn is_enabled(name: &str) -> bool {
        ENABLED.contains(&name)
    }
}

#[cfg(test)]
mod tests {
    use super::features;

    #[test]
    fn slices_are_always_enabled() {
        for name in ["reveal", "github", "contact"] {
            assert!(features::is_enabled(name), "{name}");
        }
        assert!(!features::is_enabled("audit"));
        assert_eq!(features::is_enabled("client"), cfg!(feature = "client"));
    }
}
