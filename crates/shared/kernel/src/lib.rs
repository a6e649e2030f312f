//! Kernel services shared by the feature slices and the UI.
//! Keep this crate lightweight: it hosts config loading, the navigation capability,
//! and a timer that works on both the native and the browser target.
//!
//! ## Config loading (non-wasm)
//! ```rust,ignore
//! use folio_kernel::config::load_config;
//! use folio_kernel::domain::config::SiteConfig;
//!
//! let cfg: SiteConfig = load_config(Some("folio")).unwrap_or_default();
//! ```
//!
//! ## Navigation
//! ```rust
//! use folio_kernel::navigation::{Navigator, RecordingNavigator};
//! use folio_kernel::domain::sections::Section;
//!
//! let nav = RecordingNavigator::default();
//! nav.scroll_to(Section::About).unwrap();
//! assert_eq!(nav.history(), vec![Some(Section::About)]);
//! ```
#[cfg(not(target_arch = "wasm32"))]
pub mod config;
pub mod navigation;
pub mod prelude;
pub mod time;

pub use folio_domain as domain;
