//! # UI
//!
//! Dioxus components for the single-page portfolio.
//!
//! * [`App`] is the root: it provides the site config, theme signal and
//!   navigator to the tree and renders the enabled sections in page order.
//! * [`hooks`] holds `use_in_view` and `use_reveal`, the bridge between
//!   rendered elements and the reveal latch.
//! * [`intersection`] observes elements through the script bridge where Rust
//!   has no DOM handle, as in the desktop webview.
//! * [`sections`] has one component per page section.

mod app;
pub mod components;
pub mod hooks;
pub mod intersection;
pub mod motion;
pub mod navigation;
pub mod sections;

pub use crate::app::App;
