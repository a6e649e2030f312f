//! # Domain Models
//!
//! This crate contains pure domain types with minimal dependencies (`serde`, `bitflags`).
//! Keep it lean: no I/O, networking, or rendering, just data and simple helpers.
//!
//! * [`content`] holds the record shapes every section renders.
//! * [`profile`] holds the static portfolio data set, defined at compile time.
//! * [`sections`] names the page sections and the [`sections::SectionSet`] used to enable them.
//! * [`config`] holds the site configuration shared by every app.

pub mod config;
pub mod constants;
pub mod content;
pub mod profile;
pub mod sections;
