//! # Reveal
//!
//! Scroll-triggered entrance animations.
//!
//! * [`VisibilityLatch`] holds the monotonic hidden/revealed state of one element.
//! * [`ViewportObserver`] wires an element to the host's intersection primitive
//!   and fails open (reveals at once) when there is none.
//! * [`relay`] drives the observer from a script running in the page, for
//!   renderers that only reach the DOM through script evaluation.
//! * [`RevealController`] turns the latch into container and staggered child styles.
//!
//! ## Example
//!
//! ```rust
//! use folio_reveal::{RevealController, Unsupported, ViewportObserver, FADE, RISE};
//! use std::time::Duration;
//!
//! let attachment = ViewportObserver::new(Unsupported).attach(&(), || {});
//! let controller = RevealController::new(FADE, Duration::from_millis(200))
//!     .synced(attachment.visibility());
//!
//! assert_eq!(controller.child_start(2, &RISE), Some(Duration::from_millis(400)));
//! ```

mod controller;
#[cfg(target_arch = "wasm32")]
mod dom;
mod error;
mod observer;
mod script;
mod variant;
mod visibility;

pub use crate::controller::{RenderedStyle, RevealController};
#[cfg(target_arch = "wasm32")]
pub use crate::dom::DomIntersection;
pub use crate::error::{RevealError, RevealErrorExt};
pub use crate::observer::{
    Attachment, EntryCallback, IntersectionPrimitive, Registration, THRESHOLD, Unsupported,
    ViewportObserver,
};
pub use crate::script::{ReportChannel, ScriptReport, observe_script, relay, release_script};
pub use crate::variant::{
    AnimationVariant, Easing, FADE, HERO_RISE, RISE, SLIDE_IN, Style, Timing, skill_bar,
};
pub use crate::visibility::{IntersectionEntry, Transition, Visibility, VisibilityLatch};
