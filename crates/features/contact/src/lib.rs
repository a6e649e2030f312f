//! # Contact
//!
//! The contact form: field model and validation, the `Idle -> Submitting ->
//! Success -> Idle` status machine, and a simulated submitter that waits and
//! succeeds without sending anything.

mod error;
mod flow;
mod form;
mod status;
mod submitter;

pub use crate::error::{ContactError, ContactErrorExt};
pub use crate::flow::{ContactFlow, FlowHandle, submit};
pub use crate::form::{ContactForm, ContactMessage, Field};
pub use crate::status::SubmitStatus;
pub use crate::submitter::{ContactSubmitter, SimulatedSubmitter};
