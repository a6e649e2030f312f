//! Submission state machine and its async driver.
//!
//! `Idle -> Submitting -> Success | Error -> Idle`. The return to idle happens
//! after the display window and only if no newer submission started meanwhile.

use crate::error::ContactError;
use crate::form::{ContactForm, ContactMessage, Field};
use crate::status::SubmitStatus;
use crate::submitter::ContactSubmitter;
use folio_kernel::time::sleep;
use std::cell::RefCell;
use std::time::Duration;
use tracing::{debug, warn};

/// Form contents plus submission status for one contact section.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ContactFlow {
    form: ContactForm,
    status: SubmitStatus,
    generation: u64,
}

impl ContactFlow {
    #[must_use]
    pub const fn form(&self) -> &ContactForm {
        &self.form
    }

    #[must_use]
    pub const fn status(&self) -> SubmitStatus {
        self.status
    }

    pub fn edit(&mut self, field: Field, value: impl Into<String>) {
        self.form.set(field, value);
    }

    /// Validates the form and enters `Submitting`.
    ///
    /// # Errors
    /// [`ContactError::Busy`] while a submission is in flight, or the
    /// validation error of the form. The status is unchanged on error.
    pub fn begin(&mut self) -> Result<(ContactMessage, u64), ContactError> {
        if self.status.is_submitting() {
            return Err(ContactError::Busy { context: None });
        }
        let message = self.form.validate()?;
        self.generation = self.generation.wrapping_add(1);
        self.status = SubmitStatus::Submitting;
        Ok((message, self.generation))
    }

    /// Records the submitter's outcome. Success clears the form.
    pub fn finish(&mut self, outcome: &Result<(), ContactError>) -> SubmitStatus {
        self.status = match outcome {
            Ok(()) => {
                self.form.clear();
                SubmitStatus::Success
            }
            Err(_) => SubmitStatus::Error,
        };
        self.status
    }

    /// Returns to `Idle` if `generation` is still the latest submission.
    pub fn expire(&mut self, generation: u64) -> bool {
        if generation != self.generation || self.status.is_submitting() {
            return false;
        }
        self.status = SubmitStatus::Idle;
        true
    }
}

/// Shared access to a [`ContactFlow`] across await points.
///
/// Implementations must not hold a borrow across the closure boundary.
pub trait FlowHandle {
    fn update<R>(&self, f: impl FnOnce(&mut ContactFlow) -> R) -> R;
}

impl FlowHandle for RefCell<ContactFlow> {
    fn update<R>(&self, f: impl FnOnce(&mut ContactFlow) -> R) -> R {
        f(&mut self.borrow_mut())
    }
}

/// Runs one submission end to end: begin, deliver, show the outcome for
/// `display`, then return to idle.
///
/// # Errors
/// Returns the rejection from [`ContactFlow::begin`]; delivery failures are
/// reported through [`SubmitStatus::Error`] instead.
pub async fn submit<H, S>(
    handle: &H,
    submitter: &S,
    display: Duration,
) -> Result<SubmitStatus, ContactError>
where
    H: FlowHandle + ?Sized,
    S: ContactSubmitter + ?Sized,
{
    let (message, generation) = handle.update(ContactFlow::begin)?;
    debug!(generation, "Contact submission started");

    let outcome = submitter.submit(&message).await;
    if let Err(err) = &outcome {
        warn!("Contact submission failed: {err}");
    }
    let shown = handle.update(|flow| flow.finish(&outcome));

    sleep(display).await;
    handle.update(|flow| flow.expire(generation));

    Ok(shown)
}
