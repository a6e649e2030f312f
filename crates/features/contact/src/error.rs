use crate::form::Field;
use std::borrow::Cow;

#[folio_derive::folio_error]
pub enum ContactError {
    /// A form field is empty or malformed.
    #[error("Invalid {field}{}: {message}", format_context(context))]
    Validation { field: Field, message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// A submission is already in flight.
    #[error("Submission already in progress{}", format_context(context))]
    Busy { context: Option<Cow<'static, str>> },

    /// The submitter could not deliver the message.
    #[error("Message delivery failed{}: {message}", format_context(context))]
    Delivery { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error("Internal contact error{}: {message}", format_context(context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

impl ContactError {
    pub(crate) fn invalid(field: Field, message: &'static str) -> Self {
        Self::Validation { field, message: Cow::Borrowed(message), context: None }
    }
}
