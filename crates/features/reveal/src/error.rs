use std::borrow::Cow;

/// Errors raised while wiring an element to the intersection primitive.
///
/// None of these reach the user: the observer logs them and reveals the element.
#[folio_derive::folio_error]
pub enum RevealError {
    /// The host has no intersection primitive (non-web renderer, old browser).
    #[error("Intersection primitive unavailable{}: {message}", format_context(context))]
    Unsupported { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// The primitive exists but refused the registration.
    #[error("Observer registration failed{}: {message}", format_context(context))]
    Registration { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error("Internal reveal error{}: {message}", format_context(context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}
