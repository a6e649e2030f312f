use std::borrow::Cow;

/// Errors from fetching the repository listing.
///
/// The feed collapses all of them into one fallback condition; the variants
/// exist for logs.
#[folio_derive::folio_error]
pub enum GithubError {
    /// Transport failure: DNS, TLS, CORS, connection reset.
    #[error("Repository request failed{}: {source}", format_context(context))]
    Http { source: reqwest::Error, context: Option<Cow<'static, str>> },

    /// The endpoint answered with a non-success status.
    #[error("Repository listing returned HTTP {status}{}", format_context(context))]
    Status { status: u16, context: Option<Cow<'static, str>> },

    /// The body is not a JSON array of repository records.
    #[error("Malformed repository listing{}: {source}", format_context(context))]
    Decode { source: serde_json::Error, context: Option<Cow<'static, str>> },

    #[error("Internal repository error{}: {message}", format_context(context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}
