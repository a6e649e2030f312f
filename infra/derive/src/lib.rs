#![allow(unreachable_pub)]

//! # Macros
//!
//! Procedural macros shared by every Folio crate. At the moment this is the
//! error enum attribute that gives all crates the same error shape.
//!
//! ## Usage
//! ```toml
//! [dependencies]
//! folio-derive.workspace = true
//! thiserror.workspace = true
//! ```

mod macros;

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

/// Turns an enum into a crate error type with context support.
///
/// # Generated Items
///
/// * `#[derive(Debug, thiserror::Error)]` unless already derived.
/// * `<Name>Ext` trait adding `.context(..)` to `Result<T, Name>` and to
///   `Result<T, Source>` for every variant that wraps a `source`.
/// * `From<Source>` for variants with a `source` (or `#[source]`/`#[from]`) field.
/// * `From<&'static str>` / `From<String>` when an `Internal { message, .. }` variant exists.
/// * A module-private `format_context` helper for `#[error(..)]` strings.
///
/// # Requirements
///
/// * Only named-field variants are accepted.
/// * `context` must be `Option<Cow<'static, str>>`.
/// * Any variant that wraps a source must also carry a `context` field.
///
/// # Example
///
/// ```rust,ignore
/// use std::borrow::Cow;
///
/// #[folio_derive::folio_error]
/// pub enum FetchError {
///     #[error("HTTP error{}: {source}", format_context(.context))]
///     Http { source: reqwest::Error, context: Option<Cow<'static, str>> },
///
///     #[error("Internal fetch error{}: {message}", format_context(.context))]
///     Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
/// }
///
/// fn load() -> Result<String, FetchError> {
///     let body = request().context("Listing repositories")?;
///     body.ok_or_else(|| "empty body".into())
/// }
/// ```
#[proc_macro_attribute]
pub fn folio_error(_args: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as DeriveInput);
    macros::error::expand(input).into()
}
