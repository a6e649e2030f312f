//! # GitHub
//!
//! Loads the public repository listing for one account and falls back to a
//! fixed demo set on any failure. The fetch happens once per mount; callers own
//! the future, so dropping it cancels the request.
//!
//! ```rust,no_run
//! use folio_github::{GithubClient, load_feed};
//!
//! # async fn run() -> Result<(), folio_github::GithubError> {
//! let client = GithubClient::new("https://api.github.com")?;
//! let feed = load_feed(&client, "ashishraj875718-jpg", 6).await;
//! if let Some(notice) = feed.notice() {
//!     tracing::warn!("{notice}");
//! }
//! # Ok(())
//! # }
//! ```

mod client;
mod display;
mod error;
mod feed;
mod source;

pub use crate::client::GithubClient;
pub use crate::display::{
    DEFAULT_LANGUAGE_COLOR, MAX_TOPICS, description_or_placeholder, format_updated,
    language_color, visible_topics,
};
pub use crate::error::{GithubError, GithubErrorExt};
pub use crate::feed::{
    FALLBACK_NOTICE, FeedStatus, RepositoryFeed, fallback_repositories, load_configured_feed,
    load_feed,
};
pub use crate::source::RepositorySource;
pub use folio_domain::content::RepositorySummary;
