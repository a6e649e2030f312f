//! HTTP client for the public repository listing.

use crate::error::{GithubError, GithubErrorExt};
use crate::source::RepositorySource;
use folio_domain::config::GithubConfig;
use folio_domain::content::RepositorySummary;
use reqwest::header::{ACCEPT, HeaderMap, HeaderValue};
use tracing::debug;

const API_VERSION: &str = "2022-11-28";

/// Reads `GET {api_url}/users/{account}/repos?sort=updated&per_page=N`.
#[derive(Debug, Clone)]
pub struct GithubClient {
    client: reqwest::Client,
    api_url: String,
}

impl GithubClient {
    /// Creates a client for the API rooted at `api_url`.
    ///
    /// # Errors
    /// Returns [`GithubError::Http`] if the underlying HTTP client cannot be built.
    pub fn new(api_url: impl Into<String>) -> Result<Self, GithubError> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/vnd.github+json"));
        headers.insert("X-GitHub-Api-Version", HeaderValue::from_static(API_VERSION));

        let builder = reqwest::Client::builder().default_headers(headers);
        #[cfg(not(target_arch = "wasm32"))]
        let builder = builder.user_agent(concat!("folio/", env!("CARGO_PKG_VERSION")));

        let client = builder.build().context("Building HTTP client")?;
        let api_url = api_url.into().trim_end_matches('/').to_owned();

        Ok(Self { client, api_url })
    }

    /// # Errors
    /// See [`GithubClient::new`].
    pub fn from_config(config: &GithubConfig) -> Result<Self, GithubError> {
        Self::new(config.api_url.as_str())
    }

    #[must_use]
    pub fn listing_url(&self, account: &str, per_page: u8) -> String {
        format!("{}/users/{account}/repos?sort=updated&per_page={per_page}", self.api_url)
    }
}

impl RepositorySource for GithubClient {
    async fn list(
        &self,
        account: &str,
        per_page: u8,
    ) -> Result<Vec<RepositorySummary>, GithubError> {
        let url = self.listing_url(account, per_page);
        debug!("Fetching repositories from {url}");

        let response = self.client.get(&url).send().await.context("Sending listing request")?;

        let status = response.status();
        if !status.is_success() {
            return Err(GithubError::Status { status: status.as_u16(), context: Some(url.into()) });
        }

        let body = response.text().await.context("Reading listing body")?;
        let repositories = serde_json::from_str(&body).context("Decoding listing body")?;

        Ok(repositories)
    }
}
