use crate::client::GithubClient;
use crate::source::RepositorySource;
use folio_domain::config::GithubConfig;
use folio_domain::constants::GITHUB_PROFILE_URL;
use folio_domain::content::RepositorySummary;
use serde::Serialize;
use tracing::{info, warn};

/// Message shown above the fallback list.
pub const FALLBACK_NOTICE: &str = "Failed to load repositories";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum FeedStatus {
    /// The list came from the endpoint.
    Live,
    /// The fetch failed; the list is the fixed fallback set.
    Fallback,
}

/// Result of one fetch attempt. The list is always complete: either the
/// server's answer or the fallback set, never a mix.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RepositoryFeed {
    pub repositories: Vec<RepositorySummary>,
    pub status: FeedStatus,
}

impl RepositoryFeed {
    #[must_use]
    pub fn fallback() -> Self {
        Self { repositories: fallback_repositories(), status: FeedStatus::Fallback }
    }

    #[must_use]
    pub const fn is_fallback(&self) -> bool {
        matches!(self.status, FeedStatus::Fallback)
    }

    /// Display-only error flag.
    #[must_use]
    pub const fn notice(&self) -> Option<&'static str> {
        if self.is_fallback() { Some(FALLBACK_NOTICE) } else { None }
    }
}

/// Fetches once. Server order is kept; anything beyond `per_page` is dropped.
/// Every failure yields [`RepositoryFeed::fallback`].
pub async fn load_feed<S>(source: &S, account: &str, per_page: u8) -> RepositoryFeed
where
    S: RepositorySource + ?Sized,
{
    match source.list(account, per_page).await {
        Ok(mut repositories) => {
            repositories.truncate(usize::from(per_page));
            info!("Loaded {} repositories for {account}", repositories.len());
            RepositoryFeed { repositories, status: FeedStatus::Live }
        }
        Err(err) => {
            warn!("{FALLBACK_NOTICE}: {err}");
            RepositoryFeed::fallback()
        }
    }
}

/// Builds a [`GithubClient`] from `config` and loads the configured account.
/// A client that cannot be built counts as a failed fetch.
pub async fn load_configured_feed(config: &GithubConfig) -> RepositoryFeed {
    match GithubClient::from_config(config) {
        Ok(client) => load_feed(&client, &config.account, config.per_page).await,
        Err(err) => {
            warn!("{FALLBACK_NOTICE}: {err}");
            RepositoryFeed::fallback()
        }
    }
}

struct DemoRepository {
    id: u64,
    name: &'static str,
    description: &'static str,
    stars: u32,
    forks: u32,
    language: &'static str,
    topics: [&'static str; 3],
    updated_at: &'static str,
}

const DEMO_REPOSITORIES: [DemoRepository; 3] = [
    DemoRepository {
        id: 1,
        name: "portfolio-website",
        description: "My personal portfolio website built with React and modern web technologies",
        stars: 12,
        forks: 3,
        language: "React",
        topics: ["portfolio", "react", "typescript"],
        updated_at: "2024-01-15T10:30:00Z",
    },
    DemoRepository {
        id: 2,
        name: "qrify-horeca",
        description: "QR-based restaurant ordering system - Winner of HackTheFuture1.0",
        stars: 25,
        forks: 8,
        language: "JavaScript",
        topics: ["hackathon", "qr-code", "restaurant"],
        updated_at: "2024-01-10T15:45:00Z",
    },
    DemoRepository {
        id: 3,
        name: "street-stylings-ecommerce",
        description: "Full-stack e-commerce platform for fashion products",
        stars: 8,
        forks: 2,
        language: "React",
        topics: ["ecommerce", "fashion", "full-stack"],
        updated_at: "2024-01-20T09:15:00Z",
    },
];

impl From<&DemoRepository> for RepositorySummary {
    fn from(demo: &DemoRepository) -> Self {
        Self {
            id: demo.id,
            name: demo.name.to_owned(),
            description: Some(demo.description.to_owned()),
            html_url: GITHUB_PROFILE_URL.to_owned(),
            stargazers_count: demo.stars,
            forks_count: demo.forks,
            language: Some(demo.language.to_owned()),
            topics: demo.topics.iter().map(|t| (*t).to_owned()).collect(),
            updated_at: demo.updated_at.to_owned(),
        }
    }
}

/// The fixed three-item list shown when the live fetch fails.
#[must_use]
pub fn fallback_repositories() -> Vec<RepositorySummary> {
    DEMO_REPOSITORIES.iter().map(RepositorySummary::from).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fallback_set_is_fixed() {
        let repos = fallback_repositories();
        let summary: Vec<_> = repos
            .iter()
            .map(|r| (r.name.as_str(), r.language.as_deref(), r.stargazers_count, r.forks_count))
            .collect();

        assert_eq!(
            summary,
            vec![
                ("portfolio-website", Some("React"), 12, 3),
                ("qrify-horeca", Some("JavaScript"), 25, 8),
                ("street-stylings-ecommerce", Some("React"), 8, 2),
            ]
        );
        assert!(repos.iter().all(|r| r.html_url == GITHUB_PROFILE_URL));
    }

    #[test]
    fn notice_only_for_fallback() {
        assert_eq!(RepositoryFeed::fallback().notice(), Some("Failed to load repositories"));
        let live = RepositoryFeed { repositories: Vec::new(), status: FeedStatus::Live };
        assert_eq!(live.notice(), None);
    }
}
