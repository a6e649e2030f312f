use folio_github::{
    FeedStatus, GithubError, RepositorySource, RepositorySummary, fallback_repositories, load_feed,
};
use std::cell::RefCell;

/// Source answering from a canned result and recording each request.
struct CannedSource {
    reply: fn() -> Result<Vec<RepositorySummary>, GithubError>,
    requests: RefCell<Vec<(String, u8)>>,
}

impl CannedSource {
    fn new(reply: fn() -> Result<Vec<RepositorySummary>, GithubError>) -> Self {
        Self { reply, requests: RefCell::new(Vec::new()) }
    }
}

impl RepositorySource for CannedSource {
    async fn list(
        &self,
        account: &str,
        per_page: u8,
    ) -> Result<Vec<RepositorySummary>, GithubError> {
        self.requests.borrow_mut().push((account.to_owned(), per_page));
        (self.reply)()
    }
}

const LISTING: &str = r#"[
  {
    "id": 901, "name": "zeta", "full_name": "octocat/zeta", "private": false,
    "description": null, "html_url": "https://github.com/octocat/zeta",
    "stargazers_count": 1, "forks_count": 0, "language": "Rust",
    "topics": ["cli"], "updated_at": "2025-05-02T08:00:00Z", "fork": false
  },
  {
    "id": 17, "name": "alpha", "description": "First by name, second by update",
    "html_url": "https://github.com/octocat/alpha", "stargazers_count": 40,
    "forks_count": 5, "language": null, "topics": [], "updated_at": "2025-04-11T12:00:00Z"
  },
  {
    "id": 3, "name": "mid", "html_url": "https://github.com/octocat/mid",
    "updated_at": "2024-12-24T18:30:00Z"
  }
]"#;

fn decoded_listing() -> Result<Vec<RepositorySummary>, GithubError> {
    Ok(serde_json::from_str(LISTING)?)
}

fn eight_repositories() -> Result<Vec<RepositorySummary>, GithubError> {
    let template = fallback_repositories().remove(0);
    Ok((0..8u64)
        .map(|id| RepositorySummary { id, name: format!("repo-{id}"), ..template.clone() })
        .collect())
}

#[tokio::test]
async fn live_listing_keeps_server_order() {
    let source = CannedSource::new(decoded_listing);

    let feed = load_feed(&source, "octocat", 6).await;

    assert_eq!(feed.status, FeedStatus::Live);
    assert_eq!(feed.notice(), None);
    let names: Vec<_> = feed.repositories.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, ["zeta", "alpha", "mid"]);
    assert_eq!(feed.repositories[0].description, None);
    assert_eq!(feed.repositories[2].stargazers_count, 0);
    assert_eq!(source.requests.borrow().as_slice(), [("octocat".to_owned(), 6)]);
}

#[tokio::test]
async fn oversized_listing_is_truncated_to_page_size() {
    let source = CannedSource::new(eight_repositories);

    let feed = load_feed(&source, "octocat", 6).await;

    let ids: Vec<_> = feed.repositories.iter().map(|r| r.id).collect();
    assert_eq!(ids, [0, 1, 2, 3, 4, 5]);
}

#[tokio::test]
async fn status_failure_falls_back() {
    let source =
        CannedSource::new(|| Err(GithubError::Status { status: 403, context: None }));

    let feed = load_feed(&source, "octocat", 6).await;

    assert_eq!(feed.status, FeedStatus::Fallback);
    assert_eq!(feed.repositories, fallback_repositories());
    assert_eq!(feed.notice(), Some("Failed to load repositories"));
}

#[tokio::test]
async fn malformed_body_falls_back() {
    let source = CannedSource::new(|| {
        let repositories: Vec<RepositorySummary> = serde_json::from_str(r#"{"message":"Not Found"}"#)?;
        Ok(repositories)
    });

    let feed = load_feed(&source, "nobody", 6).await;

    assert!(feed.is_fallback());
    assert_eq!(feed.repositories.len(), 3);
}

#[tokio::test]
async fn unreachable_endpoint_falls_back() {
    let client = folio_github::GithubClient::new("http://127.0.0.1:9").expect("client builds");

    let feed = load_feed(&client, "octocat", 6).await;

    assert!(feed.is_fallback());
    assert_eq!(feed.repositories, fallback_repositories());
}

#[tokio::test]
async fn configured_feed_uses_the_config_endpoint() {
    let config = folio_domain::config::GithubConfig {
        account: "octocat".to_owned(),
        api_url: "http://127.0.0.1:9/".to_owned(),
        per_page: 4,
    };

    let feed = folio_github::load_configured_feed(&config).await;

    assert!(feed.is_fallback());
}
