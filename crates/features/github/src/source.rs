use crate::error::GithubError;
use folio_domain::content::RepositorySummary;
use std::future::Future;

/// Anything that can list an account's public repositories.
///
/// Futures are not required to be `Send`: the browser runtime is single threaded.
pub trait RepositorySource {
    /// Lists up to `per_page` repositories, most recently updated first.
    ///
    /// # Errors
    /// Transport, status and decode failures as [`GithubError`].
    fn list(
        &self,
        account: &str,
        per_page: u8,
    ) -> impl Future<Output = Result<Vec<RepositorySummary>, GithubError>>;
}
