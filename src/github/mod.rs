// src/github/mod.rs
// =============================================================================
// This module handles everything GitHub-specific.
//
// Currently implements:
// - Parsing GitHub URLs to extract owner/repo (repo.rs)
// - Listing a repository's files via the git trees API (fetch.rs)
// - Downloading a single file's raw contents (fetch.rs)
//
// The RepoSource trait below is the seam between "where files come from"
// and the aggregator. GitHubClient is the real implementation, tests use
// an in-memory one.
// =============================================================================

mod fetch;
mod repo;
mod types;

use async_trait::async_trait;

use crate::error::FetchError;

pub use fetch::{ClientConfig, GitHubClient, DEFAULT_API_URL};
pub use repo::{parse_repo_url, RepositoryRef};
pub use types::FileEntry;

/// Somewhere we can list a repository's files and read them one by one
#[async_trait]
pub trait RepoSource {
    /// Every file whose path ends with `extension`, in listing order.
    /// An empty Vec is a normal result, not an error.
    async fn list_files(&self, repo: &RepositoryRef, extension: &str) -> Result<Vec<FileEntry>, FetchError>;

    /// The raw text of one file, or None if it couldn't be fetched.
    /// Implementations report the reason themselves.
    async fn fetch_content(&self, repo: &RepositoryRef, path: &str) -> Option<String>;
}
