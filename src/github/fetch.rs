// src/github/fetch.rs
// =============================================================================
// This module talks to the GitHub REST API.
//
// Strategy:
// - One reqwest::Client is built up front and reused for every request
// - API calls carry "Authorization: token <PAT>" when we have a token
// - Raw file downloads (download_url) are sent WITHOUT the token, they point
//   at raw.githubusercontent.com which doesn't need it
// - Requests run one after another, never in parallel
//
// Endpoints used:
//   GET /repos/{owner}/{name}                              -> default branch
//   GET /repos/{owner}/{name}/git/trees/{branch}?recursive=1 -> file tree
//   GET /repos/{owner}/{name}/contents/{path}              -> download_url
//   GET {download_url}                                     -> file text
// =============================================================================

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{ACCEPT, AUTHORIZATION};
use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};
use url::Url;

use super::repo::RepositoryRef;
use super::types::{filter_by_extension, ContentResponse, FileEntry, RepoResponse, TreeResponse};
use super::RepoSource;
use crate::error::FetchError;

pub const DEFAULT_API_URL: &str = "https://api.github.com";

// What we list when the default branch can't be looked up
const FALLBACK_BRANCH: &str = "main";

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Everything needed to build a GitHubClient
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the REST API (differs for GitHub Enterprise)
    pub api_url: Url,
    /// Personal access token, if the user gave one
    pub token: Option<String>,
    /// List this branch instead of asking GitHub for the default one
    pub branch: Option<String>,
    /// Per-request timeout; None waits forever
    pub timeout: Option<Duration>,
}

pub struct GitHubClient {
    http: Client,
    api_url: Url,
    token: Option<String>,
    branch: Option<String>,
}

impl GitHubClient {
    pub fn new(config: ClientConfig) -> Result<Self, FetchError> {
        // GitHub rejects API requests that have no User-Agent
        let mut builder = Client::builder().user_agent(USER_AGENT);
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            http: builder.build()?,
            api_url: config.api_url,
            // A trailing newline would make an invalid header value
            token: config
                .token
                .map(|t| t.trim().to_string())
                .filter(|t| !t.is_empty()),
            branch: config.branch,
        })
    }

    // Asks GitHub which branch HEAD points at (usually "main" or "master")
    pub async fn default_branch(&self, repo: &RepositoryRef) -> Result<String, FetchError> {
        let url = self.endpoint(["repos", repo.owner.as_str(), repo.name.as_str()])?;
        let response: RepoResponse = self.get_json(url).await?;
        Ok(response.default_branch)
    }

    // Picks the branch to list: --branch wins, then the repository's default
    // branch, then "main" if GitHub wouldn't tell us.
    async fn resolve_branch(&self, repo: &RepositoryRef) -> String {
        if let Some(branch) = &self.branch {
            return branch.clone();
        }

        match self.default_branch(repo).await {
            Ok(branch) => {
                debug!(%repo, %branch, "resolved default branch");
                branch
            }
            Err(e) => {
                warn!(%repo, error = %e, "could not resolve default branch, using '{}'", FALLBACK_BRANCH);
                FALLBACK_BRANCH.to_string()
            }
        }
    }

    async fn try_fetch_content(&self, repo: &RepositoryRef, path: &str) -> Result<String, FetchError> {
        let url = self.endpoint(
            ["repos", repo.owner.as_str(), repo.name.as_str(), "contents"]
                .into_iter()
                .chain(path.split('/')),
        )?;
        let metadata: ContentResponse = self.get_json(url.clone()).await?;

        let download_url = metadata.download_url.ok_or_else(|| FetchError::Decode {
            url: url.to_string(),
            message: format!("{} has no download_url", path),
        })?;

        self.get_raw(&download_url).await
    }

    // Builds an API URL from path segments. Each segment is percent-encoded,
    // so file names with spaces or '#' survive the trip.
    fn endpoint<'a>(&self, segments: impl IntoIterator<Item = &'a str>) -> Result<Url, FetchError> {
        let mut url = self.api_url.clone();
        url.path_segments_mut()
            .map_err(|_| FetchError::invalid_input(format!("Unusable API URL: {}", self.api_url)))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    fn tree_url(&self, repo: &RepositoryRef, branch: &str) -> Result<Url, FetchError> {
        let mut url = self.endpoint(
            ["repos", repo.owner.as_str(), repo.name.as_str(), "git", "trees"]
                .into_iter()
                .chain(branch.split('/')),
        )?;
        url.query_pairs_mut().append_pair("recursive", "1");
        Ok(url)
    }

    fn api_request(&self, url: Url) -> RequestBuilder {
        let request = self
            .http
            .get(url)
            .header(ACCEPT, "application/vnd.github+json");

        match &self.token {
            Some(token) => request.header(AUTHORIZATION, format!("token {}", token)),
            None => request,
        }
    }

    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T, FetchError> {
        debug!(%url, "GET");
        let response = self.api_request(url.clone()).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Remote {
                status,
                url: url.to_string(),
            });
        }

        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| FetchError::Decode {
            url: url.to_string(),
            message: e.to_string(),
        })
    }

    // Raw downloads go out without the Authorization header
    async fn get_raw(&self, url: &str) -> Result<String, FetchError> {
        debug!(%url, "GET raw");
        let response = self.http.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Remote {
                status,
                url: url.to_string(),
            });
        }

        Ok(response.text().await?)
    }
}

#[async_trait]
impl RepoSource for GitHubClient {
    async fn list_files(&self, repo: &RepositoryRef, extension: &str) -> Result<Vec<FileEntry>, FetchError> {
        let branch = self.resolve_branch(repo).await;
        let url = self.tree_url(repo, &branch)?;
        let response: TreeResponse = self.get_json(url).await?;

        if response.truncated {
            warn!(%repo, %branch, "tree listing was truncated by GitHub, some files will be missing");
        }

        let files = filter_by_extension(response.tree, extension);
        debug!(%repo, %branch, extension, count = files.len(), "listed matching files");
        Ok(files)
    }

    async fn fetch_content(&self, repo: &RepositoryRef, path: &str) -> Option<String> {
        match self.try_fetch_content(repo, path).await {
            Ok(content) => Some(content),
            Err(e) => {
                warn!(%repo, path, error = %e, "skipping file");
                None
            }
        }
    }
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why is fetch_content's return type Option and not Result?
//    - A single file failing is not a reason to stop the whole run
//    - The error is logged here, the caller only needs to know "got it or not"
//    - list_files returns Result because without a listing there is nothing to do
//
// 2. What does impl IntoIterator<Item = &'a str> mean?
//    - endpoint() accepts arrays, Vecs, chained iterators... anything that
//      yields string slices
//    - The 'a lifetime says those slices must live while we build the URL
//
// 3. Why clone the Url before sending?
//    - reqwest takes ownership of the Url it sends
//    - We keep our copy so error messages can say which URL failed
// -----------------------------------------------------------------------------
