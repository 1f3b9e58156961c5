// src/github/repo.rs
// =============================================================================
// Turns what the user typed into a RepositoryRef { owner, name }.
//
// Accepted:
//   https://github.com/owner/name
//   http://github.com/owner/name
//   https://github.com/owner/name.git
//   https://github.com/owner/name/tree/main/src   (trailing path ignored)
//
// Anything else is rejected as a whole. We never return a half-parsed
// owner or a guessed name.
// =============================================================================

use std::fmt;

use url::Url;

use crate::error::FetchError;

const GITHUB_HOST: &str = "github.com";

/// Identifies the repository a run works on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryRef {
    pub owner: String,
    pub name: String,
}

impl RepositoryRef {
    pub fn new(owner: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            owner: owner.into(),
            name: name.into(),
        }
    }
}

impl fmt::Display for RepositoryRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}

// Parses a GitHub repository URL
//
// Returns: RepositoryRef on success, FetchError::InvalidInput otherwise
//
// Example:
//   "https://github.com/rust-lang/rust" -> RepositoryRef { "rust-lang", "rust" }
pub fn parse_repo_url(input: &str) -> Result<RepositoryRef, FetchError> {
    let input = input.trim();
    let invalid = || FetchError::invalid_input(format!("Not a GitHub repository URL: {}", input));

    let url = Url::parse(input).map_err(|_| invalid())?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(invalid());
    }

    // Url lowercases the host for us, so "GitHub.com" still matches.
    // A port or user:password@ part means it isn't a plain github.com link.
    if url.host_str() != Some(GITHUB_HOST)
        || url.port().is_some()
        || !url.username().is_empty()
        || url.password().is_some()
    {
        return Err(invalid());
    }

    let mut segments = url.path_segments().ok_or_else(invalid)?;

    let owner = segments.next().filter(|s| !s.is_empty()).ok_or_else(invalid)?;
    let name = segments.next().filter(|s| !s.is_empty()).ok_or_else(invalid)?;

    // "name.git" is how clone URLs look, the API only knows "name"
    let name = name.strip_suffix(".git").unwrap_or(name);
    if name.is_empty() {
        return Err(invalid());
    }

    Ok(RepositoryRef::new(owner, name))
}
