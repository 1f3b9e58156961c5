// src/github/types.rs
// =============================================================================
// The small slices of GitHub API responses that we actually read.
//
// serde ignores every field we don't declare, so these structs stay tiny
// even though the real responses are much larger.
// =============================================================================

use serde::Deserialize;

/// GET /repos/{owner}/{name}
#[derive(Debug, Deserialize)]
pub struct RepoResponse {
    pub default_branch: String,
}

/// GET /repos/{owner}/{name}/git/trees/{branch}?recursive=1
#[derive(Debug, Deserialize)]
pub struct TreeResponse {
    pub tree: Vec<TreeItem>,
    /// GitHub sets this when the tree was too big to list in one response
    #[serde(default)]
    pub truncated: bool,
}

#[derive(Debug, Deserialize)]
pub struct TreeItem {
    pub path: String,
    /// "blob", "tree" or "commit" (submodule)
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
}

impl TreeItem {
    /// Directories and submodules can't be downloaded, everything else can
    pub fn is_file(&self) -> bool {
        !matches!(self.kind.as_deref(), Some("tree") | Some("commit"))
    }
}

/// GET /repos/{owner}/{name}/contents/{path}
#[derive(Debug, Deserialize)]
pub struct ContentResponse {
    /// null for submodules and some symlinks
    pub download_url: Option<String>,
}

/// One file from the tree listing that matched the requested extension
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEntry {
    pub path: String,
}

// Keeps the files whose path ends with `extension`, in listing order
pub fn filter_by_extension(tree: Vec<TreeItem>, extension: &str) -> Vec<FileEntry> {
    tree.into_iter()
        .filter(|item| item.is_file() && item.path.ends_with(extension))
        .map(|item| FileEntry { path: item.path })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn paths(entries: &[FileEntry]) -> Vec<&str> {
        entries.iter().map(|e| e.path.as_str()).collect()
    }

    #[test]
    fn test_filter_keeps_listing_order() {
        let body = r#"{"tree":[{"path":"a.py"},{"path":"b.java"},{"path":"c/d.py"}]}"#;
        let response: TreeResponse = serde_json::from_str(body).unwrap();

        let files = filter_by_extension(response.tree, ".py");

        assert_eq!(paths(&files), vec!["a.py", "c/d.py"]);
        assert!(!response.truncated);
    }

    #[test]
    fn test_filter_skips_directories_and_submodules() {
        let body = r#"{
            "sha": "abc",
            "tree": [
                {"path": "pkg.py", "type": "tree", "mode": "040000"},
                {"path": "pkg.py/main.py", "type": "blob", "mode": "100644"},
                {"path": "vendored.py", "type": "commit", "mode": "160000"}
            ],
            "truncated": false
        }"#;
        let response: TreeResponse = serde_json::from_str(body).unwrap();

        let files = filter_by_extension(response.tree, ".py");

        assert_eq!(paths(&files), vec!["pkg.py/main.py"]);
    }

    #[test]
    fn test_filter_no_matches_is_empty() {
        let body = r#"{"tree":[{"path":"README.md"},{"path":"src/Main.java"}]}"#;
        let response: TreeResponse = serde_json::from_str(body).unwrap();

        assert!(filter_by_extension(response.tree, ".cs").is_empty());
    }

    #[test]
    fn test_extension_must_be_a_suffix() {
        let body = r#"{"tree":[{"path":"notes.pyc"},{"path":"x.py.bak"},{"path":"y.py"}]}"#;
        let response: TreeResponse = serde_json::from_str(body).unwrap();

        assert_eq!(paths(&filter_by_extension(response.tree, ".py")), vec!["y.py"]);
    }

    #[test]
    fn test_truncated_flag_is_read() {
        let body = r#"{"tree":[],"truncated":true}"#;
        let response: TreeResponse = serde_json::from_str(body).unwrap();
        assert!(response.truncated);
    }

    #[test]
    fn test_content_response_with_null_download_url() {
        let body = r#"{"name":"sub","download_url":null}"#;
        let response: ContentResponse = serde_json::from_str(body).unwrap();
        assert!(response.download_url.is_none());
    }
}
