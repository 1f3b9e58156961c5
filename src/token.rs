// src/token.rs
// Reads a GitHub personal access token from a plaintext file, if there is one.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use anyhow::{Context, Result};

pub const DEFAULT_TOKEN_FILE: &str = "gitaccesstoken.txt";

// Ok(None) when the file doesn't exist or holds only whitespace
pub fn read_token_file(path: &Path) -> Result<Option<String>> {
    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
        Err(e) => {
            return Err(e).with_context(|| format!("Failed to read token file {}", path.display()))
        }
    };

    let token = raw.trim();
    Ok((!token.is_empty()).then(|| token.to_string()))
}
