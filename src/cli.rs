// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// repo-clip is interactive by default: run it with no arguments and it asks
// for the repository URL, a token and a language. Every flag below is
// optional and simply answers one of those questions up front, which is
// handy for scripts.
//
// Rust concepts:
// - Structs: Custom data types that group related data
// - Option<T>: A flag the user may or may not have passed
// - Derive macros: Automatically generate code for our types
// =============================================================================

use std::path::PathBuf;

use clap::Parser;

use crate::github::DEFAULT_API_URL;
use crate::token::DEFAULT_TOKEN_FILE;

#[derive(Parser, Debug)]
#[command(
    name = "repo-clip",
    version,
    about = "Copy every source file of one language from a GitHub repository to your clipboard",
    long_about = "repo-clip lists a GitHub repository's files, downloads the ones matching the chosen \
                  language and copies them to your clipboard, each under a banner with its path. \
                  Run it without flags to be asked for everything interactively."
)]
pub struct Cli {
    /// GitHub repository URL (e.g., https://github.com/user/repo)
    ///
    /// Skips the "Enter Full Repository URL" prompt
    #[arg(long)]
    pub url: Option<String>,

    /// Language code: 1 = Python, 2 = Java, 3 = C#
    ///
    /// Skips the language menu
    #[arg(long)]
    pub language: Option<String>,

    /// GitHub personal access token
    ///
    /// Takes priority over the token file and skips the token prompt
    #[arg(long, env = "GITHUB_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// File holding a personal access token, read once at startup if it exists
    #[arg(long, default_value = DEFAULT_TOKEN_FILE)]
    pub token_file: PathBuf,

    /// Branch to copy from (default: the repository's default branch)
    #[arg(long)]
    pub branch: Option<String>,

    /// Base URL of the GitHub REST API (change it for GitHub Enterprise)
    #[arg(long, default_value = DEFAULT_API_URL)]
    pub api_url: url::Url,

    /// Give up on a request after this many seconds (default: wait forever)
    #[arg(long, value_name = "SECS")]
    pub timeout: Option<u64>,

    /// Print the result instead of copying it to the clipboard
    #[arg(long)]
    pub stdout: bool,

    /// Show debug logs on stderr (RUST_LOG overrides this)
    #[arg(short, long)]
    pub verbose: bool,
}
