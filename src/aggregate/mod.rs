// src/aggregate/mod.rs
// =============================================================================
// The pipeline: list -> fetch each file -> emit.
//
// 1. Ask the RepoSource for every file with the chosen extension
// 2. Fetch each one in listing order, skipping files that fail
// 3. If anything was fetched, render it and hand it to the OutputSink
//
// A run ends in exactly one of three states (RunOutcome):
//   Emitted        - text was handed to the sink
//   NoFiles        - nothing matched (or every fetch failed), sink untouched
//   ListingFailed  - the tree listing itself failed, sink untouched
// =============================================================================

mod render;

use anyhow::Result;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::info;

use crate::error::FetchError;
use crate::github::{RepoSource, RepositoryRef};
use crate::output::OutputSink;

pub use render::{join_blocks, render_block};

#[derive(Debug)]
pub enum RunOutcome {
    Emitted { files: usize },
    NoFiles,
    ListingFailed(FetchError),
}

pub struct Aggregator<S, O> {
    source: S,
    sink: O,
    show_progress: bool,
}

impl<S: RepoSource, O: OutputSink> Aggregator<S, O> {
    pub fn new(source: S, sink: O) -> Self {
        Self {
            source,
            sink,
            show_progress: false,
        }
    }

    /// Draw a progress bar on stderr while files are downloaded
    pub fn with_progress(mut self, show: bool) -> Self {
        self.show_progress = show;
        self
    }

    #[cfg(test)]
    pub fn into_sink(self) -> O {
        self.sink
    }

    // Runs the whole pipeline for one repository and extension.
    //
    // Returns Err only if the sink itself fails. Listing and per-file
    // failures are part of the outcome, not errors.
    pub async fn run(&mut self, repo: &RepositoryRef, extension: &str) -> Result<RunOutcome> {
        let files = match self.source.list_files(repo, extension).await {
            Ok(files) => files,
            Err(e) => return Ok(RunOutcome::ListingFailed(e)),
        };

        let progress = self.progress_bar(files.len() as u64);
        let mut blocks = Vec::with_capacity(files.len());

        for file in &files {
            progress.set_message(file.path.clone());
            if let Some(content) = self.source.fetch_content(repo, &file.path).await {
                blocks.push(render_block(&file.path, &content));
            }
            progress.inc(1);
        }
        progress.finish_and_clear();

        if blocks.is_empty() {
            return Ok(RunOutcome::NoFiles);
        }

        info!(%repo, extension, listed = files.len(), fetched = blocks.len(), "emitting aggregate");
        self.sink.emit(&join_blocks(&blocks))?;

        Ok(RunOutcome::Emitted { files: blocks.len() })
    }

    fn progress_bar(&self, len: u64) -> ProgressBar {
        if !self.show_progress {
            return ProgressBar::hidden();
        }

        let bar = ProgressBar::new(len);
        // The template is a constant, so a parse failure would be a typo here
        if let Ok(style) = ProgressStyle::with_template("Copy Files {bar:40} {pos}/{len} {wide_msg}") {
            bar.set_style(style);
        }
        bar
    }
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why is Aggregator generic over S and O?
//    - S is "anything that implements RepoSource", O is "any OutputSink"
//    - In main.rs they are GitHubClient and ClipboardSink
//    - In the tests below they are a HashMap-backed fake and a String
//    - The compiler generates a separate version for each combination
//
// 2. Why does run() take &mut self?
//    - Emitting writes into the sink, and writing needs a mutable borrow
// -----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::github::FileEntry;
    use async_trait::async_trait;
    use reqwest::StatusCode;
    use std::collections::HashMap;
    use std::sync::atomic::{AtomicUsize, Ordering};

    // In-memory repository: a listing plus the contents that can be fetched.
    // Paths missing from `contents` behave like failed downloads.
    struct FakeRepo {
        listing: Result<Vec<&'static str>, StatusCode>,
        contents: HashMap<&'static str, &'static str>,
        fetches: AtomicUsize,
    }

    impl FakeRepo {
        fn new(listing: Vec<&'static str>, contents: &[(&'static str, &'static str)]) -> Self {
            Self {
                listing: Ok(listing),
                contents: contents.iter().copied().collect(),
                fetches: AtomicUsize::new(0),
            }
        }

        fn failing(status: StatusCode) -> Self {
            Self {
                listing: Err(status),
                contents: HashMap::new(),
                fetches: AtomicUsize::new(0),
            }
        }
    }

    #[async_trait]
    impl RepoSource for FakeRepo {
        async fn list_files(&self, _repo: &RepositoryRef, extension: &str) -> Result<Vec<FileEntry>, FetchError> {
            match &self.listing {
                Ok(paths) => Ok(paths
                    .iter()
                    .filter(|p| p.ends_with(extension))
                    .map(|p| FileEntry { path: p.to_string() })
                    .collect()),
                Err(status) => Err(FetchError::Remote {
                    status: *status,
                    url: "https://api.github.com/repos/o/n/git/trees/main?recursive=1".to_string(),
                }),
            }
        }

        async fn fetch_content(&self, _repo: &RepositoryRef, path: &str) -> Option<String> {
            self.fetches.fetch_add(1, Ordering::SeqCst);
            self.contents.get(path).map(|c| c.to_string())
        }
    }

    // Counts how often it was called, so tests can prove it never was
    #[derive(Default)]
    struct CountingSink {
        calls: usize,
        text: String,
    }

    impl OutputSink for CountingSink {
        fn emit(&mut self, text: &str) -> Result<()> {
            self.calls += 1;
            self.text.push_str(text);
            Ok(())
        }
    }

    struct BrokenSink;

    impl OutputSink for BrokenSink {
        fn emit(&mut self, _text: &str) -> Result<()> {
            anyhow::bail!("no clipboard")
        }
    }

    fn repo() -> RepositoryRef {
        RepositoryRef::new("o", "n")
    }

    #[tokio::test]
    async fn test_emits_matching_files_in_order() {
        let source = FakeRepo::new(
            vec!["a.py", "b.java", "c/d.py"],
            &[("a.py", "A"), ("b.java", "B"), ("c/d.py", "D")],
        );
        let mut aggregator = Aggregator::new(source, CountingSink::default());

        let outcome = aggregator.run(&repo(), ".py").await.unwrap();

        assert!(matches!(outcome, RunOutcome::Emitted { files: 2 }));
        let sink = aggregator.into_sink();
        assert_eq!(sink.calls, 1);
        assert_eq!(
            sink.text,
            join_blocks(&[render_block("a.py", "A"), render_block("c/d.py", "D")])
        );
    }

    #[tokio::test]
    async fn test_no_matching_files_never_touches_sink() {
        let source = FakeRepo::new(vec!["Main.java", "README.md"], &[]);
        let mut aggregator = Aggregator::new(source, CountingSink::default());

        let outcome = aggregator.run(&repo(), ".cs").await.unwrap();

        assert!(matches!(outcome, RunOutcome::NoFiles));
        assert_eq!(aggregator.into_sink().calls, 0);
    }

    #[tokio::test]
    async fn test_failed_file_is_skipped() {
        // b.py has no content, so its fetch "fails"
        let source = FakeRepo::new(vec!["a.py", "b.py", "c.py"], &[("a.py", "A"), ("c.py", "C")]);
        let mut aggregator = Aggregator::new(source, String::new());

        let outcome = aggregator.run(&repo(), ".py").await.unwrap();

        assert!(matches!(outcome, RunOutcome::Emitted { files: 2 }));
        let text = aggregator.into_sink();
        assert!(!text.contains("# b.py"));
        assert!(text.find("# a.py").unwrap() < text.find("# c.py").unwrap());
    }

    #[tokio::test]
    async fn test_every_fetch_failing_is_no_files() {
        let source = FakeRepo::new(vec!["a.py", "b.py"], &[]);
        let mut aggregator = Aggregator::new(source, CountingSink::default());

        let outcome = aggregator.run(&repo(), ".py").await.unwrap();

        assert!(matches!(outcome, RunOutcome::NoFiles));
        assert_eq!(aggregator.source.fetches.load(Ordering::SeqCst), 2);
        assert_eq!(aggregator.into_sink().calls, 0);
    }

    #[tokio::test]
    async fn test_listing_failure_produces_no_output() {
        let source = FakeRepo::failing(StatusCode::NOT_FOUND);
        let mut aggregator = Aggregator::new(source, CountingSink::default());

        let outcome = aggregator.run(&repo(), ".py").await.unwrap();

        match outcome {
            RunOutcome::ListingFailed(FetchError::Remote { status, .. }) => {
                assert_eq!(status, StatusCode::NOT_FOUND);
            }
            other => panic!("expected ListingFailed, got {:?}", other),
        }
        assert_eq!(aggregator.source.fetches.load(Ordering::SeqCst), 0);
        assert_eq!(aggregator.into_sink().calls, 0);
    }

    #[tokio::test]
    async fn test_sink_failure_is_an_error() {
        let source = FakeRepo::new(vec!["a.py"], &[("a.py", "A")]);
        let mut aggregator = Aggregator::new(source, BrokenSink);

        let result = aggregator.run(&repo(), ".py").await;

        assert!(result.is_err());
    }
}
