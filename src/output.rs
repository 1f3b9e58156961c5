// src/output.rs
// =============================================================================
// Where the finished text goes.
//
// - ClipboardSink: the system clipboard (the normal case)
// - StdoutSink: prints it instead, for --stdout or headless machines
//
// Both implement OutputSink so the aggregator doesn't care which one it has.
// =============================================================================

use std::io::{self, Write};

use anyhow::{Context, Result};
use arboard::Clipboard;

pub trait OutputSink {
    fn emit(&mut self, text: &str) -> Result<()>;
}

pub struct ClipboardSink;

impl ClipboardSink {
    // On Linux the text is handed to the clipboard manager when the
    // Clipboard is dropped; without one it disappears when we exit.
    // There's no portable way to tell which case we're in, so we say so.
    pub fn persistence_hint() -> Option<&'static str> {
        if cfg!(target_os = "linux") {
            Some(
                "Note: on Linux the copied text is kept by your clipboard manager. \
                 If nothing pastes, rerun with --stdout and pipe the output instead.",
            )
        } else {
            None
        }
    }
}

impl OutputSink for ClipboardSink {
    fn emit(&mut self, text: &str) -> Result<()> {
        let mut clipboard = Clipboard::new().context("Failed to access system clipboard")?;
        clipboard
            .set_text(text)
            .context("Failed to copy text to clipboard")?;
        Ok(())
    }
}

pub struct StdoutSink;

impl OutputSink for StdoutSink {
    fn emit(&mut self, text: &str) -> Result<()> {
        let mut stdout = io::stdout().lock();
        stdout
            .write_all(text.as_bytes())
            .and_then(|_| stdout.flush())
            .context("Failed to write to stdout")?;
        Ok(())
    }
}

// main.rs picks the sink at runtime (--stdout), so it holds a Box<dyn OutputSink>
impl<T: OutputSink + ?Sized> OutputSink for Box<T> {
    fn emit(&mut self, text: &str) -> Result<()> {
        (**self).emit(text)
    }
}

// Lets tests collect the output in a plain String
#[cfg(test)]
impl OutputSink for String {
    fn emit(&mut self, text: &str) -> Result<()> {
        self.push_str(text);
        Ok(())
    }
}
