// src/prompt.rs
// =============================================================================
// The interactive questions we ask when a value wasn't given as a flag:
//
//   Enter Full Repository URL:
//   Enter your GitHub Personal Access Token or press 'Enter' to continue without:
//   Choose language: ... Select:
//
// Prompter works on any BufRead/Write pair. main.rs hands it stdin/stdout,
// the tests hand it byte slices and a Vec<u8>.
// =============================================================================

use std::io::{BufRead, Write};

use anyhow::{Context, Result};

use crate::language::Language;

pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn repository_url(&mut self) -> Result<String> {
        self.ask("Enter Full Repository URL: ")
    }

    // None when the user just presses Enter
    pub fn token(&mut self) -> Result<Option<String>> {
        let answer =
            self.ask("Enter your GitHub Personal Access Token or press 'Enter' to continue without: ")?;
        Ok((!answer.is_empty()).then_some(answer))
    }

    // Shows the language menu and returns the raw answer.
    // Validation happens in Language::from_choice.
    pub fn language_choice(&mut self) -> Result<String> {
        writeln!(self.output, "Choose language:")?;
        for lang in Language::ALL {
            writeln!(self.output, "{}. {}", lang.code(), lang)?;
        }
        self.ask("Select: ")
    }

    #[cfg(test)]
    pub fn into_output(self) -> W {
        self.output
    }

    /// A line of information that isn't a question
    pub fn notice(&mut self, message: &str) -> Result<()> {
        writeln!(self.output, "{}", message)?;
        Ok(())
    }

    // Prints the question, reads one line, trims it.
    // End of input counts as an empty answer.
    fn ask(&mut self, question: &str) -> Result<String> {
        write!(self.output, "{}", question)?;
        self.output.flush()?;

        let mut line = String::new();
        self.input
            .read_line(&mut line)
            .context("Failed to read from stdin")?;
        Ok(line.trim().to_string())
    }
}
