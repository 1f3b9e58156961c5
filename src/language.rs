// src/language.rs
// =============================================================================
// The languages the user can pick from, and the file extension each one
// selects.
//
//   1 -> Python (.py)
//   2 -> Java   (.java)
//   3 -> C#     (.cs)
// =============================================================================

use std::fmt;

use crate::error::FetchError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    Python,
    Java,
    CSharp,
}

impl Language {
    /// In menu order
    pub const ALL: [Language; 3] = [Language::Python, Language::Java, Language::CSharp];

    /// The number the user types to pick this language
    pub fn code(self) -> &'static str {
        match self {
            Language::Python => "1",
            Language::Java => "2",
            Language::CSharp => "3",
        }
    }

    pub fn extension(self) -> &'static str {
        match self {
            Language::Python => ".py",
            Language::Java => ".java",
            Language::CSharp => ".cs",
        }
    }

    // Maps a menu answer ("1", " 2 ") to a language.
    // Anything that isn't one of the listed codes is invalid input.
    pub fn from_choice(choice: &str) -> Result<Self, FetchError> {
        let choice = choice.trim();
        Self::ALL
            .into_iter()
            .find(|lang| lang.code() == choice)
            .ok_or_else(|| FetchError::invalid_input(format!("Unknown language choice: {:?}", choice)))
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Language::Python => "Python",
            Language::Java => "Java",
            Language::CSharp => "C#",
        };
        f.write_str(label)
    }
}
