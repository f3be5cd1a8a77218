//! The closed grammar registry.

use crate::error::HighlightError;
use crate::grammars;
use crate::pattern::PatternSet;

/// Identifier for one of the supported grammars.
///
/// The set is closed and known at build time; callers select a value from
/// this enum, so there is no "unknown grammar" runtime case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Language {
    /// The lightweight markup dialect.
    Markdown,
    /// Java.
    Java,
    /// Go.
    Go,
    /// C and C++.
    Cpp,
    /// Haskell.
    Haskell,
    /// Plain text: the identity grammar, one default span per document.
    PlainText,
}

impl Language {
    /// Human-readable name.
    pub fn name(&self) -> &'static str {
        match self {
            Language::Markdown => "Markdown",
            Language::Java => "Java",
            Language::Go => "Go",
            Language::Cpp => "C/C++",
            Language::Haskell => "Haskell",
            Language::PlainText => "Plain text",
        }
    }

    /// Detect a language from a (lowercased) file extension.
    pub fn from_extension(ext: &str) -> Option<Language> {
        match ext.to_ascii_lowercase().as_str() {
            "md" | "markdown" => Some(Language::Markdown),
            "java" => Some(Language::Java),
            "go" => Some(Language::Go),
            "c" | "h" | "cc" | "cpp" | "cxx" | "hpp" => Some(Language::Cpp),
            "hs" | "lhs" => Some(Language::Haskell),
            "txt" => Some(Language::PlainText),
            _ => None,
        }
    }
}

/// Compiled pattern sets for every supported grammar.
///
/// Construction compiles all sets up front so that pattern mistakes surface
/// at startup, not mid-annotation.
#[derive(Debug, Clone)]
pub struct SyntaxRegistry {
    markdown: PatternSet,
    java: PatternSet,
    go: PatternSet,
    cpp: PatternSet,
    haskell: PatternSet,
    plain_text: PatternSet,
}

impl SyntaxRegistry {
    /// Compile every built-in grammar.
    pub fn new() -> Result<Self, HighlightError> {
        Ok(Self {
            markdown: grammars::markdown()?,
            java: grammars::java()?,
            go: grammars::go()?,
            cpp: grammars::cpp()?,
            haskell: grammars::haskell()?,
            plain_text: grammars::plain_text(),
        })
    }

    /// The pattern set for a grammar.
    pub fn pattern_set(&self, language: Language) -> &PatternSet {
        match language {
            Language::Markdown => &self.markdown,
            Language::Java => &self.java,
            Language::Go => &self.go,
            Language::Cpp => &self.cpp,
            Language::Haskell => &self.haskell,
            Language::PlainText => &self.plain_text,
        }
    }
}
