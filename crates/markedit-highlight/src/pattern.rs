//! Compiled pattern rules.

use markedit_core::Category;
use regex::{Regex, RegexBuilder};

use crate::error::HighlightError;

/// One compiled highlighting rule: a regex and the category its matches get.
#[derive(Debug, Clone)]
pub struct Pattern {
    category: Category,
    regex: Regex,
}

impl Pattern {
    fn compile(category: Category, pattern: &str) -> Result<Self, HighlightError> {
        // Multi-line anchors everywhere: `^`/`$` bind to line boundaries for
        // the line-scoped rules, while `[\s\S]` classes keep multi-line
        // constructs (fenced code, block comments) crossing newlines.
        let regex = RegexBuilder::new(pattern)
            .multi_line(true)
            .build()
            .map_err(|err| HighlightError::RegexCompile {
                pattern: pattern.to_string(),
                message: err.to_string(),
            })?;

        Ok(Self { category, regex })
    }

    /// The category assigned to this rule's matches.
    pub fn category(&self) -> Category {
        self.category
    }

    /// The source pattern string.
    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }

    /// Earliest match at or after `start` (byte offsets). Anchors are
    /// evaluated against the full haystack, so `^` only matches at true line
    /// starts even when `start` points mid-line.
    pub(crate) fn find_at(&self, text: &str, start: usize) -> Option<(usize, usize)> {
        self.regex
            .find_at(text, start)
            .map(|m| (m.start(), m.end()))
    }
}

/// An ordered set of [`Pattern`]s defining one grammar's highlighting rules.
///
/// Declaration order is the tie-break when two rules match at the same
/// offset: the earlier-declared rule wins. Construction compiles every rule
/// and rejects duplicate categories up front.
#[derive(Debug, Clone, Default)]
pub struct PatternSet {
    patterns: Vec<Pattern>,
}

impl PatternSet {
    /// Compile an ordered `(category, pattern)` list into a set.
    pub fn new(rules: &[(Category, &str)]) -> Result<Self, HighlightError> {
        let mut patterns = Vec::with_capacity(rules.len());

        for &(category, pattern) in rules {
            if patterns.iter().any(|p: &Pattern| p.category == category) {
                return Err(HighlightError::DuplicateCategory(category.name()));
            }
            patterns.push(Pattern::compile(category, pattern)?);
        }

        Ok(Self { patterns })
    }

    /// The identity set: no rules, so annotation yields a single
    /// [`Category::Default`] span over the whole document.
    pub fn empty() -> Self {
        Self::default()
    }

    /// The compiled rules, in declaration order.
    pub fn patterns(&self) -> &[Pattern] {
        &self.patterns
    }

    /// Number of rules in the set.
    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    /// Returns `true` for the identity set.
    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }
}
