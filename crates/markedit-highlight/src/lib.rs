#![warn(missing_docs)]
//! `markedit-highlight` - Pattern-driven span annotation for `markedit`.
//!
//! This crate turns document text into an ordered, non-overlapping,
//! exhaustive cover of styled spans for a closed set of grammars: the
//! lightweight markup dialect plus Java, Go, C/C++, Haskell, and a plain-text
//! identity grammar.
//!
//! The pipeline is: [`SyntaxRegistry`] resolves a [`Language`] to its
//! [`PatternSet`]; [`annotate`] produces the [`Span`] cover; [`resolve`]
//! turns each category into a [`StyleDescriptor`] under a light or dark
//! [`Palette`]. [`highlight_document`] composes the three.
//!
//! ```rust
//! use markedit_highlight::{highlight_document, Language, Palette, SyntaxRegistry};
//!
//! let registry = SyntaxRegistry::new().expect("built-in grammars compile");
//! let styled = highlight_document("# Title", Language::Markdown, &Palette::LIGHT, &registry);
//!
//! assert_eq!(styled.len(), 1);
//! assert_eq!(styled[0].span.start, 0);
//! assert_eq!(styled[0].span.end, 7);
//! ```
//!
//! Everything here is a pure computation over the input string: no state
//! outlives a call, and annotation never fails (malformed input degrades to
//! default-category spans).

mod annotate;
mod error;
mod pattern;
mod registry;
mod theme;

pub mod grammars;

pub use annotate::annotate;
pub use error::HighlightError;
pub use pattern::{Pattern, PatternSet};
pub use registry::{Language, SyntaxRegistry};
pub use theme::{Palette, Rgb, StyleDescriptor, ThemeManager, resolve};

use markedit_core::Span;

/// A span paired with its resolved style, ready for a rendering layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StyledSpan {
    /// The categorized character range.
    pub span: Span,
    /// The concrete style for the range.
    pub style: StyleDescriptor,
}

/// Annotate `text` under `language` and resolve every span against `palette`.
///
/// The returned spans are disjoint, ordered, and exhaustively cover the text;
/// the consuming renderer needs no further normalization.
pub fn highlight_document(
    text: &str,
    language: Language,
    palette: &Palette,
    registry: &SyntaxRegistry,
) -> Vec<StyledSpan> {
    annotate(text, registry.pattern_set(language))
        .into_iter()
        .map(|span| StyledSpan {
            span,
            style: resolve(span.category, palette),
        })
        .collect()
}
