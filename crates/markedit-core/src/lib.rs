#![warn(missing_docs)]
//! `markedit-core` - Headless document annotation and paragraph folding core.
//!
//! # Overview
//!
//! `markedit-core` is the state/model layer of a lightweight markup editor engine.
//! It knows nothing about rendering, input devices, or persistence; it deals in
//! document text and produces either *span covers* (via `markedit-highlight`) or
//! *rewritten text* (via [`ParagraphFoldingManager`]).
//!
//! # Core pieces
//!
//! - [`Category`] - closed set of lexical classes shared by all grammars
//! - [`Span`] - half-open char-offset range tagged with a [`Category`]
//! - [`LineIndex`] - Rope-based line access over a document snapshot
//! - [`ParagraphFoldingManager`] - reversible structural folding with verbatim stash
//!
//! # Quick Start
//!
//! ```rust
//! use markedit_core::ParagraphFoldingManager;
//!
//! let mut folding = ParagraphFoldingManager::new();
//! let text = "# Title\nbody one\nbody two";
//!
//! let folded = folding.fold(0, text);
//! assert!(folding.is_folded(0));
//! assert_eq!(folded, format!("# Title{}", markedit_core::FOLD_MARKER));
//!
//! let restored = folding.expand(0, &folded);
//! assert_eq!(restored, text);
//! ```
//!
//! # Offsets
//!
//! All public span offsets are **character offsets** (Unicode code points), never
//! bytes. Folding operates on physical lines split at `\n`; a `\r` before the
//! terminator is treated as line content, so CRLF documents round-trip unchanged.

pub mod category;
pub mod folding;
pub mod line_index;
pub mod span;

pub use category::Category;
pub use folding::{FOLD_MARKER, ParagraphFoldingManager};
pub use line_index::LineIndex;
pub use span::Span;
