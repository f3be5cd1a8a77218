//! Paragraph folding with verbatim stash.
//!
//! [`ParagraphFoldingManager`] collapses and restores structurally-delimited
//! regions of a document. Folding rewrites the document text: the lines hidden
//! by a fold are removed from the visible text and stashed verbatim, and the
//! anchor line gains a fixed [`FOLD_MARKER`] suffix. Expanding reverses the
//! rewrite exactly, so `expand(a, fold(a, text)) == text` whenever the fold
//! actually hid something.
//!
//! The structural range of a fold is derived from the markup itself rather
//! than explicit delimiters:
//!
//! - a heading folds everything up to the next heading of the same or a
//!   shallower level;
//! - a list item folds the run of contiguous list items (blank lines inside
//!   the run are skipped, not hidden);
//! - any other line folds up to the next blank line, heading, list item, or
//!   quote line, hiding at least the one following line.
//!
//! Anchors are raw line indices into the text passed to each call. Folding one
//! anchor shifts the line numbers of everything below it, and previously
//! stored anchors are *not* renumbered; callers juggling several simultaneous
//! folds must account for that drift themselves.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;

use crate::line_index::LineIndex;

/// Literal suffix appended to the anchor line of a folded paragraph.
///
/// The token is reserved: document text that legitimately ends an anchor line
/// with it is indistinguishable from a fold marker on expand.
pub const FOLD_MARKER: &str = " [...]";

static BULLET_ITEM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*[-*+]\s+").expect("bullet list pattern compiles"));
static NUMBERED_ITEM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*\d+\.\s+").expect("numbered list pattern compiles"));

/// Inclusive physical-line range belonging to one structural paragraph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct ParagraphRange {
    start_line: usize,
    end_line: usize,
}

/// Per-document folding state: which anchor lines are folded, and the exact
/// text removed when each fold was made.
///
/// The manager is owned by exactly one document session. Call [`clear`] when
/// the document identity changes (new file, new blank document); stale anchors
/// would otherwise mis-align with the new content.
///
/// [`clear`]: ParagraphFoldingManager::clear
#[derive(Debug, Default)]
pub struct ParagraphFoldingManager {
    /// Anchor line -> stashed text. An anchor is folded iff it has an entry.
    stashes: BTreeMap<usize, String>,
}

impl ParagraphFoldingManager {
    /// Create a manager with no folds.
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold the structural paragraph anchored at `anchor_line`.
    ///
    /// Returns the rewritten document. The call is a no-op (returning the
    /// input unchanged) when the anchor is already folded, out of bounds, or
    /// the computed range hides nothing.
    pub fn fold(&mut self, anchor_line: usize, text: &str) -> String {
        if self.stashes.contains_key(&anchor_line) {
            return text.to_string();
        }

        let index = LineIndex::from_text(text);
        let line_count = index.line_count();
        if anchor_line >= line_count {
            return text.to_string();
        }

        let lines: Vec<String> = (0..line_count)
            .map(|i| index.line_text(i).unwrap_or_default())
            .collect();

        let range = paragraph_range(anchor_line, &lines);
        if range.end_line <= range.start_line {
            return text.to_string();
        }

        let stash = lines[range.start_line + 1..=range.end_line].join("\n");
        self.stashes.insert(anchor_line, stash);

        let mut result: Vec<String> = lines[..=range.start_line].to_vec();
        result[range.start_line].push_str(FOLD_MARKER);
        result.extend_from_slice(&lines[range.end_line + 1..]);
        result.join("\n")
    }

    /// Expand the fold anchored at `anchor_line`, reinserting the stashed
    /// lines immediately after the anchor.
    ///
    /// Returns the input unchanged when the anchor is not folded or is out of
    /// bounds for the given text.
    pub fn expand(&mut self, anchor_line: usize, text: &str) -> String {
        if !self.stashes.contains_key(&anchor_line) {
            return text.to_string();
        }

        let index = LineIndex::from_text(text);
        let line_count = index.line_count();
        if anchor_line >= line_count {
            return text.to_string();
        }

        let stash = self
            .stashes
            .remove(&anchor_line)
            .unwrap_or_default();

        let lines: Vec<String> = (0..line_count)
            .map(|i| index.line_text(i).unwrap_or_default())
            .collect();

        let anchor = &lines[anchor_line];
        let restored_anchor = anchor
            .strip_suffix(FOLD_MARKER)
            .unwrap_or(anchor)
            .to_string();

        let mut result: Vec<String> = lines[..anchor_line].to_vec();
        result.push(restored_anchor);
        result.push(stash);
        result.extend_from_slice(&lines[anchor_line + 1..]);
        result.join("\n")
    }

    /// Whether the paragraph at `anchor_line` is currently folded.
    pub fn is_folded(&self, anchor_line: usize) -> bool {
        self.stashes.contains_key(&anchor_line)
    }

    /// All currently-folded anchor lines, in ascending order.
    pub fn folded_anchors(&self) -> Vec<usize> {
        self.stashes.keys().copied().collect()
    }

    /// The verbatim text stashed for `anchor_line`, if it is folded.
    pub fn stashed_text(&self, anchor_line: usize) -> Option<&str> {
        self.stashes.get(&anchor_line).map(|s| s.as_str())
    }

    /// Drop all folding state. Must be called when the document identity
    /// changes; anchors are line indices into a specific text.
    pub fn clear(&mut self) {
        self.stashes.clear();
    }
}

/// Compute the inclusive line range of the structural paragraph anchored at
/// `start_line`.
fn paragraph_range(start_line: usize, lines: &[String]) -> ParagraphRange {
    let mut range = ParagraphRange {
        start_line,
        end_line: start_line,
    };

    if start_line >= lines.len() {
        return range;
    }

    let anchor = lines[start_line].trim();

    if anchor.starts_with('#') {
        // Heading: extend until the next heading of the same or a shallower level.
        let level = heading_level(anchor);
        for (i, line) in lines.iter().enumerate().skip(start_line + 1) {
            let text = line.trim();
            if text.starts_with('#') && heading_level(text) <= level {
                break;
            }
            range.end_line = i;
        }
    } else if is_list_item(anchor) {
        // List run: blank lines inside the run neither terminate nor extend it.
        for (i, line) in lines.iter().enumerate().skip(start_line + 1) {
            let text = line.trim();
            if !is_list_item(text) && !text.is_empty() {
                break;
            }
            if !text.is_empty() {
                range.end_line = i;
            }
        }
    } else {
        // Generic paragraph: stop at any structural boundary.
        for (i, line) in lines.iter().enumerate().skip(start_line + 1) {
            let text = line.trim();
            if text.is_empty()
                || text.starts_with('#')
                || is_list_item(text)
                || text.starts_with('>')
            {
                break;
            }
            range.end_line = i;
        }
        // A non-structural line always hides at least the line after it.
        if range.end_line == range.start_line {
            range.end_line = (range.start_line + 1).min(lines.len() - 1);
        }
    }

    range
}

/// Count of leading `#` characters on an already-trimmed line.
fn heading_level(text: &str) -> usize {
    text.chars().take_while(|&c| c == '#').count()
}

/// Whether an already-trimmed line is a bulleted or numbered list item.
fn is_list_item(text: &str) -> bool {
    BULLET_ITEM.is_match(text) || NUMBERED_ITEM.is_match(text)
}
