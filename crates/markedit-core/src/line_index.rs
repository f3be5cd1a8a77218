//! Rope-backed line access over a document snapshot.
//!
//! Provides the line-level view that the folding manager and the annotator
//! tests work against: line count, per-line text, and line-to-char-offset
//! conversion. All offsets are character offsets.

use ropey::Rope;

/// Logical line index over an immutable document snapshot.
///
/// Lines are split at `\n`; a `\r` preceding the terminator stays part of the
/// line text, so CRLF documents reassemble byte-for-byte.
pub struct LineIndex {
    rope: Rope,
}

impl LineIndex {
    /// Create an index over an empty document.
    pub fn new() -> Self {
        Self { rope: Rope::new() }
    }

    /// Build a line index from text.
    pub fn from_text(text: &str) -> Self {
        Self {
            rope: Rope::from_str(text),
        }
    }

    /// Total line count. An empty document has one (empty) line, and a
    /// trailing `\n` opens a final empty line, matching a plain `split('\n')`.
    pub fn line_count(&self) -> usize {
        self.rope.len_lines()
    }

    /// Total character count.
    pub fn char_count(&self) -> usize {
        self.rope.len_chars()
    }

    /// Total byte count.
    pub fn byte_count(&self) -> usize {
        self.rope.len_bytes()
    }

    /// Text of the given line without its trailing `\n`, or `None` when the
    /// line number is out of bounds.
    pub fn line_text(&self, line: usize) -> Option<String> {
        if line >= self.rope.len_lines() {
            return None;
        }

        let mut text = self.rope.line(line).to_string();
        if text.ends_with('\n') {
            text.pop();
        }
        Some(text)
    }

    /// Character offset of the first character of the given line, clamped to
    /// the end of the document for out-of-bounds line numbers.
    pub fn line_to_char_offset(&self, line: usize) -> usize {
        if line >= self.rope.len_lines() {
            return self.rope.len_chars();
        }
        self.rope.line_to_char(line)
    }

    /// Reassemble the complete document text.
    pub fn text(&self) -> String {
        self.rope.to_string()
    }
}

impl Default for LineIndex {
    fn default() -> Self {
        Self::new()
    }
}
