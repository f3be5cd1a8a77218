use thiserror::Error;

#[derive(Debug, Error)]
/// Errors produced while building pattern sets and the grammar registry.
///
/// These are configuration errors: they can only occur at construction time,
/// never during annotation, and callers are expected to fail fast on them.
pub enum HighlightError {
    #[error("regex compile error for pattern '{pattern}': {message}")]
    /// A pattern failed to compile.
    RegexCompile {
        /// The pattern string.
        pattern: String,
        /// The compiler error message.
        message: String,
    },

    #[error("duplicate category '{0}' in pattern set")]
    /// The same category was declared twice in one pattern set, making the
    /// declared tie-break order ambiguous.
    DuplicateCategory(&'static str),
}
