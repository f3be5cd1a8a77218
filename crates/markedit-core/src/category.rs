//! Lexical categories shared by all grammars.

/// A lexical classification tag driving style lookup.
///
/// The set is closed: every grammar assigns categories from this enum, and the
/// theme layer maps each category to a concrete style. Grammars use disjoint
/// subsets (markup categories for the markup grammar, code categories for the
/// programming grammars); [`Category::Default`] is shared by all of them for
/// unmatched text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// Level-1 heading (`# ...`).
    Heading1,
    /// Level-2 heading (`## ...`).
    Heading2,
    /// Level-3 heading (`### ...`).
    Heading3,
    /// Level-4..6 heading (`#### ...` and deeper).
    Heading4,
    /// Bold emphasis (`**...**`).
    Bold,
    /// Italic emphasis (`*...*`).
    Italic,
    /// Inline code (`` `...` ``).
    InlineCode,
    /// Fenced code block (```` ```...``` ````), possibly spanning lines.
    CodeBlock,
    /// Quoted line (`> ...`).
    Quote,
    /// Link (`[text](url)`).
    Link,
    /// Image (`![alt](url)`).
    Image,
    /// Bulleted list item (`-`, `*`, or `+`).
    List,
    /// Numbered list item (`1.`).
    NumberedList,
    /// Strikethrough (`~~...~~`).
    Strikethrough,
    /// Horizontal rule (`---` and friends).
    HorizontalRule,
    /// Language keyword.
    Keyword,
    /// String or character literal.
    String,
    /// Line or block comment, possibly spanning lines.
    Comment,
    /// Numeric literal.
    Number,
    /// Preprocessor directive (`#include`, `#define`).
    Preprocessor,
    /// Operator or punctuation.
    Operator,
    /// Plain text with no special classification.
    Default,
}

impl Category {
    /// Human-readable name, for diagnostics and error messages.
    pub fn name(&self) -> &'static str {
        match self {
            Category::Heading1 => "heading-1",
            Category::Heading2 => "heading-2",
            Category::Heading3 => "heading-3",
            Category::Heading4 => "heading-4",
            Category::Bold => "bold",
            Category::Italic => "italic",
            Category::InlineCode => "inline-code",
            Category::CodeBlock => "code-block",
            Category::Quote => "quote",
            Category::Link => "link",
            Category::Image => "image",
            Category::List => "list",
            Category::NumberedList => "numbered-list",
            Category::Strikethrough => "strikethrough",
            Category::HorizontalRule => "horizontal-rule",
            Category::Keyword => "keyword",
            Category::String => "string",
            Category::Comment => "comment",
            Category::Number => "number",
            Category::Preprocessor => "preprocessor",
            Category::Operator => "operator",
            Category::Default => "default",
        }
    }
}

impl Default for Category {
    fn default() -> Self {
        Category::Default
    }
}
