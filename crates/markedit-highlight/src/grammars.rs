//! Built-in pattern sets, one per supported grammar.
//!
//! Rule order within each set is significant: it is the tie-break for
//! same-offset matches. The markup set leans on multi-line anchors; the
//! programming sets are plain token classifiers with `[\s\S]` classes for
//! block comments.

use markedit_core::Category;

use crate::error::HighlightError;
use crate::pattern::PatternSet;

/// The lightweight markup grammar: headings, emphasis, code, quotes, links,
/// lists, strikethrough, horizontal rules.
pub fn markdown() -> Result<PatternSet, HighlightError> {
    PatternSet::new(&[
        (Category::Heading1, r"^#\s+.*$"),
        (Category::Heading2, r"^#{2}\s+.*$"),
        (Category::Heading3, r"^#{3}\s+.*$"),
        (Category::Heading4, r"^#{4,6}\s+.*$"),
        (Category::Bold, r"\*\*[^*]+\*\*"),
        (Category::Italic, r"\*[^*]+\*"),
        (Category::InlineCode, r"`[^`]+`"),
        // The fence rule crosses newlines via [\s\S].
        (Category::CodeBlock, r"```[\s\S]*?```"),
        (Category::Quote, r"^>.*$"),
        (Category::Link, r"\[[^\]]*\]\([^)]*\)"),
        (Category::Image, r"!\[[^\]]*\]\([^)]*\)"),
        (Category::List, r"^\s*[-*+]\s+.*$"),
        (Category::NumberedList, r"^\s*\d+\.\s+.*$"),
        (Category::Strikethrough, r"~~[^~]+~~"),
        (Category::HorizontalRule, r"^[-*_]{3,}$"),
    ])
}

/// Java: keywords, strings, comments, numbers.
pub fn java() -> Result<PatternSet, HighlightError> {
    PatternSet::new(&[
        (
            Category::Keyword,
            r"\b(?:abstract|assert|boolean|break|byte|case|catch|char|class|const|continue|default|do|double|else|enum|extends|final|finally|float|for|goto|if|implements|import|instanceof|int|interface|long|native|new|package|private|protected|public|return|short|static|strictfp|super|switch|synchronized|this|throw|throws|transient|try|void|volatile|while)\b",
        ),
        (Category::String, r#""(?:[^"\\]|\\.)*""#),
        (Category::Comment, r"//[^\r\n]*|/\*[\s\S]*?\*/"),
        (Category::Number, r"\b\d+(?:\.\d+)?[fFdDlL]?\b"),
    ])
}

/// Go: keywords, strings (including raw backtick strings), comments, numbers.
pub fn go() -> Result<PatternSet, HighlightError> {
    PatternSet::new(&[
        (
            Category::Keyword,
            r"\b(?:break|case|chan|const|continue|default|defer|else|fallthrough|for|func|go|goto|if|import|interface|map|package|range|return|select|struct|switch|type|var)\b",
        ),
        (Category::String, r#""(?:[^"\\]|\\.)*"|`[^`]*`"#),
        (Category::Comment, r"//[^\r\n]*|/\*[\s\S]*?\*/"),
        (Category::Number, r"\b\d+(?:\.\d+)?\b"),
    ])
}

/// C/C++: keywords, string/char literals, comments, numbers, preprocessor
/// directives.
pub fn cpp() -> Result<PatternSet, HighlightError> {
    PatternSet::new(&[
        (
            Category::Keyword,
            r"\b(?:auto|break|case|char|const|continue|default|do|double|else|enum|extern|float|for|goto|if|inline|int|long|register|return|short|signed|sizeof|static|struct|switch|typedef|union|unsigned|void|volatile|while|class|namespace|template|typename|virtual|public|private|protected|using|try|catch|throw|new|delete|this|nullptr)\b",
        ),
        (Category::String, r#""(?:[^"\\]|\\.)*"|'(?:[^'\\]|\\.)*'"#),
        (Category::Comment, r"//[^\r\n]*|/\*[\s\S]*?\*/"),
        (Category::Number, r"\b\d+(?:\.\d+)?[fFlLuU]*\b"),
        (Category::Preprocessor, r"#[^\r\n]*"),
    ])
}

/// Haskell: keywords, strings, comments (`--` and `{- -}`), numbers,
/// operators.
pub fn haskell() -> Result<PatternSet, HighlightError> {
    PatternSet::new(&[
        (
            Category::Keyword,
            r"\b(?:case|class|data|default|deriving|do|else|foreign|if|import|in|infix|infixl|infixr|instance|let|module|newtype|of|then|type|where|as|qualified|hiding)\b",
        ),
        (Category::String, r#""(?:[^"\\]|\\.)*""#),
        (Category::Comment, r"--[^\r\n]*|\{-[\s\S]*?-\}"),
        (Category::Number, r"\b\d+(?:\.\d+)?\b"),
        (Category::Operator, r"[=><+\-*/&|!@#$%^&*()\[\]{}.,;:]"),
    ])
}

/// The plain-text identity grammar: no rules, one default span per document.
pub fn plain_text() -> PatternSet {
    PatternSet::empty()
}
