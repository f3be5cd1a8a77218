use markedit_core::{Category, LineIndex, Span};
use markedit_highlight::{
    Language, Palette, SyntaxRegistry, annotate, highlight_document,
};
use pretty_assertions::assert_eq;

const ALL_LANGUAGES: [Language; 6] = [
    Language::Markdown,
    Language::Java,
    Language::Go,
    Language::Cpp,
    Language::Haskell,
    Language::PlainText,
];

/// Assert the cover invariant: ordered, contiguous, exhaustive, no empty spans.
fn assert_cover(spans: &[Span], char_len: usize, context: &str) {
    if char_len == 0 {
        assert!(spans.is_empty(), "{context}: empty text must yield an empty cover");
        return;
    }

    assert_eq!(spans.first().map(|s| s.start), Some(0), "{context}: cover must start at 0");
    assert_eq!(
        spans.last().map(|s| s.end),
        Some(char_len),
        "{context}: cover must end at the text length"
    );
    for pair in spans.windows(2) {
        assert_eq!(
            pair[0].end, pair[1].start,
            "{context}: spans must be contiguous"
        );
        assert!(!pair[0].overlaps(&pair[1]), "{context}: spans must not overlap");
    }
    for span in spans {
        assert!(!span.is_empty(), "{context}: no empty spans in a cover");
    }
}

fn sample_texts() -> Vec<&'static str> {
    vec![
        "",
        "plain text only",
        "# Heading\n\nBody with **bold**, *italic*, `code`.\n\n- a\n- b\n\n> quote\n\n---",
        "```\nfn main() {}\n```\ntrailing",
        "public class Foo { // comment\n  int x = 42;\n  String s = \"hi\";\n}",
        "package main\n\nfunc main() {\n\t// greet\n\ts := `raw`\n}",
        "#include <vector>\n/* block\ncomment */\nint main() { return 0; }",
        "module Main where\nmain = print (1 + 2) -- io",
        "日本語のテキスト with mixed content 123",
        "unterminated **bold and `code with no close",
    ]
}

#[test]
fn every_grammar_covers_every_sample_exactly_once() {
    let registry = SyntaxRegistry::new().unwrap();

    for language in ALL_LANGUAGES {
        for text in sample_texts() {
            let spans = annotate(text, registry.pattern_set(language));
            let preview: String = text.chars().take(30).collect();
            let context = format!("{} / {preview:?}", language.name());
            assert_cover(&spans, text.chars().count(), &context);
        }
    }
}

#[test]
fn markdown_heading_covers_the_whole_line() {
    let registry = SyntaxRegistry::new().unwrap();
    let spans = annotate("# H1", registry.pattern_set(Language::Markdown));

    assert_eq!(spans, vec![Span::new(0, 4, Category::Heading1)]);
}

#[test]
fn plain_text_grammar_is_the_identity() {
    let registry = SyntaxRegistry::new().unwrap();
    let text = "# not a heading here\nint x = 1;";
    let spans = annotate(text, registry.pattern_set(Language::PlainText));

    assert_eq!(
        spans,
        vec![Span::new(0, text.chars().count(), Category::Default)]
    );
}

#[test]
fn grammars_disagree_on_categories_but_not_on_coverage() {
    let registry = SyntaxRegistry::new().unwrap();
    let text = "# include this\nfor x in y";

    let markdown = annotate(text, registry.pattern_set(Language::Markdown));
    let go = annotate(text, registry.pattern_set(Language::Go));

    let char_len = text.chars().count();
    assert_cover(&markdown, char_len, "markdown");
    assert_cover(&go, char_len, "go");

    // The markup grammar sees a heading at offset 0; Go sees plain text.
    assert_eq!(markdown[0].category, Category::Heading1);
    assert_eq!(go[0].category, Category::Default);
    // Go classifies the `for`; the markup grammar leaves it default.
    assert!(go.iter().any(|s| s.category == Category::Keyword));
    assert!(!markdown.iter().any(|s| s.category == Category::Keyword));
}

#[test]
fn line_anchored_spans_start_at_line_offsets() {
    let registry = SyntaxRegistry::new().unwrap();
    let text = "prose line\n## Section\n> quoted";
    let index = LineIndex::from_text(text);

    let spans = annotate(text, registry.pattern_set(Language::Markdown));

    let heading = spans
        .iter()
        .find(|s| s.category == Category::Heading2)
        .expect("heading span");
    assert_eq!(heading.start, index.line_to_char_offset(1));

    let quote = spans
        .iter()
        .find(|s| s.category == Category::Quote)
        .expect("quote span");
    assert_eq!(quote.start, index.line_to_char_offset(2));
    assert_eq!(quote.end, index.char_count());
}

#[test]
fn styled_output_tracks_palette_choice() {
    let registry = SyntaxRegistry::new().unwrap();
    let text = "# Title\nbody";

    let light = highlight_document(text, Language::Markdown, &Palette::LIGHT, &registry);
    let dark = highlight_document(text, Language::Markdown, &Palette::DARK, &registry);

    // Same cover either way.
    let light_spans: Vec<Span> = light.iter().map(|s| s.span).collect();
    let dark_spans: Vec<Span> = dark.iter().map(|s| s.span).collect();
    assert_eq!(light_spans, dark_spans);

    // Different colors for the heading.
    assert_eq!(light[0].span.category, Category::Heading1);
    assert_eq!(light[0].style.foreground, Palette::LIGHT.heading);
    assert_eq!(dark[0].style.foreground, Palette::DARK.heading);
    assert_ne!(light[0].style.foreground, dark[0].style.foreground);
}

#[test]
fn styled_output_covers_multibyte_text_in_char_offsets() {
    let registry = SyntaxRegistry::new().unwrap();
    let text = "## 見出し\n本文 `コード` 本文";

    let styled = highlight_document(text, Language::Markdown, &Palette::LIGHT, &registry);
    let spans: Vec<Span> = styled.iter().map(|s| s.span).collect();

    assert_cover(&spans, text.chars().count(), "multibyte markdown");
    assert_eq!(spans[0].category, Category::Heading2);
    assert!(spans.iter().any(|s| s.category == Category::InlineCode));
}
