use markedit_highlight::{Language, Palette, SyntaxRegistry, highlight_document};

fn main() {
    let registry = SyntaxRegistry::new().expect("built-in grammars compile");

    let text = "\
# markedit

Some prose with **bold**, `inline code`, and a [link](https://example.com).

```
fn main() {}
```

- first
- second";

    let styled = highlight_document(text, Language::Markdown, &Palette::LIGHT, &registry);

    for item in &styled {
        let chars: String = text
            .chars()
            .skip(item.span.start)
            .take(item.span.len())
            .collect();
        println!(
            "{:>3}..{:<3} {:<15} {:?}",
            item.span.start,
            item.span.end,
            item.span.category.name(),
            chars
        );
    }
    println!("total spans: {}", styled.len());
}
