//! The span annotator: text + pattern set -> exhaustive span cover.

use markedit_core::{Category, Span};

use crate::pattern::PatternSet;

/// Annotate `text` with the rules of `set`, producing an ordered,
/// non-overlapping sequence of [`Span`]s that covers the whole document
/// exactly once.
///
/// The scan is left to right: at each position the rule with the earliest
/// match wins, ties going to the earlier-declared rule. Text claimed by no
/// rule becomes [`Category::Default`] spans, so the cover is exhaustive for
/// any input; annotation never fails. Offsets are character offsets.
///
/// An empty document yields an empty cover.
pub fn annotate(text: &str, set: &PatternSet) -> Vec<Span> {
    let matches = collect_matches(text, set);
    into_cover(text, matches)
}

/// Accepted matches as byte ranges, in scan order.
fn collect_matches(text: &str, set: &PatternSet) -> Vec<(usize, usize, Category)> {
    let patterns = set.patterns();
    let mut accepted = Vec::new();

    // Cached earliest match per rule; refreshed only once the scan position
    // passes it, so each rule walks the document at most once.
    let mut next: Vec<Option<(usize, usize)>> =
        patterns.iter().map(|p| p.find_at(text, 0)).collect();

    let mut scan = 0usize;
    loop {
        let mut best: Option<(usize, usize, usize)> = None;
        for (idx, slot) in next.iter_mut().enumerate() {
            if let Some((start, _)) = *slot
                && start < scan
            {
                *slot = patterns[idx].find_at(text, scan);
            }
            let Some((start, end)) = *slot else {
                continue;
            };
            // Strict `<` keeps the earliest-declared rule on ties.
            if best.is_none_or(|(bs, _, _)| start < bs) {
                best = Some((start, end, idx));
            }
        }

        let Some((start, end, idx)) = best else {
            break;
        };

        if end == start {
            // Zero-width match: never emitted as a span, but the scan must
            // advance a character to stay live. The skipped character falls
            // into the surrounding default span.
            match text[start..].chars().next() {
                Some(c) => scan = start + c.len_utf8(),
                None => break,
            }
            continue;
        }

        accepted.push((start, end, patterns[idx].category()));
        scan = end;
    }

    accepted
}

/// Turn ordered byte-range matches into a contiguous char-offset cover,
/// filling gaps with [`Category::Default`]. Byte offsets are converted in a
/// single forward pass.
fn into_cover(text: &str, matches: Vec<(usize, usize, Category)>) -> Vec<Span> {
    let mut spans = Vec::with_capacity(matches.len() * 2 + 1);
    let mut byte_pos = 0usize;
    let mut char_pos = 0usize;

    let advance = |byte_pos: &mut usize, char_pos: &mut usize, to: usize| {
        *char_pos += text[*byte_pos..to].chars().count();
        *byte_pos = to;
    };

    for (start, end, category) in matches {
        if start > byte_pos {
            let gap_start = char_pos;
            advance(&mut byte_pos, &mut char_pos, start);
            spans.push(Span::new(gap_start, char_pos, Category::Default));
        }
        let match_start = char_pos;
        advance(&mut byte_pos, &mut char_pos, end);
        spans.push(Span::new(match_start, char_pos, category));
    }

    if byte_pos < text.len() {
        let tail_start = char_pos;
        advance(&mut byte_pos, &mut char_pos, text.len());
        spans.push(Span::new(tail_start, char_pos, Category::Default));
    }

    spans
}
