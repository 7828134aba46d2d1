//! Report segmentation.
//!
//! Naive whitespace splitting would break multi-word grammar elements such as
//! `PK WND 28015/25` or `CIG 030 N` into fragments no rule can recognize.
//! Segmentation therefore runs in two passes: first every known multi-word
//! pattern reserves its span in the raw text (most-specific pattern first, so
//! `CIG 030 N` is claimed before `CIG 030` can take a bite out of it), then
//! the text splits on whitespace with reserved spans carried through whole.

use crate::api::Token;
use regex::Regex;

/// Multi-word grammar patterns, most specific first. Spans claimed by an
/// earlier pattern are off limits to later ones, which is what keeps
/// `CIG \d{3}` from shadowing `CIG \d{3} <dir>` on the same text.
fn group_patterns() -> [&'static Regex; 6] {
    [
        regex!(r"\bCIG \d{3} (?:NE|NW|SE|SW|N|E|S|W)\b"),
        regex!(r"\bCIG \d{3}\b"),
        regex!(r"\bPK WND \d{5}/\d{2,4}\b"),
        regex!(r"\bPK WND\b"),
        regex!(r"\bWSHFT \d{4}\b"),
        regex!(r"\bMOV LTL\b"),
    ]
}

#[derive(Debug, Clone, Copy)]
struct Span {
    start: usize,
    end: usize,
}

/// Split `raw` into ordered tokens, keeping known multi-word grammar elements
/// intact as single tokens. Pure: the same input always yields the same
/// token list, and empty or all-whitespace input yields an empty list.
pub(crate) fn segment(raw: &str) -> Vec<Token> {
    let reserved = reserve_spans(raw);

    let bytes = raw.as_bytes();
    let mut tokens = Vec::new();
    let mut i = 0;

    while i < bytes.len() {
        if bytes[i].is_ascii_whitespace() {
            i += 1;
            continue;
        }

        if let Some(span) = reserved.iter().find(|s| s.start == i) {
            tokens.push(Token { text: raw[span.start..span.end].to_string(), start: span.start, end: span.end });
            i = span.end;
            continue;
        }

        let start = i;
        while i < bytes.len() && !bytes[i].is_ascii_whitespace() {
            i += 1;
        }
        tokens.push(Token { text: raw[start..i].to_string(), start, end: i });
    }

    tokens
}

/// Locate all multi-word group occurrences as non-overlapping, word-aligned
/// spans, sorted by start offset.
fn reserve_spans(raw: &str) -> Vec<Span> {
    let mut spans: Vec<Span> = Vec::new();

    for pattern in group_patterns() {
        for m in pattern.find_iter(raw) {
            let candidate = Span { start: m.start(), end: m.end() };
            if !word_aligned(raw, &candidate) {
                continue;
            }
            if spans.iter().any(|s| candidate.start < s.end && s.start < candidate.end) {
                continue;
            }
            spans.push(candidate);
        }
    }

    spans.sort_by_key(|s| s.start);
    spans
}

/// A span may only be reserved when it covers whole whitespace-delimited
/// words; a match starting or ending mid-word would corrupt its neighbors.
fn word_aligned(raw: &str, span: &Span) -> bool {
    let bytes = raw.as_bytes();
    let clean_start = span.start == 0 || bytes[span.start - 1].is_ascii_whitespace();
    let clean_end = span.end == bytes.len() || bytes[span.end].is_ascii_whitespace();
    clean_start && clean_end
}

#[cfg(test)]
mod tests {
    use super::segment;

    fn texts(raw: &str) -> Vec<String> {
        segment(raw).into_iter().map(|t| t.text).collect()
    }

    #[test]
    fn splits_plain_reports_on_whitespace() {
        assert_eq!(
            texts("KBOS 121651Z 24016G25KT 10SM FEW250 22/12 A3012"),
            vec!["KBOS", "121651Z", "24016G25KT", "10SM", "FEW250", "22/12", "A3012"],
        );
    }

    #[test]
    fn preserves_multi_word_groups() {
        assert_eq!(texts("RMK PK WND 28015/25 SLP132"), vec!["RMK", "PK WND 28015/25", "SLP132"]);
        assert_eq!(texts("RMK CIG 030 N"), vec!["RMK", "CIG 030 N"]);
        assert_eq!(texts("RMK WSHFT 2032 FROPA"), vec!["RMK", "WSHFT 2032", "FROPA"]);
        assert_eq!(texts("TS OHD MOV LTL"), vec!["TS", "OHD", "MOV LTL"]);
    }

    #[test]
    fn most_specific_group_wins() {
        // The bare-ceiling pattern must not carve "CIG 030" out of the
        // direction-bearing form.
        assert_eq!(texts("CIG 030 N CIG 005"), vec!["CIG 030 N", "CIG 005"]);
        assert_eq!(texts("PK WND 28015/25 PK WND"), vec!["PK WND 28015/25", "PK WND"]);
    }

    #[test]
    fn empty_and_whitespace_input() {
        assert!(segment("").is_empty());
        assert!(segment("   \t  ").is_empty());
    }

    #[test]
    fn offsets_index_into_the_raw_text() {
        let raw = "RMK CIG 030 N";
        for token in segment(raw) {
            assert_eq!(&raw[token.start..token.end], token.text);
        }
    }

    #[test]
    fn repeated_calls_are_identical() {
        let raw = "RMK PK WND 28015/25 WSHFT 2032 CIG 030 N MOV LTL";
        assert_eq!(segment(raw), segment(raw));
    }
}
