//! First-match-wins token resolution.
//!
//! A token is resolved by walking the rule library in its fixed priority
//! order. A rule applies when its matcher hits any bounded substring of the
//! token; the matchers carry their own anchors, so "substring" never means a
//! partial-word false positive. A rule that matches syntactically but
//! declines to decode (the absence marker) does not stop the walk — later,
//! less specific rules still get their chance.

use crate::Rule;
use crate::api::Decoded;

/// Resolve `token` against `rules`, returning the first decoded hit, or
/// `None` when no rule matches (the token then passes through literally).
pub(crate) fn decode_token(token: &str, rules: &[Rule]) -> Option<Decoded> {
    first_match(token, rules).map(|(_, decoded)| decoded)
}

/// Like [`decode_token`], but also reports which rule fired. The coverage
/// test uses the index to pin every rule to its example token.
pub(crate) fn first_match(token: &str, rules: &[Rule]) -> Option<(usize, Decoded)> {
    for (index, rule) in rules.iter().enumerate() {
        let Some(matched) = rule.matcher.find(token) else {
            continue;
        };
        if let Some(explanation) = (rule.decode)(matched.as_str()) {
            return Some((index, Decoded { category: rule.category, explanation, hint: rule.hint }));
        }
    }
    None
}
