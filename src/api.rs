use std::collections::HashMap;
use std::sync::Arc;

use once_cell::sync::Lazy;

use crate::engine::{dispatch, segment as segmentation};
use crate::{DisplayHint, Rule, rules};

static DEFAULT_LIBRARY: Lazy<RuleLibrary> = Lazy::new(RuleLibrary::new);

/// One record of the airport reference dataset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AirportInfo {
    pub iata: String,
    pub icao: String,
    pub name: String,
    pub country: String,
    pub city: String,
    pub notes: String,
}

/// Identifier lookup capability consumed by the station rule.
///
/// Injected into [`RuleLibrary::with_lookup`]; the library never loads or
/// parses the backing table itself. When no lookup is supplied the station
/// rule degrades to generic identifier wording instead.
pub trait AirportLookup: Send + Sync {
    fn get(&self, icao: &str) -> Option<AirportInfo>;

    fn has(&self, icao: &str) -> bool {
        self.get(icao).is_some()
    }
}

impl AirportLookup for HashMap<String, AirportInfo> {
    fn get(&self, icao: &str) -> Option<AirportInfo> {
        HashMap::get(self, icao).cloned()
    }

    fn has(&self, icao: &str) -> bool {
        self.contains_key(icao)
    }
}

/// The ordered decoding-rule collection.
///
/// Order is part of the contract: dispatch walks the library front to back
/// and the first matching rule wins, so the library is one flat sequence,
/// never a dispatch hierarchy.
#[derive(Debug)]
pub struct RuleLibrary {
    rules: Vec<Rule>,
}

impl RuleLibrary {
    /// Build the library without an identifier lookup; the station rule
    /// explains any four-letter token generically.
    pub fn new() -> Self {
        RuleLibrary { rules: rules::get(None) }
    }

    /// Build the library with an identifier lookup; the station rule runs
    /// strict and leaves unrecognized four-letter tokens undecoded.
    pub fn with_lookup(lookup: Arc<dyn AirportLookup>) -> Self {
        RuleLibrary { rules: rules::get(Some(lookup)) }
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub(crate) fn rules(&self) -> &[Rule] {
        &self.rules
    }
}

impl Default for RuleLibrary {
    fn default() -> Self {
        RuleLibrary::new()
    }
}

/// One grammar-significant unit of a report. `start`/`end` are byte offsets
/// into the raw input; multi-word groups arrive as a single token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub text: String,
    pub start: usize,
    pub end: usize,
}

/// The decoded reading of one token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decoded {
    /// Stable identifier of the grammar element, e.g. `"wind"`.
    pub category: &'static str,
    /// Plain-language explanation of the token.
    pub explanation: String,
    /// Presentation metadata, passed through from the rule unchanged.
    pub hint: DisplayHint,
}

/// A token together with its decoding, when one exists. Recomputed per call;
/// never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnnotatedToken {
    pub token: Token,
    pub decoded: Option<Decoded>,
}

/// Split a raw report into ordered tokens, keeping known multi-word grammar
/// elements (`PK WND 28015/25`, `CIG 030 N`, ...) intact.
///
/// Pure and infallible: empty input yields an empty list.
///
/// # Example
/// ```
/// let tokens = plainmetar::segment("RMK PK WND 28015/25");
/// let texts: Vec<&str> = tokens.iter().map(|t| t.text.as_str()).collect();
/// assert_eq!(texts, ["RMK", "PK WND 28015/25"]);
/// ```
pub fn segment(raw: &str) -> Vec<Token> {
    segmentation::segment(raw)
}

/// Decode a single token against `library`, first match wins. `None` means
/// the token is undecoded and should be displayed as plain text.
///
/// # Example
/// ```
/// use plainmetar::{RuleLibrary, decode_token};
///
/// let library = RuleLibrary::new();
/// let decoded = decode_token("24016KT", &library).unwrap();
/// assert_eq!(decoded.category, "wind");
/// assert_eq!(decoded.explanation, "Wind: 240° at 16 knots");
/// ```
pub fn decode_token(token: &str, library: &RuleLibrary) -> Option<Decoded> {
    dispatch::decode_token(token, library.rules())
}

/// Segment `raw` and decode every token: the per-token view an interactive
/// surface renders with highlights and tooltips.
pub fn annotate(raw: &str, library: &RuleLibrary) -> Vec<AnnotatedToken> {
    segment(raw)
        .into_iter()
        .map(|token| {
            let decoded = decode_token(&token.text, library);
            AnnotatedToken { token, decoded }
        })
        .collect()
}

/// Produce the full plain-language narrative: per-token explanations (or the
/// literal token text when nothing matches) joined with `". "` and closed
/// with a period. Lossy and one-way; each token stands alone as one sentence
/// fragment.
///
/// # Example
/// ```
/// use plainmetar::{RuleLibrary, translate};
///
/// let library = RuleLibrary::new();
/// assert_eq!(translate("10SM", &library), "Visibility: 10 statute miles.");
/// ```
pub fn translate(raw: &str, library: &RuleLibrary) -> String {
    let parts: Vec<String> = segment(raw)
        .into_iter()
        .map(|token| match decode_token(&token.text, library) {
            Some(decoded) => decoded.explanation,
            None => token.text,
        })
        .collect();
    format!("{}.", parts.join(". "))
}

/// Translate `raw` with a process-wide default library (no airport lookup).
///
/// # Example
/// ```
/// assert_eq!(plainmetar::explain("BKN025"), "Broken clouds at 2,500 feet.");
/// ```
pub fn explain(raw: &str) -> String {
    translate(raw, &DEFAULT_LIBRARY)
}

#[cfg(test)]
mod tests {
    use super::*;

    const REPORT: &str = "KBOS 121651Z 24016G25KT 10SM FEW250 22/12 A3012 RMK AO2";

    fn boston_lookup() -> Arc<dyn AirportLookup> {
        let mut airports = HashMap::new();
        airports.insert(
            String::from("KBOS"),
            AirportInfo {
                iata: String::from("BOS"),
                icao: String::from("KBOS"),
                name: String::from("General Edward Lawrence Logan International Airport"),
                country: String::from("United States"),
                city: String::from("Boston"),
                notes: String::new(),
            },
        );
        Arc::new(airports)
    }

    #[test]
    fn translation_with_lookup_resolves_the_station() {
        let library = RuleLibrary::with_lookup(boston_lookup());
        let translation = translate(REPORT, &library);

        assert!(
            translation.starts_with(
                "Airport: General Edward Lawrence Logan International Airport (KBOS) - Boston, United States. "
            ),
            "unexpected opening: {translation}"
        );
        assert!(
            translation.ends_with("Automated station with precipitation discriminator."),
            "unexpected ending: {translation}"
        );
    }

    #[test]
    fn translation_without_lookup_degrades_and_drops_nothing() {
        let library = RuleLibrary::new();
        let translation = translate(REPORT, &library);

        assert_eq!(
            translation,
            "Airport: KBOS (ICAO identifier). \
             Time: Day 12, 16:51 UTC (Zulu time). \
             Wind: 240° at 16 knots, gusting to 25 knots. \
             Visibility: 10 statute miles. \
             Few clouds at 25,000 feet. \
             Temperature: 22°C, Dewpoint: 12°C. \
             Altimeter: 30.12 inHg. \
             Remarks section begins. \
             Automated station with precipitation discriminator."
        );
    }

    #[test]
    fn strict_mode_leaves_unknown_identifiers_undecoded() {
        let library = RuleLibrary::with_lookup(boston_lookup());

        assert!(decode_token("ZZZZ", &library).is_none());
        // The literal token still contributes to the narrative.
        assert_eq!(translate("ZZZZ 10SM", &library), "ZZZZ. Visibility: 10 statute miles.");
    }

    #[test]
    fn empty_input_translates_to_a_bare_period() {
        let library = RuleLibrary::new();
        assert_eq!(translate("", &library), ".");
        assert_eq!(translate("   ", &library), ".");
    }

    #[test]
    fn decode_is_pure() {
        let library = RuleLibrary::new();
        let first = decode_token("24016G25KT", &library);
        let second = decode_token("24016G25KT", &library);
        assert_eq!(first, second);
    }

    #[test]
    fn annotate_pairs_every_token_with_its_decoding() {
        let library = RuleLibrary::new();
        let annotated = annotate("10SM FROPA", &library);

        assert_eq!(annotated.len(), 2);
        assert_eq!(annotated[0].decoded.as_ref().unwrap().category, "visibility");
        assert!(annotated[1].decoded.is_none());
        assert_eq!(annotated[1].token.text, "FROPA");
    }
}
