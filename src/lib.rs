extern crate self as plainmetar;

use regex::Regex;

#[macro_use]
mod macros;
mod api;
mod engine;
mod reference;
mod rules;

pub use api::{
    AirportInfo, AirportLookup, AnnotatedToken, Decoded, RuleLibrary, Token, annotate, decode_token, explain, segment,
    translate,
};
pub use reference::AirportDirectory;

// --- Internal types ---------------------------------------------------------

/// A decode production: maps the matched substring to a plain-language
/// explanation, or `None` (the absence marker) when a syntactic match should
/// not be treated as decoded.
pub(crate) type Decode = Box<dyn Fn(&str) -> Option<String> + Send + Sync>;

/// A decoding rule: a bounded `matcher` over a token string, a stable
/// `category` naming the grammar element, presentation metadata, and the
/// `decode` production.
///
/// Library order is semantically significant: dispatch takes the first rule
/// whose matcher hits, so rules must be registered most-specific-first.
/// `example` is a literal token for which this rule must be the first match;
/// the coverage test in `rules/tests.rs` walks these.
pub(crate) struct Rule {
    pub category: &'static str,
    pub matcher: &'static Regex,
    pub hint: DisplayHint,
    pub example: &'static str,
    pub decode: Decode,
}

impl std::fmt::Debug for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Rule")
            .field("category", &self.category)
            .field("matcher", &self.matcher.as_str())
            .field("hint", &self.hint)
            .field("decode", &"<function>")
            .finish()
    }
}

/// Presentation metadata attached to a rule. Opaque to the decoding
/// algorithm; passed through unchanged for the consumer to render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayHint {
    pub icon: Option<Icon>,
    pub tone: Tone,
}

impl DisplayHint {
    pub(crate) const fn with(icon: Icon, tone: Tone) -> Self {
        DisplayHint { icon: Some(icon), tone }
    }

    pub(crate) const fn plain(tone: Tone) -> Self {
        DisplayHint { icon: None, tone }
    }
}

/// Icon identifiers, one per pictogram the interactive surface knows how to
/// draw next to a highlighted token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Icon {
    Bubbles,
    CircleAlert,
    CircleGauge,
    Clock,
    Cloud,
    CloudAlert,
    CloudHail,
    CloudRainWind,
    CloudSnow,
    Compass,
    Droplet,
    Eye,
    Gauge,
    NotebookPen,
    Plane,
    PlaneLanding,
    Snowflake,
    Thermometer,
    Tornado,
    Waves,
    Wind,
    Zap,
}

/// Color family used to tint a highlighted token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tone {
    Amber,
    Blue,
    Cyan,
    Emerald,
    Fuchsia,
    Gray,
    Green,
    Indigo,
    Lime,
    Orange,
    Pink,
    Purple,
    Red,
    Rose,
    Sky,
    Slate,
    Stone,
    Teal,
    Violet,
    Yellow,
}
