//! Report metadata: the time group, remarks marker, station status words,
//! runway designators, and the station-identifier rule.

use std::sync::Arc;

use crate::api::AirportLookup;
use crate::{DisplayHint, Icon, Rule, Tone};

fn rule_time_group() -> Rule {
    rule! {
        category: "time",
        matcher: r"\d{6}Z",
        hint: DisplayHint::with(Icon::Clock, Tone::Purple),
        example: "121651Z",
        decode: |m| {
            let day = &m[0..2];
            let hour = &m[2..4];
            let min = &m[4..6];
            Some(format!("Time: Day {day}, {hour}:{min} UTC (Zulu time)"))
        },
    }
}

fn rule_remarks() -> Rule {
    rule! {
        category: "remarks",
        matcher: r"RMK",
        hint: DisplayHint::with(Icon::NotebookPen, Tone::Gray),
        example: "RMK",
        text: "Remarks section begins",
    }
}

fn rule_maintenance() -> Rule {
    rule! {
        category: "maintenance",
        matcher: r"\$$",
        hint: DisplayHint::plain(Tone::Slate),
        example: "$",
        text: "Automated station requires maintenance",
    }
}

fn rule_auto() -> Rule {
    rule! {
        category: "auto",
        matcher: r"\bAUTO\b",
        hint: DisplayHint::plain(Tone::Rose),
        example: "AUTO",
        text: "Fully automated report",
    }
}

fn rule_no_change() -> Rule {
    rule! {
        category: "no-change",
        matcher: r"\bNOSIG\b",
        hint: DisplayHint::plain(Tone::Blue),
        example: "NOSIG",
        text: "No significant change",
    }
}

fn rule_correction() -> Rule {
    rule! {
        category: "correction",
        matcher: r"\bCOR\b",
        hint: DisplayHint::with(Icon::CircleAlert, Tone::Amber),
        example: "COR",
        text: "Correction to a previously disseminated observation",
    }
}

fn rule_last() -> Rule {
    rule! {
        category: "last",
        matcher: r"\bLAST\b",
        hint: DisplayHint::with(Icon::CircleAlert, Tone::Orange),
        example: "LAST",
        text: "Last observation before a break in coverage",
    }
}

fn rule_runway() -> Rule {
    rule! {
        category: "runway",
        matcher: r"\bRWY\d{2}[LCR]?\b",
        hint: DisplayHint::with(Icon::PlaneLanding, Tone::Amber),
        example: "RWY04R",
        decode: |m| {
            let number = &m[3..5];
            let side = match m.as_bytes().get(5) {
                Some(b'L') => " Left",
                Some(b'C') => " Center",
                Some(b'R') => " Right",
                _ => "",
            };
            Some(format!("Runway {number}{side}"))
        },
    }
}

pub(super) fn rules() -> Vec<Rule> {
    vec![
        rule_time_group(),
        rule_remarks(),
        rule_maintenance(),
        rule_auto(),
        rule_no_change(),
        rule_correction(),
        rule_last(),
        rule_runway(),
    ]
}

/// The station-identifier rule. Least specific matcher in the library, so it
/// is appended after every other rule.
///
/// With a lookup capability the rule runs strict: a four-letter token that is
/// not a known ICAO code yields the absence marker and stays undecoded.
/// Without one it degrades to generic identifier wording.
pub(crate) fn station(lookup: Option<Arc<dyn AirportLookup>>) -> Rule {
    rule! {
        category: "station",
        matcher: r"^[A-Z]{4}$",
        hint: DisplayHint::with(Icon::Plane, Tone::Blue),
        example: "KBOS",
        decode: |m| match &lookup {
            Some(directory) => directory
                .get(m)
                .map(|airport| format!("Airport: {} ({m}) - {}, {}", airport.name, airport.city, airport.country)),
            None => Some(format!("Airport: {m} (ICAO identifier)")),
        },
    }
}
