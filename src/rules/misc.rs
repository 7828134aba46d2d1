//! Report-type markers, horizontal visibility, runway visual range, and the
//! connective words that appear in remarks.

use crate::{DisplayHint, Icon, Rule, Tone};

fn rule_metar() -> Rule {
    rule! {
        category: "metar",
        matcher: r"\bMETAR\b",
        hint: DisplayHint::plain(Tone::Gray),
        example: "METAR",
        text: "METAR",
    }
}

fn rule_bank() -> Rule {
    rule! {
        category: "bank",
        matcher: r"\bBNK\b",
        hint: DisplayHint::plain(Tone::Stone),
        example: "BNK",
        text: "Bank",
    }
}

fn rule_light() -> Rule {
    rule! {
        category: "light",
        matcher: r"\bLGT\b",
        hint: DisplayHint::plain(Tone::Lime),
        example: "LGT",
        text: "Light",
    }
}

fn rule_mountains() -> Rule {
    rule! {
        category: "mountains",
        matcher: r"\bMTNS\b",
        hint: DisplayHint::plain(Tone::Blue),
        example: "MTNS",
        text: "Mountains",
    }
}

fn rule_visibility() -> Rule {
    rule! {
        category: "visibility",
        matcher: r"\d+SM",
        hint: DisplayHint::with(Icon::Eye, Tone::Yellow),
        example: "10SM",
        decode: |m| {
            let miles = m.trim_end_matches("SM");
            Some(format!("Visibility: {miles} statute miles"))
        },
    }
}

fn rule_visibility_label() -> Rule {
    rule! {
        category: "vis",
        matcher: r"\bVIS\b",
        hint: DisplayHint::with(Icon::Eye, Tone::Yellow),
        example: "VIS",
        text: "Visibility",
    }
}

fn rule_runway_visual_range() -> Rule {
    rule! {
        category: "runway-visibility",
        matcher: r"R\d{2}[LRC]/\d{4}VP\d{4}FT",
        hint: DisplayHint::with(Icon::Eye, Tone::Yellow),
        example: "R06L/2000VP6000FT",
        decode: |m| {
            let (runway, range) = m.split_once('/')?;
            let number = &runway[1..3];
            let side = match runway.as_bytes()[3] {
                b'L' => " Left",
                b'C' => " Center",
                b'R' => " Right",
                _ => "",
            };
            let min = &range[0..4];
            let max = &range[6..10];
            Some(format!("Runway {number}{side}: {min}-{max}ft visibility"))
        },
    }
}

fn rule_and() -> Rule {
    rule! {
        category: "and",
        matcher: r"\bAND\b",
        hint: DisplayHint::plain(Tone::Gray),
        example: "AND",
        text: "And",
    }
}

fn rule_through() -> Rule {
    rule! {
        category: "thru",
        matcher: r"\bTHRU\b",
        hint: DisplayHint::plain(Tone::Gray),
        example: "THRU",
        text: "Through",
    }
}

fn rule_special_report() -> Rule {
    rule! {
        category: "special",
        matcher: r"\bSPECI\b",
        hint: DisplayHint::with(Icon::CircleAlert, Tone::Orange),
        example: "SPECI",
        text: "Special report",
    }
}

pub(super) fn rules() -> Vec<Rule> {
    vec![
        rule_metar(),
        rule_bank(),
        rule_light(),
        rule_mountains(),
        rule_visibility(),
        rule_visibility_label(),
        rule_runway_visual_range(),
        rule_and(),
        rule_through(),
        rule_special_report(),
    ]
}
