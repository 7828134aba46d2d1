//! Movement, proximity, and frequency words from the remarks section. Fixed
//! phrase per code; `MOV LTL` survives segmentation as one token and must be
//! registered ahead of the bare movement words.

use crate::{DisplayHint, Rule, Tone};

fn rule_moving_little() -> Rule {
    rule! {
        category: "moving-little",
        matcher: r"\bMOV LTL\b",
        hint: DisplayHint::plain(Tone::Emerald),
        example: "MOV LTL",
        text: "Moving little",
    }
}

fn rule_moving() -> Rule {
    rule! {
        category: "moving",
        matcher: r"\bMOV\b",
        hint: DisplayHint::plain(Tone::Emerald),
        example: "MOV",
        text: "Moving",
    }
}

fn rule_moving_alt() -> Rule {
    rule! {
        category: "moving",
        matcher: r"\bMOVG\b",
        hint: DisplayHint::plain(Tone::Emerald),
        example: "MOVG",
        text: "Moving",
    }
}

fn rule_stationary() -> Rule {
    rule! {
        category: "stationary",
        matcher: r"\bSTNRY\b",
        hint: DisplayHint::plain(Tone::Orange),
        example: "STNRY",
        text: "Stationary",
    }
}

fn rule_aloft() -> Rule {
    rule! {
        category: "aloft",
        matcher: r"\bALF\b",
        hint: DisplayHint::plain(Tone::Orange),
        example: "ALF",
        text: "Aloft",
    }
}

fn rule_vicinity() -> Rule {
    rule! {
        category: "vicinity",
        matcher: r"\bVC\b",
        hint: DisplayHint::plain(Tone::Orange),
        example: "VC",
        text: "In the vicinity",
    }
}

fn rule_distant() -> Rule {
    rule! {
        category: "distant",
        matcher: r"\bDSNT\b",
        hint: DisplayHint::plain(Tone::Orange),
        example: "DSNT",
        text: "Distant",
    }
}

fn rule_dissipated() -> Rule {
    rule! {
        category: "dissipated",
        matcher: r"\bDSIPTD\b",
        hint: DisplayHint::plain(Tone::Orange),
        example: "DSIPTD",
        text: "Dissipated",
    }
}

fn rule_variable() -> Rule {
    rule! {
        category: "variable",
        matcher: r"\bV\b",
        hint: DisplayHint::plain(Tone::Orange),
        example: "V",
        text: "Variable",
    }
}

fn rule_overhead() -> Rule {
    rule! {
        category: "overhead",
        matcher: r"\bOHD\b",
        hint: DisplayHint::plain(Tone::Pink),
        example: "OHD",
        text: "Overhead",
    }
}

fn rule_occasional() -> Rule {
    rule! {
        category: "occasional",
        matcher: r"\bOCNL\b",
        hint: DisplayHint::plain(Tone::Green),
        example: "OCNL",
        text: "Occasional",
    }
}

fn rule_continuous() -> Rule {
    rule! {
        category: "continuous",
        matcher: r"\bCONS\b",
        hint: DisplayHint::plain(Tone::Emerald),
        example: "CONS",
        text: "Continuous",
    }
}

pub(super) fn rules() -> Vec<Rule> {
    vec![
        rule_moving_little(),
        rule_moving(),
        rule_moving_alt(),
        rule_stationary(),
        rule_aloft(),
        rule_vicinity(),
        rule_distant(),
        rule_dissipated(),
        rule_variable(),
        rule_overhead(),
        rule_occasional(),
        rule_continuous(),
    ]
}
