//! Sky condition: layer coverage with altitude, named cloud genera, the
//! ceiling triplet, and sky status words.
//!
//! The ceiling rules carry a strict internal order — altitude-with-direction,
//! then altitude, then the bare word — because their matchers nest. Dispatch
//! takes the first hit, so the most specific form must come first.

use crate::rules::helpers::{digits, direction_name, group_thousands};
use crate::{DisplayHint, Icon, Rule, Tone};

fn rule_cloud_layer() -> Rule {
    rule! {
        category: "clouds",
        matcher: r"FEW\d{3}|SCT\d{3}|BKN\d{3}|OVC\d{3}|CLR",
        hint: DisplayHint::with(Icon::CloudSnow, Tone::Cyan),
        example: "BKN025",
        decode: |m| {
            if m == "CLR" {
                return Some(String::from("Clear skies, no clouds"));
            }
            let coverage = match &m[0..3] {
                "FEW" => "Few clouds",
                "SCT" => "Scattered clouds",
                "BKN" => "Broken clouds",
                _ => "Overcast",
            };
            let altitude = group_thousands(digits(&m[3..]) * 100);
            Some(format!("{coverage} at {altitude} feet"))
        },
    }
}

fn rule_cumulonimbus() -> Rule {
    rule! {
        category: "cumulonimbus",
        matcher: r"\bCB\b",
        hint: DisplayHint::with(Icon::Cloud, Tone::Sky),
        example: "CB",
        text: "Cumulonimbus clouds",
    }
}

fn rule_cumulus() -> Rule {
    rule! {
        category: "cumulus",
        matcher: r"\bCU\b",
        hint: DisplayHint::with(Icon::Cloud, Tone::Sky),
        example: "CU",
        text: "Cumulus clouds",
    }
}

fn rule_ceiling_altitude_direction() -> Rule {
    rule! {
        category: "ceiling-alt-dir",
        matcher: r"\bCIG \d{3} (?:NE|NW|SE|SW|N|E|S|W)\b",
        hint: DisplayHint::with(Icon::Cloud, Tone::Sky),
        example: "CIG 030 N",
        decode: |m| {
            let mut parts = m.split(' ');
            parts.next();
            let altitude = group_thousands(digits(parts.next()?) * 100);
            let direction = direction_name(parts.next()?)?;
            Some(format!("Ceiling at {altitude} feet to the {direction}"))
        },
    }
}

fn rule_ceiling_altitude() -> Rule {
    rule! {
        category: "ceiling-alt",
        matcher: r"\bCIG \d{3}\b",
        hint: DisplayHint::with(Icon::Cloud, Tone::Sky),
        example: "CIG 005",
        decode: |m| {
            let altitude = group_thousands(digits(&m[4..7]) * 100);
            Some(format!("Ceiling at {altitude} feet"))
        },
    }
}

fn rule_ceiling() -> Rule {
    rule! {
        category: "ceiling",
        matcher: r"\bCIG\b",
        hint: DisplayHint::with(Icon::Cloud, Tone::Sky),
        example: "CIG",
        text: "Ceiling",
    }
}

fn rule_towering_cumulus() -> Rule {
    rule! {
        category: "towering-cumulus",
        matcher: r"\bTCU\b",
        hint: DisplayHint::with(Icon::Cloud, Tone::Sky),
        example: "TCU",
        text: "Towering cumulus clouds",
    }
}

fn rule_altocumulus_lenticular() -> Rule {
    rule! {
        category: "altocumulus-lenticular",
        matcher: r"\bACSL\b",
        hint: DisplayHint::with(Icon::Cloud, Tone::Sky),
        example: "ACSL",
        text: "Altocumulus standing lenticular clouds",
    }
}

fn rule_altocumulus_castellanus() -> Rule {
    rule! {
        category: "altocumulus-castellanus",
        matcher: r"\bACC\b",
        hint: DisplayHint::with(Icon::Cloud, Tone::Sky),
        example: "ACC",
        text: "Altocumulus castellanus clouds",
    }
}

fn rule_cirrocumulus_lenticular() -> Rule {
    rule! {
        category: "cirrocumulus-lenticular",
        matcher: r"\bCCSL\b",
        hint: DisplayHint::with(Icon::Cloud, Tone::Sky),
        example: "CCSL",
        text: "Cirrocumulus standing lenticular clouds",
    }
}

fn rule_cumulonimbus_mammatus() -> Rule {
    rule! {
        category: "cumulonimbus-mammatus",
        matcher: r"\bCBMAM\b",
        hint: DisplayHint::with(Icon::Cloud, Tone::Sky),
        example: "CBMAM",
        text: "Cumulonimbus mammatus clouds",
    }
}

fn rule_stratocumulus_lenticular() -> Rule {
    rule! {
        category: "stratocumulus-lenticular",
        matcher: r"\bSCSL\b",
        hint: DisplayHint::with(Icon::Cloud, Tone::Sky),
        example: "SCSL",
        text: "Stratocumulus standing lenticular clouds",
    }
}

fn rule_breaks_in_overcast() -> Rule {
    rule! {
        category: "breaks-in-overcast",
        matcher: r"\bBINOVC\b",
        hint: DisplayHint::plain(Tone::Sky),
        example: "BINOVC",
        text: "Breaks in overcast",
    }
}

fn rule_base_of_overcast() -> Rule {
    rule! {
        category: "base-of-overcast",
        matcher: r"\bBOVC\b",
        hint: DisplayHint::plain(Tone::Sky),
        example: "BOVC",
        text: "Base of overcast",
    }
}

fn rule_sky_info_out() -> Rule {
    rule! {
        category: "sky-no",
        matcher: r"\bCHINO\b",
        hint: DisplayHint::plain(Tone::Sky),
        example: "CHINO",
        text: "Sky conditions at secondary location not available",
    }
}

fn rule_broken() -> Rule {
    rule! {
        category: "broken",
        matcher: r"\bBKN\b",
        hint: DisplayHint::plain(Tone::Sky),
        example: "BKN",
        text: "Broken clouds",
    }
}

fn rule_scattered() -> Rule {
    rule! {
        category: "scattered",
        matcher: r"\bSCT\b",
        hint: DisplayHint::with(Icon::Cloud, Tone::Sky),
        example: "SCT",
        text: "Scattered clouds",
    }
}

pub(super) fn rules() -> Vec<Rule> {
    vec![
        rule_cloud_layer(),
        rule_cumulonimbus(),
        rule_cumulus(),
        rule_ceiling_altitude_direction(),
        rule_ceiling_altitude(),
        rule_ceiling(),
        rule_towering_cumulus(),
        rule_altocumulus_lenticular(),
        rule_altocumulus_castellanus(),
        rule_cirrocumulus_lenticular(),
        rule_cumulonimbus_mammatus(),
        rule_stratocumulus_lenticular(),
        rule_breaks_in_overcast(),
        rule_base_of_overcast(),
        rule_sky_info_out(),
        rule_broken(),
        rule_scattered(),
    ]
}
