//! Obscurations and visibility phenomena: one fixed phrase per code, except
//! fog, which has a patchy (`BC`) variant, and the `OBSC` direction suffix.

use crate::{DisplayHint, Icon, Rule, Tone};

fn rule_smoke() -> Rule {
    rule! {
        category: "smoke",
        matcher: r"\bFU\b",
        hint: DisplayHint::plain(Tone::Slate),
        example: "FU",
        text: "Smoke",
    }
}

fn rule_haze() -> Rule {
    rule! {
        category: "haze",
        matcher: r"\bHZ\b",
        hint: DisplayHint::plain(Tone::Violet),
        example: "HZ",
        text: "Haze",
    }
}

fn rule_mist() -> Rule {
    rule! {
        category: "mist",
        matcher: r"\bBR\b",
        hint: DisplayHint::plain(Tone::Violet),
        example: "BR",
        text: "Mist",
    }
}

fn rule_fog() -> Rule {
    rule! {
        category: "fog",
        matcher: r"^(?:BC)?FG$",
        hint: DisplayHint::plain(Tone::Slate),
        example: "BCFG",
        decode: |m| {
            if m.starts_with("BC") { Some(String::from("Patchy fog")) } else { Some(String::from("Fog")) }
        },
    }
}

fn rule_volcanic_ash() -> Rule {
    rule! {
        category: "volcanic-ash",
        matcher: r"\bVA\b",
        hint: DisplayHint::with(Icon::CloudAlert, Tone::Red),
        example: "VA",
        text: "Volcanic ash",
    }
}

fn rule_visibility_info_out() -> Rule {
    rule! {
        category: "visibility-no",
        matcher: r"\bVISNO\b",
        hint: DisplayHint::plain(Tone::Amber),
        example: "VISNO",
        text: "Visibility at secondary location not available",
    }
}

fn rule_all_quadrants() -> Rule {
    rule! {
        category: "all-quads",
        matcher: r"\bALQDS\b",
        hint: DisplayHint::plain(Tone::Rose),
        example: "ALQDS",
        text: "In all quadrants",
    }
}

fn rule_obscured() -> Rule {
    rule! {
        category: "obscured",
        matcher: r"OBSC[GNEWSAL]+",
        hint: DisplayHint::plain(Tone::Orange),
        example: "OBSCNE",
        decode: |m| {
            let suffix = &m[4..];
            let direction = match suffix {
                "G" => String::from("due to Ground/Terrain"),
                "N" => String::from("to the North"),
                "E" => String::from("to the East"),
                "W" => String::from("to the West"),
                "S" => String::from("to the South"),
                "NE" => String::from("to the Northeast"),
                "NW" => String::from("to the Northwest"),
                "SE" => String::from("to the Southeast"),
                "SW" => String::from("to the Southwest"),
                "AL" => String::from("All Around"),
                _ => format!("Unknown direction ({suffix})"),
            };
            Some(format!("Obscuration {direction}"))
        },
    }
}

pub(super) fn rules() -> Vec<Rule> {
    vec![
        rule_smoke(),
        rule_haze(),
        rule_mist(),
        rule_fog(),
        rule_volcanic_ash(),
        rule_visibility_info_out(),
        rule_all_quadrants(),
        rule_obscured(),
    ]
}
