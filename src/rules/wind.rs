//! Wind groups: the surface wind group with its gust and variable forms, the
//! variable-direction range, peak wind, and wind shift.
//!
//! Every numeric field in these groups is fixed-width, so decoding slices by
//! position rather than re-parsing; the matcher guarantees the widths.

use crate::{DisplayHint, Icon, Rule, Tone};

fn rule_wind_group() -> Rule {
    rule! {
        category: "wind",
        matcher: r"\d{5}KT|\d{3}\d{2}G\d{2}KT|VRB\d{2}KT|VRB\d{2}G\d{2}KT",
        hint: DisplayHint::with(Icon::Wind, Tone::Green),
        example: "24016G25KT",
        decode: |m| {
            let variable = m.starts_with("VRB");
            let gusting = m.contains('G');
            let speed = &m[3..5];

            let description = match (variable, gusting) {
                (false, true) => format!("Wind: {}° at {speed} knots, gusting to {} knots", &m[0..3], &m[6..8]),
                (true, true) => format!("Wind: variable at {speed} knots, gusting to {} knots", &m[6..8]),
                (true, false) => format!("Wind: variable at {speed} knots"),
                (false, false) => format!("Wind: {}° at {speed} knots", &m[0..3]),
            };
            Some(description)
        },
    }
}

fn rule_variable_direction() -> Rule {
    rule! {
        category: "wind-dir",
        matcher: r"\d{3}V\d{3}",
        hint: DisplayHint::with(Icon::Gauge, Tone::Orange),
        example: "180V250",
        decode: |m| Some(format!("Winds varying from {}° to {}°", &m[0..3], &m[4..7])),
    }
}

fn rule_peak_wind_full() -> Rule {
    rule! {
        category: "peak-wind",
        matcher: r"PK WND \d{5}/\d{2,4}",
        hint: DisplayHint::with(Icon::Wind, Tone::Green),
        example: "PK WND 28015/25",
        decode: |m| {
            let group = m.split(' ').nth(2)?;
            let (wind, time) = group.split_once('/')?;
            let direction = &wind[0..3];
            let speed = &wind[3..5];

            // The time field is minutes past the hour (2 digits) or HH:MM
            // (4 digits); anything else is shown as transmitted.
            let occurred = match time.len() {
                2 => format!("{time} minutes past the hour"),
                4 => format!("{}:{} UTC", &time[0..2], &time[2..4]),
                _ => String::from(time),
            };
            Some(format!("Peak wind from {direction}° at {speed} knots, occurring at {occurred}"))
        },
    }
}

fn rule_peak_wind() -> Rule {
    rule! {
        category: "peak-wind",
        matcher: r"\bPK WND\b",
        hint: DisplayHint::with(Icon::Wind, Tone::Green),
        example: "PK WND",
        text: "Peak wind",
    }
}

fn rule_wind_label() -> Rule {
    rule! {
        category: "wind-label",
        matcher: r"\bWND\b",
        hint: DisplayHint::plain(Tone::Cyan),
        example: "WND",
        text: "Wind",
    }
}

fn rule_wind_shift() -> Rule {
    rule! {
        category: "wind-shift",
        matcher: r"WSHFT \d{4}",
        hint: DisplayHint::with(Icon::Wind, Tone::Green),
        example: "WSHFT 2032",
        decode: |m| {
            let time = &m[6..];
            Some(format!("Wind shift at {}:{} UTC", &time[0..2], &time[2..4]))
        },
    }
}

fn rule_peak_label() -> Rule {
    rule! {
        category: "peak-label",
        matcher: r"\bPK\b",
        hint: DisplayHint::plain(Tone::Cyan),
        example: "PK",
        text: "Peak",
    }
}

pub(super) fn rules() -> Vec<Rule> {
    vec![
        rule_wind_group(),
        rule_variable_direction(),
        rule_peak_wind_full(),
        rule_peak_wind(),
        rule_wind_label(),
        rule_wind_shift(),
        rule_peak_label(),
    ]
}
