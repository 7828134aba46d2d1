//! Temperature groups: the spot temperature/dewpoint pair, the tenths-encoded
//! precise group, and the 6-hour and 24-hour extremes from the remarks
//! section.
//!
//! Sign conventions differ by group: the spot pair marks negatives with an
//! `M` prefix, while the remarks groups carry a sign digit (`0` positive,
//! `1` negative) ahead of a tenths-scaled field.

use crate::rules::helpers::{digits, tenths};
use crate::{DisplayHint, Icon, Rule, Tone};

fn spot_value(field: &str) -> i32 {
    match field.strip_prefix('M') {
        Some(rest) => -(digits(rest) as i32),
        None => digits(field) as i32,
    }
}

fn rule_temperature_dewpoint() -> Rule {
    rule! {
        category: "temperature",
        matcher: r"\b\d{2}/\d{2}\b|\b\d{2}/M\d{2}\b|\bM\d{2}/\d{2}\b|\bM\d{2}/M\d{2}\b",
        hint: DisplayHint::with(Icon::Thermometer, Tone::Red),
        example: "22/12",
        decode: |m| {
            let (temp, dew) = m.split_once('/')?;
            Some(format!("Temperature: {}°C, Dewpoint: {}°C", spot_value(temp), spot_value(dew)))
        },
    }
}

fn rule_precise_temperature() -> Rule {
    rule! {
        category: "precise-temp",
        matcher: r"T[01]\d{3}[01]\d{3}",
        hint: DisplayHint::with(Icon::Thermometer, Tone::Fuchsia),
        example: "T00050012",
        decode: |m| {
            let temp = tenths(m.as_bytes()[1], &m[2..5]);
            let dew = tenths(m.as_bytes()[5], &m[6..9]);
            Some(format!("Precise temperature: {temp}°C, Dewpoint: {dew}°C"))
        },
    }
}

fn rule_six_hour_max() -> Rule {
    rule! {
        category: "6hr-max-temp",
        matcher: r"^1[01]\d{3}$",
        hint: DisplayHint::with(Icon::Thermometer, Tone::Red),
        example: "10142",
        decode: |m| {
            let value = tenths(m.as_bytes()[1], &m[2..]);
            Some(format!("6-hour maximum temperature: {value}°C"))
        },
    }
}

fn rule_six_hour_min() -> Rule {
    rule! {
        category: "6hr-min-temp",
        matcher: r"^2[01]\d{3}$",
        hint: DisplayHint::with(Icon::Thermometer, Tone::Blue),
        example: "21001",
        decode: |m| {
            let value = tenths(m.as_bytes()[1], &m[2..]);
            Some(format!("6-hour minimum temperature: {value}°C"))
        },
    }
}

fn rule_day_extremes() -> Rule {
    rule! {
        category: "24hr-min-max-temp",
        matcher: r"^4[01]\d{3}[01]\d{3}$",
        hint: DisplayHint::with(Icon::Thermometer, Tone::Blue),
        example: "401120084",
        decode: |m| {
            let max = tenths(m.as_bytes()[1], &m[2..5]);
            let min = tenths(m.as_bytes()[5], &m[6..9]);
            Some(format!("24-hour temperature: Maximum {max}°C, Minimum {min}°C"))
        },
    }
}

pub(super) fn rules() -> Vec<Rule> {
    vec![
        rule_temperature_dewpoint(),
        rule_precise_temperature(),
        rule_six_hour_max(),
        rule_six_hour_min(),
        rule_day_extremes(),
    ]
}
