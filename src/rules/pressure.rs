//! Pressure groups: altimeter setting, the 3-hour tendency, sea-level
//! pressure, and the rapid-rise indicator.

use crate::rules::helpers::digits;
use crate::{DisplayHint, Icon, Rule, Tone};

fn rule_altimeter() -> Rule {
    rule! {
        category: "altimeter",
        matcher: r"A\d{4}",
        hint: DisplayHint::with(Icon::Gauge, Tone::Orange),
        example: "A3012",
        decode: |m| {
            let setting = digits(&m[1..]) as f64 / 100.0;
            Some(format!("Altimeter: {setting:.2} inHg"))
        },
    }
}

fn rule_tendency() -> Rule {
    rule! {
        category: "pressure-tendency",
        matcher: r"5\d{4}",
        hint: DisplayHint::with(Icon::Gauge, Tone::Slate),
        example: "52032",
        decode: |m| {
            let trend = match m.as_bytes()[1] {
                b'0' => "increasing, then decreasing",
                b'1' => "increasing more slowly",
                b'2' => "increasing",
                b'3' => "increasing then steady",
                b'4' => "steady",
                b'5' => "decreasing then increasing",
                b'6' => "decreasing more slowly",
                b'7' => "decreasing",
                b'8' => "decreasing then steady",
                _ => "Unknown trend",
            };
            let change = digits(&m[2..]) as f64 / 10.0;
            Some(format!("Pressure {trend}, Δ{change:.1} hPa in past 3 hours"))
        },
    }
}

fn rule_sea_level_pressure() -> Rule {
    rule! {
        category: "slp",
        matcher: r"SLP\d{3}|SLPNO",
        hint: DisplayHint::with(Icon::Waves, Tone::Teal),
        example: "SLP132",
        decode: |m| {
            if m == "SLPNO" {
                return Some(String::from("Sea-level pressure not available"));
            }

            // The group carries only the tens digit downward; reconstruct
            // both candidates and take the one nearer the 1013.2 hPa
            // standard atmosphere.
            let partial = digits(&m[3..]) as f64 / 10.0;
            let low = 900.0 + partial;
            let high = 1000.0 + partial;
            let standard = 1013.2;
            let pressure = if (low - standard).abs() < (high - standard).abs() { low } else { high };
            Some(format!("Sea-level pressure: {pressure:.1} hPa"))
        },
    }
}

fn rule_rising_rapidly() -> Rule {
    rule! {
        category: "pressure-rapid",
        matcher: r"PRESRR",
        hint: DisplayHint::with(Icon::CircleGauge, Tone::Orange),
        example: "PRESRR",
        text: "Pressure rising rapidly",
    }
}

pub(super) fn rules() -> Vec<Rule> {
    vec![rule_altimeter(), rule_tendency(), rule_sea_level_pressure(), rule_rising_rapidly()]
}
