//! Precipitation: sensor status words, the weather-phenomenon codes with
//! their intensity/vicinity/descriptor prefixes, the hourly rate and 3-hour
//! amount groups, and the begin/end timing groups.
//!
//! Modifier handling is deliberately uneven across phenomena — it mirrors the
//! observed grammar rather than a unified scheme. Rain keeps its intensity
//! word alongside the showers descriptor; blowing snow drops it; the pellet
//! and grain codes admit intensity but not vicinity.

use crate::rules::helpers::{bare_phenomenon, digits, intensity, minutes_phrase, split_vicinity, vicinity_phenomenon};
use crate::{DisplayHint, Icon, Rule, Tone};

fn rule_precip_sensor_out() -> Rule {
    rule! {
        category: "precip-no",
        matcher: r"\bPWINO\b",
        hint: DisplayHint::plain(Tone::Amber),
        example: "PWINO",
        text: "Precipitation identifier sensor not available",
    }
}

fn rule_precip_amount_out() -> Rule {
    rule! {
        category: "precip-amt-no",
        matcher: r"\bPNO\b",
        hint: DisplayHint::plain(Tone::Sky),
        example: "PNO",
        text: "Precipitation amount not available",
    }
}

fn rule_discriminator() -> Rule {
    rule! {
        category: "precip-discriminator",
        matcher: r"AO2|AO1",
        hint: DisplayHint::plain(Tone::Indigo),
        example: "AO2",
        decode: |m| {
            let description = match m {
                "AO2" => "Automated station with precipitation discriminator",
                "AO1" => "Automated station without precipitation discriminator",
                _ => "Unknown precipitation discriminator",
            };
            Some(String::from(description))
        },
    }
}

fn rule_rain() -> Rule {
    rule! {
        category: "rain",
        matcher: r"^(?:VC)?[-+]?(?:SH)?RA$",
        hint: DisplayHint::with(Icon::Droplet, Tone::Blue),
        example: "RA",
        decode: |m| {
            let (in_vicinity, rest) = split_vicinity(m);
            let (word, rest) = intensity(rest);

            let mut description = format!("{word}rain");
            if rest.starts_with("SH") {
                description.push_str(" showers");
            }
            if in_vicinity {
                description.push_str(" in the vicinity");
            }
            Some(description)
        },
    }
}

fn rule_drizzle() -> Rule {
    rule! {
        category: "drizzle",
        matcher: r"^(?:VC)?[-+]?DZ$",
        hint: DisplayHint::with(Icon::Droplet, Tone::Blue),
        example: "-DZ",
        decode: |m| Some(vicinity_phenomenon(m, "drizzle")),
    }
}

fn rule_snow_pellets() -> Rule {
    rule! {
        category: "snow-pellets",
        matcher: r"^[-+]?GS$",
        hint: DisplayHint::with(Icon::CloudHail, Tone::Blue),
        example: "GS",
        decode: |m| Some(bare_phenomenon(m, "snow pellets")),
    }
}

fn rule_snow() -> Rule {
    rule! {
        category: "snow",
        matcher: r"^(?:VC)?[-+]?(?:BL)?SN$",
        hint: DisplayHint::with(Icon::Snowflake, Tone::Blue),
        example: "SN",
        decode: |m| {
            let (in_vicinity, rest) = split_vicinity(m);
            let (word, rest) = intensity(rest);
            let suffix = if in_vicinity { " in the vicinity" } else { "" };

            // Blowing snow carries no intensity word.
            if rest.starts_with("BL") {
                Some(format!("Blowing snow{suffix}"))
            } else {
                Some(format!("{word}snow{suffix}"))
            }
        },
    }
}

fn rule_ice_crystals() -> Rule {
    rule! {
        category: "ice-crystals",
        matcher: r"^[-+]?IC$",
        hint: DisplayHint::with(Icon::Snowflake, Tone::Blue),
        example: "IC",
        decode: |m| Some(bare_phenomenon(m, "ice crystals")),
    }
}

fn rule_hail() -> Rule {
    rule! {
        category: "hail",
        matcher: r"^[-+]?GR$",
        hint: DisplayHint::with(Icon::CloudHail, Tone::Blue),
        example: "GR",
        decode: |m| Some(bare_phenomenon(m, "hail")),
    }
}

fn rule_snow_grains() -> Rule {
    rule! {
        category: "snow-grains",
        matcher: r"^[-+]?SG$",
        hint: DisplayHint::with(Icon::Snowflake, Tone::Blue),
        example: "SG",
        decode: |m| Some(bare_phenomenon(m, "snow grains")),
    }
}

fn rule_ice_pellets() -> Rule {
    rule! {
        category: "ice-pellets",
        matcher: r"^(?:VC)?[-+]?PL$",
        hint: DisplayHint::with(Icon::Snowflake, Tone::Blue),
        example: "PL",
        decode: |m| Some(vicinity_phenomenon(m, "ice pellets")),
    }
}

fn rule_squalls() -> Rule {
    rule! {
        category: "squall",
        matcher: r"^(?:VC)?[-+]?SQ$",
        hint: DisplayHint::with(Icon::Wind, Tone::Blue),
        example: "SQ",
        decode: |m| Some(vicinity_phenomenon(m, "squalls")),
    }
}

fn rule_duststorm() -> Rule {
    rule! {
        category: "duststorm",
        matcher: r"^(?:VC)?[-+]?DS$",
        hint: DisplayHint::with(Icon::Tornado, Tone::Blue),
        example: "DS",
        decode: |m| Some(vicinity_phenomenon(m, "duststorm")),
    }
}

fn rule_sandstorm() -> Rule {
    rule! {
        category: "sandstorm",
        matcher: r"^(?:VC)?[-+]?SS$",
        hint: DisplayHint::with(Icon::Tornado, Tone::Blue),
        example: "SS",
        decode: |m| Some(vicinity_phenomenon(m, "sandstorm")),
    }
}

fn rule_whirls() -> Rule {
    rule! {
        category: "sand-whirls",
        matcher: r"^(?:VC)?[-+]?PO$",
        hint: DisplayHint::with(Icon::Tornado, Tone::Blue),
        example: "PO",
        decode: |m| Some(vicinity_phenomenon(m, "dust/sand whirls")),
    }
}

fn rule_funnel_cloud() -> Rule {
    rule! {
        category: "funnel-cloud",
        matcher: r"^(?:VC)?[-+]?FC$",
        hint: DisplayHint::with(Icon::Tornado, Tone::Blue),
        example: "FC",
        decode: |m| {
            let (in_vicinity, rest) = split_vicinity(m);
            let suffix = if in_vicinity { " in the vicinity" } else { "" };

            // A heavy funnel cloud is reported as a tornado outright.
            if rest.starts_with('+') {
                return Some(format!("Tornado{suffix}"));
            }
            let (word, _) = intensity(rest);
            Some(format!("{word}funnel clouds{suffix}"))
        },
    }
}

fn rule_virga() -> Rule {
    rule! {
        category: "virga",
        matcher: r"\bVIRGA\b",
        hint: DisplayHint::with(Icon::Bubbles, Tone::Blue),
        example: "VIRGA",
        text: "Precipitation evaporating before reaching the ground",
    }
}

fn rule_widespread_dust() -> Rule {
    rule! {
        category: "widespread-dust",
        matcher: r"\bDU\b",
        hint: DisplayHint::with(Icon::Tornado, Tone::Blue),
        example: "DU",
        text: "Widespread dust",
    }
}

fn rule_unknown_precip() -> Rule {
    rule! {
        category: "unknown-precip",
        matcher: r"\bUP\b",
        hint: DisplayHint::with(Icon::CloudRainWind, Tone::Blue),
        example: "UP",
        text: "Unknown precipitation",
    }
}

fn rule_showers() -> Rule {
    rule! {
        category: "showers",
        matcher: r"^(?:VC)?[-+]?SH$",
        hint: DisplayHint::with(Icon::CloudRainWind, Tone::Blue),
        example: "SH",
        decode: |m| Some(vicinity_phenomenon(m, "shower")),
    }
}

fn rule_hourly_rate() -> Rule {
    rule! {
        category: "precip-rate",
        matcher: r"\bP\d{4}\b",
        hint: DisplayHint::with(Icon::Droplet, Tone::Lime),
        example: "P0009",
        decode: |m| {
            let inches = digits(&m[1..]) as f64 / 100.0;
            Some(format!("Hourly Precipitation Rate: {inches:.2} inches"))
        },
    }
}

fn rule_three_hour_amount() -> Rule {
    rule! {
        category: "precip-3hr",
        matcher: r"6\d{4}|6////",
        hint: DisplayHint::with(Icon::Droplet, Tone::Blue),
        example: "60217",
        decode: |m| {
            if m == "6////" {
                return Some(String::from("3-hour precipitation amount: Missing or unavailable data"));
            }
            let inches = digits(&m[1..]) as f64 / 100.0;
            Some(format!("3-hour precipitation amount: {inches:.3} inches"))
        },
    }
}

fn rule_rain_begin_end() -> Rule {
    rule! {
        category: "rain-begin-end",
        matcher: r"RAB\d{2}E\d{2}",
        hint: DisplayHint::with(Icon::CloudRainWind, Tone::Blue),
        example: "RAB05E30",
        decode: |m| {
            let began = minutes_phrase(digits(&m[3..5]));
            let ended = minutes_phrase(digits(&m[6..8]));
            Some(format!("Rain began {began} after the hour and ended {ended} after the hour"))
        },
    }
}

fn rule_rain_begin() -> Rule {
    rule! {
        category: "rain-begin",
        matcher: r"RAB\d{2}",
        hint: DisplayHint::with(Icon::CloudRainWind, Tone::Blue),
        example: "RAB05",
        decode: |m| Some(format!("Rain began {} after the hour", minutes_phrase(digits(&m[3..])))),
    }
}

fn rule_rain_end() -> Rule {
    rule! {
        category: "rain-end",
        matcher: r"RAE\d{2}",
        hint: DisplayHint::with(Icon::CloudRainWind, Tone::Blue),
        example: "RAE45",
        decode: |m| Some(format!("Rain ending {} after the hour", minutes_phrase(digits(&m[3..])))),
    }
}

fn rule_drizzle_begin() -> Rule {
    rule! {
        category: "drizzle-begin",
        matcher: r"DZB\d{2}",
        hint: DisplayHint::with(Icon::CloudRainWind, Tone::Blue),
        example: "DZB21",
        decode: |m| Some(format!("Drizzle began {} after the hour", minutes_phrase(digits(&m[3..])))),
    }
}

fn rule_drizzle_end() -> Rule {
    rule! {
        category: "drizzle-end",
        matcher: r"DZE\d{2}",
        hint: DisplayHint::with(Icon::CloudRainWind, Tone::Blue),
        example: "DZE44",
        decode: |m| Some(format!("Drizzle ending {} after the hour", minutes_phrase(digits(&m[3..])))),
    }
}

pub(super) fn rules() -> Vec<Rule> {
    vec![
        rule_precip_sensor_out(),
        rule_precip_amount_out(),
        rule_discriminator(),
        rule_rain(),
        rule_drizzle(),
        rule_snow_pellets(),
        rule_snow(),
        rule_ice_crystals(),
        rule_hail(),
        rule_snow_grains(),
        rule_ice_pellets(),
        rule_squalls(),
        rule_duststorm(),
        rule_sandstorm(),
        rule_whirls(),
        rule_funnel_cloud(),
        rule_virga(),
        rule_widespread_dust(),
        rule_unknown_precip(),
        rule_showers(),
        rule_hourly_rate(),
        rule_three_hour_amount(),
        rule_rain_begin_end(),
        rule_rain_begin(),
        rule_rain_end(),
        rule_drizzle_begin(),
        rule_drizzle_end(),
    ]
}
