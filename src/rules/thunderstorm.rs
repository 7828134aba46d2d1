//! Thunderstorm events and lightning.
//!
//! The combined thunderstorm matcher composes a sentence from up to three
//! independent facts: storm intensity, co-occurring rain (with its own
//! intensity, read from the character just before `RA`), and co-occurring
//! hail. The dedicated `VCTS` rule precedes it so the specific form is the
//! first match for that token; the wording is the same either way.

use bitflags::bitflags;

use crate::rules::helpers::{capitalize, digits, minutes_phrase, split_vicinity};
use crate::{DisplayHint, Icon, Rule, Tone};

bitflags! {
    /// Lightning discharge kinds reported in an `LTG` suffix.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    struct DischargeKinds: u8 {
        const CLOUD_TO_GROUND = 1 << 0;
        const CLOUD_TO_CLOUD = 1 << 1;
        const INTRA_CLOUD = 1 << 2;
    }
}

impl DischargeKinds {
    fn scan(suffix: &str) -> Self {
        let mut kinds = DischargeKinds::empty();
        if suffix.contains("CG") {
            kinds |= DischargeKinds::CLOUD_TO_GROUND;
        }
        if suffix.contains("CC") {
            kinds |= DischargeKinds::CLOUD_TO_CLOUD;
        }
        if suffix.contains("IC") {
            kinds |= DischargeKinds::INTRA_CLOUD;
        }
        kinds
    }

    fn names(self) -> Vec<&'static str> {
        [
            (DischargeKinds::CLOUD_TO_GROUND, "Cloud-to-Ground"),
            (DischargeKinds::CLOUD_TO_CLOUD, "Cloud-to-Cloud"),
            (DischargeKinds::INTRA_CLOUD, "Intra-Cloud"),
        ]
        .into_iter()
        .filter(|(kind, _)| self.contains(*kind))
        .map(|(_, name)| name)
        .collect()
    }
}

fn storm_intensity(segment: &str) -> &'static str {
    if segment.starts_with("-TS") {
        "light "
    } else if segment.starts_with("+TS") {
        "heavy "
    } else {
        ""
    }
}

fn rule_vicinity_thunderstorm() -> Rule {
    rule! {
        category: "vicinity-thunderstorm",
        matcher: r"\bVCTS\b",
        hint: DisplayHint::with(Icon::Zap, Tone::Orange),
        example: "VCTS",
        text: "Thunderstorm in the vicinity",
    }
}

fn rule_thunderstorm() -> Rule {
    rule! {
        category: "thunderstorm",
        matcher: r"^(?:VC)?[-+]?TS(?:[-+]?RA)?(?:GR)?$",
        hint: DisplayHint::with(Icon::Zap, Tone::Orange),
        example: "TSRA",
        decode: |m| {
            let (in_vicinity, part) = split_vicinity(m);
            let suffix = if in_vicinity { " in the vicinity" } else { "" };
            let has_hail = part.contains("GR");

            // Rain intensity is read from the character ahead of `RA`; the
            // storm's own intensity sits ahead of `TS`.
            let (storm_word, rain_word) = match part.find("RA") {
                Some(ra_index) => {
                    let with_modifier = &part[ra_index - 1..];
                    let rain = if with_modifier.starts_with("-RA") {
                        "light "
                    } else if with_modifier.starts_with("+RA") {
                        "heavy "
                    } else {
                        "moderate "
                    };
                    (storm_intensity(&part[..ra_index]), Some(rain))
                }
                None => (storm_intensity(part), None),
            };

            let sentence = match (rain_word, has_hail) {
                (Some(rain), true) => format!("{storm_word}thunderstorm with {rain}rain and hail"),
                (Some(rain), false) => format!("{storm_word}thunderstorm with {rain}rain"),
                (None, true) => format!("{storm_word}thunderstorm with hail"),
                (None, false) => format!("{storm_word}thunderstorm"),
            };
            Some(format!("{}{suffix}", capitalize(&sentence)))
        },
    }
}

fn rule_thunderstorm_began() -> Rule {
    rule! {
        category: "thunderstorm-begin",
        matcher: r"TSB\d{2}",
        hint: DisplayHint::with(Icon::Zap, Tone::Orange),
        example: "TSB25",
        decode: |m| Some(format!("Thunderstorm began {} after the hour", minutes_phrase(digits(&m[3..])))),
    }
}

fn rule_thunderstorm_ended() -> Rule {
    rule! {
        category: "thunderstorm-end",
        matcher: r"TSE\d{2}",
        hint: DisplayHint::with(Icon::Zap, Tone::Orange),
        example: "TSE08",
        decode: |m| Some(format!("Thunderstorm ending {} after the hour", minutes_phrase(digits(&m[3..])))),
    }
}

fn rule_thunderstorm_info_out() -> Rule {
    rule! {
        category: "thunderstorm-no",
        matcher: r"\bTSNO\b",
        hint: DisplayHint::plain(Tone::Amber),
        example: "TSNO",
        text: "Thunderstorm information not available",
    }
}

fn rule_frequent() -> Rule {
    rule! {
        category: "frequent",
        matcher: r"\bFRQ\b",
        hint: DisplayHint::plain(Tone::Orange),
        example: "FRQ",
        text: "Frequent",
    }
}

fn rule_moderate() -> Rule {
    rule! {
        category: "moderate",
        matcher: r"\bMDT\b",
        hint: DisplayHint::plain(Tone::Orange),
        example: "MDT",
        text: "Moderate",
    }
}

fn rule_lightning() -> Rule {
    rule! {
        category: "lightning",
        matcher: r"\bLTG\b|LTG(?:CG|CC|IC)+\b",
        hint: DisplayHint::with(Icon::Zap, Tone::Amber),
        example: "LTGCG",
        decode: |m| {
            if m == "LTG" {
                return Some(String::from("Lightning detected"));
            }

            let suffix = &m[3..];
            let names = DischargeKinds::scan(suffix).names();
            let description = match names.len() {
                0 => format!("Lightning detected ({suffix})"),
                1 => format!("{} lightning", names[0]),
                2 => format!("{} lightning", names.join(" and ")),
                _ => format!("Lightning detected ({})", names.join(", ")),
            };
            Some(description)
        },
    }
}

pub(super) fn rules() -> Vec<Rule> {
    vec![
        rule_vicinity_thunderstorm(),
        rule_thunderstorm(),
        rule_thunderstorm_began(),
        rule_thunderstorm_ended(),
        rule_thunderstorm_info_out(),
        rule_frequent(),
        rule_moderate(),
        rule_lightning(),
    ]
}
