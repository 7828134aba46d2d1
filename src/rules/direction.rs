//! Compass directions, single or ranged (`E-S`).
//!
//! Registered after the ceiling family: the direction-bearing ceiling form
//! (`CIG 030 N`) must resolve as a ceiling, and with first-match dispatch
//! that precedence is expressed by order.

use crate::rules::helpers::direction_name;
use crate::{DisplayHint, Icon, Rule, Tone};

fn rule_compass() -> Rule {
    rule! {
        category: "direction",
        matcher: r"\b(?:NE|NW|SE|SW|N|E|S|W)(?:-(?:NE|NW|SE|SW|N|E|S|W))?\b",
        hint: DisplayHint::with(Icon::Compass, Tone::Rose),
        example: "NE",
        decode: |m| match m.split_once('-') {
            Some((from, to)) => Some(format!("From {} to {}", direction_name(from)?, direction_name(to)?)),
            None => Some(String::from(direction_name(m)?)),
        },
    }
}

pub(super) fn rules() -> Vec<Rule> {
    vec![rule_compass()]
}
