//! Shared decode helpers: prefix stripping, wording tables, and the small
//! formatting routines the decode productions have in common.

/// Full compass name for an abbreviation, `None` for anything else.
pub fn direction_name(abbr: &str) -> Option<&'static str> {
    let name = match abbr {
        "N" => "North",
        "NE" => "Northeast",
        "E" => "East",
        "SE" => "Southeast",
        "S" => "South",
        "SW" => "Southwest",
        "W" => "West",
        "NW" => "Northwest",
        _ => return None,
    };
    Some(name)
}

/// Strip a leading `VC` vicinity prefix, reporting whether it was present.
pub fn split_vicinity(token: &str) -> (bool, &str) {
    match token.strip_prefix("VC") {
        Some(rest) => (true, rest),
        None => (false, token),
    }
}

/// Read the intensity prefix (`-` light, `+` heavy, none moderate) and return
/// the wording together with the remainder of the token.
pub fn intensity(token: &str) -> (&'static str, &str) {
    if let Some(rest) = token.strip_prefix('-') {
        ("Light ", rest)
    } else if let Some(rest) = token.strip_prefix('+') {
        ("Heavy ", rest)
    } else {
        ("Moderate ", token)
    }
}

/// Wording for the phenomena that take both vicinity and intensity prefixes
/// (drizzle, ice pellets, squalls, duststorm, sandstorm, whirls, showers).
pub fn vicinity_phenomenon(token: &str, noun: &str) -> String {
    let (in_vicinity, rest) = split_vicinity(token);
    let (word, _) = intensity(rest);
    let suffix = if in_vicinity { " in the vicinity" } else { "" };
    format!("{word}{noun}{suffix}")
}

/// Wording for the phenomena that take only an intensity prefix (snow
/// pellets, ice crystals, hail, snow grains).
pub fn bare_phenomenon(token: &str, noun: &str) -> String {
    let (word, _) = intensity(token);
    format!("{word}{noun}")
}

/// `1 minute` / `N minutes`, for the begin/end timing groups.
pub fn minutes_phrase(minutes: u32) -> String {
    if minutes == 1 { String::from("1 minute") } else { format!("{minutes} minutes") }
}

/// Render an altitude with thousands separators (`2500` -> `2,500`).
pub fn group_thousands(value: u32) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Uppercase the first character; the thunderstorm composer builds its
/// sentence from lowercase fragments.
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Parse a fixed-width digit field. The matchers constrain every numeric
/// sub-field to a known digit count, so this cannot fail on dispatched input.
pub fn digits(field: &str) -> u32 {
    field.parse().unwrap_or(0)
}

/// Decode a sign-digit tenths field (`0` positive, anything else negative)
/// into degrees, formatted to one decimal. A zero magnitude is always
/// rendered as `0.0`.
pub fn tenths(sign_digit: u8, field: &str) -> String {
    let raw = digits(field);
    let value = if raw == 0 {
        0.0
    } else {
        let sign = if sign_digit == b'0' { 1.0 } else { -1.0 };
        sign * raw as f64 / 10.0
    };
    format!("{value:.1}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thousands_grouping() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(900), "900");
        assert_eq!(group_thousands(2500), "2,500");
        assert_eq!(group_thousands(25000), "25,000");
        assert_eq!(group_thousands(1200000), "1,200,000");
    }

    #[test]
    fn tenths_fields() {
        assert_eq!(tenths(b'0', "005"), "0.5");
        assert_eq!(tenths(b'1', "012"), "-1.2");
        assert_eq!(tenths(b'1', "000"), "0.0");
    }

    #[test]
    fn minutes_grammar() {
        assert_eq!(minutes_phrase(1), "1 minute");
        assert_eq!(minutes_phrase(45), "45 minutes");
    }
}
