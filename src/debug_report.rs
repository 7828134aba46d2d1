use std::time::Duration;

use chrono::{Datelike, NaiveDate, NaiveDateTime, NaiveTime};
use plainmetar::{AnnotatedToken, Tone};

mod ansi {
    pub const RESET: &str = "\x1b[0m";
    pub const DIM: &str = "\x1b[2m";
    pub const BOLD: &str = "\x1b[1m";

    pub const RED: &str = "\x1b[31m";
    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const BLUE: &str = "\x1b[34m";
    pub const MAGENTA: &str = "\x1b[35m";
    pub const CYAN: &str = "\x1b[36m";
    pub const GRAY: &str = "\x1b[90m";

    pub struct Palette {
        enabled: bool,
    }

    impl Palette {
        pub fn new(enabled: bool) -> Self {
            Self { enabled }
        }

        pub fn paint(&self, s: impl AsRef<str>, color: &str) -> String {
            if self.enabled { format!("{}{}{}", color, s.as_ref(), RESET) } else { s.as_ref().to_string() }
        }

        pub fn bold(&self, s: impl AsRef<str>) -> String {
            if self.enabled { format!("{}{}{}", BOLD, s.as_ref(), RESET) } else { s.as_ref().to_string() }
        }

        pub fn dim(&self, s: impl AsRef<str>) -> String {
            if self.enabled { format!("{}{}{}", DIM, s.as_ref(), RESET) } else { s.as_ref().to_string() }
        }
    }
}

/// Nearest terminal color for a rule's tone tag.
fn tone_color(tone: Tone) -> &'static str {
    match tone {
        Tone::Blue | Tone::Indigo => ansi::BLUE,
        Tone::Purple | Tone::Violet | Tone::Fuchsia | Tone::Pink => ansi::MAGENTA,
        Tone::Red | Tone::Rose => ansi::RED,
        Tone::Amber | Tone::Orange | Tone::Yellow => ansi::YELLOW,
        Tone::Green | Tone::Emerald | Tone::Lime => ansi::GREEN,
        Tone::Cyan | Tone::Sky | Tone::Teal => ansi::CYAN,
        Tone::Gray | Tone::Slate | Tone::Stone => ansi::GRAY,
    }
}

pub fn print_run(
    input: &str,
    annotated: &[AnnotatedToken],
    translation: &str,
    reference: NaiveDateTime,
    elapsed: Duration,
    color: bool,
) {
    let palette = ansi::Palette::new(color);
    println!("\n{}", palette.bold(palette.paint(format!("⚙  Decoding: \"{}\"", input), ansi::CYAN)));

    println!("\n{}", palette.paint("━━━ Tokens ━━━", ansi::GRAY));
    if annotated.is_empty() {
        println!("{}", palette.dim("  No tokens produced"));
    } else {
        print_tokens(annotated, &palette);
    }

    println!("\n{}", palette.paint("━━━ Translation ━━━", ansi::GRAY));
    println!("  {translation}");

    if let Some(age) = observation_age(annotated, reference) {
        println!("\n{}", palette.paint("━━━ Observation ━━━", ansi::GRAY));
        println!("  {age}");
    }

    println!("\n{}", palette.paint("━━━ Timing ━━━", ansi::GRAY));
    println!("  Total: {}", palette.paint(format!("{elapsed:?}"), ansi::GREEN));
    println!();
}

fn print_tokens(annotated: &[AnnotatedToken], palette: &ansi::Palette) {
    for (idx, entry) in annotated.iter().enumerate() {
        let span = format!("span {}..{}", entry.token.start, entry.token.end);
        match &entry.decoded {
            Some(decoded) => {
                println!(
                    "  {} {} {} {}",
                    palette.paint(format!("[{}]", idx), ansi::GRAY),
                    palette.bold(palette.paint(&entry.token.text, tone_color(decoded.hint.tone))),
                    palette.dim("│"),
                    palette.paint(span, ansi::YELLOW),
                );
                println!(
                    "      {} {}  {} {}",
                    palette.dim("category:"),
                    palette.paint(decoded.category, ansi::BLUE),
                    palette.dim("│"),
                    decoded.explanation,
                );
            }
            None => {
                println!(
                    "  {} {} {} {}  {}",
                    palette.paint(format!("[{}]", idx), ansi::GRAY),
                    palette.bold(&entry.token.text),
                    palette.dim("│"),
                    palette.paint(span, ansi::YELLOW),
                    palette.dim("(undecoded)"),
                );
            }
        }
    }
}

/// Describe how old the decoded observation is relative to `reference`, when
/// the report carries a time group. The group only encodes day-of-month and
/// time, so the reference supplies year and month.
fn observation_age(annotated: &[AnnotatedToken], reference: NaiveDateTime) -> Option<String> {
    let time_token = annotated
        .iter()
        .find(|entry| entry.decoded.as_ref().is_some_and(|decoded| decoded.category == "time"))?;

    let digits: String = time_token.token.text.chars().take_while(char::is_ascii_digit).collect();
    if digits.len() != 6 {
        return None;
    }
    let day: u32 = digits[0..2].parse().ok()?;
    let hour: u32 = digits[2..4].parse().ok()?;
    let minute: u32 = digits[4..6].parse().ok()?;

    let date = NaiveDate::from_ymd_opt(reference.year(), reference.month(), day)?;
    let time = NaiveTime::from_hms_opt(hour, minute, 0)?;
    let observed = NaiveDateTime::new(date, time);

    let delta = reference.signed_duration_since(observed);
    let minutes = delta.num_minutes().abs();
    let spelled = format!("{}h {:02}m", minutes / 60, minutes % 60);
    let relation = if delta.num_minutes() >= 0 { "before" } else { "after" };

    Some(format!("Observed {} — {spelled} {relation} reference time", observed.format("%b %d %H:%M UTC")))
}
