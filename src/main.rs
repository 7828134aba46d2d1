mod debug_report;

use std::io::{self, IsTerminal, Read};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

use chrono::{Local, NaiveDateTime};
use plainmetar::{AirportDirectory, RuleLibrary, annotate, translate};

fn main() {
    let config = match parse_args() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(2);
        }
    };

    let library = match &config.airports {
        Some(path) => match AirportDirectory::load(path) {
            Ok(directory) => RuleLibrary::with_lookup(Arc::new(directory)),
            Err(err) => {
                eprintln!("error: failed to read airports table '{}': {err}", path.display());
                std::process::exit(2);
            }
        },
        None => RuleLibrary::new(),
    };

    let started = Instant::now();
    let annotated = annotate(&config.input, &library);
    let translation = translate(&config.input, &library);
    let elapsed = started.elapsed();

    if config.translate_only {
        println!("{translation}");
        return;
    }

    debug_report::print_run(&config.input, &annotated, &translation, config.reference_time, elapsed, config.color);
}

struct CliConfig {
    input: String,
    airports: Option<PathBuf>,
    reference_time: NaiveDateTime,
    translate_only: bool,
    color: bool,
}

fn parse_args() -> Result<CliConfig, String> {
    let mut input: Option<String> = None;
    let mut airports: Option<PathBuf> = None;
    let mut reference_time = Local::now().naive_local();
    let mut translate_only = false;
    let mut color = io::stdout().is_terminal();
    let mut args = std::env::args().skip(1).peekable();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => {
                print_help();
                std::process::exit(0);
            }
            "-V" | "--version" => {
                println!("plainmetar {}", env!("CARGO_PKG_VERSION"));
                std::process::exit(0);
            }
            "--color" => color = true,
            "--no-color" => color = false,
            "--translate" => translate_only = true,
            "--airports" => {
                let value = args.next().ok_or_else(|| "error: --airports expects a path".to_string())?;
                airports = Some(PathBuf::from(value));
            }
            "--reference" => {
                let value = args.next().ok_or_else(|| "error: --reference expects a value".to_string())?;
                reference_time = parse_reference(&value)?;
            }
            "--input" | "-i" => {
                let value = args.next().ok_or_else(|| "error: --input expects a value".to_string())?;
                if input.is_some() {
                    return Err("error: input provided multiple times".to_string());
                }
                input = Some(value);
            }
            "--" => {
                let rest = args.collect::<Vec<_>>().join(" ");
                if !rest.trim().is_empty() {
                    if input.is_some() {
                        return Err("error: input provided multiple times".to_string());
                    }
                    input = Some(rest);
                }
                break;
            }
            _ if arg.starts_with("--airports=") => {
                airports = Some(PathBuf::from(arg.trim_start_matches("--airports=")));
            }
            _ if arg.starts_with("--reference=") => {
                let value = arg.trim_start_matches("--reference=");
                reference_time = parse_reference(value)?;
            }
            _ if arg.starts_with("--input=") => {
                let value = arg.trim_start_matches("--input=");
                if input.is_some() {
                    return Err("error: input provided multiple times".to_string());
                }
                input = Some(value.to_string());
            }
            _ if arg.starts_with('-') && arg.len() > 1 => {
                return Err(format!("error: unknown option '{arg}'"));
            }
            _ => {
                let rest = std::iter::once(arg).chain(args).collect::<Vec<_>>().join(" ");
                if input.is_some() {
                    return Err("error: input provided multiple times".to_string());
                }
                input = Some(rest);
                break;
            }
        }
    }

    let input = match input {
        Some(value) => value,
        None => read_stdin_input()?,
    };

    if input.trim().is_empty() {
        return Err(format!("error: no report provided\n\n{}", help_text()));
    }

    Ok(CliConfig { input, airports, reference_time, translate_only, color })
}

fn read_stdin_input() -> Result<String, String> {
    let mut buffer = String::new();
    io::stdin().read_to_string(&mut buffer).map_err(|err| format!("error: failed to read stdin: {err}"))?;
    Ok(buffer.trim().to_string())
}

fn parse_reference(value: &str) -> Result<NaiveDateTime, String> {
    NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S")
        .map_err(|_| format!("error: invalid --reference '{value}' (expected YYYY-MM-DDTHH:MM:SS)"))
}

fn print_help() {
    println!("{}", help_text());
}

fn help_text() -> String {
    format!(
        "plainmetar {version}

Rule-based METAR decoder CLI.

Usage:
  plainmetar [OPTIONS] [--] <report...>
  plainmetar [OPTIONS] --input <text>

Options:
  -i, --input <text>         Raw METAR/SPECI report to decode. If omitted, reads
                             remaining args or stdin when no args are provided.
  --airports <path>          Airport reference table (six-field delimited text).
                             Enables strict station decoding.
  --reference <timestamp>    Reference time in YYYY-MM-DDTHH:MM:SS, used to
                             report the observation's age. Default: now.
  --translate                Print only the plain-language translation.
  --color                    Force ANSI color output.
  --no-color                 Disable ANSI color output.
  -h, --help                 Show this help message.
  -V, --version              Print version information.

Exit codes:
  0  Success.
  1  Internal error.
  2  Invalid arguments or missing input.
",
        version = env!("CARGO_PKG_VERSION"),
    )
}
