//! Command-line argument parsing.

use std::env;
use std::path::PathBuf;

/// Default API server port.
pub const DEFAULT_PORT: u16 = 3000;

/// Where the cases to compute come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CaseSource {
    /// TOML case file.
    File(PathBuf),
    /// Named built-in preset.
    Preset(String),
    /// Every built-in preset, in order.
    AllPresets,
}

/// Parsed CLI options.
#[derive(Debug, Clone)]
pub struct CliOptions {
    pub source: CaseSource,
    /// `key=value` field overrides applied to every case.
    pub overrides: Vec<String>,
    pub csv_out: Option<PathBuf>,
    pub tui: bool,
    pub serve: bool,
    pub port: u16,
}

/// Result of parsing: either options to run with, or a help request.
#[derive(Debug, Clone)]
pub enum Command {
    Run(CliOptions),
    Help,
}

/// Parses the process arguments.
///
/// # Errors
///
/// Returns a message describing the first invalid argument.
pub fn parse_args() -> Result<Command, String> {
    parse_args_from(env::args().skip(1).collect())
}

/// Parses an argument list (without the program name).
///
/// # Errors
///
/// Returns a message describing the first invalid argument.
pub fn parse_args_from(args: Vec<String>) -> Result<Command, String> {
    let mut i = 0usize;
    let mut case = None;
    let mut preset = None;
    let mut overrides = Vec::new();
    let mut csv_out = None;
    let mut tui = false;
    let mut serve = false;
    let mut port = None;

    while i < args.len() {
        match args[i].as_str() {
            "--case" => {
                i += 1;
                let path = args.next_or_err(
                    i,
                    "missing value for --case (expected a TOML file path)",
                )?;
                if case.replace(PathBuf::from(path)).is_some() {
                    return Err("--case provided more than once".to_string());
                }
            }
            "--preset" => {
                i += 1;
                let name = args.next_or_err(
                    i,
                    "missing value for --preset (expected a preset name or `all`)",
                )?;
                if preset.replace(name.to_string()).is_some() {
                    return Err("--preset provided more than once".to_string());
                }
            }
            "--set" => {
                i += 1;
                let spec = args.next_or_err(i, "missing value for --set (expected key=value)")?;
                overrides.push(spec.to_string());
            }
            "--csv-out" => {
                i += 1;
                let path = args.next_or_err(
                    i,
                    "missing value for --csv-out (expected a file path)",
                )?;
                if csv_out.replace(PathBuf::from(path)).is_some() {
                    return Err("--csv-out provided more than once".to_string());
                }
            }
            "--tui" => tui = true,
            "--serve" => serve = true,
            "--port" => {
                i += 1;
                let raw = args.next_or_err(i, "missing value for --port (expected a u16)")?;
                let p = raw
                    .parse::<u16>()
                    .map_err(|_| format!("--port value \"{raw}\" is not a valid u16"))?;
                port = Some(p);
            }
            "--help" | "-h" => return Ok(Command::Help),
            other => return Err(format!("unknown argument: {other}")),
        }
        i += 1;
    }

    let source = match (case, preset) {
        (Some(_), Some(_)) => {
            return Err(
                "arguments `--case` and `--preset` are mutually exclusive; choose one source"
                    .to_string(),
            );
        }
        (Some(path), None) => CaseSource::File(path),
        (None, Some(name)) if name == "all" => CaseSource::AllPresets,
        (None, Some(name)) => CaseSource::Preset(name),
        (None, None) => CaseSource::Preset("reference".to_string()),
    };

    if tui && serve {
        return Err("arguments `--tui` and `--serve` are mutually exclusive".to_string());
    }
    if tui && csv_out.is_some() {
        return Err("arguments `--tui` and `--csv-out` are mutually exclusive".to_string());
    }
    if port.is_some() && !serve {
        return Err("--port requires --serve".to_string());
    }
    if (tui || serve) && source == CaseSource::AllPresets {
        return Err("`--preset all` cannot be combined with --tui or --serve".to_string());
    }

    Ok(Command::Run(CliOptions {
        source,
        overrides,
        csv_out,
        tui,
        serve,
        port: port.unwrap_or(DEFAULT_PORT),
    }))
}

trait SliceArgExt {
    fn next_or_err(&self, index: usize, err: &str) -> Result<&str, String>;
}

impl SliceArgExt for [String] {
    fn next_or_err(&self, index: usize, err: &str) -> Result<&str, String> {
        self.get(index)
            .map(String::as_str)
            .ok_or_else(|| err.to_string())
    }
}

/// Prints usage to stderr.
pub fn print_usage() {
    eprintln!("gasifier-balance: biomass gasification energy balance calculator");
    eprintln!();
    eprintln!("Usage: gasifier-balance [OPTIONS]");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --case <path>            Load the case from a TOML file");
    eprintln!("  --preset <name>          Built-in preset: reference, lean_gas, hot_outlet, all");
    eprintln!("  --set <key=value>        Override an input, e.g. syngas.temp_out_c=400");
    eprintln!("  --csv-out <path>         Export computed cases to CSV");
    eprintln!("  --tui                    Open the interactive calculator (feature `tui`)");
    eprintln!("  --serve                  Serve the JSON API (feature `api`)");
    eprintln!("  --port <u16>             API server port (default: {DEFAULT_PORT})");
    eprintln!("  --help                   Show this help message");
    eprintln!();
    eprintln!("If no --case or --preset is given, the reference preset is used.");
}
