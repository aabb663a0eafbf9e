//! Gasifier energy balance entry point: CLI wiring and case loading.

use std::process;

use gasifier_balance::cli::{self, CaseSource, CliOptions, Command};
use gasifier_balance::config::{CaseConfig, ConfigError};
use gasifier_balance::io::export::export_csv;
use gasifier_balance::report::CaseReport;

/// Loads the cases named by the CLI and applies `--set` overrides.
fn load_cases(opts: &CliOptions) -> Result<Vec<CaseConfig>, ConfigError> {
    let mut cases = match &opts.source {
        CaseSource::File(path) => vec![CaseConfig::from_toml_file(path)?],
        CaseSource::Preset(name) => vec![CaseConfig::from_preset(name)?],
        CaseSource::AllPresets => CaseConfig::PRESETS
            .iter()
            .map(|name| CaseConfig::from_preset(name))
            .collect::<Result<_, _>>()?,
    };

    for case in &mut cases {
        for spec in &opts.overrides {
            case.apply_override(spec)?;
        }
    }
    Ok(cases)
}

fn main() {
    let opts = match cli::parse_args() {
        Ok(Command::Run(opts)) => opts,
        Ok(Command::Help) => {
            cli::print_usage();
            process::exit(0);
        }
        Err(e) => {
            eprintln!("error: {e}");
            cli::print_usage();
            process::exit(1);
        }
    };

    let cases = load_cases(&opts).unwrap_or_else(|e| {
        eprintln!("{e}");
        process::exit(1);
    });

    for case in &cases {
        for w in case.warnings() {
            eprintln!("{} ({})", w, case.display_name());
        }
    }

    if opts.tui {
        run_tui(cases);
        return;
    }

    let reports: Vec<CaseReport> = cases.iter().map(CaseReport::from_config).collect();

    for (i, report) in reports.iter().enumerate() {
        if i > 0 {
            println!();
        }
        println!("{report}");
    }

    if let Some(ref path) = opts.csv_out {
        if let Err(e) = export_csv(&reports, path) {
            eprintln!("error: failed to write CSV: {e}");
            process::exit(1);
        }
        eprintln!("Results written to {}", path.display());
    }

    if opts.serve {
        serve(reports, opts.port);
    }
}

#[cfg(feature = "tui")]
fn run_tui(cases: Vec<CaseConfig>) {
    let Some(case) = cases.into_iter().next() else {
        return;
    };
    if let Err(e) = gasifier_balance::tui::run(case) {
        eprintln!("error: TUI crashed: {e}");
        process::exit(1);
    }
}

#[cfg(not(feature = "tui"))]
fn run_tui(_cases: Vec<CaseConfig>) {
    eprintln!("error: --tui requires building with `--features tui`");
    process::exit(1);
}

#[cfg(feature = "api")]
fn serve(reports: Vec<CaseReport>, port: u16) {
    use std::net::SocketAddr;
    use std::sync::Arc;

    let Some(case) = reports.into_iter().next() else {
        return;
    };
    let state = Arc::new(gasifier_balance::api::AppState { case });
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let rt = tokio::runtime::Runtime::new().unwrap_or_else(|e| {
        eprintln!("error: failed to create tokio runtime: {e}");
        process::exit(1);
    });
    if let Err(e) = rt.block_on(gasifier_balance::api::serve(state, addr)) {
        eprintln!("error: API server failed on {addr}: {e}");
        process::exit(1);
    }
}

#[cfg(not(feature = "api"))]
fn serve(_reports: Vec<CaseReport>, _port: u16) {
    eprintln!("error: --serve requires building with `--features api`");
    process::exit(1);
}
