use clap::Parser;
use log::LevelFilter;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

mod model;
mod prompt;
mod render;
mod rlc;

pub type Result<T> = anyhow::Result<T>;

#[derive(Parser)]
#[command(name = "rlc-throughput")]
#[command(about = "Per-UE UL/DL throughput from RLC protocol logs", long_about = None)]
struct Cli {
    /// RLC log file. Prompted for interactively when omitted.
    log: Option<PathBuf>,

    /// Stop prompting after this many invalid paths (default: keep asking).
    #[arg(long)]
    max_attempts: Option<usize>,

    /// Print the full result as JSON instead of the table.
    #[arg(long)]
    json: bool,

    /// Increase log verbosity (-v info, -vv debug). RUST_LOG overrides.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let stdout = io::stdout();
    if !cli.json {
        println!("=== RLC Log Throughput Analyzer ===");
    }

    // Resolve the input path.
    let path = match &cli.log {
        Some(p) => prompt::check_path(p),
        None => prompt::prompt_for_path(io::stdin().lock(), stdout.lock(), cli.max_attempts),
    };
    let path = match path {
        Ok(p) => p,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            return ExitCode::FAILURE;
        }
    };

    // Everything after this point reports a single diagnostic on failure.
    let mut out = stdout.lock();
    match run(&path, cli.json, &mut out) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            let _ = writeln!(out, "\nError processing file: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

/// Parse, aggregate and print. Nothing is printed past "Processing logs..."
/// unless the whole file was read.
fn run<W: Write>(path: &Path, json: bool, out: &mut W) -> Result<()> {
    if !json {
        writeln!(out, "\nProcessing logs...")?;
    }

    // Extract records, then aggregate.
    let records = rlc::parse_log_file(path)?;
    let result = model::build_throughput(&records);

    if result.is_empty() {
        if !json {
            writeln!(out, "No matching RLC log records found in file.")?;
            return Ok(());
        }
        eprintln!("No matching RLC log records found in file.");
    }

    if json {
        writeln!(out, "{}", render::render_json(&result)?)?;
    } else {
        writeln!(out, "\nResults:")?;
        write!(out, "{}", render::render_table(&result)?)?;
        writeln!(out, "\nDone!")?;
    }

    Ok(())
}
