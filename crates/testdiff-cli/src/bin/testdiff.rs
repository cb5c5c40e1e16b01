//! Compare test results from a local containerized run and a GitHub Actions
//! run, and report the discrepancies.

use anyhow::{anyhow, bail, Result};
use clap::{Parser, ValueEnum};
use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;
use testdiff_cli::{find_result_pair, load_document};
use testdiff_core::generate_report;
use testdiff_render::{render, Format};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "testdiff")]
#[command(about = "Compare test results from local Docker and GitHub Actions runs")]
struct Cli {
    /// Local test results JSON file
    #[arg(long, value_name = "FILE")]
    local: Option<PathBuf>,

    /// GitHub Actions test results JSON file
    #[arg(long, value_name = "FILE")]
    github: Option<PathBuf>,

    /// Directory containing both result files; the latest match of each
    /// kind is compared
    #[arg(long, value_name = "DIR")]
    results: Option<PathBuf>,

    /// Write the report to this file instead of stdout
    #[arg(long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value_t = FormatArg::Text)]
    format: FormatArg,

    /// Show debug-level detail on stderr
    #[arg(long)]
    verbose: bool,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum FormatArg {
    Text,
    Json,
    Html,
}

impl From<FormatArg> for Format {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Text => Format::Text,
            FormatArg::Json => Format::Json,
            FormatArg::Html => Format::Html,
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let (local_path, github_path) = match (cli.local, cli.github, cli.results) {
        (None, None, Some(dir)) => find_result_pair(&dir)?,
        (Some(local), Some(github), None) => (local, github),
        _ => bail!("must specify both --local and --github, or use --results"),
    };

    let local = load_document(&local_path)?;
    let github = load_document(&github_path)?;

    let report = generate_report(&local, &github);
    let rendered = render(&report, cli.format.into())?;

    match cli.output {
        Some(path) => {
            fs::write(&path, &rendered)
                .map_err(|e| anyhow!("failed to write report to {}: {e}", path.display()))?;
            println!("Report written to: {}", path.display());
        }
        None => println!("{rendered}"),
    }

    Ok(())
}

// Logs go to stderr so stdout stays reserved for the report.
fn init_tracing(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
