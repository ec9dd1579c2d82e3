//! durank - rank the largest files under a directory tree.
//!
//! Usage:
//!   durank [PATH]                  Rank the 100 largest files under PATH
//!   durank -n 20 --exclude .git    Keep 20, skipping anything named .git
//!   durank --format json           Machine-readable output
//!   durank --help                  Show help

mod report;

use std::io::{self, Write};
use std::num::NonZeroUsize;
use std::path::PathBuf;

use clap::{ArgAction, Parser};
use color_eyre::eyre::{Context, Result};
use tracing::Level;

use durank_core::{DEFAULT_TOP_N, ScanConfig, ScanError};
use durank_scan::TreeWalker;

use report::{ListStyle, OutputFormat};

#[derive(Parser)]
#[command(
    name = "durank",
    version,
    about = "Rank the largest files under a directory tree",
    long_about = "durank walks a directory tree and reports the N largest files it \
                  finds along with the total size scanned.\n\n\
                  Unreadable directories and files that disappear mid-scan are \
                  skipped with a warning, so the results are a lower bound."
)]
struct Cli {
    /// Directory to scan (defaults to current directory)
    #[arg(default_value = ".")]
    path: PathBuf,

    /// Number of files to rank
    #[arg(short = 'n', long = "top", default_value_t = DEFAULT_TOP_N)]
    top: NonZeroUsize,

    /// Skip entries with this exact name (repeatable)
    #[arg(long, value_name = "NAME")]
    exclude: Vec<String>,

    /// Output format
    #[arg(short, long, default_value = "text")]
    format: OutputFormat,

    /// Layout of each ranked line in text output
    #[arg(short, long, default_value = "ranked")]
    style: ListStyle,

    /// Log more detail to stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, conflicts_with = "quiet")]
    verbose: u8,

    /// Only log errors
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();
    init_logging(cli.verbose, cli.quiet);

    let config = ScanConfig::builder()
        .root(cli.path)
        .top_n(cli.top)
        .excluded_names(cli.exclude)
        .build()
        .context("Invalid configuration")?;

    tracing::info!(root = %config.root.display(), top = config.top_n.get(), "scanning");

    let result = match TreeWalker::new(config).scan() {
        Ok(result) => result,
        Err(ScanError::NotADirectory { path }) => {
            eprintln!("ERROR: {} is not a directory", path.display());
            return Ok(());
        }
        Err(err) => return Err(err).context("Scan failed"),
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match cli.format {
        OutputFormat::Text => report::write_text(&mut out, &result, cli.style)?,
        OutputFormat::Json => report::write_json(&mut out, &result)?,
    }
    out.flush()?;

    Ok(())
}

/// Install the stderr log subscriber. Warnings are shown by default.
fn init_logging(verbose: u8, quiet: bool) {
    let level = if quiet {
        Level::ERROR
    } else {
        match verbose {
            0 => Level::WARN,
            1 => Level::INFO,
            2 => Level::DEBUG,
            _ => Level::TRACE,
        }
    };

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}
