use crate::services::config::{CategoryRule, OrganizerConfig};
use crate::services::organizer;
use crate::types::{OrganizeResult, RunReport};
use anyhow::{Context, Result};
use clap::Parser;
use std::fs;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "zipflat")]
#[command(author, version, about = "Extract ZIP archives and flatten their container folders")]
pub struct Cli {
    /// Folder containing the archives (not searched recursively)
    pub source: PathBuf,

    /// Destination folder, created if absent (defaults to SOURCE/extracted)
    #[arg(long, short)]
    pub dest: Option<PathBuf>,

    /// Regex for folder names kept as categories (defaults to a leading digit)
    #[arg(long)]
    pub keep_pattern: Option<String>,

    /// Charset the console can display, e.g. shift_jis; other names are escaped in logs
    #[arg(long)]
    pub console_encoding: Option<String>,

    /// Write the run report as JSON to this file
    #[arg(long)]
    pub report: Option<PathBuf>,

    /// Enable verbose output for debugging
    #[arg(long, short)]
    pub verbose: bool,
}

impl Cli {
    pub fn to_config(&self) -> OrganizeResult<OrganizerConfig> {
        let mut config = match &self.dest {
            Some(dest) => OrganizerConfig::new(&self.source, dest),
            None => OrganizerConfig::from_source(&self.source),
        };
        if let Some(expr) = &self.keep_pattern {
            config = config.with_category_rule(CategoryRule::pattern(expr)?);
        }
        if let Some(label) = &self.console_encoding {
            config = config.with_console_encoding(label)?;
        }
        Ok(config)
    }
}

/// Parse arguments, set up logging and run.
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    execute(&cli)?;
    Ok(())
}

/// Run with already-parsed arguments. Recorded failures do not make this
/// return an error; only setup problems do.
pub fn execute(cli: &Cli) -> Result<RunReport> {
    let config = cli.to_config()?;
    let report = organizer::run(&config)?;

    if let Some(path) = &cli.report {
        let json = serde_json::to_string_pretty(&report).context("Failed to serialize report")?;
        fs::write(path, json)
            .with_context(|| format!("Failed to write report to {}", path.display()))?;
    }

    Ok(report)
}

fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "info" };
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_target(false)
        .try_init();
}
