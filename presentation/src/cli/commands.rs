//! CLI command definitions

use board_domain::{OutputFormat, SpecialistKind};
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Report format selectable on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    /// Live transcript and the full consensus report
    Full,
    /// Live transcript and a compact consensus report
    Summary,
    /// The whole run as JSON
    Json,
}

impl From<ReportFormat> for OutputFormat {
    fn from(format: ReportFormat) -> Self {
        match format {
            ReportFormat::Full => OutputFormat::Full,
            ReportFormat::Summary => OutputFormat::Summary,
            ReportFormat::Json => OutputFormat::Json,
        }
    }
}

/// CLI arguments for tumor-board
#[derive(Parser, Debug)]
#[command(name = "tumor-board")]
#[command(author, version, about = "Simulated multi-specialist tumor board consultation")]
#[command(long_about = r#"
Tumor Board plays a scripted consultation between medical specialists and
summarizes where they reached consensus.

The panel is, in order of preference:
1. --specialist <ID>   Explicit picks (repeatable)
2. [consultation] default_specialists from the config file
3. A triage suggestion derived from the case text

Configuration files are loaded from (in priority order):
1. TUMOR_BOARD_* environment variables
2. --config <path>          Explicit config file
3. ./tumor-board.toml       Project-level config
4. ~/.config/tumor-board/config.toml   Global config

Example:
  tumor-board "55-year-old with a lung mass on CT"
  tumor-board -s radiologist -s pathologist -s oncologist "lung mass"
  tumor-board --suggest "new seizures and a brain lesion"
"#)]
pub struct Cli {
    /// Free-text description of the case
    pub case: Option<String>,

    /// Specialists on the panel (can be specified multiple times)
    #[arg(short, long, value_name = "ID")]
    pub specialist: Vec<SpecialistKind>,

    /// Print the triage suggestion for the case and exit
    #[arg(long)]
    pub suggest: bool,

    /// List the available specialists and exit
    #[arg(long)]
    pub list_specialists: bool,

    /// Reveal the transcript without delays
    #[arg(long)]
    pub instant: bool,

    /// Seed for reproducible pacing and phrasing
    #[arg(long, value_name = "SEED")]
    pub seed: Option<u64>,

    /// Output format (defaults to the config file, then summary)
    #[arg(short, long, value_enum)]
    pub output: Option<ReportFormat>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress the typing indicator
    #[arg(short, long)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,

    /// Write diagnostic logs to this file instead of stderr
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Record every playback event as JSON lines in this file
    #[arg(long, value_name = "PATH")]
    pub transcript_log: Option<PathBuf>,

    /// Start the consultation even when no specialist is selected
    #[arg(long)]
    pub allow_empty: bool,
}
