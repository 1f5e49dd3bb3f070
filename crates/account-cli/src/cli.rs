//! CLI argument definitions for the ACCOuNT data validator.

use std::path::PathBuf;

use account_cli::pipeline::ArmInput;
use account_model::TreatmentArm;
use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "account",
    version,
    about = "ACCOuNT data validator - check and reshape consortium data files",
    long_about = "Validate the clopidogrel, NOAC and warfarin data files of the ACCOuNT\n\
                  consortium, write a tab-separated validation report and publish one\n\
                  reshaped CSV file per treatment arm."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// Allow raw cell values in log events (they may identify patients).
    #[arg(long = "log-data", global = true)]
    pub log_data: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Validate arm files and write the report and reshaped outputs.
    Process(ProcessArgs),

    /// List the field catalog.
    Fields,

    /// Compare arm file headers with the expected layouts.
    Analyze(AnalyzeArgs),
}

/// The arm data files; at least one is required.
#[derive(Args)]
#[group(required = true, multiple = true)]
pub struct ArmFiles {
    /// Clopidogrel arm data file.
    #[arg(long, value_name = "PATH")]
    pub clopidogrel: Option<PathBuf>,

    /// NOAC arm data file.
    #[arg(long, value_name = "PATH")]
    pub noac: Option<PathBuf>,

    /// Warfarin arm data file.
    #[arg(long, value_name = "PATH")]
    pub warfarin: Option<PathBuf>,
}

impl ArmFiles {
    /// Given files in arm order.
    pub fn inputs(&self) -> Vec<ArmInput> {
        [
            (TreatmentArm::Clopidogrel, &self.clopidogrel),
            (TreatmentArm::Noac, &self.noac),
            (TreatmentArm::Warfarin, &self.warfarin),
        ]
        .into_iter()
        .filter_map(|(arm, path)| {
            path.as_ref().map(|path| ArmInput {
                arm,
                path: path.clone(),
            })
        })
        .collect()
    }
}

#[derive(Parser)]
pub struct ProcessArgs {
    #[command(flatten)]
    pub files: ArmFiles,

    /// File of `SITE=ID` lines translating project sites.
    #[arg(long = "site-key", value_name = "PATH")]
    pub site_key: Option<PathBuf>,

    /// Directory for the validation report and reshaped files.
    #[arg(long = "output-dir", value_name = "DIR", default_value = "out")]
    pub output_dir: PathBuf,

    /// TOML file of `[descriptions]` for the second output header row.
    #[arg(long = "descriptions", value_name = "PATH")]
    pub descriptions: Option<PathBuf>,

    /// Write a JSON run summary with every validation message.
    #[arg(long = "summary-json", value_name = "PATH")]
    pub summary_json: Option<PathBuf>,

    /// Exit with status 1 when any validation message was reported.
    #[arg(long = "fail-on-invalid")]
    pub fail_on_invalid: bool,
}

#[derive(Parser)]
pub struct AnalyzeArgs {
    #[command(flatten)]
    pub files: ArmFiles,

    /// Write a CSV listing which arm files publish each field.
    #[arg(long = "coverage", value_name = "PATH")]
    pub coverage: Option<PathBuf>,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
