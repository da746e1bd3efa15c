//! CLI argument parsing and overrides
//!
//! # Usage
//!
//! ```bash
//! afinar validate run.yaml
//! afinar info run.yaml --format yaml
//! afinar prepare run.yaml --input conversations.json --output ./prepared
//! afinar eval --pairs generations.jsonl
//! ```

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use super::schema::FinetuneSpec;

/// Afinar: chat fine-tuning preparation and evaluation
#[derive(Parser, Debug, Clone, PartialEq)]
#[command(name = "afinar")]
#[command(version)]
#[command(about = "Prepare conversational fine-tuning data and score generated completions")]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Validate a run specification without doing anything
    Validate(ValidateArgs),

    /// Display a parsed run specification
    Info(InfoArgs),

    /// Render, filter, and split a conversation dataset
    Prepare(PrepareArgs),

    /// Score reference/generated pairs
    Eval(EvalArgs),
}

/// Arguments for the validate command
#[derive(Parser, Debug, Clone, PartialEq)]
pub struct ValidateArgs {
    /// Path to YAML run specification
    #[arg(value_name = "CONFIG")]
    pub config: PathBuf,

    /// Show a detailed summary after validation
    #[arg(short, long)]
    pub detailed: bool,
}

/// Arguments for the info command
#[derive(Parser, Debug, Clone, PartialEq)]
pub struct InfoArgs {
    /// Path to YAML run specification
    #[arg(value_name = "CONFIG")]
    pub config: PathBuf,

    /// Output format (text, json, yaml)
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,
}

/// Arguments for the prepare command
#[derive(Parser, Debug, Clone, PartialEq)]
pub struct PrepareArgs {
    /// Path to YAML run specification
    #[arg(value_name = "CONFIG")]
    pub config: PathBuf,

    /// JSON file holding an array of conversations
    #[arg(short, long)]
    pub input: PathBuf,

    /// Directory to write train/test record files into
    #[arg(short, long)]
    pub output: PathBuf,

    /// Override the held-out fraction
    #[arg(long)]
    pub test_size: Option<f64>,

    /// Override the shuffle seed
    #[arg(long)]
    pub seed: Option<u64>,

    /// Override the per-example token budget
    #[arg(long)]
    pub max_seq_len: Option<usize>,
}

/// Arguments for the eval command
#[derive(Parser, Debug, Clone, PartialEq)]
pub struct EvalArgs {
    /// JSONL file of {"reference": ..., "generated": ...} records
    #[arg(short, long)]
    pub pairs: PathBuf,

    /// Output format (text, json)
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,
}

/// Output format for info and eval
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Yaml,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            "yaml" => Ok(OutputFormat::Yaml),
            _ => Err(format!(
                "Unknown output format: {s}. Valid formats: text, json, yaml"
            )),
        }
    }
}

/// Parse command-line arguments
pub fn parse_args() -> Cli {
    Cli::parse()
}

/// Apply prepare-command overrides to a loaded specification
pub fn apply_overrides(spec: &mut FinetuneSpec, args: &PrepareArgs) {
    if let Some(test_size) = args.test_size {
        spec.data.test_size = test_size;
    }
    if let Some(seed) = args.seed {
        spec.data.seed = seed;
    }
    if let Some(max_seq_len) = args.max_seq_len {
        spec.model.max_seq_len = max_seq_len;
    }
}
