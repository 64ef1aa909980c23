use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable colored output
    Terminal,
    /// Machine-readable JSON
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "formlint")]
#[command(about = "Plain-language and complexity linter for guided interview forms", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Lint one interview file or every interview under a directory
    Lint {
        /// Interview YAML file or directory to lint
        path: PathBuf,

        /// Output format
        #[arg(short, long, value_enum, default_value = "terminal")]
        format: OutputFormat,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Word-frequency table (tab-separated word/count lines) enabling the
        /// uncommon-words metric
        #[arg(long = "frequency-file", env = "FORMLINT_FREQUENCY_FILE")]
        frequency_file: Option<PathBuf>,
    },
}
