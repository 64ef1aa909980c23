use anyhow::Result;
use clap::Parser;
use formlint::cli::{Cli, Commands, OutputFormat};
use formlint::io::output::{self, OutputWriter};
use formlint::runner::{default_metrics, lint_path, MetricRunner};
use std::fs::File;
use std::io::{self as stdio, Write};
use std::path::PathBuf;

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Lint {
            path,
            format,
            output,
            frequency_file,
        } => handle_lint(path, format, output, frequency_file),
    }
}

fn handle_lint(
    path: PathBuf,
    format: OutputFormat,
    output: Option<PathBuf>,
    frequency_file: Option<PathBuf>,
) -> Result<()> {
    let metrics = default_metrics(frequency_file.as_deref())?;
    let runner = MetricRunner::new(metrics);
    let batch = lint_path(&path, &runner)?;

    let destination: Box<dyn Write> = match output {
        Some(file) => Box::new(File::create(file)?),
        None => Box::new(stdio::stdout()),
    };
    let mut writer = create_writer(format, destination);
    writer.write_batch(&batch)?;

    if !batch.failures.is_empty() {
        std::process::exit(1);
    }
    Ok(())
}

fn create_writer(format: OutputFormat, destination: Box<dyn Write>) -> Box<dyn OutputWriter> {
    let format = match format {
        OutputFormat::Terminal => output::OutputFormat::Terminal,
        OutputFormat::Json => output::OutputFormat::Json,
    };
    output::create_writer(format, destination)
}
