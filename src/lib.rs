// Export modules for library usage
pub mod cli;
pub mod core;
pub mod errors;
pub mod extraction;
pub mod io;
pub mod lang;
pub mod metrics;
pub mod render;
pub mod runner;

// Re-export commonly used types
pub use crate::core::{
    Datatype, DesiredOutcome, Document, Field, FormUnit, HowUsed, InputType, LintReport, Warning,
};

pub use crate::core::types::{BatchReport, FileFailure, FileReport};

pub use crate::errors::LintError;

pub use crate::extraction::{extract_fields, extract_headings, extract_text};

pub use crate::io::loader::{load_interview, parse_documents};
pub use crate::io::output::{create_writer, OutputWriter};
pub use crate::io::walker::InterviewWalker;

pub use crate::metrics::{BaseUnit, Metric, TotalFields, UncommonWords};

pub use crate::runner::{default_metrics, lint_interview, lint_path, MetricRunner};
