pub mod document;
pub mod types;

pub use document::Document;
pub use types::{
    Datatype, DesiredOutcome, Field, FormUnit, HowUsed, InputType, LintReport, Warning,
};
