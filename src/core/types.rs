//! Common type definitions used across the codebase

use serde::{Serialize, Serializer};
use std::collections::BTreeMap;

/// Data type of a user-input element.
///
/// Interview authors can declare any datatype string; the variants cover the
/// ones the linter treats specially, everything else is carried through as
/// [`Datatype::Other`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Datatype {
    Boolean,
    Text,
    Signature,
    Checkboxes,
    Other(String),
}

impl Datatype {
    /// Parse an author-written datatype string.
    pub fn parse(raw: &str) -> Self {
        match raw {
            "boolean" => Datatype::Boolean,
            "text" => Datatype::Text,
            "signature" => Datatype::Signature,
            "checkboxes" => Datatype::Checkboxes,
            other => Datatype::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Datatype::Boolean => "boolean",
            Datatype::Text => "text",
            Datatype::Signature => "signature",
            Datatype::Checkboxes => "checkboxes",
            Datatype::Other(name) => name,
        }
    }
}

impl Default for Datatype {
    fn default() -> Self {
        Datatype::Text
    }
}

impl std::fmt::Display for Datatype {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Datatype {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// UI widget hint for a field.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum InputType {
    Radio,
    Buttons,
    Dropdown,
    Combobox,
    Signature,
    Other(String),
}

impl InputType {
    pub fn parse(raw: &str) -> Self {
        match raw {
            "radio" => InputType::Radio,
            "buttons" => InputType::Buttons,
            "dropdown" => InputType::Dropdown,
            "combobox" => InputType::Combobox,
            "signature" => InputType::Signature,
            other => InputType::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            InputType::Radio => "radio",
            InputType::Buttons => "buttons",
            InputType::Dropdown => "dropdown",
            InputType::Combobox => "combobox",
            InputType::Signature => "signature",
            InputType::Other(name) => name,
        }
    }
}

impl std::fmt::Display for InputType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for InputType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// Normalized description of one user-input element.
///
/// Invariants: `datatype` is always set (`text` when the author gave none) and
/// `options` is always present, possibly empty, even when the source shape had
/// no option list at all.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Field {
    pub label: Option<String>,
    pub datatype: Datatype,
    pub inputtype: Option<InputType>,
    pub options: Vec<String>,
    pub required: bool,
}

impl Default for Field {
    fn default() -> Self {
        Field {
            label: None,
            datatype: Datatype::default(),
            inputtype: None,
            options: Vec::new(),
            required: true,
        }
    }
}

/// One lint finding: a human-readable message plus a documentation link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Warning {
    pub message: String,
    pub reference: String,
}

impl Warning {
    pub fn new(message: impl Into<String>, reference: impl Into<String>) -> Self {
        Warning {
            message: message.into(),
            reference: reference.into(),
        }
    }
}

/// Aggregated result of linting one interview or PDF.
#[derive(Debug, Clone, Default, Serialize)]
pub struct LintReport {
    pub warnings: Vec<Warning>,
    pub scores: BTreeMap<String, f64>,
}

/// Lint results for one file in a batch run.
#[derive(Debug, Clone, Serialize)]
pub struct FileReport {
    pub path: std::path::PathBuf,
    pub report: LintReport,
}

/// A file that failed to parse. Batch runs record the failure and continue.
#[derive(Debug, Clone, Serialize)]
pub struct FileFailure {
    pub path: std::path::PathBuf,
    pub error: String,
}

/// Results for a whole batch of interview files.
#[derive(Debug, Clone, Default, Serialize)]
pub struct BatchReport {
    pub files: Vec<FileReport>,
    pub failures: Vec<FileFailure>,
}

impl BatchReport {
    pub fn total_warnings(&self) -> usize {
        self.files.iter().map(|f| f.report.warnings.len()).sum()
    }
}

/// Granularity a metric operates over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormUnit {
    WholeForm,
    /// One screen plus its surrounding screens; in a PDF, one page.
    QuestionWithSurround,
    Question,
    Field,
    Sentence,
    Word,
    PdfPage,
}

/// User-experience outcome a metric is meant to improve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DesiredOutcome {
    QuickCompletion,
    Readable,
    BuildTrust,
    QuestionFlow,
    RespectPrivacy,
    FeelHeard,
}

impl DesiredOutcome {
    pub fn display_name(&self) -> &str {
        match self {
            DesiredOutcome::QuickCompletion => "Quick completion",
            DesiredOutcome::Readable => "Readability",
            DesiredOutcome::BuildTrust => "Trust",
            DesiredOutcome::QuestionFlow => "Question flow",
            DesiredOutcome::RespectPrivacy => "Privacy",
            DesiredOutcome::FeelHeard => "Being heard",
        }
    }
}

/// Whether a metric's finding is actionable or inherent to the form's subject.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HowUsed {
    ToImprove,
    Irreducible,
}
