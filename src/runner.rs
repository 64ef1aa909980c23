//! The run orchestrator: wires extractors to metrics and aggregates results.

use crate::core::types::{
    BatchReport, FileFailure, FileReport, FormUnit, HowUsed, LintReport, Warning,
};
use crate::core::Document;
use crate::errors::Result;
use crate::extraction::{extract_fields, extract_headings, extract_text};
use crate::io::loader::{load_interview, parse_documents};
use crate::io::walker::InterviewWalker;
use crate::lang::{SimpleTokenizer, Tokenizer};
use crate::metrics::pdf::{pdf_fields, PdfDocument};
use crate::metrics::{heading_width, text_style, BaseUnit, Metric};
use log::info;
use rayon::prelude::*;
use std::path::Path;

/// Dispatches base units to each metric and aggregates scores and warnings.
///
/// Metrics are dispatched purely on their declared base unit, so new metric
/// variants plug in without touching this type.
pub struct MetricRunner {
    metrics: Vec<Box<dyn Metric>>,
    tokenizer: Box<dyn Tokenizer>,
}

impl MetricRunner {
    pub fn new(metrics: Vec<Box<dyn Metric>>) -> Self {
        Self {
            metrics,
            tokenizer: Box::new(SimpleTokenizer),
        }
    }

    pub fn with_tokenizer(mut self, tokenizer: Box<dyn Tokenizer>) -> Self {
        self.tokenizer = tokenizer;
        self
    }

    /// Lint one parsed interview document sequence.
    pub fn run_documents(&self, documents: &[Document]) -> LintReport {
        let texts = extract_text(documents);
        let fields = extract_fields(documents);
        let headings = extract_headings(documents);

        let mut report = LintReport::default();
        report.warnings = heading_width::heading_violations(&headings);
        report
            .warnings
            .extend(text_style::text_violations(&texts));

        // Word and sentence metrics see rendered prose, not raw markup.
        let rendered: Vec<String> = texts
            .iter()
            .map(|t| crate::render::render_plain_text(t))
            .collect();
        let words: Vec<String> = rendered
            .iter()
            .flat_map(|t| self.tokenizer.words(t))
            .collect();
        let sentences: Vec<String> = rendered
            .iter()
            .flat_map(|t| self.tokenizer.sentences(t))
            .collect();

        for metric in &self.metrics {
            let units: Option<Vec<BaseUnit>> = match metric.base_unit() {
                FormUnit::Word => Some(words.iter().map(|w| BaseUnit::Word(w)).collect()),
                FormUnit::Sentence => {
                    Some(sentences.iter().map(|s| BaseUnit::Sentence(s)).collect())
                }
                FormUnit::Field => Some(fields.iter().map(BaseUnit::Field).collect()),
                FormUnit::WholeForm => Some(vec![BaseUnit::WholeForm(documents)]),
                // PDF-granularity metrics do not apply to YAML interviews.
                _ => None,
            };
            if let Some(units) = units {
                self.apply_metric(metric.as_ref(), &units, &mut report);
            }
        }
        report
    }

    /// Lint an externally parsed PDF form.
    pub fn run_pdf(&self, pdf: &dyn PdfDocument) -> LintReport {
        let fields = pdf_fields(pdf);
        let mut report = LintReport::default();
        for metric in &self.metrics {
            let units: Option<Vec<BaseUnit>> = match metric.base_unit() {
                FormUnit::Field => Some(fields.iter().map(BaseUnit::Field).collect()),
                FormUnit::PdfPage => {
                    Some((0..pdf.page_count()).map(BaseUnit::PdfPage).collect())
                }
                _ => None,
            };
            if let Some(units) = units {
                self.apply_metric(metric.as_ref(), &units, &mut report);
            }
        }
        if let (Some(&total_fields), Some(&total_pages)) = (
            report.scores.get("total_fields"),
            report.scores.get("total_pages"),
        ) {
            if total_pages > 0.0 {
                report
                    .scores
                    .insert("avg_fields_per_page".to_string(), total_fields / total_pages);
            }
        }
        report
    }

    fn apply_metric(&self, metric: &dyn Metric, units: &[BaseUnit], report: &mut LintReport) {
        let mut running = 0.0;
        let mut violations = 0usize;
        for unit in units {
            if let Some(partial) = metric.process_base_unit(unit) {
                running = metric.aggregate(running, partial);
                if metric.is_violation(partial) {
                    violations += 1;
                }
            }
        }
        report.scores.insert(metric.name().to_string(), running);
        // Irreducible metrics score the form's inherent complexity; only
        // improvable ones turn violations into advice.
        if violations > 0 && metric.how_used() == HowUsed::ToImprove {
            if let Some(warning) = metric.suggestion(violations) {
                report.warnings.push(Warning::new(
                    format!(
                        "{}: {}",
                        metric.desired_outcome().display_name(),
                        warning.message
                    ),
                    warning.reference,
                ));
            }
        }
    }
}

/// Lint raw interview text end to end.
pub fn lint_interview(raw: &str, runner: &MetricRunner) -> Result<LintReport> {
    let documents = parse_documents(raw)?;
    Ok(runner.run_documents(&documents))
}

/// Lint one file or every interview file under a directory.
///
/// A file that fails to parse contributes one failure entry; the rest of the
/// batch proceeds. Files are independent, so the batch runs in parallel.
pub fn lint_path(path: &Path, runner: &MetricRunner) -> anyhow::Result<BatchReport> {
    let files = if path.is_dir() {
        InterviewWalker::new(path).walk()?
    } else {
        vec![path.to_path_buf()]
    };
    info!("linting {} interview file(s)", files.len());

    let outcomes: Vec<_> = files
        .par_iter()
        .map(|file| match load_interview(file) {
            Ok(documents) => Ok(FileReport {
                path: file.clone(),
                report: runner.run_documents(&documents),
            }),
            Err(err) => Err(FileFailure {
                path: file.clone(),
                error: err.to_string(),
            }),
        })
        .collect();

    let mut batch = BatchReport::default();
    for outcome in outcomes {
        match outcome {
            Ok(report) => batch.files.push(report),
            Err(failure) => batch.failures.push(failure),
        }
    }
    Ok(batch)
}

/// The default metric set; the uncommon-words metric joins when a frequency
/// table is supplied.
pub fn default_metrics(frequency_table: Option<&Path>) -> Result<Vec<Box<dyn Metric>>> {
    let mut metrics: Vec<Box<dyn Metric>> = vec![
        Box::new(crate::metrics::TotalFields),
        Box::new(crate::metrics::pdf::TotalPages),
    ];
    if let Some(path) = frequency_table {
        metrics.push(Box::new(crate::metrics::UncommonWords::from_path(path)?));
    }
    Ok(metrics)
}
