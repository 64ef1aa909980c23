//! Pluggable quality metrics.
//!
//! Each metric declares the base unit it consumes and is dispatched by the
//! runner on that declaration alone; adding a new metric never touches the
//! runner. Metrics are stateless across runs apart from reference data loaded
//! once at construction.

pub mod heading_width;
pub mod pdf;
pub mod text_style;
pub mod total_fields;
pub mod uncommon_words;

use crate::core::types::{DesiredOutcome, Field, FormUnit, HowUsed, Warning};
use crate::core::Document;

pub use total_fields::TotalFields;
pub use uncommon_words::UncommonWords;

/// One unit of work handed to a metric, at the granularity it declared.
#[derive(Debug, Clone, Copy)]
pub enum BaseUnit<'a> {
    WholeForm(&'a [Document]),
    Field(&'a Field),
    Sentence(&'a str),
    Word(&'a str),
    PdfPage(usize),
}

/// A single quality metric over one base unit at a time.
pub trait Metric: Send + Sync {
    /// Short identifier used as the score key in reports.
    fn name(&self) -> &'static str;

    /// The granularity this metric consumes.
    fn base_unit(&self) -> FormUnit;

    fn desired_outcome(&self) -> DesiredOutcome;

    fn how_used(&self) -> HowUsed {
        HowUsed::ToImprove
    }

    /// Per-unit threshold; units scoring below it are counted as violations.
    /// `None` means the metric only produces a score.
    fn violation_value(&self) -> Option<f64> {
        None
    }

    /// Score one base unit; `None` when the unit does not apply.
    fn process_base_unit(&self, unit: &BaseUnit) -> Option<f64>;

    /// Fold one partial result into the running total.
    fn aggregate(&self, running: f64, partial: f64) -> f64 {
        running + partial
    }

    /// Whether one unit's partial result counts as a violation, derived from
    /// the declared [`Metric::violation_value`] threshold.
    fn is_violation(&self, partial: f64) -> bool {
        self.violation_value()
            .is_some_and(|threshold| partial < threshold)
    }

    /// A warning summarizing this run's violations, if any advice applies.
    fn suggestion(&self, _violations: usize) -> Option<Warning> {
        None
    }
}
