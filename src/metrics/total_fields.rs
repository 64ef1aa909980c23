//! Total-field-count metric: every field a user has to fill in costs
//! completion time.

use crate::core::types::{DesiredOutcome, FormUnit};
use crate::metrics::{BaseUnit, Metric};

#[derive(Debug, Default)]
pub struct TotalFields;

impl Metric for TotalFields {
    fn name(&self) -> &'static str {
        "total_fields"
    }

    fn base_unit(&self) -> FormUnit {
        FormUnit::Field
    }

    fn desired_outcome(&self) -> DesiredOutcome {
        DesiredOutcome::QuickCompletion
    }

    fn process_base_unit(&self, unit: &BaseUnit) -> Option<f64> {
        match unit {
            BaseUnit::Field(_) => Some(1.0),
            _ => None,
        }
    }
}
