//! PDF-oriented metric variants.
//!
//! PDF parsing itself lives outside this crate; metrics see a PDF only
//! through the [`PdfDocument`] seam, so any backing parser can plug in.

use crate::core::types::{Datatype, DesiredOutcome, Field, FormUnit};
use crate::metrics::{BaseUnit, Metric};

/// One fillable field discovered in a PDF.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PdfFieldDescriptor {
    pub name: String,
    pub field_type: Option<String>,
}

/// Narrow interface to an externally parsed PDF form.
pub trait PdfDocument {
    fn field_descriptors(&self) -> Vec<PdfFieldDescriptor>;
    fn page_count(&self) -> usize;
}

/// Normalize PDF field descriptors into the shared [`Field`] shape so
/// field-granularity metrics apply to both input kinds.
pub fn pdf_fields(pdf: &dyn PdfDocument) -> Vec<Field> {
    pdf.field_descriptors()
        .into_iter()
        .map(|descriptor| Field {
            label: Some(descriptor.name),
            datatype: descriptor
                .field_type
                .as_deref()
                .map(Datatype::parse)
                .unwrap_or_default(),
            inputtype: None,
            options: Vec::new(),
            required: true,
        })
        .collect()
}

/// Page-count metric; long forms take longer to finish.
#[derive(Debug, Default)]
pub struct TotalPages;

impl Metric for TotalPages {
    fn name(&self) -> &'static str {
        "total_pages"
    }

    fn base_unit(&self) -> FormUnit {
        FormUnit::PdfPage
    }

    fn desired_outcome(&self) -> DesiredOutcome {
        DesiredOutcome::QuickCompletion
    }

    fn process_base_unit(&self, unit: &BaseUnit) -> Option<f64> {
        match unit {
            BaseUnit::PdfPage(_) => Some(1.0),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FakePdf;

    impl PdfDocument for FakePdf {
        fn field_descriptors(&self) -> Vec<PdfFieldDescriptor> {
            vec![
                PdfFieldDescriptor {
                    name: "applicant_name".to_string(),
                    field_type: Some("text".to_string()),
                },
                PdfFieldDescriptor {
                    name: "agrees".to_string(),
                    field_type: Some("boolean".to_string()),
                },
            ]
        }

        fn page_count(&self) -> usize {
            3
        }
    }

    #[test]
    fn pdf_fields_normalize_into_shared_field_shape() {
        let fields = pdf_fields(&FakePdf);
        assert_eq!(fields.len(), 2);
        assert_eq!(fields[0].label.as_deref(), Some("applicant_name"));
        assert_eq!(fields[1].datatype, Datatype::Boolean);
        assert!(fields.iter().all(|f| f.required));
    }
}
