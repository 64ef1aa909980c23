//! Interview document loading.
//!
//! An interview file is multi-document YAML, one sub-document per screen.
//! Authors regularly leave literal tabs in files even though YAML forbids
//! them in indentation, so tabs are normalized to two spaces before parsing.
//! A sub-document consisting only of the `---` separator parses to null and
//! is kept in the sequence; every consumer skips nulls itself.

use crate::core::Document;
use crate::errors::{LintError, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Parse raw text into the ordered sequence of interview documents.
///
/// The only hard failure in the whole pipeline: unparseable text produces
/// [`LintError::MalformedDocument`] and no extraction is attempted.
pub fn parse_documents(raw: &str) -> Result<Vec<Document>> {
    let normalized = raw.replace('\t', "  ");
    let mut documents = Vec::new();
    for de in serde_yaml::Deserializer::from_str(&normalized) {
        let document =
            Document::deserialize(de).map_err(|err| LintError::MalformedDocument {
                message: err.to_string(),
                path: None,
            })?;
        documents.push(document);
    }
    Ok(documents)
}

/// Read and parse one interview file.
pub fn load_interview(path: &Path) -> Result<Vec<Document>> {
    let raw = fs::read_to_string(path).map_err(|source| LintError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_documents(&raw).map_err(|err| err.with_path(path))
}

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;

    #[test]
    fn parses_multiple_documents_in_order() {
        let raw = indoc! {"
            question: First screen
            ---
            question: Second screen
        "};
        let docs = parse_documents(raw).unwrap();
        assert_eq!(docs.len(), 2);
        assert_eq!(docs[0].get("question").unwrap().as_str(), Some("First screen"));
    }

    #[test]
    fn separator_only_document_parses_to_null() {
        let docs = parse_documents("question: Hi\n---\n").unwrap();
        assert_eq!(docs.len(), 2);
        assert!(docs[1].is_null());
    }

    #[test]
    fn tabs_are_replaced_before_parsing() {
        let raw = "question: Do you want help?\nfields:\n\t- label: Name\n";
        let docs = parse_documents(raw).unwrap();
        assert_eq!(docs.len(), 1);
        assert!(docs[0].get("fields").unwrap().is_sequence());
    }

    #[test]
    fn unparseable_text_is_a_malformed_document_error() {
        let err = parse_documents("question: [unclosed\n").unwrap_err();
        assert!(matches!(err, LintError::MalformedDocument { .. }));
    }
}
