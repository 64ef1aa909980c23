//! Heading extraction: collects every screen heading, keyed by the screen's
//! `id` when present.

use crate::core::document::{entry, scalar_text, str_entry, Document};
use std::collections::BTreeMap;

/// Collect the heading of every document that declares a non-null `question`.
///
/// Screens without an `id` get a key synthesized from the question text
/// itself. Keys collide when two screens share an id (or identical question
/// text with no id); the later screen wins, and a `BTreeMap` keeps report
/// order deterministic.
pub fn extract_headings(documents: &[Document]) -> BTreeMap<String, String> {
    let mut headings = BTreeMap::new();
    for doc in documents {
        if doc.is_null() {
            continue;
        }
        let Some(question) = str_entry(doc, "question") else {
            continue;
        };
        let key = entry(doc, "id")
            .and_then(scalar_text)
            .unwrap_or_else(|| format!("question: {question}"));
        headings.insert(key, question.to_string());
    }
    headings
}

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;

    fn docs(yaml: &str) -> Vec<Document> {
        crate::io::loader::parse_documents(yaml).unwrap()
    }

    #[test]
    fn id_keys_and_synthesized_keys() {
        let headings = extract_headings(&docs(indoc! {"
            id: intro
            question: Welcome
            ---
            question: Anonymous screen
        "}));
        assert_eq!(headings.get("intro").map(String::as_str), Some("Welcome"));
        assert_eq!(
            headings.get("question: Anonymous screen").map(String::as_str),
            Some("Anonymous screen")
        );
    }

    #[test]
    fn null_or_absent_question_contributes_nothing() {
        let headings = extract_headings(&docs("id: empty\nquestion:\n---\nid: other\n"));
        assert!(headings.is_empty());
    }

    #[test]
    fn duplicate_keys_keep_the_last_heading() {
        let headings = extract_headings(&docs(indoc! {"
            id: shared
            question: First
            ---
            id: shared
            question: Second
        "}));
        assert_eq!(headings.get("shared").map(String::as_str), Some("Second"));
    }
}
