//! Text extraction: walks each document and emits every string an end user
//! could see, in source order, for downstream language checks.
//!
//! The walk is deliberately permissive. Authors write incomplete and
//! experimental screens, so a wrong-typed or missing value is skipped
//! silently; nothing in here returns an error.

use crate::core::document::{entry, has_key, scalar_text, Document};
use crate::extraction::fields::is_metadata_key;
use log::debug;
use serde_yaml::Value;

/// Top-level keys whose values are author-facing prose.
const TEXT_SECTIONS: [&str; 6] = ["question", "subquestion", "under", "pre", "post", "right"];

const YES_NO_KEYS: [&str; 2] = ["yesno", "noyes"];
const YES_NO_MAYBE_KEYS: [&str; 2] = ["yesnomaybe", "noyesmaybe"];
const OPTION_LIST_KEYS: [&str; 4] = ["choices", "dropdown", "combobox", "buttons"];

/// Extract every displayable text unit across the document sequence.
pub fn extract_text(documents: &[Document]) -> Vec<String> {
    let mut units = Vec::new();
    for doc in documents {
        if doc.is_null() {
            continue;
        }
        extract_document_text(doc, &mut units);
    }
    units
}

fn extract_document_text(doc: &Document, out: &mut Vec<String>) {
    for section in TEXT_SECTIONS {
        if let Some(value) = entry(doc, section) {
            push_scalar(value, out);
        }
    }
    extract_help(doc, out);
    extract_terms(doc, out);
    extract_boolean_literals(doc, out);
    extract_option_lists(doc, out);
    extract_fields_text(doc, out);
}

/// `help` is either a plain string or a mapping with `content` and `label`.
/// The mapping form always emits both sub-values, defaulting to empty strings,
/// so a half-written help block still counts as one screen's worth of text.
fn extract_help(doc: &Document, out: &mut Vec<String>) {
    match doc.get("help") {
        Some(help @ Value::Mapping(_)) => {
            for sub in ["content", "label"] {
                let text = help.get(sub).and_then(Value::as_str).unwrap_or_default();
                out.push(text.to_string());
            }
        }
        Some(Value::String(text)) => out.push(text.clone()),
        Some(other) => debug!("skipping help section with unexpected shape: {other:?}"),
        None => {}
    }
}

fn extract_terms(doc: &Document, out: &mut Vec<String>) {
    match doc.get("terms") {
        Some(Value::Mapping(map)) => {
            for (_term, definition) in map {
                push_scalar(definition, out);
            }
        }
        Some(Value::Sequence(items)) => {
            for item in items {
                if let Some(definition) = item.get("definition") {
                    push_scalar(definition, out);
                }
            }
        }
        Some(other) => debug!("skipping terms section with unexpected shape: {other:?}"),
        None => {}
    }
}

/// Boolean shorthand renders fixed button labels, which still count as
/// reader-visible text.
fn extract_boolean_literals(doc: &Document, out: &mut Vec<String>) {
    for key in YES_NO_KEYS {
        if has_key(doc, key) {
            out.push("yes".to_string());
            out.push("no".to_string());
        }
    }
    for key in YES_NO_MAYBE_KEYS {
        if has_key(doc, key) {
            out.push("yes".to_string());
            out.push("no".to_string());
            out.push("maybe".to_string());
        }
    }
}

/// Option items are polymorphic: bare strings are labels; mappings emit their
/// `help` text, then both the attribute values and the attribute names.
///
/// Emitting the attribute *name* as well as its value looks redundant, but
/// authoring shorthand regularly puts the display label in the key position
/// (`Label text: variable_name`), so both are candidate display text. The
/// value filter (not `help`/`default`) and name filter (not `code`/
/// `no label`) differ on purpose; this mirrors long-standing behavior that
/// real interview corpora rely on.
fn extract_option_lists(doc: &Document, out: &mut Vec<String>) {
    for key in OPTION_LIST_KEYS {
        let Some(Value::Sequence(items)) = doc.get(key) else {
            continue;
        };
        for item in items {
            match item {
                Value::String(label) => out.push(label.clone()),
                Value::Mapping(map) => {
                    if let Some(help) = item.get("help") {
                        push_scalar(help, out);
                    }
                    for (attr, value) in map {
                        let Some(name) = attr.as_str() else {
                            continue;
                        };
                        if name != "help" && name != "default" {
                            push_scalar(value, out);
                        }
                        if name != "code" && name != "no label" {
                            out.push(name.to_string());
                        }
                    }
                }
                other => debug!("skipping option item with unexpected shape: {other:?}"),
            }
        }
    }
}

fn extract_fields_text(doc: &Document, out: &mut Vec<String>) {
    let Some(section) = doc.get("fields") else {
        return;
    };
    // A single mapping is shorthand for a one-element list of field mappings.
    let field_list: Vec<&Value> = match section {
        Value::Sequence(items) => items.iter().collect(),
        Value::Mapping(_) => vec![section],
        _ => return,
    };
    for field in field_list {
        let Some(map) = field.as_mapping() else {
            continue;
        };
        // Executable content, nothing in it is literal display text.
        if field.get("code").is_some() {
            continue;
        }
        for (attr, value) in map {
            let Some(name) = attr.as_str() else {
                continue;
            };
            match name {
                "validation_message" | "help" | "hint" => {}
                "label" | "note" | "html" => push_scalar(value, out),
                "choices" => extract_field_choices_text(value, out),
                other if !is_metadata_key(other) => out.push(other.to_string()),
                _ => {}
            }
        }
    }
}

/// Choices under `fields` are either atomic values emitted directly or
/// mappings whose `label` carries the display text.
fn extract_field_choices_text(choices: &Value, out: &mut Vec<String>) {
    let Some(items) = choices.as_sequence() else {
        return;
    };
    for choice in items {
        match choice {
            Value::String(_) | Value::Number(_) | Value::Bool(_) => push_scalar(choice, out),
            Value::Mapping(_) => {
                if let Some(label) = choice.get("label") {
                    push_scalar(label, out);
                }
            }
            _ => {}
        }
    }
}

fn push_scalar(value: &Value, out: &mut Vec<String>) {
    match scalar_text(value) {
        Some(text) => out.push(text),
        None => debug!("skipping non-scalar value where display text was expected"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;

    fn docs(yaml: &str) -> Vec<Document> {
        crate::io::loader::parse_documents(yaml).unwrap()
    }

    #[test]
    fn help_mapping_emits_content_and_label_with_empty_defaults() {
        let units = extract_text(&docs("help:\n  content: Some details\n"));
        assert_eq!(units, vec!["Some details".to_string(), String::new()]);
    }

    #[test]
    fn option_item_mapping_emits_value_and_attribute_name() {
        let units = extract_text(&docs(indoc! {"
            choices:
              - Walk in: walk_in
        "}));
        assert_eq!(units, vec!["walk_in".to_string(), "Walk in".to_string()]);
    }

    #[test]
    fn code_attribute_value_is_emitted_but_name_is_not() {
        let units = extract_text(&docs(indoc! {"
            dropdown:
              - code: some_list
        "}));
        // The value filter and name filter differ on purpose.
        assert_eq!(units, vec!["some_list".to_string()]);
    }
}
