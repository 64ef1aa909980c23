//! Field extraction: normalizes every recognized field-declaration shape into
//! [`Field`] records.

use crate::core::document::{entry, has_key, question_text, str_entry, Document};
use crate::core::types::{Datatype, Field, InputType};
use crate::extraction::options::option_labels;
use serde_yaml::Value;

/// Document keys known to be behavioral/config attributes rather than display
/// text. Anything outside this set is assumed to be author-facing prose, a
/// deliberately curated heuristic that needs periodic review as the interview
/// format grows new modifiers.
pub const METADATA_KEYS: &[&str] = &[
    "default",
    "input type",
    "using",
    "keep for training",
    "validation messages",
    "validate",
    "rows",
    "maximum image size",
    "image upload type",
    "accept",
    "allow privileges",
    "allow users",
    "persistent",
    "private",
    "object labeler",
    "help generator",
    "image generator",
    "required",
    "js show if",
    "js hide if",
    "js disable if",
    "js enable if",
    "enable if",
    "disable if",
    "show if",
    "hide if",
    "hint",
    "disable others",
    "uncheck others",
    "datatype",
    "code",
    "address autocomplete",
    "action",
    "trigger at",
    "exclude",
    "choices",
    "field metadata",
    "min",
    "max",
    "minlength",
    "maxlength",
    "step",
    "scale",
    "inline",
    "inline width",
    "currency symbol",
    "shuffle",
    "none of the above",
    "field",
];

pub fn is_metadata_key(key: &str) -> bool {
    METADATA_KEYS.contains(&key)
}

const BOOLEAN_KEYS: [&str; 4] = ["yesno", "noyes", "yesnomaybe", "noyesmaybe"];
const CHOICE_KEYS: [&str; 4] = ["choices", "dropdown", "combobox", "buttons"];

/// Extract every normalized field across the document sequence.
///
/// Per document, the boolean-style and choice-style shapes are mutually
/// exclusive (first matching key wins and short-circuits the rest);
/// `signature` and `fields` are independent and may each contribute on top.
pub fn extract_fields(documents: &[Document]) -> Vec<Field> {
    let mut fields = Vec::new();
    for doc in documents {
        if doc.is_null() {
            continue;
        }
        extract_document_fields(doc, &mut fields);
    }
    fields
}

fn extract_document_fields(doc: &Document, out: &mut Vec<Field>) {
    if !extract_boolean_field(doc, out) {
        extract_choice_field(doc, out);
    }
    extract_signature_field(doc, out);
    extract_fields_section(doc, out);
}

fn extract_boolean_field(doc: &Document, out: &mut Vec<Field>) -> bool {
    for key in BOOLEAN_KEYS {
        if !has_key(doc, key) {
            continue;
        }
        let options = if key == "yesno" || key == "noyes" {
            vec!["yes".to_string(), "no".to_string()]
        } else {
            vec!["yes".to_string(), "no".to_string(), "maybe".to_string()]
        };
        out.push(Field {
            label: Some(question_text(doc)),
            datatype: Datatype::Boolean,
            inputtype: Some(InputType::Buttons),
            options,
            required: true,
        });
        return true;
    }
    false
}

fn extract_choice_field(doc: &Document, out: &mut Vec<Field>) -> bool {
    for key in CHOICE_KEYS {
        if !has_key(doc, key) {
            continue;
        }
        let inputtype = if key == "choices" {
            InputType::Radio
        } else {
            InputType::parse(key)
        };
        let options = doc.get(key).map(option_labels).unwrap_or_default();
        out.push(Field {
            label: Some(question_text(doc)),
            datatype: Datatype::Text,
            inputtype: Some(inputtype),
            options,
            required: true,
        });
        return true;
    }
    false
}

fn extract_signature_field(doc: &Document, out: &mut Vec<Field>) {
    if has_key(doc, "signature") {
        out.push(Field {
            label: Some(question_text(doc)),
            datatype: Datatype::Signature,
            inputtype: Some(InputType::Signature),
            options: Vec::new(),
            required: true,
        });
    }
}

fn extract_fields_section(doc: &Document, out: &mut Vec<Field>) {
    let Some(section) = entry(doc, "fields") else {
        return;
    };
    for field in field_mappings(section) {
        // A code entry is executable, not a user-facing input.
        if has_key(field, "code") {
            continue;
        }
        out.push(normalize_field_mapping(field));
    }
}

/// A single mapping under `fields` is shorthand for a one-element list.
fn field_mappings(section: &Value) -> Vec<&Value> {
    match section {
        Value::Sequence(items) => items.iter().filter(|v| v.is_mapping()).collect(),
        Value::Mapping(_) => vec![section],
        _ => Vec::new(),
    }
}

fn normalize_field_mapping(field: &Value) -> Field {
    let label = str_entry(field, "label")
        .map(str::to_string)
        .or_else(|| fallback_label(field));
    let datatype = str_entry(field, "datatype")
        .map(Datatype::parse)
        .unwrap_or_default();
    let inputtype = str_entry(field, "input type").map(InputType::parse);
    let required = entry(field, "required")
        .and_then(Value::as_bool)
        .unwrap_or(true);
    let options = if datatype == Datatype::Checkboxes {
        entry(field, "choices").map(option_labels).unwrap_or_default()
    } else {
        Vec::new()
    };
    Field {
        label,
        datatype,
        inputtype,
        options,
        required,
    }
}

/// Authoring shorthand puts the prompt in the key position: the first
/// attribute name that is not a known metadata key serves as the label.
fn fallback_label(field: &Value) -> Option<String> {
    let map = field.as_mapping()?;
    for (key, _value) in map {
        if let Some(name) = key.as_str() {
            if !is_metadata_key(name) {
                return Some(name.to_string());
            }
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;

    fn docs(yaml: &str) -> Vec<Document> {
        crate::io::loader::parse_documents(yaml).unwrap()
    }

    #[test]
    fn yesno_short_circuits_choice_checks() {
        let fields = extract_fields(&docs(indoc! {"
            question: Do you want help?
            yesno: want_help
            choices:
              - Ignored
        "}));
        assert_eq!(fields.len(), 1);
        assert_eq!(fields[0].datatype, Datatype::Boolean);
    }

    #[test]
    fn metadata_keys_are_distinct_and_classify_attributes() {
        let unique: std::collections::HashSet<_> = METADATA_KEYS.iter().collect();
        assert_eq!(
            unique.len(),
            METADATA_KEYS.len(),
            "metadata key list contains a duplicate entry"
        );
        assert!(is_metadata_key("show if"));
        assert!(is_metadata_key("field"));
        assert!(!is_metadata_key("What is your name?"));
    }

    #[test]
    fn fallback_label_uses_first_unknown_key() {
        let fields = extract_fields(&docs(indoc! {"
            fields:
              - datatype: text
                required: false
                What is your favorite color?: color
        "}));
        assert_eq!(
            fields[0].label.as_deref(),
            Some("What is your favorite color?")
        );
        assert!(!fields[0].required);
    }
}
