//! Typed accessors over loosely-shaped interview documents.
//!
//! A [`Document`] is one YAML sub-document (one screen/question block). There
//! is no fixed schema: which keys are present determines which shapes apply,
//! and the same concept can appear as a string, a list, or a mapping. These
//! helpers keep that tolerance in one place so the extractors stay readable.

use serde_yaml::Value;

/// One self-contained question/screen block within an interview definition.
pub type Document = Value;

/// Look up a key's value, treating explicit `null` as absent.
pub fn entry<'a>(doc: &'a Document, key: &str) -> Option<&'a Value> {
    doc.get(key).filter(|v| !v.is_null())
}

/// True when the key exists at all, even with a `null` value.
pub fn has_key(doc: &Document, key: &str) -> bool {
    doc.get(key).is_some()
}

/// Look up a key and require a string value.
pub fn str_entry<'a>(doc: &'a Document, key: &str) -> Option<&'a str> {
    doc.get(key).and_then(Value::as_str)
}

/// Render a scalar value as display text. Mappings, sequences, and nulls have
/// no single-string rendering and yield `None`.
pub fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

/// The `question` text of a document, or empty when absent or non-string.
pub fn question_text(doc: &Document) -> String {
    str_entry(doc, "question").unwrap_or_default().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc(yaml: &str) -> Document {
        serde_yaml::from_str(yaml).unwrap()
    }

    #[test]
    fn entry_treats_null_as_absent() {
        let d = doc("question: null\nid: intro");
        assert!(entry(&d, "question").is_none());
        assert!(has_key(&d, "question"));
        assert_eq!(str_entry(&d, "id"), Some("intro"));
    }

    #[test]
    fn scalar_text_covers_scalars_only() {
        assert_eq!(scalar_text(&doc("hello")), Some("hello".to_string()));
        assert_eq!(scalar_text(&doc("42")), Some("42".to_string()));
        assert_eq!(scalar_text(&doc("true")), Some("true".to_string()));
        assert_eq!(scalar_text(&doc("[a, b]")), None);
        assert_eq!(scalar_text(&Value::Null), None);
    }
}
