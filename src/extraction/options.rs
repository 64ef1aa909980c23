//! Shared option-label resolution.
//!
//! Option lists show up in several shapes: a bare string, a `[value, label]`
//! pair, or a mapping that may or may not carry an explicit `label`. The
//! resolver normalizes all of them; shapes it cannot make sense of resolve to
//! `None` and are dropped by callers rather than raised.

use crate::core::document::scalar_text;
use serde_yaml::Value;

/// Mapping keys that are option plumbing rather than candidate labels.
const RESERVED_OPTION_KEYS: [&str; 6] = ["label", "value", "default", "help", "image", "code"];

/// Resolve the display label of one option item.
pub fn option_label(option: &Value) -> Option<String> {
    match option {
        Value::Sequence(items) => items.first().and_then(scalar_text),
        Value::Mapping(map) => {
            if let Some(label) = option.get("label") {
                return scalar_text(label);
            }
            for (key, _value) in map {
                if let Some(name) = key.as_str() {
                    if !RESERVED_OPTION_KEYS.contains(&name) {
                        return Some(name.to_string());
                    }
                }
            }
            None
        }
        Value::String(s) => Some(s.clone()),
        _ => None,
    }
}

/// Resolve every item of an option-list value, dropping unresolvable items.
///
/// A mapping-shaped list (`label: value` per line) resolves to its keys, in
/// source order.
pub fn option_labels(value: &Value) -> Vec<String> {
    match value {
        Value::Sequence(items) => items.iter().filter_map(option_label).collect(),
        Value::Mapping(map) => map
            .iter()
            .filter_map(|(key, _value)| scalar_text(key))
            .collect(),
        _ => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn value(yaml: &str) -> Value {
        serde_yaml::from_str(yaml).unwrap()
    }

    #[test]
    fn plain_string_resolves_to_itself() {
        assert_eq!(option_label(&value("lawyer")), Some("lawyer".to_string()));
    }

    #[test]
    fn pair_resolves_to_first_element() {
        assert_eq!(
            option_label(&value("[court, Court of law]")),
            Some("court".to_string())
        );
    }

    #[test]
    fn mapping_with_label_resolves_to_label_value() {
        assert_eq!(
            option_label(&value("{label: Yes please, value: yes}")),
            Some("Yes please".to_string())
        );
    }

    #[test]
    fn mapping_without_label_resolves_to_first_unreserved_key() {
        assert_eq!(
            option_label(&value("{image: cat.png, Keep my cat: keep_cat}")),
            Some("Keep my cat".to_string())
        );
    }

    #[test]
    fn unresolvable_shapes_give_none() {
        assert_eq!(option_label(&Value::Null), None);
        assert_eq!(option_label(&value("{code: some_var}")), None);
        assert_eq!(option_label(&value("[]")), None);
    }

    #[test]
    fn mapping_list_resolves_to_keys_in_order() {
        assert_eq!(
            option_labels(&value("{First: 1, Second: 2}")),
            vec!["First".to_string(), "Second".to_string()]
        );
    }
}
