//! Heading-width checks: estimates the rendered pixel width of each screen
//! heading and warns when it will wrap on every supported device size.

use crate::core::types::Warning;
use std::collections::BTreeMap;

const STYLE_GUIDE_URL: &str =
    "https://suffolklitlab.org/docassemble-AssemblyLine-documentation/docs/style_guide";

/// Widths in px of individual characters as rendered in the reference header
/// font (Roboto at 1.75rem), hand-measured. Characters missing from the table
/// fall back by case class.
const CHAR_WIDTHS: [(char, u32); 13] = [
    ('a', 13),
    ('b', 14),
    ('f', 11),
    ('i', 4),
    ('j', 7),
    ('l', 4),
    ('m', 23),
    (' ', 9),
    ('A', 19),
    ('B', 15),
    ('F', 13),
    ('G', 17),
    ('M', 22),
];

/// The widest a heading can render (in px) on a desktop browser, a standard
/// mobile device, and a narrow mobile device, widest first.
const DEVICE_WIDTHS: [u32; 3] = [540, 381, 290];

/// Estimate the rendered pixel width of a heading string.
pub fn heading_width(heading: &str) -> u32 {
    heading
        .chars()
        .map(|c| {
            if let Some(&(_, w)) = CHAR_WIDTHS.iter().find(|&&(tc, _)| tc == c) {
                w
            } else if c.is_uppercase() {
                18
            } else if c.is_lowercase() {
                15
            } else {
                // Digits and punctuation, roughly.
                10
            }
        })
        .sum()
}

/// Warn for each heading too wide for the supported devices.
///
/// A warning is only emitted when the heading exceeds all three device
/// widths; exceeding one or two produces nothing. The weaker message branches
/// below are therefore unreachable today, kept for when the policy loosens.
pub fn heading_violations(headings: &BTreeMap<String, String>) -> Vec<Warning> {
    let mut violations = Vec::new();
    for (key, heading) in headings {
        let width = heading_width(heading);
        let exceeded = DEVICE_WIDTHS.iter().filter(|&&stage| width > stage).count();
        if exceeded >= 3 {
            let message = match exceeded {
                1 => format!(
                    "Screen `{key}` has a heading that will be multiple lines on narrow devices. You should shorten it: \"{heading}\""
                ),
                2 => format!(
                    "Screen `{key}` has a heading that will be multiple lines on most mobile devices. You should shorten it: \"{heading}\""
                ),
                _ => format!(
                    "Screen `{key}` has a heading that will be multiple lines. You should shorten it: \"{heading}\""
                ),
            };
            violations.push(Warning::new(message, STYLE_GUIDE_URL));
        }
    }
    violations
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn width_uses_measured_table_then_case_fallbacks() {
        assert_eq!(heading_width("a"), 13);
        assert_eq!(heading_width("Z"), 18);
        assert_eq!(heading_width("z"), 15);
        assert_eq!(heading_width("7?"), 20);
    }

    #[test]
    fn width_is_monotonic_for_repeated_characters() {
        let mut last = 0;
        for n in 1..40 {
            let width = heading_width(&"a".repeat(n));
            assert!(width > last);
            last = width;
        }
    }

    #[test]
    fn warns_only_when_all_device_widths_are_exceeded() {
        let mut headings = BTreeMap::new();
        headings.insert("long".to_string(), "A".repeat(60));
        headings.insert("short".to_string(), "A".repeat(10));
        // 381 < width <= 540: exceeds two stages but not all three.
        headings.insert("medium".to_string(), "A".repeat(25));

        let violations = heading_violations(&headings);
        assert_eq!(violations.len(), 1);
        assert!(violations[0].message.contains("`long`"));
        assert!(violations[0].message.contains("multiple lines"));
    }
}
