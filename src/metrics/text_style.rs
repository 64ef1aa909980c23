//! Plain-language text checks: contractions, idioms, complex words, "please",
//! and slash-separated alternatives. Detect-only; input text is never changed.

use crate::core::types::Warning;

const STYLE_GUIDE_URL: &str =
    "https://suffolklitlab.org/docassemble-AssemblyLine-documentation/docs/style_guide";

const CONTRACTIONS: [&str; 8] = [
    "can't",
    "won't",
    "don't",
    "wouldn't",
    "shouldn't",
    "couldn't",
    "y'all",
    "you've",
];

const IDIOMS: [&str; 5] = [
    "get the hang of",
    "sit tight",
    "up in the air",
    "on the ball",
    "rule of thumb",
];

/// Complex word → simpler replacement, from plainlanguage.gov's word list.
/// Substring matching, so longer phrases must come before any shorter token
/// they could contain.
const SIMPLER_WORDS: [(&str, &str); 6] = [
    ("such as", "like"),
    ("obtain", "get"),
    ("receive", "get"),
    ("whether", "if"),
    ("provide", "give"),
    ("assist", "help"),
];

/// Check every text unit; one unit can produce several warnings.
pub fn text_violations(texts: &[String]) -> Vec<Warning> {
    let mut warnings = Vec::new();
    for text in texts {
        let lower = text.to_lowercase();
        if lower.contains('/') {
            warnings.push(Warning::new(
                "Write out \"or\" rather than using \"/\" to separate related concepts.",
                format!("{STYLE_GUIDE_URL}/readability#target-reading-level"),
            ));
        }
        if lower.contains("please") {
            warnings.push(Warning::new(
                "Avoid using \"please\"",
                format!("{STYLE_GUIDE_URL}/respect#please"),
            ));
        }
        for contraction in CONTRACTIONS {
            if lower.contains(contraction) {
                warnings.push(Warning::new(
                    format!("Avoid contractions like \"{contraction}\""),
                    format!("{STYLE_GUIDE_URL}/readability#avoid-contractions"),
                ));
            }
        }
        for idiom in IDIOMS {
            if lower.contains(idiom) {
                warnings.push(Warning::new(
                    format!("Avoid idioms, such as {idiom}"),
                    format!("{STYLE_GUIDE_URL}/readability#avoid-idioms"),
                ));
            }
        }
        for (big_word, simple_word) in SIMPLER_WORDS {
            if lower.contains(big_word) {
                warnings.push(Warning::new(
                    format!("Use simple words, such as {simple_word}, instead of {big_word}"),
                    format!("{STYLE_GUIDE_URL}/readability#simple-words"),
                ));
            }
        }
    }
    warnings
}
