//! Language tokenization and spell-check seams.
//!
//! Real NLP pipelines and dictionaries stay outside this crate; metrics only
//! need these narrow traits. [`SimpleTokenizer`] is a regex-based default
//! good enough for English interview prose.

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::BTreeSet;

static WORD_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[A-Za-z]+(?:'[A-Za-z]+)*").unwrap());
static SENTENCE_SPLIT_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[.!?]+\s+").unwrap());

/// Splits text into the units the word/sentence metrics operate over.
pub trait Tokenizer: Send + Sync {
    fn sentences(&self, text: &str) -> Vec<String>;
    fn words(&self, text: &str) -> Vec<String>;
}

/// Checks text against a dictionary for a given language.
pub trait SpellChecker: Send + Sync {
    fn unknown_words(&self, text: &str, language: &str) -> BTreeSet<String>;
    fn suggestions(&self, word: &str, language: &str) -> BTreeSet<String>;
}

#[derive(Debug, Default)]
pub struct SimpleTokenizer;

impl Tokenizer for SimpleTokenizer {
    fn sentences(&self, text: &str) -> Vec<String> {
        SENTENCE_SPLIT_RE
            .split(text)
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect()
    }

    fn words(&self, text: &str) -> Vec<String> {
        WORD_RE
            .find_iter(text)
            .map(|m| m.as_str().to_lowercase())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn words_are_lowercased_and_keep_internal_apostrophes() {
        let tokenizer = SimpleTokenizer;
        assert_eq!(
            tokenizer.words("You can't File here."),
            vec!["you", "can't", "file", "here"]
        );
    }

    #[test]
    fn sentences_split_on_terminal_punctuation() {
        let tokenizer = SimpleTokenizer;
        let sentences = tokenizer.sentences("Do you want help? Sign here. Thanks");
        assert_eq!(sentences, vec!["Do you want help", "Sign here", "Thanks"]);
    }

    #[test]
    fn empty_text_has_no_units() {
        let tokenizer = SimpleTokenizer;
        assert!(tokenizer.words("").is_empty());
        assert!(tokenizer.sentences("  ").is_empty());
    }
}
