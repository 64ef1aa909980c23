//! Unusual-word-frequency metric.
//!
//! Looks each word up in a frequency table built from a reference corpus of
//! court-facing text. Words missing from the table score very low, which
//! flags likely misspellings and jargon. The table is injected at
//! construction so tests can use small fixture corpora.

use crate::core::types::{DesiredOutcome, FormUnit, Warning};
use crate::errors::{LintError, Result};
use crate::metrics::{BaseUnit, Metric};
use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

const STYLE_GUIDE_URL: &str =
    "https://suffolklitlab.org/docassemble-AssemblyLine-documentation/docs/style_guide";

/// Frequency score given to words absent from the reference table.
const UNSEEN_WORD_SCORE: f64 = 10.0;

/// Frequencies below this are rare enough to flag; sampled from the reference
/// corpus, where everything around this range is misspellings and wacky words.
const RARE_WORD_THRESHOLD: f64 = 40000.0;

pub struct UncommonWords {
    frequencies: HashMap<String, u64>,
}

impl UncommonWords {
    /// Load a frequency table from tab-separated `word<TAB>count` lines.
    /// Malformed lines are skipped.
    pub fn from_reader(reader: impl Read) -> Result<Self> {
        let mut frequencies = HashMap::new();
        for line in BufReader::new(reader).lines() {
            let line = line.map_err(|err| LintError::Reference(err.to_string()))?;
            let mut parts = line.splitn(2, '\t');
            let (Some(word), Some(count)) = (parts.next(), parts.next()) else {
                continue;
            };
            if let Ok(count) = count.trim().parse::<u64>() {
                frequencies.insert(word.to_string(), count);
            }
        }
        Ok(UncommonWords { frequencies })
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        let file = File::open(path).map_err(|source| LintError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_reader(file)
    }

    fn frequency(&self, word: &str) -> f64 {
        self.frequencies
            .get(word)
            .copied()
            .map(|count| count as f64)
            .unwrap_or(UNSEEN_WORD_SCORE)
    }
}

impl Metric for UncommonWords {
    fn name(&self) -> &'static str {
        "uncommon_words"
    }

    fn base_unit(&self) -> FormUnit {
        FormUnit::Word
    }

    fn desired_outcome(&self) -> DesiredOutcome {
        DesiredOutcome::Readable
    }

    fn violation_value(&self) -> Option<f64> {
        Some(RARE_WORD_THRESHOLD)
    }

    fn process_base_unit(&self, unit: &BaseUnit) -> Option<f64> {
        match unit {
            BaseUnit::Word(word) => Some(self.frequency(word)),
            _ => None,
        }
    }

    fn suggestion(&self, violations: usize) -> Option<Warning> {
        Some(Warning::new(
            format!(
                "{violations} word(s) are rare enough to be jargon or misspellings. Swap them for everyday words."
            ),
            format!("{STYLE_GUIDE_URL}/readability#simple-words"),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn fixture() -> UncommonWords {
        let table = "the\t1000000\nhelp\t500000\nestoppel\t120\nbad line\n";
        UncommonWords::from_reader(Cursor::new(table)).unwrap()
    }

    #[test]
    fn known_words_score_their_frequency() {
        let metric = fixture();
        assert_eq!(
            metric.process_base_unit(&BaseUnit::Word("help")),
            Some(500000.0)
        );
    }

    #[test]
    fn unseen_words_score_low_and_violate() {
        let metric = fixture();
        let score = metric.process_base_unit(&BaseUnit::Word("xyzzy")).unwrap();
        assert_eq!(score, 10.0);
        assert!(metric.is_violation(score));
        assert!(!metric.is_violation(500000.0));
    }

    #[test]
    fn violation_threshold_comes_from_declared_value() {
        let metric = fixture();
        let threshold = metric.violation_value().unwrap();
        assert!(metric.is_violation(threshold - 1.0));
        assert!(!metric.is_violation(threshold));
    }

    #[test]
    fn non_word_units_do_not_apply() {
        let metric = fixture();
        assert_eq!(metric.process_base_unit(&BaseUnit::PdfPage(1)), None);
    }
}
