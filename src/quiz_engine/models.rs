use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::quiz_engine::error::QuizError;

// ---------------------------------------------------------------------------
// Difficulty
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    /// Upper-cased tag shown in the question header.
    pub fn label(self) -> &'static str {
        match self {
            Difficulty::Easy   => "EASY",
            Difficulty::Medium => "MEDIUM",
            Difficulty::Hard   => "HARD",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Difficulty::Easy   => write!(f, "easy"),
            Difficulty::Medium => write!(f, "medium"),
            Difficulty::Hard   => write!(f, "hard"),
        }
    }
}

// ---------------------------------------------------------------------------
// Question record
// ---------------------------------------------------------------------------

/// One multiple-choice item of the question bank.
///
/// `options` is a `BTreeMap` so iteration is already in ascending key order,
/// which is the order options are displayed in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Question {
    pub id: u32,
    pub category: String,
    pub difficulty: Difficulty,
    pub question: String,
    pub options: BTreeMap<String, String>,
    pub answer: String,
    pub explanation: String,
}

impl Question {
    /// Normalise raw user input (trim, upper-case) and compare it to the answer key.
    ///
    /// Anything that is not the answer key, including keys that do not exist,
    /// simply counts as wrong.
    pub fn is_correct(&self, raw_input: &str) -> bool {
        normalize_answer(raw_input) == self.answer
    }

    /// Options as `(key, text)` pairs in ascending key order.
    pub fn sorted_options(&self) -> impl Iterator<Item = (&str, &str)> {
        self.options.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Option keys joined for the answer prompt, e.g. `"A/B/C/D"`.
    pub fn key_hint(&self) -> String {
        self.options.keys().map(String::as_str).collect::<Vec<_>>().join("/")
    }

    /// Option keys must be single letters `A`-`Z` and the answer must be one of them.
    pub fn validate(&self) -> Result<(), QuizError> {
        if self.options.is_empty() {
            return Err(QuizError::EmptyOptions { id: self.id });
        }
        for key in self.options.keys() {
            let mut chars = key.chars();
            let single_letter =
                matches!((chars.next(), chars.next()), (Some(c), None) if c.is_ascii_uppercase());
            if !single_letter {
                return Err(QuizError::InvalidOptionKey { id: self.id, key: key.clone() });
            }
        }
        if !self.options.contains_key(&self.answer) {
            return Err(QuizError::AnswerNotInOptions { id: self.id, answer: self.answer.clone() });
        }
        Ok(())
    }
}

/// Trim surrounding whitespace and upper-case.
pub fn normalize_answer(raw: &str) -> String {
    raw.trim().to_uppercase()
}

// ---------------------------------------------------------------------------
// Session configuration
// ---------------------------------------------------------------------------

/// How questions are picked from the filtered pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SelectionOrder {
    /// First `count` questions in bank order.
    #[default]
    Sequential,
    /// `count` distinct questions drawn at random. `seed: Some(_)` makes the
    /// draw reproducible.
    Random { seed: Option<u64> },
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Question {
        Question {
            id: 1,
            category: "VLAN".into(),
            difficulty: Difficulty::Easy,
            question: "Q?".into(),
            options: [("C", "c"), ("A", "a"), ("B", "b")]
                .into_iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
            answer: "B".into(),
            explanation: "because".into(),
        }
    }

    #[test]
    fn answer_is_trimmed_and_case_folded() {
        let q = sample();
        assert!(q.is_correct("B"));
        assert!(q.is_correct("b"));
        assert!(q.is_correct("  b \n"));
        assert!(!q.is_correct("A"));
        assert!(!q.is_correct("Z"));
        assert!(!q.is_correct(""));
        assert!(!q.is_correct("BB"));
    }

    #[test]
    fn options_iterate_in_key_order() {
        let q = sample();
        let keys: Vec<&str> = q.sorted_options().map(|(k, _)| k).collect();
        assert_eq!(keys, ["A", "B", "C"]);
        assert_eq!(q.key_hint(), "A/B/C");
    }

    #[test]
    fn well_formed_question_validates() {
        assert!(sample().validate().is_ok());
    }

    #[test]
    fn answer_missing_from_options_fails_validation() {
        let mut q = sample();
        q.answer = "D".into();
        assert!(matches!(q.validate(), Err(QuizError::AnswerNotInOptions { id: 1, .. })));
    }

    #[test]
    fn bad_option_keys_fail_validation() {
        let mut q = sample();
        q.options.insert("e".into(), "lower".into());
        assert!(matches!(q.validate(), Err(QuizError::InvalidOptionKey { ref key, .. }) if key == "e"));

        let mut q = sample();
        q.options.clear();
        assert!(matches!(q.validate(), Err(QuizError::EmptyOptions { id: 1 })));
    }

    #[test]
    fn difficulty_label_is_upper_case() {
        assert_eq!(Difficulty::Medium.label(), "MEDIUM");
        assert_eq!(Difficulty::Medium.to_string(), "medium");
    }

    #[test]
    fn difficulty_deserializes_lowercase() {
        let d: Difficulty = serde_json::from_str("\"medium\"").unwrap();
        assert_eq!(d, Difficulty::Medium);
        assert!(serde_json::from_str::<Difficulty>("\"MEDIUM\"").is_err());
    }
}
