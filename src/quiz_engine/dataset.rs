//! The question bank: an immutable, validated list of [`Question`] records.
//!
//! The bundled bank is compiled into the binary from `data/questions.json` and
//! parsed once at startup. Callers hand the bank to the filter and session by
//! reference, so tests can substitute a synthetic bank freely.
//!
//! Every bank goes through [`QuestionBank::new`], which rejects records that
//! could never be answered correctly instead of letting them surface mid-quiz.

use std::collections::HashSet;

use tracing::debug;

use crate::quiz_engine::{error::QuizError, models::Question};

const BUILTIN_JSON: &str = include_str!("../../data/questions.json");

#[derive(Debug, Clone)]
pub struct QuestionBank {
    questions: Vec<Question>,
}

impl QuestionBank {
    /// Validate and wrap a list of questions.
    pub fn new(questions: Vec<Question>) -> Result<Self, QuizError> {
        let mut seen = HashSet::new();
        for q in &questions {
            q.validate()?;
            if !seen.insert(q.id) {
                return Err(QuizError::DuplicateId { id: q.id });
            }
        }
        debug!(questions = questions.len(), "question bank validated");
        Ok(Self { questions })
    }

    /// Parse a JSON array of question records.
    pub fn from_json(json: &str) -> Result<Self, QuizError> {
        let questions: Vec<Question> = serde_json::from_str(json)?;
        Self::new(questions)
    }

    /// The bank shipped with the binary.
    pub fn builtin() -> Result<Self, QuizError> {
        Self::from_json(BUILTIN_JSON)
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// Distinct category labels in first-seen order.
    pub fn categories(&self) -> Vec<&str> {
        let mut out: Vec<&str> = Vec::new();
        for q in &self.questions {
            if !out.contains(&q.category.as_str()) {
                out.push(&q.category);
            }
        }
        out
    }
}
