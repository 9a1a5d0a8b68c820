use tracing::debug;

use crate::quiz_engine::models::{Difficulty, Question};

/// Optional constraints narrowing which questions are eligible for a run.
///
/// All supplied criteria must hold; `None` means "no constraint".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuestionFilter {
    /// Matched case-insensitively against [`Question::category`].
    pub category: Option<String>,
    /// Matched exactly.
    pub difficulty: Option<Difficulty>,
}

impl QuestionFilter {
    pub fn new(category: Option<String>, difficulty: Option<Difficulty>) -> Self {
        Self { category, difficulty }
    }

    pub fn is_unconstrained(&self) -> bool {
        self.category.is_none() && self.difficulty.is_none()
    }

    pub fn matches(&self, q: &Question) -> bool {
        let category_ok = self
            .category
            .as_deref()
            .map_or(true, |c| c.to_lowercase() == q.category.to_lowercase());
        let difficulty_ok = self.difficulty.map_or(true, |d| d == q.difficulty);
        category_ok && difficulty_ok
    }

    /// Keep matching questions, preserving their original order.
    pub fn apply<'a>(&self, questions: &'a [Question]) -> Vec<&'a Question> {
        let kept: Vec<&Question> = questions.iter().filter(|q| self.matches(q)).collect();
        debug!(
            category = ?self.category,
            difficulty = ?self.difficulty,
            kept = kept.len(),
            of = questions.len(),
            "filter applied"
        );
        kept
    }
}
