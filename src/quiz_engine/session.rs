//! One interactive quiz run.
//!
//! A [`QuizSession`] owns the filtered pool, the clamped question count, and
//! the running `score`/`total`. [`QuizSession::run`] selects the questions,
//! asks each one through a [`Console`], and finishes with a [`QuizReport`].
//!
//! Every question consumes exactly two input lines: the answer, then an
//! acknowledgment whose content is ignored.

use std::io::{BufRead, Write};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info};

use crate::quiz_engine::{
    console::Console,
    error::QuizError,
    models::{Question, SelectionOrder},
    report::QuizReport,
    selection::select,
};

const RULE_WIDTH: usize = 60;

/// Result of scoring a single answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Correct,
    Wrong,
}

#[derive(Debug)]
pub struct QuizSession<'a> {
    pool: Vec<&'a Question>,
    count: usize,
    order: SelectionOrder,
    score: u32,
    total: u32,
}

impl<'a> QuizSession<'a> {
    /// `requested` is clamped to the pool size. An empty pool is refused with
    /// [`QuizError::NoMatchingQuestions`].
    pub fn new(
        pool: Vec<&'a Question>,
        requested: usize,
        order: SelectionOrder,
    ) -> Result<Self, QuizError> {
        if pool.is_empty() {
            return Err(QuizError::NoMatchingQuestions);
        }
        let count = requested.min(pool.len());
        if count < requested {
            debug!(requested, available = pool.len(), "question count clamped");
        }
        Ok(Self { pool, count, order, score: 0, total: 0 })
    }

    pub fn count(&self) -> usize {
        self.count
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn total(&self) -> u32 {
        self.total
    }

    pub fn report(&self) -> QuizReport {
        QuizReport { score: self.score, total: self.total }
    }

    /// Run the quiz with an RNG derived from the selection order's seed.
    pub fn run<R: BufRead, W: Write>(
        &mut self,
        console: &mut Console<R, W>,
    ) -> Result<QuizReport, QuizError> {
        match self.order {
            SelectionOrder::Random { seed: Some(seed) } => {
                self.run_with_rng(console, &mut StdRng::seed_from_u64(seed))
            }
            SelectionOrder::Random { seed: None } => {
                self.run_with_rng(console, &mut StdRng::from_entropy())
            }
            // Sequential selection never draws from the RNG.
            SelectionOrder::Sequential => {
                self.run_with_rng(console, &mut StdRng::seed_from_u64(0))
            }
        }
    }

    pub fn run_with_rng<R: BufRead, W: Write, G: Rng>(
        &mut self,
        console: &mut Console<R, W>,
        rng: &mut G,
    ) -> Result<QuizReport, QuizError> {
        info!(count = self.count, order = ?self.order, "quiz started");
        let rule = "=".repeat(RULE_WIDTH);
        console.say(&rule)?;
        console.say("  IHK PRÜFUNGSVORBEREITUNG - QUIZ")?;
        console.say(&rule)?;
        console.blank()?;

        let selected = select(&self.pool, self.count, self.order, rng);
        for (i, question) in selected.into_iter().enumerate() {
            self.ask_question(console, i + 1, question)?;
        }

        let report = self.report();
        console.say(report.to_string())?;
        info!(score = report.score, total = report.total, verdict = ?report.verdict(), "quiz finished");
        Ok(report)
    }

    /// Present one question, score the answer, show the explanation, and wait
    /// for the acknowledgment line.
    pub fn ask_question<R: BufRead, W: Write>(
        &mut self,
        console: &mut Console<R, W>,
        number: usize,
        question: &Question,
    ) -> Result<Outcome, QuizError> {
        let rule = "=".repeat(RULE_WIDTH);
        console.blank()?;
        console.say(&rule)?;
        console.say(format!(
            "Frage {number}/{} [{}]",
            self.count,
            question.difficulty.label()
        ))?;
        console.say(format!("Kategorie: {}", question.category))?;
        console.say(&rule)?;
        console.blank()?;
        console.say(&question.question)?;
        console.blank()?;
        for (key, text) in question.sorted_options() {
            console.say(format!("  {key}) {text}"))?;
        }
        console.blank()?;

        let input = console.ask(&format!("Deine Antwort ({}): ", question.key_hint()))?;
        let outcome = self.record_answer(question, &input);
        console.blank()?;
        match outcome {
            Outcome::Correct => console.say("✅ RICHTIG!")?,
            Outcome::Wrong => console.say(format!("❌ FALSCH! Richtige Antwort: {}", question.answer))?,
        }
        console.blank()?;
        console.say(format!("💡 Erklärung: {}", question.explanation))?;

        console.blank()?;
        console.ask("Drücke Enter für nächste Frage...")?;
        Ok(outcome)
    }

    /// Count the question as asked and score `input` against it.
    pub fn record_answer(&mut self, question: &Question, input: &str) -> Outcome {
        self.total += 1;
        let outcome = if question.is_correct(input) {
            self.score += 1;
            Outcome::Correct
        } else {
            Outcome::Wrong
        };
        debug!(id = question.id, ?outcome, score = self.score, total = self.total, "answer scored");
        outcome
    }
}
