//! Command-line surface of the `exam-quiz` binary.
//!
//! Kept in the library so argument handling can be tested without spawning a
//! process; `main.rs` only parses, wires stdin/stdout, and maps the outcome to
//! an exit code.

use std::io::{BufRead, Write};

use clap::Parser;
use tracing::info;

use crate::quiz_engine::{
    Console, Difficulty, QuestionBank, QuestionFilter, QuizError, QuizReport, QuizSession,
    SelectionOrder,
};

/// IHK Exam Quiz - interactive question practice
#[derive(Debug, Parser)]
#[command(name = "exam-quiz")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Number of questions
    #[arg(long, default_value_t = 10)]
    pub count: usize,

    /// Filter by category (case-insensitive)
    #[arg(long)]
    pub category: Option<String>,

    /// Filter by difficulty
    #[arg(long, value_enum)]
    pub difficulty: Option<Difficulty>,

    /// Random order
    #[arg(long)]
    pub random: bool,

    /// Seed for the random draw, for reproducible runs (needs --random)
    #[arg(long, requires = "random")]
    pub seed: Option<u64>,

    /// Print the categories of the question bank and exit
    #[arg(long)]
    pub list_categories: bool,
}

impl Cli {
    pub fn filter(&self) -> QuestionFilter {
        QuestionFilter::new(self.category.clone(), self.difficulty)
    }

    pub fn order(&self) -> SelectionOrder {
        if self.random {
            SelectionOrder::Random { seed: self.seed }
        } else {
            SelectionOrder::Sequential
        }
    }
}

/// Filter the bank, build the session, and run it to completion.
///
/// An empty filter result is returned as [`QuizError::NoMatchingQuestions`]
/// before any session exists.
pub fn run_quiz<R: BufRead, W: Write>(
    cli: &Cli,
    bank: &QuestionBank,
    console: &mut Console<R, W>,
) -> Result<QuizReport, QuizError> {
    let pool = cli.filter().apply(bank.questions());
    if pool.is_empty() {
        return Err(QuizError::NoMatchingQuestions);
    }
    info!(available = pool.len(), requested = cli.count, "starting session");
    let mut session = QuizSession::new(pool, cli.count, cli.order())?;
    session.run(console)
}

/// Process exit status for a finished run: 0 on completion, 1 for an empty
/// filter result or any other fatal error.
pub fn exit_status(outcome: &Result<QuizReport, QuizError>) -> u8 {
    match outcome {
        Ok(_) => 0,
        Err(_) => 1,
    }
}

/// One category per line.
pub fn list_categories<R: BufRead, W: Write>(
    bank: &QuestionBank,
    console: &mut Console<R, W>,
) -> Result<(), QuizError> {
    for category in bank.categories() {
        console.say(category)?;
    }
    Ok(())
}
