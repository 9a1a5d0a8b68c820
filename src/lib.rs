//! # exam_quiz
//!
//! An interactive multiple-choice exam trainer for the terminal.
//!
//! The library holds a validated question bank, narrows it by category and
//! difficulty, and runs a [`QuizSession`] that asks each question over any
//! line-oriented reader/writer pair, keeps score, and ends with a
//! [`QuizReport`] and its [`Verdict`].
//!
//! ## How it works
//!
//! 1. Load a [`QuestionBank`] — [`QuestionBank::builtin`] for the bundled
//!    questions, or [`QuestionBank::new`] for your own. Records whose answer key
//!    is not among their options are rejected at load time.
//! 2. Narrow it with a [`QuestionFilter`]. Category matches ignore case,
//!    difficulty matches exactly, and bank order is preserved.
//! 3. Build a [`QuizSession`] with a requested count (clamped to what is
//!    available) and a [`SelectionOrder`].
//! 4. Call [`QuizSession::run`] with a [`Console`].
//!
//! ## Quick start
//!
//! ```rust
//! use std::io::Cursor;
//! use exam_quiz::{Console, QuestionBank, QuestionFilter, QuizSession, SelectionOrder, Verdict};
//!
//! let bank = QuestionBank::builtin().unwrap();
//! let pool = QuestionFilter::new(Some("vlan".into()), None).apply(bank.questions());
//!
//! let mut session = QuizSession::new(pool, 1, SelectionOrder::Sequential).unwrap();
//! // answer "b", then acknowledge
//! let mut console = Console::new(Cursor::new("b\n\n"), Vec::new());
//! let report = session.run(&mut console).unwrap();
//!
//! assert_eq!((report.score, report.total), (1, 1));
//! assert_eq!(report.verdict(), Verdict::Excellent);
//! ```

pub mod cli;
pub mod quiz_engine;

// Convenience re-exports so callers can use `exam_quiz::QuizSession`
// directly without reaching into `quiz_engine::`.
pub use quiz_engine::{
    select, Console, Difficulty, Outcome, Question, QuestionBank, QuestionFilter, QuizError,
    QuizReport, QuizSession, SelectionOrder, Verdict,
};
