//! Core quiz engine — question bank, filtering, selection, and the interactive session.
//!
//! ## Module overview
//!
//! | Module      | Purpose |
//! |-------------|---------|
//! | `models`    | Shared types: `Question`, `Difficulty`, `SelectionOrder` |
//! | `dataset`   | Validated, immutable `QuestionBank` (bundled JSON or synthetic) |
//! | `filter`    | Category / difficulty narrowing that preserves bank order |
//! | `selection` | Sequential prefix or random draw without replacement |
//! | `console`   | Blocking prompt → line request/response over any reader/writer |
//! | `session`   | `QuizSession`: asks questions, keeps score, prints the report |
//! | `report`    | `QuizReport` percentage math and `Verdict` tiers |
//! | `error`     | `QuizError` |

pub mod console;
pub mod dataset;
pub mod error;
pub mod filter;
pub mod models;
pub mod report;
pub mod selection;
pub mod session;

// Re-export the public API surface so callers can use
// `quiz_engine::QuizSession` without reaching into sub-modules.
pub use console::Console;
pub use dataset::QuestionBank;
pub use error::QuizError;
pub use filter::QuestionFilter;
pub use models::{Difficulty, Question, SelectionOrder};
pub use report::{QuizReport, Verdict};
pub use selection::select;
pub use session::{Outcome, QuizSession};
