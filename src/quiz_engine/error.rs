use thiserror::Error;

/// Everything that can stop a quiz from loading or running.
#[derive(Debug, Error)]
pub enum QuizError {
    #[error("question bank is not valid JSON: {0}")]
    Dataset(#[from] serde_json::Error),

    #[error("question {id} has no options")]
    EmptyOptions { id: u32 },

    #[error("question {id} has option key '{key}', expected a single letter A-Z")]
    InvalidOptionKey { id: u32, key: String },

    #[error("question {id} expects answer '{answer}', which is not one of its options")]
    AnswerNotInOptions { id: u32, answer: String },

    #[error("question id {id} appears more than once")]
    DuplicateId { id: u32 },

    #[error("Keine Fragen gefunden für die gewählten Filter.")]
    NoMatchingQuestions,

    #[error("input closed before the quiz finished")]
    InputClosed,

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
