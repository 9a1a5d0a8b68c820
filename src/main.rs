use std::io;
use std::process::ExitCode;

use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use exam_quiz::cli::{exit_status, list_categories, run_quiz, Cli};
use exam_quiz::{Console, QuestionBank, QuizError};

fn main() -> anyhow::Result<ExitCode> {
    // Logs go to stderr; stdout carries the quiz itself.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .with_ansi(false)
        .init();

    let cli = Cli::parse();
    let bank = QuestionBank::builtin()?;

    let stdin = io::stdin();
    let mut console = Console::new(stdin.lock(), io::stdout().lock());

    if cli.list_categories {
        list_categories(&bank, &mut console)?;
        return Ok(ExitCode::SUCCESS);
    }

    let outcome = run_quiz(&cli, &bank, &mut console);
    let status = exit_status(&outcome);
    match outcome {
        Ok(_) => {}
        Err(QuizError::NoMatchingQuestions) => {
            debug!(category = ?cli.category, difficulty = ?cli.difficulty, "no questions match");
            console.say(QuizError::NoMatchingQuestions.to_string())?;
        }
        Err(e) => return Err(e.into()),
    }
    Ok(ExitCode::from(status))
}
