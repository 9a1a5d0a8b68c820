use std::io::{BufRead, Write};

use crate::quiz_engine::error::QuizError;

/// Line-oriented prompt/response channel the session talks through.
///
/// Production wires it to locked stdin/stdout; tests use a `Cursor` and a
/// `Vec<u8>` so the whole transcript can be inspected.
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Write one line.
    pub fn say(&mut self, line: impl AsRef<str>) -> Result<(), QuizError> {
        writeln!(self.output, "{}", line.as_ref())?;
        Ok(())
    }

    pub fn blank(&mut self) -> Result<(), QuizError> {
        writeln!(self.output)?;
        Ok(())
    }

    /// Show `prompt` without a newline and block for one line of input.
    ///
    /// The returned line has its line terminator stripped but is otherwise raw.
    /// Bytes that are not valid UTF-8 become U+FFFD rather than an error.
    /// End of input is reported as [`QuizError::InputClosed`].
    pub fn ask(&mut self, prompt: &str) -> Result<String, QuizError> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;
        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf)? == 0 {
            return Err(QuizError::InputClosed);
        }
        let line = String::from_utf8_lossy(&buf);
        Ok(line.trim_end_matches(['\n', '\r']).to_string())
    }

    pub fn into_output(self) -> W {
        self.output
    }
}
