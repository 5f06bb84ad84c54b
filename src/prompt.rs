//! Yes/no input
//!
//! A [`Prompter`] supplies the answer to each question. [`LinePrompter`]
//! reads lines from any `BufRead` and re-prompts until the answer is one of
//! Y, YES, N or NO (case-insensitive, surrounding whitespace ignored).

use crate::output::{Emitter, Tone};
use crate::registry::Question;
use std::io::{self, BufRead};
use thiserror::Error;
use tracing::debug;

/// Shown after an unrecognised answer
pub const RETRY_MESSAGE: &str = "Please enter Y or N";
/// Input prompt written before each read
pub const ANSWER_PROMPT: &str = "\n[Y]es / [N]o: ";
/// Prompt of the read that gates the start of a session
pub const START_PROMPT: &str = "\nPress ENTER to begin...";

#[derive(Error, Debug)]
pub enum PromptError {
    #[error("input closed while waiting for {waiting_for}")]
    EndOfInput { waiting_for: String },

    #[error("failed to read input: {0}")]
    Io(#[from] io::Error),
}

/// Normalize a raw response: `Some(true)` for yes, `Some(false)` for no
pub fn parse_answer(raw: &str) -> Option<bool> {
    match raw.trim().to_uppercase().as_str() {
        "Y" | "YES" => Some(true),
        "N" | "NO" => Some(false),
        _ => None,
    }
}

/// Source of answers for a session
pub trait Prompter {
    /// Block until the user is ready to start. Any input is accepted.
    fn wait_for_start(&mut self, out: &mut dyn Emitter) -> Result<(), PromptError>;

    /// Block until a valid yes/no answer to `question` is given
    fn prompt_yes_no(
        &mut self,
        question: &Question,
        out: &mut dyn Emitter,
    ) -> Result<bool, PromptError>;
}

/// Line-oriented prompter over stdin or any other reader
pub struct LinePrompter<R> {
    reader: R,
    rejected: usize,
}

impl LinePrompter<io::StdinLock<'static>> {
    pub fn stdin() -> Self {
        Self::new(io::stdin().lock())
    }
}

impl<R: BufRead> LinePrompter<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            rejected: 0,
        }
    }

    /// Number of answers rejected so far
    pub fn rejected(&self) -> usize {
        self.rejected
    }

    /// Read one line. Bytes that are not UTF-8 are replaced rather than
    /// failing the read, so they count as an unrecognised answer.
    fn read_line(&mut self, waiting_for: impl FnOnce() -> String) -> Result<String, PromptError> {
        let mut buf = Vec::new();
        if self.reader.read_until(b'\n', &mut buf)? == 0 {
            return Err(PromptError::EndOfInput {
                waiting_for: waiting_for(),
            });
        }
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }
}

impl<R: BufRead> Prompter for LinePrompter<R> {
    fn wait_for_start(&mut self, out: &mut dyn Emitter) -> Result<(), PromptError> {
        out.write(START_PROMPT)?;
        self.read_line(|| "the start prompt".to_string())?;
        Ok(())
    }

    fn prompt_yes_no(
        &mut self,
        question: &Question,
        out: &mut dyn Emitter,
    ) -> Result<bool, PromptError> {
        loop {
            out.write(ANSWER_PROMPT)?;
            let raw = self.read_line(|| format!("an answer to {:?}", question.prompt))?;
            if let Some(answer) = parse_answer(&raw) {
                return Ok(answer);
            }
            self.rejected += 1;
            debug!(id = %question.id, input = raw.trim(), "rejected answer");
            out.styled(RETRY_MESSAGE, Tone::Red)?;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::MemoryEmitter;
    use crate::registry::Registry;
    use std::io::Cursor;

    #[test]
    fn test_parse_answer_normalization() {
        for yes in ["y", "Y", "yes", "YES", " Yes ", "yEs\n", "\ty\r\n"] {
            assert_eq!(parse_answer(yes), Some(true), "{:?}", yes);
        }
        for no in ["n", "N", "No", "NO", " no \n"] {
            assert_eq!(parse_answer(no), Some(false), "{:?}", no);
        }
        for other in ["", " ", "maybe", "yess", "ye s", "0", "1", "nope", "y n"] {
            assert_eq!(parse_answer(other), None, "{:?}", other);
        }
    }

    #[test]
    fn test_reprompts_until_valid() {
        let registry = Registry::standard();
        let question = &registry.questions()[0];
        let mut prompter = LinePrompter::new(Cursor::new("maybe\n\nsure\n No \n"));
        let mut out = MemoryEmitter::new();

        let answer = prompter.prompt_yes_no(question, &mut out).unwrap();

        assert!(!answer);
        assert_eq!(prompter.rejected(), 3);
        assert_eq!(out.output().matches(RETRY_MESSAGE).count(), 3);
        assert_eq!(out.output().matches("[Y]es / [N]o: ").count(), 4);
    }

    #[test]
    fn test_answers_are_consumed_one_line_each() {
        let registry = Registry::standard();
        let mut prompter = LinePrompter::new(Cursor::new("y\nn\nYES\n"));
        let mut out = MemoryEmitter::new();

        let answers: Vec<bool> = registry.questions()[..3]
            .iter()
            .map(|q| prompter.prompt_yes_no(q, &mut out).unwrap())
            .collect();
        assert_eq!(answers, vec![true, false, true]);
        assert_eq!(prompter.rejected(), 0);
    }

    #[test]
    fn test_invalid_utf8_is_reprompted() {
        let registry = Registry::standard();
        let question = &registry.questions()[0];
        let mut prompter = LinePrompter::new(Cursor::new(&b"\xff\xfe\ny\n"[..]));
        let mut out = MemoryEmitter::new();

        let answer = prompter.prompt_yes_no(question, &mut out).unwrap();

        assert!(answer);
        assert_eq!(prompter.rejected(), 1);
        assert_eq!(out.output().matches(RETRY_MESSAGE).count(), 1);
    }

    #[test]
    fn test_end_of_input_is_fatal() {
        let registry = Registry::standard();
        let question = &registry.questions()[0];
        let mut prompter = LinePrompter::new(Cursor::new("what\n"));
        let mut out = MemoryEmitter::new();

        let err = prompter.prompt_yes_no(question, &mut out).unwrap_err();
        assert!(matches!(err, PromptError::EndOfInput { .. }));
        assert!(err.to_string().contains(question.prompt));
    }

    #[test]
    fn test_start_gate_accepts_anything() {
        let mut out = MemoryEmitter::new();

        let mut prompter = LinePrompter::new(Cursor::new("whatever\n"));
        prompter.wait_for_start(&mut out).unwrap();
        assert!(out.output().contains("Press ENTER to begin..."));

        let mut closed = LinePrompter::new(Cursor::new(""));
        assert!(matches!(
            closed.wait_for_start(&mut out),
            Err(PromptError::EndOfInput { .. })
        ));
    }
}
