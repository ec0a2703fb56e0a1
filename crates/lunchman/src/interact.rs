//! Line-oriented operator dialogue.
//!
//! An [`Actor`] reads answers from an input stream and writes prompts to an
//! output stream. Input is validated by [`InputCheck`]s, and failed checks
//! offer the operator a retry.

use std::io::{self, BufRead, Write};

use async_trait::async_trait;
use thiserror::Error;

use luncher_db::RepositoryError;

/// Why an input was not accepted.
#[derive(Debug, Error)]
pub enum CheckError {
    /// The input was rejected with a message for the operator.
    #[error("{0}")]
    Invalid(String),

    /// The check could not read the store.
    #[error(transparent)]
    Store(#[from] RepositoryError),
}

impl CheckError {
    #[must_use]
    pub fn invalid(message: impl Into<String>) -> Self {
        Self::Invalid(message.into())
    }
}

/// A validation run against trimmed operator input.
#[async_trait]
pub trait InputCheck: Send + Sync {
    /// # Errors
    ///
    /// Returns `CheckError::Invalid` to reject the input.
    async fn check(&self, input: &str) -> Result<(), CheckError>;
}

/// Errors from an operator dialogue.
#[derive(Debug, Error)]
pub enum ActorError {
    /// The operator declined to try again.
    #[error("Command aborted")]
    Canceled,

    /// A confirmation answer was neither yes nor no.
    #[error("Please answer with 'y' or 'n'")]
    NoOptionSelected,

    /// An input check failed.
    #[error(transparent)]
    Check(#[from] CheckError),

    /// The input stream closed before an answer was read.
    #[error("Unexpected end of input")]
    EndOfInput,

    /// Reading or writing the terminal failed.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Prompts an operator and reads their answers, one line at a time.
pub struct Actor<R, W> {
    reader: R,
    writer: W,
}

impl<R, W> Actor<R, W>
where
    R: BufRead + Send,
    W: Write + Send,
{
    #[must_use]
    pub const fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    /// Consume the actor, returning the output stream.
    #[must_use]
    pub fn into_writer(self) -> W {
        self.writer
    }

    /// Write one line for the operator.
    ///
    /// # Errors
    ///
    /// Returns `ActorError::Io` if the output cannot be written.
    pub fn say(&mut self, line: &str) -> Result<(), ActorError> {
        writeln!(self.writer, "{line}")?;
        self.writer.flush()?;
        Ok(())
    }

    /// Ask for a value and run `checks` against it in order.
    ///
    /// Returns the trimmed input, or the first failing check's error.
    ///
    /// # Errors
    ///
    /// Returns `ActorError::Check` if a check rejects the input,
    /// `ActorError::EndOfInput` if there is nothing left to read.
    pub async fn get_input(
        &mut self,
        message: &str,
        checks: &[&dyn InputCheck],
    ) -> Result<String, ActorError> {
        write!(self.writer, "{message}: ")?;
        self.writer.flush()?;

        let input = self.read_line()?;
        for check in checks {
            check.check(&input).await?;
        }
        Ok(input)
    }

    /// Ask for a value until it passes every check or the operator gives up.
    ///
    /// After each failed check the operator is asked whether to try again.
    /// An unrecognized answer re-asks that question.
    ///
    /// # Errors
    ///
    /// Returns `ActorError::Canceled` if the operator declines to retry.
    /// I/O failures and `ActorError::EndOfInput` abort immediately.
    pub async fn get_input_and_retry(
        &mut self,
        message: &str,
        checks: &[&dyn InputCheck],
    ) -> Result<String, ActorError> {
        loop {
            let err = match self.get_input(message, checks).await {
                Ok(input) => return Ok(input),
                Err(ActorError::Check(err)) => err,
                Err(err) => return Err(err),
            };

            let question = format!("{err}\nDo you want to try again?");
            loop {
                match self.confirm(&question, false) {
                    Ok(true) => break,
                    Ok(false) => return Err(ActorError::Canceled),
                    Err(ActorError::NoOptionSelected) => {
                        self.say(&ActorError::NoOptionSelected.to_string())?;
                    }
                    Err(err) => return Err(err),
                }
            }
        }
    }

    /// Ask a yes/no question. An empty answer picks `default`.
    ///
    /// # Errors
    ///
    /// Returns `ActorError::NoOptionSelected` for any answer other than
    /// `y`, `yes`, `n` or `no` (case-insensitive).
    pub fn confirm(&mut self, message: &str, default: bool) -> Result<bool, ActorError> {
        let options = if default { "[Y/n]" } else { "[y/N]" };
        write!(self.writer, "{message} {options}: ")?;
        self.writer.flush()?;

        let answer = self.read_line()?.to_lowercase();
        match answer.as_str() {
            "" => Ok(default),
            "y" | "yes" => Ok(true),
            "n" | "no" => Ok(false),
            _ => Err(ActorError::NoOptionSelected),
        }
    }

    fn read_line(&mut self) -> Result<String, ActorError> {
        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Err(ActorError::EndOfInput);
        }
        Ok(line.trim().to_owned())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::io::Cursor;

    use super::*;
    use crate::checks::NotEmpty;

    type TestActor = Actor<Cursor<Vec<u8>>, Vec<u8>>;

    fn actor(input: &str) -> TestActor {
        Actor::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    fn output(actor: TestActor) -> String {
        String::from_utf8(actor.into_writer()).unwrap()
    }

    struct RejectTallinn;

    #[async_trait]
    impl InputCheck for RejectTallinn {
        async fn check(&self, input: &str) -> Result<(), CheckError> {
            if input == "Tallinn" {
                return Err(CheckError::invalid("taken"));
            }
            Ok(())
        }
    }

    #[test]
    fn test_confirm_empty_uses_default() {
        assert!(actor("\n").confirm("Sure?", true).unwrap());
        assert!(!actor("\n").confirm("Sure?", false).unwrap());
    }

    #[test]
    fn test_confirm_accepts_yes_and_no_in_any_case() {
        assert!(actor("Y\n").confirm("Sure?", false).unwrap());
        assert!(actor("yes\n").confirm("Sure?", false).unwrap());
        assert!(!actor("N\n").confirm("Sure?", true).unwrap());
        assert!(!actor("No\n").confirm("Sure?", true).unwrap());
    }

    #[test]
    fn test_confirm_unrecognized_answer_ignores_default() {
        for default in [true, false] {
            let result = actor("maybe\n").confirm("Sure?", default);
            assert!(matches!(result, Err(ActorError::NoOptionSelected)));
        }
    }

    #[test]
    fn test_confirm_prompt_shows_default() {
        let mut a = actor("\n");
        a.confirm("Sure?", true).unwrap();
        assert_eq!(output(a), "Sure? [Y/n]: ");

        let mut a = actor("\n");
        a.confirm("Sure?", false).unwrap();
        assert_eq!(output(a), "Sure? [y/N]: ");
    }

    #[test]
    fn test_end_of_input() {
        assert!(matches!(
            actor("").confirm("Sure?", true),
            Err(ActorError::EndOfInput)
        ));
    }

    #[tokio::test]
    async fn test_get_input_trims_and_checks_in_order() {
        let mut a = actor("  Tartu \n");
        let input = a
            .get_input("Enter region name", &[&NotEmpty, &RejectTallinn])
            .await
            .unwrap();
        assert_eq!(input, "Tartu");
        assert_eq!(output(a), "Enter region name: ");
    }

    #[tokio::test]
    async fn test_get_input_stops_at_first_failing_check() {
        let mut a = actor("\n");
        let err = a
            .get_input("Enter region name", &[&NotEmpty, &RejectTallinn])
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "Can't be empty!");
    }

    #[tokio::test]
    async fn test_retry_after_failed_check() {
        let mut a = actor("\ny\nTartu\n");
        let input = a
            .get_input_and_retry("Enter region name", &[&NotEmpty, &RejectTallinn])
            .await
            .unwrap();
        assert_eq!(input, "Tartu");
        assert_eq!(
            output(a),
            "Enter region name: Can't be empty!\nDo you want to try again? [y/N]: Enter region name: "
        );
    }

    #[tokio::test]
    async fn test_declined_retry_cancels() {
        let mut a = actor("\nn\nTartu\n");
        let result = a
            .get_input_and_retry("Enter region name", &[&NotEmpty, &RejectTallinn])
            .await;
        assert!(matches!(result, Err(ActorError::Canceled)));
        assert_eq!(
            output(a),
            "Enter region name: Can't be empty!\nDo you want to try again? [y/N]: "
        );
    }

    #[tokio::test]
    async fn test_unrecognized_retry_answer_reasks_confirmation() {
        let mut a = actor("Tallinn\nwhat\nyes\nTartu\n");
        let input = a
            .get_input_and_retry("Enter region name", &[&RejectTallinn])
            .await
            .unwrap();
        assert_eq!(input, "Tartu");

        let out = output(a);
        assert_eq!(out.matches("Enter region name: ").count(), 2);
        assert_eq!(out.matches("Do you want to try again?").count(), 2);
        assert!(out.contains("Please answer with 'y' or 'n'\n"));
    }

    #[tokio::test]
    async fn test_default_retry_answer_is_no() {
        let mut a = actor("Tallinn\n\n");
        let result = a
            .get_input_and_retry("Enter region name", &[&RejectTallinn])
            .await;
        assert!(matches!(result, Err(ActorError::Canceled)));
    }

    #[tokio::test]
    async fn test_end_of_input_aborts_retry_loop() {
        let mut a = actor("Tallinn\ny\n");
        let result = a
            .get_input_and_retry("Enter region name", &[&RejectTallinn])
            .await;
        assert!(matches!(result, Err(ActorError::EndOfInput)));
    }
}
