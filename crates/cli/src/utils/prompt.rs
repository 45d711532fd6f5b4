use std::io::{self, BufRead, Write};

use karate_runner_core::interfaces::RunnerPrompt;

/// Asks on stderr and reads the answer from a line reader.
///
/// An empty line accepts the default; end of input cancels.
pub struct LinePrompt<R: BufRead> {
    input: R,
}

pub type StdinPrompt = LinePrompt<io::StdinLock<'static>>;

impl StdinPrompt {
    pub fn stdin() -> Self {
        Self::new(io::stdin().lock())
    }
}

impl<R: BufRead> LinePrompt<R> {
    pub fn new(input: R) -> Self {
        Self { input }
    }
}

impl<R: BufRead> RunnerPrompt for LinePrompt<R> {
    fn prompt_text(&mut self, title: &str, default: &str) -> Option<String> {
        eprint!("❓ {title} runner class [{default}]: ");
        io::stderr().flush().ok();

        let mut answer = String::new();
        match self.input.read_line(&mut answer) {
            Ok(0) | Err(_) => None,
            Ok(_) => {
                let answer = answer.trim();
                if answer.is_empty() {
                    Some(default.to_string())
                } else {
                    Some(answer.to_string())
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_blank_line_accepts_default() {
        let mut prompt = LinePrompt::new(Cursor::new("\n"));
        assert_eq!(
            prompt.prompt_text("Karate Runner", "TestRunner"),
            Some("TestRunner".to_string())
        );
    }

    #[test]
    fn test_answer_is_trimmed() {
        let mut prompt = LinePrompt::new(Cursor::new("  UsersRunner \n"));
        assert_eq!(
            prompt.prompt_text("Karate Runner", "TestRunner"),
            Some("UsersRunner".to_string())
        );
    }

    #[test]
    fn test_end_of_input_cancels() {
        let mut prompt = LinePrompt::new(Cursor::new(""));
        assert_eq!(prompt.prompt_text("Karate Runner", "TestRunner"), None);
    }
}
