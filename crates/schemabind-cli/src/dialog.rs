//! Console dialog backed by a line-oriented reader and writer

use schemabind_conflict::ConsoleDialog;
use std::io::{self, BufRead, Stdout, StdinLock, Write};

/// Prompts on `output` and reads single-character answers from `input`.
///
/// An exhausted or unreadable input counts as `n`.
pub struct TerminalDialog<R, W> {
    input: R,
    output: W,
}

impl TerminalDialog<StdinLock<'static>, Stdout> {
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> TerminalDialog<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    #[cfg(test)]
    fn into_output(self) -> W {
        self.output
    }
}

impl<R: BufRead, W: Write> ConsoleDialog for TerminalDialog<R, W> {
    fn confirm(&mut self, message: &str, valid_responses: &str, legend: &str) -> char {
        let choices: Vec<String> = valid_responses.chars().map(String::from).collect();
        loop {
            let _ = write!(self.output, "{message} ({})? ", choices.join("/"));
            let _ = self.output.flush();

            let mut line = String::new();
            match self.input.read_line(&mut line) {
                Ok(0) | Err(_) => {
                    tracing::warn!("no answer available, assuming 'n'");
                    return 'n';
                }
                Ok(_) => {}
            }

            let answer = line.trim().chars().next().map(|c| c.to_ascii_lowercase());
            match answer {
                Some(c) if valid_responses.contains(c) => return c,
                _ => {
                    let _ = writeln!(self.output, "{legend}");
                }
            }
        }
    }
}
