//! Interactive prompt session
//!
//! Owns the process's interactive input for the duration of the run and is
//! passed explicitly to every component that prompts. Release is by RAII:
//! dropping the session on any exit path of the control loop closes it.

use std::io::{self, Write};
use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};

pub struct PromptSession {
    lines: Lines<BufReader<Stdin>>,
}

impl PromptSession {
    pub fn new() -> Self {
        Self {
            lines: BufReader::new(tokio::io::stdin()).lines(),
        }
    }

    /// Print a prompt and read one trimmed line. End of input reads as an
    /// empty answer, which every caller treats as "cancel".
    pub async fn ask(&mut self, prompt: &str) -> io::Result<String> {
        print!("{}", prompt);
        io::stdout().flush()?;
        let line = self.lines.next_line().await?;
        Ok(line.map(|answer| answer.trim().to_string()).unwrap_or_default())
    }
}

impl Default for PromptSession {
    fn default() -> Self {
        Self::new()
    }
}
