//! Interactive console I/O.
//!
//! All prompting and rendering goes through [`Console`], generic over the
//! input and output streams so tests can drive it with in-memory buffers.

use crate::game::{Board, Position, Square};
use anyhow::{Context, Result, bail};
use crossterm::{
    cursor::MoveTo,
    execute,
    terminal::{Clear, ClearType},
};
use std::io::{BufRead, Write};
use strum::IntoEnumIterator;

/// Console wrapper around an input and an output stream.
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    /// Creates a console over the given streams.
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Writes a line to the output.
    pub fn say(&mut self, message: &str) -> Result<()> {
        writeln!(self.output, "{message}")?;
        Ok(())
    }

    /// Clears the screen and homes the cursor.
    pub fn clear(&mut self) -> Result<()> {
        execute!(self.output, Clear(ClearType::All), MoveTo(0, 0))
            .context("Failed to clear screen")?;
        Ok(())
    }

    /// Prints a prompt and reads one trimmed line.
    ///
    /// # Errors
    ///
    /// Fails if the input stream closes before a line arrives.
    fn prompt(&mut self, message: &str) -> Result<String> {
        writeln!(self.output, "{message}")?;
        self.output.flush()?;

        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .context("Failed to read input")?;
        if read == 0 {
            bail!("Input stream closed");
        }
        Ok(line.trim().to_string())
    }

    /// Asks for a marker symbol; re-prompts on empty input.
    pub fn ask_marker(&mut self, message: &str) -> Result<char> {
        loop {
            let answer = self.prompt(message)?;
            if let Some(symbol) = answer.chars().next() {
                return Ok(symbol);
            }
        }
    }

    /// Asks for a display name; re-prompts on empty input.
    pub fn ask_name(&mut self, message: &str) -> Result<String> {
        loop {
            let answer = self.prompt(message)?;
            if !answer.is_empty() {
                return Ok(answer);
            }
        }
    }

    /// Asks for a square among `open`, re-prompting until a valid one arrives.
    pub fn ask_square(&mut self, open: &[Position]) -> Result<Position> {
        let message = format!("Choose a square ({}): ", joinor(open));
        loop {
            let answer = self.prompt(&message)?;
            let choice = answer
                .parse::<u8>()
                .ok()
                .and_then(Position::from_number)
                .filter(|pos| open.contains(pos));
            match choice {
                Some(pos) => return Ok(pos),
                None => self.say("Sorry, that's not a valid choice.")?,
            }
        }
    }

    /// Asks a yes/no question, accepting only `y` or `n` (case-insensitive).
    pub fn ask_yes_no(&mut self, question: &str) -> Result<bool> {
        loop {
            let answer = self.prompt(question)?.to_lowercase();
            match answer.as_str() {
                "y" => return Ok(true),
                "n" => return Ok(false),
                _ => self.say("Sorry, must be y or n")?,
            }
        }
    }

    /// Renders the board grid with the contestants' symbols.
    pub fn draw_board(&mut self, board: &Board, symbol_of: impl Fn(Square) -> char) -> Result<()> {
        let cells: Vec<char> = Position::iter()
            .map(|pos| symbol_of(board.get(pos)))
            .collect();
        for (row, line) in cells.chunks(3).enumerate() {
            writeln!(self.output, "     |     |")?;
            if let [a, b, c] = line {
                writeln!(self.output, "  {a}  |  {b}  |  {c}")?;
            }
            writeln!(self.output, "     |     |")?;
            if row < 2 {
                writeln!(self.output, "-----+-----+-----")?;
            }
        }
        Ok(())
    }

    /// Consumes the console, returning the output stream.
    pub fn into_output(self) -> W {
        self.output
    }
}

/// Joins position numbers with commas and a final conjunction,
/// e.g. `1, 2, or 9`.
fn joinor(positions: &[Position]) -> String {
    let numbers: Vec<String> = positions.iter().map(|p| p.to_string()).collect();
    match numbers.as_slice() {
        [] => String::new(),
        [only] => only.clone(),
        [head @ .., last] => format!("{}, or {}", head.join(", "), last),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn joinor_formats_lists() {
        let all: Vec<Position> = Position::iter().collect();
        assert_eq!(joinor(&all[..1]), "1");
        assert_eq!(joinor(&all[..2]), "1, or 2");
        assert_eq!(joinor(&all[..3]), "1, 2, or 3");
    }
}
