use std::io::{self, BufRead, Stdout, Write};

use crate::error::PlayError;
use crate::game::{Board, Player};

use super::agent::Agent;

/// Where a human's answers come from, one line per call.
pub trait LineSource {
    /// Append one line to `buf`, returning the bytes read (0 at end of input).
    fn read_line(&mut self, buf: &mut String) -> io::Result<usize>;
}

impl<R: BufRead> LineSource for R {
    fn read_line(&mut self, buf: &mut String) -> io::Result<usize> {
        BufRead::read_line(self, buf)
    }
}

/// Process stdin, locked only for the duration of each read so that
/// several humans can share the terminal.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdinLines;

impl LineSource for StdinLines {
    fn read_line(&mut self, buf: &mut String) -> io::Result<usize> {
        io::stdin().read_line(buf)
    }
}

/// Interactive move source: prompts on `output` and reads a column per line
/// from `input`, asking again until the column is playable.
pub struct HumanAgent<R, W> {
    input: R,
    output: W,
}

impl HumanAgent<StdinLines, Stdout> {
    /// Human at the terminal
    pub fn stdio() -> Self {
        HumanAgent::new(StdinLines, io::stdout())
    }
}

impl<R: LineSource, W: Write> HumanAgent<R, W> {
    pub fn new(input: R, output: W) -> Self {
        HumanAgent { input, output }
    }

    pub fn into_output(self) -> W {
        self.output
    }
}

impl<R: LineSource, W: Write> Agent for HumanAgent<R, W> {
    fn select_action(&mut self, board: &mut Board, player: Player) -> Result<usize, PlayError> {
        loop {
            write!(self.output, "Next col for {player}: ")?;
            self.output.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Err(PlayError::InputClosed);
            }

            let answer = line.trim();
            match answer.parse::<usize>() {
                Ok(col) if board.allows_move(col) => return Ok(col),
                _ => writeln!(self.output, "Column {answer:?} can't be played, try again.")?,
            }
        }
    }

    fn name(&self) -> &str {
        "Human"
    }
}
