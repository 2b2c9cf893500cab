//! A strategy that asks a human.

use std::cell::RefCell;
use std::io::{BufRead, Stdin, StdinLock, Stdout, Write};

use crate::core::{HogError, Result};

use super::Strategy;

/// Prompts for a roll count on `output` and reads it from `input`.
///
/// Input that is not an integer, or is negative, is re-prompted. Reaching the
/// end of `input` fails with `InputClosed`.
pub struct InteractiveStrategy<R, W> {
    input: RefCell<R>,
    output: RefCell<W>,
}

impl<R: BufRead, W: Write> InteractiveStrategy<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input: RefCell::new(input),
            output: RefCell::new(output),
        }
    }

    /// Give back the reader and writer.
    pub fn into_inner(self) -> (R, W) {
        (self.input.into_inner(), self.output.into_inner())
    }
}

impl InteractiveStrategy<StdinLock<'static>, Stdout> {
    /// Read from stdin, prompt on stdout.
    pub fn stdio() -> Self {
        let stdin: Stdin = std::io::stdin();
        Self::new(stdin.lock(), std::io::stdout())
    }
}

impl<R: BufRead, W: Write> Strategy for InteractiveStrategy<R, W> {
    fn num_rolls(&self, score: u32, opponent_score: u32) -> Result<i32> {
        let mut input = self.input.borrow_mut();
        let mut output = self.output.borrow_mut();

        writeln!(output, "Current score: {score} to {opponent_score}")?;
        let mut line = String::new();
        loop {
            write!(output, "How many dice will you roll? ")?;
            output.flush()?;

            line.clear();
            if input.read_line(&mut line)? == 0 {
                return Err(HogError::InputClosed);
            }
            match line.trim().parse::<i32>() {
                Ok(n) if n < 0 => writeln!(output, "Please enter a non-negative number")?,
                Ok(n) => return Ok(n),
                Err(_) => writeln!(output, "Please enter a positive number")?,
            }
        }
    }
}
