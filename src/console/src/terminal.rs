use crate::{ConsoleError, ConsoleResult};
use log::debug;
use std::io::{BufRead, Write};

pub const INVALID_NUMBER_MESSAGE: &str = "Please enter a whole number.";

/// Line-oriented prompt reader over any buffered input and output.
pub struct Terminal<R: BufRead, W: Write> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> Terminal<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Terminal { reader, writer }
    }

    pub fn write(&mut self, text: &str) -> ConsoleResult<()> {
        self.writer.write_all(text.as_bytes())?;
        Ok(())
    }

    pub fn write_line(&mut self, text: &str) -> ConsoleResult<()> {
        self.writer.write_all(text.as_bytes())?;
        self.writer.write_all(b"\n")?;
        Ok(())
    }

    /// Prints `prompt` and returns the next line without its terminator.
    pub fn prompt_line(&mut self, prompt: &str) -> ConsoleResult<String> {
        self.write(prompt)?;
        self.writer.flush()?;

        self.read_line()
    }

    /// Prints `prompt` until the user enters something that parses as an `i32`.
    pub fn prompt_number(&mut self, prompt: &str) -> ConsoleResult<i32> {
        loop {
            let line = self.prompt_line(prompt)?;

            match line.trim().parse::<i32>() {
                Ok(number) => return Ok(number),
                Err(err) => {
                    debug!("rejected number input {:?}: {}", line, err);
                    self.write_line(INVALID_NUMBER_MESSAGE)?;
                }
            }
        }
    }

    pub fn into_writer(self) -> W {
        self.writer
    }

    fn read_line(&mut self) -> ConsoleResult<String> {
        let mut line = String::new();

        if self.reader.read_line(&mut line)? == 0 {
            return Err(ConsoleError::InputClosed);
        }

        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }

        Ok(line)
    }
}
