//! Asks the operator which inventories to export.

use crate::request::{parse_ids, Currency, UserInput, DEFAULT_CURRENCY};
use std::io::{self, BufRead, Write};
use std::str::FromStr;

const IDS_QUESTION: &str = "Please enter steam user ids separated by comma: ";
const INVALID_ANSWER: &str = "Please enter a valid value.";

/// Reads answers from `reader` and writes questions to `writer`. Invalid answers are asked again.
#[derive(Debug)]
pub struct Prompt<R, W> {
    reader: R,
    writer: W,
}

impl<R, W> Prompt<R, W>
where
    R: BufRead,
    W: Write,
{
    /// Creates a new [`Prompt`].
    pub fn new(reader: R, writer: W) -> Self {
        Self {
            reader,
            writer,
        }
    }

    /// Asks for the identifiers and the currency.
    pub fn collect(&mut self) -> io::Result<UserInput> {
        let identifiers = self.ask_identifiers()?;
        let currency = self.ask_currency()?;

        Ok(UserInput {
            identifiers,
            currency,
        })
    }

    /// Asks until the answer contains at least one identifier.
    pub fn ask_identifiers(&mut self) -> io::Result<Vec<String>> {
        self.ask(IDS_QUESTION, |answer| {
            let identifiers = parse_ids(answer);

            if identifiers.is_empty() {
                None
            } else {
                Some(identifiers)
            }
        })
    }

    /// Asks until the answer is a 3-character currency code. An empty answer is
    /// [`DEFAULT_CURRENCY`].
    pub fn ask_currency(&mut self) -> io::Result<Currency> {
        let question = format!("Please enter currency ({DEFAULT_CURRENCY}): ");

        self.ask(&question, |answer| {
            if answer.is_empty() {
                Some(Currency::default())
            } else {
                Currency::from_str(answer).ok()
            }
        })
    }

    fn ask<T, F>(&mut self, question: &str, parse: F) -> io::Result<T>
    where
        F: Fn(&str) -> Option<T>,
    {
        loop {
            write!(self.writer, "{question}")?;
            self.writer.flush()?;

            let mut answer = String::new();

            if self.reader.read_line(&mut answer)? == 0 {
                return Err(io::Error::new(
                    io::ErrorKind::UnexpectedEof,
                    "input closed before a valid answer was given",
                ));
            }

            if let Some(value) = parse(answer.trim()) {
                return Ok(value);
            }

            writeln!(self.writer, "{INVALID_ANSWER}")?;
        }
    }
}
