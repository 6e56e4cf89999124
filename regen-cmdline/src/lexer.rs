//! A lexer for splitting a raw command line into tokens.
//!
//! Tokens are separated by spaces. A double quote at the start of a token opens a quoted run,
//! which may contain spaces, and the next double quote closes it. The closing quote must be
//! followed by a space or by the end of the input. A quote in the middle of a token is kept as
//! is. There are no escape sequences, so backslashes in paths are literal.

use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::str::Chars;

const QUOTE: char = '"';
const SEPARATOR: char = ' ';

/// Defines the possible errors that may occur while splitting the command line.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[non_exhaustive]
pub enum Error {
    /// A closing quote is followed by something other than a space.
    #[error("quote in middle of string not allowed: {0}")]
    MalformedQuoting(String),

    /// A quoted run is never closed.
    #[error("unmatched quote: {0}")]
    UnmatchedQuote(String),
}

/// Split the whole command line at once.
pub fn tokenize(input: &str) -> Result<Vec<String>, Error> {
    Tokens::new(input).collect()
}

/// Defines a lexer that streams tokens from a raw command line.
///
/// It acts like a forward iterator and stops after the first error.
#[derive(Clone, Debug)]
pub struct Tokens<'a> {
    input: &'a str,
    chars: Chars<'a>,
    done: bool,
}

impl<'a> Tokens<'a> {
    /// Create a new lexer from the raw command line.
    pub fn new(input: &'a str) -> Self {
        Tokens {
            input,
            chars: input.chars(),
            done: false,
        }
    }

    fn fail(&mut self, err: fn(String) -> Error) -> Option<Result<String, Error>> {
        self.done = true;
        Some(Err(err(self.input.to_string())))
    }
}

impl Iterator for Tokens<'_> {
    type Item = Result<String, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let mut buf = String::new();
        let mut quoted = false;

        while let Some(c) = self.chars.next() {
            match c {
                // Closing quote, the token is complete even if empty.
                QUOTE if quoted => {
                    return match self.chars.next() {
                        None | Some(SEPARATOR) => Some(Ok(buf)),
                        Some(_) => self.fail(Error::MalformedQuoting),
                    };
                }

                // Opening quote, only at a token boundary.
                QUOTE if buf.is_empty() => quoted = true,

                SEPARATOR if !quoted => {
                    if !buf.is_empty() {
                        return Some(Ok(buf));
                    }
                }

                _ => buf.push(c),
            }
        }

        if quoted {
            return self.fail(Error::UnmatchedQuote);
        }

        self.done = true;

        if buf.is_empty() { None } else { Some(Ok(buf)) }
    }
}

impl core::iter::FusedIterator for Tokens<'_> {}
