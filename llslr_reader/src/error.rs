use std::error::Error;
use std::fmt;
use std::io;

use llslr_core::GrammarError;

#[derive(Debug)]
pub enum ReaderError {
    Io(io::Error),
    MissingCount,
    InvalidCount(String),
    MissingLines { expected: usize, found: usize },
    Syntax { line: usize, message: String },
    Production { line: usize, error: GrammarError },
    Grammar(GrammarError),
}

impl fmt::Display for ReaderError {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        match self {
            ReaderError::Io(err) => write!(f, "Reader error: {}", err),
            ReaderError::MissingCount => write!(f, "Reader error: missing production count"),
            ReaderError::InvalidCount(count) => {
                write!(f, "Reader error: invalid production count {:?}", count)
            }
            ReaderError::MissingLines { expected, found } => write!(
                f,
                "Reader error: expected {} production lines, got {}",
                expected, found
            ),
            ReaderError::Syntax { line, message } => {
                write!(f, "Reader error on line {}: {}", line, message)
            }
            ReaderError::Production { line, error } => {
                write!(f, "Reader error on line {}: {}", line, error)
            }
            ReaderError::Grammar(err) => write!(f, "Reader error: {}", err),
        }
    }
}

impl Error for ReaderError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            ReaderError::Io(err) => Some(err),
            ReaderError::Production { error, .. } => Some(error),
            ReaderError::Grammar(err) => Some(err),
            _ => None,
        }
    }
}

impl From<io::Error> for ReaderError {
    fn from(err: io::Error) -> Self {
        ReaderError::Io(err)
    }
}

impl From<GrammarError> for ReaderError {
    fn from(err: GrammarError) -> Self {
        ReaderError::Grammar(err)
    }
}
