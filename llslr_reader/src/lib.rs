//! Reader and writer for the line based grammar format
//!
//! ```text
//! 3
//! S -> AB
//! A -> aA d
//! B -> bBc e
//! ```
//!
//! The first line gives the number of production lines. Each production line
//! holds one nonterminal, an arrow and the space separated alternatives,
//! where every character of an alternative is one symbol and `e` alone is
//! the empty alternative.

pub mod error;
pub mod grammar;
pub mod parse;
pub mod symbols;

pub use crate::error::ReaderError;
pub use crate::grammar::{parse_grammar, read_grammar, write_grammar};
pub use crate::parse::parse_production_line;
