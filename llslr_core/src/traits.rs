use std::error::Error;

use crate::sets::{FirstSets, FollowSets};
use crate::{Grammar, Symbol};

/// A parsing discipline that may or may not apply to a grammar
///
/// `build` either yields a parser that answers `accepts`, or the conflict that
/// disqualifies the grammar for this discipline. Implemented by `LL1Parser` and
/// `SLR1Parser`.
pub trait Recognizer: Sized {
    type Conflict: Error;

    fn build(
        grammar: &Grammar,
        first: &FirstSets,
        follow: &FollowSets,
    ) -> Result<Self, Self::Conflict>;

    /// Decide whether the sequence of terminal atoms is a sentence of the grammar
    fn accepts<S: AsRef<str>>(&self, input: &[S]) -> bool;

    /// Like `accepts`, taking every character of `input` as one atom
    fn accepts_str(&self, input: &str) -> bool {
        self.accepts(&split_input(input))
    }
}

/// Split a string into one-character atoms
pub fn split_input(input: &str) -> Vec<String> {
    input.chars().map(|c| c.to_string()).collect()
}

/// Classify input atoms and append the end marker
///
/// Returns `None` if any atom is not a terminal.
pub(crate) fn terminal_input<S: AsRef<str>>(input: &[S]) -> Option<Vec<Symbol>> {
    let mut symbols = Vec::with_capacity(input.len() + 1);
    for atom in input {
        match Symbol::classify(atom.as_ref()) {
            terminal @ Symbol::Terminal(_) => symbols.push(terminal),
            _ => return None,
        }
    }
    symbols.push(Symbol::EndMarker);
    Some(symbols)
}
