use std::io::BufRead;

use log::debug;

use llslr_core::{Grammar, Production, Symbol};

use crate::error::ReaderError;
use crate::parse::parse_numbered_line;
use crate::symbols::alternative_string;

/// Read a grammar from its textual form
///
/// The first non-blank line holds the number `n` of production lines that
/// follow. Exactly `n` further lines are consumed, so the reader can keep
/// being used for whatever comes after the grammar. The start symbol is `S`.
pub fn read_grammar<R: BufRead>(reader: &mut R) -> Result<Grammar, ReaderError> {
    let mut line_no = 0;
    let count = loop {
        let mut line = String::new();
        if reader.read_line(&mut line)? == 0 {
            return Err(ReaderError::MissingCount);
        }
        line_no += 1;
        let trimmed = line.trim();
        if !trimmed.is_empty() {
            break trimmed
                .parse::<usize>()
                .map_err(|_| ReaderError::InvalidCount(trimmed.to_owned()))?;
        }
    };

    let mut productions = Vec::new();
    for found in 0..count {
        let mut line = String::new();
        if reader.read_line(&mut line)? == 0 {
            return Err(ReaderError::MissingLines {
                expected: count,
                found,
            });
        }
        line_no += 1;
        productions.extend(parse_numbered_line(&line, line_no)?);
    }
    debug!(
        "Read {} productions from {} lines",
        productions.len(),
        count
    );

    Ok(Grammar::with_default_start(productions)?)
}

/// Parse a grammar from a string, ignoring anything after the production lines
pub fn parse_grammar(text: &str) -> Result<Grammar, ReaderError> {
    read_grammar(&mut text.as_bytes())
}

/// Write a grammar back into its textual form
///
/// Alternatives of the same nonterminal share a line, lines are ordered by
/// the first appearance of their nonterminal.
pub fn write_grammar(grammar: &Grammar) -> String {
    let mut lines: Vec<(&Symbol, Vec<&Production>)> = Vec::new();
    for production in grammar.productions() {
        match lines.iter_mut().find(|(lhs, _)| **lhs == production.lhs) {
            Some((_, alternatives)) => alternatives.push(production),
            None => lines.push((&production.lhs, vec![production])),
        }
    }

    let mut text = format!("{}\n", lines.len());
    for (lhs, alternatives) in lines {
        let alternatives: Vec<String> = alternatives.into_iter().map(alternative_string).collect();
        text.push_str(&format!("{} -> {}\n", lhs.atom(), alternatives.join(" ")));
    }
    text
}
