use combine::stream::position;
use combine::{eof, many1, satisfy, sep_end_by1, skip_many, skip_many1};
use combine::{EasyParser, ParseError, Parser, Stream};

use llslr_core::Production;

use crate::error::ReaderError;
use crate::symbols::alternative_production;

/// A production line before its alternatives are turned into symbols
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductionLine {
    pub lhs: char,
    pub alternatives: Vec<String>,
}

/// Parse one line of the form `A -> alt1 alt2 ...`
///
/// Every alternative becomes its own production, in the order written.
pub fn parse_production_line(line: &str) -> Result<Vec<Production>, ReaderError> {
    parse_numbered_line(line, 1)
}

pub(crate) fn parse_numbered_line(
    line: &str,
    line_no: usize,
) -> Result<Vec<Production>, ReaderError> {
    let line = line.trim_end_matches(|c| c == '\n' || c == '\r');
    let (parsed, _rest) = production_line()
        .easy_parse(position::Stream::new(line))
        .map_err(|err| ReaderError::Syntax {
            line: line_no,
            message: err.to_string().trim_end().to_owned(),
        })?;

    parsed
        .alternatives
        .iter()
        .map(|alternative| {
            alternative_production(parsed.lhs, alternative)
                .map_err(|error| ReaderError::Production { line: line_no, error })
        })
        .collect()
}

fn production_line<I>() -> impl Parser<I, Output = ProductionLine>
where
    I: Stream<Token = char>,
    I::Error: ParseError<I::Token, I::Range, I::Position>,
{
    (
        blanks().with(nonterminal()),
        blanks().with(arrow()),
        blanks().with(sep_end_by1(alternative(), skip_many1(blank()))),
        eof(),
    )
        .map(
            |(lhs, _arrow, alternatives, _eof): (char, (), Vec<String>, ())| ProductionLine {
                lhs,
                alternatives,
            },
        )
}

fn nonterminal<I>() -> impl Parser<I, Output = char>
where
    I: Stream<Token = char>,
    I::Error: ParseError<I::Token, I::Range, I::Position>,
{
    satisfy(|c: char| c.is_ascii_uppercase()).expected("nonterminal")
}

fn arrow<I>() -> impl Parser<I, Output = ()>
where
    I: Stream<Token = char>,
    I::Error: ParseError<I::Token, I::Range, I::Position>,
{
    (satisfy(|c: char| c == '-'), satisfy(|c: char| c == '>'))
        .map(|_| ())
        .expected("`->`")
}

fn alternative<I>() -> impl Parser<I, Output = String>
where
    I: Stream<Token = char>,
    I::Error: ParseError<I::Token, I::Range, I::Position>,
{
    many1::<String, _, _>(satisfy(|c: char| !c.is_whitespace())).expected("alternative")
}

fn blank<I>() -> impl Parser<I, Output = char>
where
    I: Stream<Token = char>,
    I::Error: ParseError<I::Token, I::Range, I::Position>,
{
    satisfy(|c: char| c == ' ' || c == '\t')
}

fn blanks<I>() -> impl Parser<I, Output = ()>
where
    I: Stream<Token = char>,
    I::Error: ParseError<I::Token, I::Range, I::Position>,
{
    skip_many(blank())
}
