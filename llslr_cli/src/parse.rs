use std::error::Error;
use std::fmt;
use std::fs::File;
use std::io::BufReader;

use clap::ArgMatches;
use log::info;

use llslr::Grammar;

/// Read the grammar stored in `filename`
pub fn load_grammar(filename: &str) -> Result<Grammar, Box<dyn Error>> {
    let file = File::open(filename)?;
    let grammar = llslr::read_grammar(&mut BufReader::new(file))?;
    info!(
        "Loaded {} productions from {}",
        grammar.productions().len(),
        filename
    );
    Ok(grammar)
}

/// Value of an argument clap has already declared as required
pub fn required<'a>(matches: &'a ArgMatches, name: &'static str) -> Result<&'a str, CliError> {
    matches
        .value_of(name)
        .ok_or(CliError::MissingArgument(name))
}

#[derive(Debug)]
pub enum CliError {
    MissingArgument(&'static str),
    UnknownMethod(String),
    NotAvailable(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        match self {
            CliError::MissingArgument(name) => write!(f, "Missing argument <{}>", name),
            CliError::UnknownMethod(method) => {
                writeln!(f, "Unknown method {:?}", method)?;
                write!(f, "Hint: use --method ll1 or --method slr1.")
            }
            CliError::NotAvailable(reason) => write!(f, "{}", reason),
        }
    }
}

impl Error for CliError {}
