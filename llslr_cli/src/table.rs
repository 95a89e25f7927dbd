use std::error::Error;
use std::fs::File;
use std::str::FromStr;

use prettytable as pt;
use prettytable::cell;
use prettytable::row;

use llslr::{symbol_set_string, Analysis, Grammar, LL1Parser, SLR1Parser, Symbol};

use crate::parse::{self, CliError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    LL1,
    SLR1,
}

impl FromStr for Method {
    type Err = CliError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ll1" => Ok(Method::LL1),
            "slr1" => Ok(Method::SLR1),
            _ => Err(CliError::UnknownMethod(s.to_owned())),
        }
    }
}

pub fn print_table(input_filename: &str, method: Method) -> Result<(), Box<dyn Error>> {
    let pretty_table = generate_table(input_filename, method)?;
    println!("{}", pretty_table);
    Ok(())
}

pub fn write_table_csv(
    input_filename: &str,
    method: Method,
    csv_filename: &str,
) -> Result<(), Box<dyn Error>> {
    let pretty_table = generate_table(input_filename, method)?;
    let csv_file = File::create(csv_filename)?;
    pretty_table.to_csv(csv_file)?;
    Ok(())
}

pub fn print_sets(input_filename: &str) -> Result<(), Box<dyn Error>> {
    let grammar = parse::load_grammar(input_filename)?;
    println!("{}", sets_table(&grammar, &Analysis::new(&grammar)));
    Ok(())
}

pub fn write_sets_csv(input_filename: &str, csv_filename: &str) -> Result<(), Box<dyn Error>> {
    let grammar = parse::load_grammar(input_filename)?;
    let pretty_table = sets_table(&grammar, &Analysis::new(&grammar));
    let csv_file = File::create(csv_filename)?;
    pretty_table.to_csv(csv_file)?;
    Ok(())
}

fn generate_table(input_filename: &str, method: Method) -> Result<pt::Table, Box<dyn Error>> {
    let grammar = parse::load_grammar(input_filename)?;
    let analysis = Analysis::new(&grammar);
    let pretty_table = match method {
        Method::LL1 => ll1_table(analysis.ll1.as_ref().map_err(Clone::clone)?),
        Method::SLR1 => slr1_table(analysis.slr1.as_ref().map_err(Clone::clone)?),
    };
    Ok(pretty_table)
}

/// FIRST and FOLLOW of every nonterminal
pub fn sets_table(grammar: &Grammar, analysis: &Analysis) -> pt::Table {
    let mut table = pt::Table::new();
    table.add_row(row!["Nonterminal", "FIRST", "FOLLOW"]);

    for n in grammar.nonterminals() {
        let first = analysis
            .first
            .get(n)
            .map_or_else(|| "{}".to_owned(), |set| symbol_set_string(set));
        let follow = analysis
            .follow
            .get(n)
            .map_or_else(|| "{}".to_owned(), |set| symbol_set_string(set));
        table.add_row(row![n, first, follow]);
    }

    table
}

/// Predictive table with one row per nonterminal and one column per lookahead
pub fn ll1_table(parser: &LL1Parser) -> pt::Table {
    let grammar = parser.grammar();
    let lookaheads = lookahead_columns(grammar);

    let mut table = pt::Table::new();
    let mut title_row = row![""];
    for t in lookaheads.iter() {
        title_row.add_cell(cell!(t));
    }
    table.add_row(title_row);

    for n in grammar.nonterminals() {
        let mut row = row![n];
        for t in lookaheads.iter() {
            row.add_cell(cell![parser
                .table()
                .get(n, t)
                .map_or("".to_owned(), |idx| format!("{}", grammar.production(idx)))]);
        }
        table.add_row(row);
    }

    table
}

/// ACTION and GOTO tables next to the item closure of every state
pub fn slr1_table(parser: &SLR1Parser) -> pt::Table {
    let automaton = parser.automaton();
    let grammar = automaton.grammar();
    let start = &grammar.production(automaton.start_rule()).lhs;
    let lookaheads = lookahead_columns(grammar);
    let nonterminals: Vec<&Symbol> = grammar.nonterminals().iter().filter(|n| *n != start).collect();

    let mut table = pt::Table::new();
    let mut title_row = row!["#", "LR(0) item closure"];
    for t in lookaheads.iter() {
        title_row.add_cell(cell!(t));
    }
    for n in nonterminals.iter() {
        title_row.add_cell(cell!(n));
    }
    table.add_row(title_row);

    for (i, state) in automaton.states().iter().enumerate() {
        let items: Vec<String> = state
            .items()
            .map(|item| item.display(grammar).to_string())
            .collect();

        let mut row = row![i, items.join("\n")];

        for t in lookaheads.iter() {
            row.add_cell(cell![parser
                .table()
                .action(i, t)
                .map_or("".to_owned(), |a| format!("{}", a))]);
        }

        for n in nonterminals.iter() {
            row.add_cell(cell![parser
                .table()
                .goto(i, n)
                .map_or("".to_owned(), |idx| format!("{}", idx))]);
        }

        table.add_row(row);
    }

    table
}

fn lookahead_columns(grammar: &Grammar) -> Vec<Symbol> {
    grammar
        .terminals()
        .iter()
        .cloned()
        .chain(std::iter::once(Symbol::EndMarker))
        .collect()
}

#[cfg(test)]
mod test {
    use super::*;

    fn analysis(text: &str) -> (Grammar, Analysis) {
        let grammar = llslr::parse_grammar(text).unwrap();
        let analysis = Analysis::new(&grammar);
        (grammar, analysis)
    }

    #[test]
    fn test_method_from_str() {
        assert_eq!("ll1".parse::<Method>().unwrap(), Method::LL1);
        assert_eq!("slr1".parse::<Method>().unwrap(), Method::SLR1);
        assert!("lr1".parse::<Method>().is_err());
    }

    #[test]
    fn test_ll1_table_shape() {
        let (_, analysis) = analysis("1\nS -> aSb e\n");
        let table = ll1_table(analysis.ll1.as_ref().unwrap());
        // Title row plus one row for S
        assert_eq!(table.len(), 2);
        let rendered = table.to_string();
        assert!(rendered.contains("S → a S b"));
        assert!(rendered.contains("S → ε"));
    }

    #[test]
    fn test_slr1_table_shape() {
        let (_, analysis) = analysis("1\nS -> aSb e\n");
        let parser = analysis.slr1.as_ref().unwrap();
        let table = slr1_table(parser);
        assert_eq!(table.len(), parser.automaton().states().len() + 1);
        assert!(table.to_string().contains("acc"));
    }

    #[test]
    fn test_sets_table() {
        let (grammar, analysis) = analysis("3\nS -> AB\nA -> aA d\nB -> bBc e\n");
        let table = sets_table(&grammar, &analysis);
        assert_eq!(table.len(), 4);
        assert!(table.to_string().contains("{ε, b}"));
    }
}
