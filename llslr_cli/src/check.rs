use std::error::Error;
use std::io::{self, Write};

use llslr::{Analysis, Grammar};

use crate::parse;

pub fn print_check(input_filename: &str) -> Result<(), Box<dyn Error>> {
    let grammar = parse::load_grammar(input_filename)?;
    let stdout = io::stdout();
    write_check(&grammar, &mut stdout.lock())?;
    Ok(())
}

/// Write the class of `grammar` followed by the conflict of every failing method
pub fn write_check<W: Write>(grammar: &Grammar, output: &mut W) -> io::Result<()> {
    let analysis = Analysis::new(grammar);
    writeln!(output, "{}", analysis.class())?;
    if let Err(conflict) = &analysis.ll1 {
        writeln!(output, "{}", conflict)?;
    }
    if let Err(conflict) = &analysis.slr1 {
        writeln!(output, "{}", conflict)?;
    }
    Ok(())
}
