use std::io::{self, BufRead, Write};

use log::debug;

use llslr::{Analysis, Grammar, GrammarClass, LL1Parser, Recognizer, SLR1Parser};

use crate::table;

const SELECT_PROMPT: &str = "Select a parser (T: for LL(1), B: for SLR(1), Q: quit):";

/// Interactive session answering `yes` or `no` for every string read from `input`
///
/// A grammar that is both LL(1) and SLR(1) asks for a parser first, and
/// returns to that question after each empty line. Otherwise the one working
/// parser answers strings until an empty line. End of input ends the session.
pub fn run<R: BufRead, W: Write>(
    grammar: &Grammar,
    input: &mut R,
    output: &mut W,
    print_tables: bool,
) -> io::Result<()> {
    let analysis = Analysis::new(grammar);
    let mut session = Session {
        input,
        output,
        print_tables,
    };

    match (&analysis.ll1, &analysis.slr1) {
        (Ok(ll1), Ok(slr1)) => session.select(ll1, slr1),
        (Ok(ll1), Err(_)) => {
            writeln!(session.output, "{}", GrammarClass::LL1Only)?;
            session.use_ll1(ll1)
        }
        (Err(_), Ok(slr1)) => {
            writeln!(session.output, "{}", GrammarClass::SLR1Only)?;
            session.use_slr1(slr1)
        }
        (Err(_), Err(_)) => writeln!(session.output, "{}", GrammarClass::Neither),
    }
}

struct Session<'io, R, W> {
    input: &'io mut R,
    output: &'io mut W,
    print_tables: bool,
}

impl<'io, R: BufRead, W: Write> Session<'io, R, W> {
    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_owned()))
    }

    fn select(&mut self, ll1: &LL1Parser, slr1: &SLR1Parser) -> io::Result<()> {
        loop {
            writeln!(self.output, "{}", SELECT_PROMPT)?;
            self.output.flush()?;
            let choice = match self.read_line()? {
                Some(choice) => choice,
                None => return Ok(()),
            };
            match choice.as_str() {
                "T" | "t" => self.use_ll1(ll1)?,
                "B" | "b" => self.use_slr1(slr1)?,
                "Q" | "q" => return Ok(()),
                _ => debug!("Ignoring selection {:?}", choice),
            }
        }
    }

    fn use_ll1(&mut self, parser: &LL1Parser) -> io::Result<()> {
        if self.print_tables {
            writeln!(self.output, "{}", table::ll1_table(parser))?;
        }
        self.answer(parser)
    }

    fn use_slr1(&mut self, parser: &SLR1Parser) -> io::Result<()> {
        if self.print_tables {
            writeln!(self.output, "{}", table::slr1_table(parser))?;
        }
        self.answer(parser)
    }

    fn answer<P: Recognizer>(&mut self, parser: &P) -> io::Result<()> {
        while let Some(line) = self.read_line()? {
            if line.is_empty() {
                break;
            }
            let verdict = if parser.accepts_str(&line) { "yes" } else { "no" };
            writeln!(self.output, "{}", verdict)?;
            self.output.flush()?;
        }
        Ok(())
    }
}
