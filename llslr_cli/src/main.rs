use std::error::Error;
use std::io;
use std::process;

use clap::{App, AppSettings, Arg, ArgMatches, SubCommand};
use log::LevelFilter;

mod check;
mod graphviz;
mod parse;
mod session;
mod table;

use crate::parse::required;

fn main() {
    if let Err(err) = cli() {
        eprintln!("Error: {}", err);
        process::exit(1);
    }
}

fn cli() -> Result<(), Box<dyn Error>> {
    let file_arg = Arg::with_name("file")
        .help("Grammar file: the number of production lines, then one line per nonterminal")
        .required(true);

    let matches = App::new("llslr")
        .about("Analyse context-free grammars with LL(1) and SLR(1) parsers")
        .version(env!("CARGO_PKG_VERSION"))
        .arg(
            Arg::with_name("verbose")
                .short("v")
                .multiple(true)
                .help("Log more details (-v info, -vv debug, -vvv trace)"),
        )
        .subcommand(
            SubCommand::with_name("run")
                .arg(
                    Arg::with_name("file")
                        .help("Grammar file; without it the grammar is read from stdin before the strings"),
                )
                .arg(
                    Arg::with_name("debug")
                        .long("debug")
                        .help("Print the parse tables before answering strings"),
                )
                .about("Reads strings from stdin and answers yes or no for each"),
        )
        .subcommand(
            SubCommand::with_name("check")
                .arg(file_arg.clone())
                .about("Tells whether a grammar is LL(1), SLR(1), both or neither"),
        )
        .subcommand(
            SubCommand::with_name("sets")
                .arg(file_arg.clone())
                .arg(
                    Arg::with_name("csv")
                        .long("csv")
                        .takes_value(true)
                        .help("Write the sets to a specified CSV file"),
                )
                .about("Prints the FIRST and FOLLOW sets of every nonterminal"),
        )
        .subcommand(
            SubCommand::with_name("table")
                .arg(file_arg.clone())
                .arg(
                    Arg::with_name("method")
                        .long("method")
                        .takes_value(true)
                        .possible_values(&["ll1", "slr1"])
                        .default_value("slr1")
                        .help("Parsing method whose table is printed"),
                )
                .arg(
                    Arg::with_name("csv")
                        .long("csv")
                        .takes_value(true)
                        .help("Write the parse table to a specified CSV file"),
                )
                .about("Prints the LL(1) predictive table or the SLR(1) ACTION/GOTO table"),
        )
        .subcommand(
            SubCommand::with_name("graph")
                .arg(file_arg)
                .arg(
                    Arg::with_name("output")
                        .long("output")
                        .short("o")
                        .takes_value(true)
                        .help("Write the generated graphviz graph to a file (*.dot)"),
                )
                .about("Outputs a graphviz graph showing the LR(0) states of a grammar"),
        )
        .setting(AppSettings::ArgRequiredElseHelp)
        .get_matches();

    init_logger(matches.occurrences_of("verbose"));

    match matches.subcommand() {
        ("run", Some(run_opts)) => run(run_opts)?,
        ("check", Some(check_opts)) => check::print_check(required(check_opts, "file")?)?,
        ("sets", Some(sets_opts)) => {
            let filename = required(sets_opts, "file")?;
            if let Some(csv_filename) = sets_opts.value_of("csv") {
                table::write_sets_csv(filename, csv_filename)?;
            } else {
                table::print_sets(filename)?;
            }
        }
        ("table", Some(table_opts)) => {
            let filename = required(table_opts, "file")?;
            let method: table::Method = required(table_opts, "method")?.parse()?;
            if let Some(csv_filename) = table_opts.value_of("csv") {
                table::write_table_csv(filename, method, csv_filename)?;
            } else {
                table::print_table(filename, method)?;
            }
        }
        ("graph", Some(graph_opts)) => {
            let filename = required(graph_opts, "file")?;
            if let Some(output_filename) = graph_opts.value_of("output") {
                graphviz::write_graphviz_graph(filename, output_filename)?;
            } else {
                graphviz::show_graphviz_graph(filename)?;
            }
        }
        _ => {}
    }

    Ok(())
}

fn run(opts: &ArgMatches) -> Result<(), Box<dyn Error>> {
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let grammar = match opts.value_of("file") {
        Some(filename) => parse::load_grammar(filename)?,
        None => llslr::read_grammar(&mut input)?,
    };
    let stdout = io::stdout();
    session::run(
        &grammar,
        &mut input,
        &mut stdout.lock(),
        opts.is_present("debug"),
    )?;
    Ok(())
}

fn init_logger(verbosity: u64) {
    let level = match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    // RUST_LOG directives take precedence over -v
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}
