mod analysis;

pub use crate::analysis::{Analysis, GrammarClass};

pub use llslr_core::*;

#[cfg(feature = "reader")]
pub use llslr_reader::{
    parse_grammar, parse_production_line, read_grammar, write_grammar, ReaderError,
};
