//! Deterministic bottom-up parsing.
//!
//! The canonical collection of LR(0) item sets is built over the augmented grammar;
//! reduce actions are placed on the FOLLOW set of the reduced nonterminal.

mod item;
pub use self::item::Item;

mod state;
pub use self::state::State;

mod action;
pub use self::action::Action;

mod automaton;
pub use self::automaton::{closure, goto, Automaton};

mod parse_table;
pub use self::parse_table::{ParseTable, SLR1Conflict};

mod parser;
pub use self::parser::SLR1Parser;
