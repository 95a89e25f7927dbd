mod symbol;
pub use self::symbol::{symbol_set_string, Symbol, END_MARKER_ATOM, EPSILON_ATOM};

mod production;
pub use self::production::Production;

#[allow(clippy::module_inception)]
mod grammar;
pub use self::grammar::{Grammar, DEFAULT_START};
