//! Deterministic top-down parsing.
//!
//! The predictive table `M[A, t]` names the production to expand nonterminal `A` with
//! when the next input symbol is `t`. A grammar is LL(1) iff no cell of that table is
//! claimed by two different productions.

mod table;
pub use self::table::{LL1Conflict, LL1Table};

mod parser;
pub use self::parser::LL1Parser;
