//! Grammar analysis engine: FIRST/FOLLOW sets, LL(1) predictive tables and SLR(1)
//! shift-reduce tables for context-free grammars.

mod error;
mod grammar;
pub mod ll1;
pub mod sets;
pub mod slr1;
mod traits;

pub use crate::error::GrammarError;
pub use crate::grammar::*;
pub use crate::ll1::{LL1Conflict, LL1Parser, LL1Table};
pub use crate::sets::{
    compute_first, compute_first_of_string, compute_follow, FirstSets, FollowSets,
};
pub use crate::slr1::{Action, Automaton, Item, ParseTable, SLR1Conflict, SLR1Parser, State};
pub use crate::traits::{split_input, Recognizer};
