//! FIRST and FOLLOW sets.
//!
//! Both are computed by fixed-point iteration over the productions of a grammar:
//! every pass unions new symbols into the per-symbol sets, and the iteration stops
//! after the first pass that leaves the total cardinality of the table unchanged.

use std::collections::{BTreeMap, BTreeSet};

use crate::Symbol;

mod first;
pub use self::first::{compute_first_of_string, FirstSets};

mod follow;
pub use self::follow::FollowSets;

/// A set of symbols, ordered for deterministic iteration
pub type SymbolSet = BTreeSet<Symbol>;

/// Mapping from a symbol to its FIRST or FOLLOW set
pub type PerSymbolSets = BTreeMap<Symbol, SymbolSet>;

/// Compute FIRST sets of every terminal and nonterminal of `grammar`
pub fn compute_first(grammar: &crate::Grammar) -> FirstSets {
    FirstSets::new(grammar)
}

/// Compute FOLLOW sets of every nonterminal of `grammar`
pub fn compute_follow(grammar: &crate::Grammar, first: &FirstSets) -> FollowSets {
    FollowSets::new(grammar, first)
}

fn cardinality(map: &PerSymbolSets) -> usize {
    map.values().map(BTreeSet::len).sum()
}
