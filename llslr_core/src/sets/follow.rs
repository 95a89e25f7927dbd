//! FOLLOW sets.

use std::collections::BTreeSet;

use log::debug;

use super::{cardinality, FirstSets, PerSymbolSets, SymbolSet};
use crate::{Grammar, Symbol};

/// FOLLOW sets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FollowSets {
    /// Mapping from nonterminals to FOLLOW sets.
    map: PerSymbolSets,
}

impl FollowSets {
    /// Compute all FOLLOW sets of the grammar.
    ///
    /// The set of the start symbol is seeded with `$`. Then, for every occurrence of a
    /// nonterminal `B` in a production `A → α B β`, `FIRST(β) \ {ε}` is added to
    /// `FOLLOW(B)`, and `FOLLOW(A)` as well if `β` can derive `ε`.
    pub fn new(grammar: &Grammar, first: &FirstSets) -> Self {
        let mut map = PerSymbolSets::new();
        for nonterminal in grammar.nonterminals() {
            map.insert(nonterminal.clone(), BTreeSet::new());
        }
        map.entry(grammar.start().clone())
            .or_insert_with(BTreeSet::new)
            .insert(Symbol::EndMarker);

        let mut this = FollowSets { map };
        let mut passes = 1;
        while this.saturate(grammar, first) > 0 {
            passes += 1;
        }
        debug!("FOLLOW sets converged after {} passes", passes);
        this
    }

    /// Run one pass over all productions and return the number of symbols added
    pub fn saturate(&mut self, grammar: &Grammar, first: &FirstSets) -> usize {
        let before = cardinality(&self.map);
        for production in grammar.productions() {
            for (pos, symbol) in production.rhs.iter().enumerate() {
                if !symbol.is_nonterminal() {
                    continue;
                }
                let beta_first = first.first_of_string(&production.rhs[pos + 1..]);
                let mut additions: SymbolSet = beta_first
                    .iter()
                    .filter(|s| !s.is_epsilon())
                    .cloned()
                    .collect();
                if beta_first.contains(&Symbol::Epsilon) {
                    if let Some(lhs_follow) = self.map.get(&production.lhs) {
                        additions.extend(lhs_follow.iter().cloned());
                    }
                }
                self.map
                    .entry(symbol.clone())
                    .or_insert_with(BTreeSet::new)
                    .extend(additions);
            }
        }
        cardinality(&self.map) - before
    }

    pub fn get(&self, nonterminal: &Symbol) -> Option<&SymbolSet> {
        self.map.get(nonterminal)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Symbol, &SymbolSet)> {
        self.map.iter()
    }
}
