//! FIRST sets.

use std::collections::BTreeSet;

use log::debug;

use super::{cardinality, PerSymbolSets, SymbolSet};
use crate::{Grammar, Symbol};

/// FIRST sets of all grammar symbols
///
/// `FIRST(t) = {t}` for every terminal. The set of a nonterminal contains `ε` iff the
/// nonterminal can derive the empty string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FirstSets {
    map: PerSymbolSets,
}

impl FirstSets {
    /// Compute all FIRST sets of the grammar.
    pub fn new(grammar: &Grammar) -> Self {
        let mut map = PerSymbolSets::new();
        for terminal in grammar.terminals() {
            let mut set = BTreeSet::new();
            set.insert(terminal.clone());
            map.insert(terminal.clone(), set);
        }
        for nonterminal in grammar.nonterminals() {
            map.insert(nonterminal.clone(), BTreeSet::new());
        }

        let mut this = FirstSets { map };
        let mut passes = 1;
        while this.saturate(grammar) > 0 {
            passes += 1;
        }
        debug!(
            "FIRST sets converged after {} passes ({} symbols)",
            passes,
            this.map.len()
        );
        this
    }

    /// Run one pass over all productions and return the number of symbols added
    ///
    /// Returns 0 once the sets have reached their fixed point.
    pub fn saturate(&mut self, grammar: &Grammar) -> usize {
        let before = cardinality(&self.map);
        for production in grammar.productions() {
            let rhs_first = self.first_of_string(&production.rhs);
            self.map
                .entry(production.lhs.clone())
                .or_insert_with(BTreeSet::new)
                .extend(rhs_first);
        }
        cardinality(&self.map) - before
    }

    /// FIRST set of a terminal or nonterminal
    pub fn get(&self, symbol: &Symbol) -> Option<&SymbolSet> {
        self.map.get(symbol)
    }

    /// Calculates a FIRST set for a string of symbols.
    ///
    /// Collects FIRST of each symbol minus `ε` from left to right for as long as the
    /// symbols seen so far can derive `ε`. The result contains `ε` iff the whole string
    /// can derive `ε`; in particular the FIRST set of the empty string is `{ε}`.
    pub fn first_of_string(&self, symbols: &[Symbol]) -> SymbolSet {
        let mut result = BTreeSet::new();
        for symbol in symbols {
            match symbol {
                Symbol::Epsilon => continue,
                Symbol::Terminal(_) | Symbol::EndMarker => {
                    result.insert(symbol.clone());
                    return result;
                }
                Symbol::Nonterminal(_) => {
                    let nullable = match self.map.get(symbol) {
                        Some(set) => {
                            result.extend(set.iter().filter(|s| !s.is_epsilon()).cloned());
                            set.contains(&Symbol::Epsilon)
                        }
                        None => false,
                    };
                    if !nullable {
                        return result;
                    }
                }
            }
        }
        result.insert(Symbol::Epsilon);
        result
    }

    pub fn is_nullable(&self, symbol: &Symbol) -> bool {
        match symbol {
            Symbol::Epsilon => true,
            _ => self
                .map
                .get(symbol)
                .map_or(false, |set| set.contains(&Symbol::Epsilon)),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Symbol, &SymbolSet)> {
        self.map.iter()
    }
}

/// Convenience wrapper around `FirstSets::first_of_string`
pub fn compute_first_of_string(symbols: &[Symbol], first: &FirstSets) -> SymbolSet {
    first.first_of_string(symbols)
}
