use std::collections::BTreeSet;

use crate::{Grammar, Item, Symbol};

/// LR(0) state
///
/// A closed set of items. Two states are the same state iff their item sets are equal.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct State {
    pub item_closure: BTreeSet<Item>,
}

impl State {
    pub fn items(&self) -> impl Iterator<Item = &Item> {
        self.item_closure.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.item_closure.is_empty()
    }

    /// Every symbol that appears directly after a dot
    pub fn next_symbols(&self, grammar: &Grammar) -> BTreeSet<Symbol> {
        self.item_closure
            .iter()
            .filter_map(|item| item.next_symbol(grammar))
            .cloned()
            .collect()
    }
}
