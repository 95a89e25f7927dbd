use std::collections::{BTreeMap, BTreeSet, VecDeque};

use log::debug;

use crate::{Grammar, Item, State, Symbol};

/// Canonical collection of LR(0) states
///
/// States live in an arena indexed by state id; state 0 is the closure of
/// `S' → • S`. Transitions are recorded per `(state, symbol)`.
#[derive(Debug, Clone)]
pub struct Automaton {
    grammar: Grammar,
    start_rule: usize,
    states: Vec<State>,
    transitions: BTreeMap<(usize, Symbol), usize>,
}

impl Automaton {
    /// Augment `grammar` and build the canonical collection over it
    pub fn build(grammar: &Grammar) -> Self {
        let (grammar, start_rule) = grammar.augmented();

        let state0 = closure(&grammar, vec![Item::new(start_rule)]);
        let mut states = vec![state0.clone()];
        let mut ids: BTreeMap<State, usize> = BTreeMap::new();
        ids.insert(state0, 0);
        let mut transitions = BTreeMap::new();

        let mut next_states = VecDeque::<usize>::new();
        next_states.push_back(0);

        while let Some(current_state) = next_states.pop_front() {
            for symbol in states[current_state].next_symbols(&grammar) {
                let next_state = match goto(&grammar, &states[current_state], &symbol) {
                    Some(next_state) => next_state,
                    None => continue,
                };

                // Reuse an existing state with the same item closure if possible
                let idx = match ids.get(&next_state) {
                    Some(&state_idx) => state_idx,
                    None => {
                        let idx = states.len();
                        states.push(next_state.clone());
                        ids.insert(next_state, idx);
                        next_states.push_back(idx);
                        idx
                    }
                };
                transitions.insert((current_state, symbol), idx);
            }
        }

        debug!(
            "LR(0) automaton has {} states and {} transitions",
            states.len(),
            transitions.len()
        );

        Self {
            grammar,
            start_rule,
            states,
            transitions,
        }
    }

    /// The augmented grammar the automaton was built over
    pub fn grammar(&self) -> &Grammar {
        &self.grammar
    }

    /// Index of the `S' → S` production in the augmented grammar
    pub fn start_rule(&self) -> usize {
        self.start_rule
    }

    pub fn states(&self) -> &[State] {
        &self.states
    }

    pub fn state(&self, idx: usize) -> &State {
        &self.states[idx]
    }

    pub fn transition(&self, state: usize, symbol: &Symbol) -> Option<usize> {
        self.transitions.get(&(state, symbol.clone())).cloned()
    }

    pub fn transitions(&self) -> impl Iterator<Item = (usize, &Symbol, usize)> {
        self.transitions
            .iter()
            .map(|((from, symbol), &to)| (*from, symbol, to))
    }
}

/// Close a set of items
///
/// Every item with a dot before a nonterminal `B` pulls in `B → • γ` for each production
/// of `B`, until nothing new is added.
pub fn closure<I>(grammar: &Grammar, items: I) -> State
where
    I: IntoIterator<Item = Item>,
{
    let mut item_closure = BTreeSet::new();
    let mut unclosed: Vec<Item> = Vec::new();
    for item in items {
        if item_closure.insert(item) {
            unclosed.push(item);
        }
    }

    while let Some(item) = unclosed.pop() {
        let n = match item.next_symbol(grammar) {
            Some(n) if n.is_nonterminal() => n,
            _ => continue,
        };
        for (rule_idx, _) in grammar.productions_for(n) {
            let new_item = Item::new(rule_idx);
            if item_closure.insert(new_item) {
                unclosed.push(new_item);
            }
        }
    }

    State { item_closure }
}

/// Advance the dot over `symbol` in every item of `state` that allows it and close the result
///
/// Returns `None` if no item can advance.
pub fn goto(grammar: &Grammar, state: &State, symbol: &Symbol) -> Option<State> {
    let kernel: Vec<Item> = state
        .items()
        .filter(|item| item.next_symbol(grammar) == Some(symbol))
        .map(Item::advanced)
        .collect();
    if kernel.is_empty() {
        None
    } else {
        Some(closure(grammar, kernel))
    }
}
