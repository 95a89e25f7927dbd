use std::collections::btree_map::Entry;
use std::collections::BTreeMap;
use std::error::Error;
use std::fmt;

use log::debug;

use crate::sets::FollowSets;
use crate::{Action, Automaton, Production, Symbol};

static END_MARKER: Symbol = Symbol::EndMarker;

/// SLR(1) ACTION and GOTO tables
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseTable {
    action_map: BTreeMap<(usize, Symbol), Action>,
    goto_map: BTreeMap<(usize, Symbol), usize>,
}

impl ParseTable {
    /// Generate SLR(1) tables from an LR(0) automaton
    ///
    /// Each cell is written at most once; the first write that disagrees with an existing
    /// entry aborts the construction with the corresponding conflict.
    pub fn generate(automaton: &Automaton, follow: &FollowSets) -> Result<Self, SLR1Conflict> {
        let mut table = ParseTable {
            action_map: BTreeMap::new(),
            goto_map: BTreeMap::new(),
        };
        let grammar = automaton.grammar();

        for (current_state, state) in automaton.states().iter().enumerate() {
            for item in state.items() {
                match item.next_symbol(grammar) {
                    Some(t) if t.is_terminal() => {
                        // Every terminal after a dot has a transition
                        if let Some(next_state) = automaton.transition(current_state, t) {
                            table.set_action(
                                automaton,
                                current_state,
                                t,
                                Action::Shift(next_state),
                            )?;
                        }
                    }
                    Some(_) => {}
                    None if item.rule_idx == automaton.start_rule() => {
                        table.set_action(
                            automaton,
                            current_state,
                            &Symbol::EndMarker,
                            Action::Accept,
                        )?;
                    }
                    None => {
                        let lhs = &grammar.production(item.rule_idx).lhs;
                        if let Some(lhs_follow) = follow.get(lhs) {
                            for lookahead in lhs_follow.iter() {
                                table.set_action(
                                    automaton,
                                    current_state,
                                    lookahead,
                                    Action::Reduce(item.rule_idx),
                                )?;
                            }
                        }
                    }
                }
            }
        }

        for (from, symbol, to) in automaton.transitions() {
            if symbol.is_nonterminal() {
                table.goto_map.insert((from, symbol.clone()), to);
            }
        }

        debug!(
            "SLR(1) table has {} actions and {} gotos",
            table.action_map.len(),
            table.goto_map.len()
        );
        Ok(table)
    }

    fn set_action(
        &mut self,
        automaton: &Automaton,
        state: usize,
        lookahead: &Symbol,
        action: Action,
    ) -> Result<(), SLR1Conflict> {
        let existing = match self.action_map.entry((state, lookahead.clone())) {
            Entry::Vacant(entry) => {
                entry.insert(action);
                return Ok(());
            }
            Entry::Occupied(entry) => *entry.get(),
        };
        if existing == action {
            return Ok(());
        }

        let production = |rule_idx: usize| automaton.grammar().production(rule_idx).clone();
        let lookahead = lookahead.clone();
        Err(match (existing, action) {
            (Action::Shift(shift_to), Action::Reduce(rule_idx))
            | (Action::Reduce(rule_idx), Action::Shift(shift_to)) => SLR1Conflict::ShiftReduce {
                state,
                lookahead,
                shift_to,
                reduce: production(rule_idx),
            },
            (Action::Reduce(first), Action::Reduce(second)) => SLR1Conflict::ReduceReduce {
                state,
                lookahead,
                first: production(first),
                second: production(second),
            },
            (Action::Accept, Action::Reduce(rule_idx))
            | (Action::Reduce(rule_idx), Action::Accept) => SLR1Conflict::AcceptReduce {
                state,
                reduce: production(rule_idx),
            },
            // Transitions are deterministic and accept only happens on $, which is
            // never shifted
            (Action::Shift(_), _) | (Action::Accept, _) => unreachable!(),
        })
    }

    pub fn action(&self, state: usize, lookahead: &Symbol) -> Option<Action> {
        self.action_map.get(&(state, lookahead.clone())).cloned()
    }

    pub fn goto(&self, state: usize, nonterminal: &Symbol) -> Option<usize> {
        self.goto_map.get(&(state, nonterminal.clone())).cloned()
    }

    pub fn actions(&self) -> impl Iterator<Item = (usize, &Symbol, Action)> {
        self.action_map
            .iter()
            .map(|((state, symbol), &action)| (*state, symbol, action))
    }

    pub fn gotos(&self) -> impl Iterator<Item = (usize, &Symbol, usize)> {
        self.goto_map
            .iter()
            .map(|((state, symbol), &to)| (*state, symbol, to))
    }
}

/// Two incompatible actions for the same `(state, lookahead)` pair
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SLR1Conflict {
    ShiftReduce {
        state: usize,
        lookahead: Symbol,
        shift_to: usize,
        reduce: Production,
    },
    ReduceReduce {
        state: usize,
        lookahead: Symbol,
        first: Production,
        second: Production,
    },
    /// Reducing by a production of the original start symbol on `$` in the accepting state
    AcceptReduce { state: usize, reduce: Production },
}

impl SLR1Conflict {
    pub fn state(&self) -> usize {
        match self {
            SLR1Conflict::ShiftReduce { state, .. }
            | SLR1Conflict::ReduceReduce { state, .. }
            | SLR1Conflict::AcceptReduce { state, .. } => *state,
        }
    }

    pub fn lookahead(&self) -> &Symbol {
        match self {
            SLR1Conflict::ShiftReduce { lookahead, .. }
            | SLR1Conflict::ReduceReduce { lookahead, .. } => lookahead,
            SLR1Conflict::AcceptReduce { .. } => &END_MARKER,
        }
    }
}

impl fmt::Display for SLR1Conflict {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        match self {
            SLR1Conflict::ShiftReduce {
                state,
                lookahead,
                shift_to,
                reduce,
            } => write!(
                f,
                "Shift-reduce conflict in state {} on {}: shift to {} or reduce {}",
                state, lookahead, shift_to, reduce
            ),
            SLR1Conflict::ReduceReduce {
                state,
                lookahead,
                first,
                second,
            } => write!(
                f,
                "Reduce-reduce conflict in state {} on {}: reduce {} or reduce {}",
                state, lookahead, first, second
            ),
            SLR1Conflict::AcceptReduce { state, reduce } => write!(
                f,
                "Accept-reduce conflict in state {} on $: accept or reduce {}",
                state, reduce
            ),
        }
    }
}

impl Error for SLR1Conflict {}
