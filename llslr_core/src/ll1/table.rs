use std::collections::btree_map::Entry;
use std::collections::BTreeMap;
use std::error::Error;
use std::fmt;

use log::debug;

use crate::sets::{FirstSets, FollowSets};
use crate::{Grammar, Production, Symbol};

/// Predictive parsing table
///
/// Maps `(nonterminal, lookahead)` to the index of the production to expand. Cells that
/// are absent are parse errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LL1Table {
    entries: BTreeMap<(Symbol, Symbol), usize>,
}

impl LL1Table {
    /// Fill the table in grammar order, stopping at the first conflicting cell
    ///
    /// For every production `A → α`, the production is entered at `M[A, t]` for every
    /// terminal `t` in `FIRST(α)`, and at `M[A, f]` for every `f` in `FOLLOW(A)` if `α`
    /// can derive `ε`.
    pub fn build(
        grammar: &Grammar,
        first: &FirstSets,
        follow: &FollowSets,
    ) -> Result<Self, LL1Conflict> {
        let mut table = LL1Table {
            entries: BTreeMap::new(),
        };

        for (rule_idx, production) in grammar.productions().iter().enumerate() {
            let lhs = &production.lhs;
            let rhs_first = first.first_of_string(&production.rhs);

            for lookahead in rhs_first.iter().filter(|s| !s.is_epsilon()) {
                table.insert(grammar, lhs, lookahead, rule_idx)?;
            }

            if rhs_first.contains(&Symbol::Epsilon) {
                if let Some(lhs_follow) = follow.get(lhs) {
                    for lookahead in lhs_follow.iter() {
                        table.insert(grammar, lhs, lookahead, rule_idx)?;
                    }
                }
            }
        }

        debug!("LL(1) table has {} entries", table.entries.len());
        Ok(table)
    }

    fn insert(
        &mut self,
        grammar: &Grammar,
        nonterminal: &Symbol,
        lookahead: &Symbol,
        rule_idx: usize,
    ) -> Result<(), LL1Conflict> {
        match self.entries.entry((nonterminal.clone(), lookahead.clone())) {
            Entry::Vacant(entry) => {
                entry.insert(rule_idx);
                Ok(())
            }
            Entry::Occupied(entry) => {
                let existing = *entry.get();
                if existing == rule_idx {
                    return Ok(());
                }
                Err(LL1Conflict {
                    nonterminal: nonterminal.clone(),
                    lookahead: lookahead.clone(),
                    existing: grammar.production(existing).clone(),
                    conflicting: grammar.production(rule_idx).clone(),
                })
            }
        }
    }

    /// Index of the production predicted for `nonterminal` on `lookahead`
    pub fn get(&self, nonterminal: &Symbol, lookahead: &Symbol) -> Option<usize> {
        // Tuple keys can't be borrowed piecewise, hence the clones
        self.entries
            .get(&(nonterminal.clone(), lookahead.clone()))
            .cloned()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Symbol, &Symbol, usize)> {
        self.entries.iter().map(|((n, t), &idx)| (n, t, idx))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Two productions claiming the same cell of the predictive table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LL1Conflict {
    pub nonterminal: Symbol,
    pub lookahead: Symbol,
    pub existing: Production,
    pub conflicting: Production,
}

impl fmt::Display for LL1Conflict {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        write!(
            f,
            "LL(1) conflict at M[{}, {}]: {} and {}",
            self.nonterminal, self.lookahead, self.existing, self.conflicting
        )
    }
}

impl Error for LL1Conflict {}

#[cfg(test)]
mod test {
    use super::*;
    use matches::assert_matches;

    macro_rules! rule {
        ($lhs:literal => $rhs:literal) => {{
            let rhs = if $rhs == "e" {
                vec![Symbol::Epsilon]
            } else {
                $rhs.chars()
                    .map(|c| Symbol::classify(&c.to_string()))
                    .collect()
            };
            Production::new(Symbol::nonterminal($lhs), rhs).unwrap()
        }};
    }

    fn build(productions: Vec<Production>) -> Result<LL1Table, LL1Conflict> {
        let grammar = Grammar::with_default_start(productions).unwrap();
        let first = FirstSets::new(&grammar);
        let follow = FollowSets::new(&grammar, &first);
        LL1Table::build(&grammar, &first, &follow)
    }

    #[test]
    fn test_epsilon_entries_from_follow() {
        let table = build(vec![rule!("S" => "aSb"), rule!("S" => "e")]).unwrap();
        let s = Symbol::nonterminal("S");
        assert_eq!(table.get(&s, &Symbol::terminal("a")), Some(0));
        assert_eq!(table.get(&s, &Symbol::terminal("b")), Some(1));
        assert_eq!(table.get(&s, &Symbol::EndMarker), Some(1));
        assert_eq!(table.len(), 3);
    }

    #[test]
    fn test_left_recursion_conflict() {
        let result = build(vec![
            rule!("S" => "S+T"),
            rule!("S" => "T"),
            rule!("T" => "T*F"),
            rule!("T" => "F"),
            rule!("F" => "(S)"),
            rule!("F" => "i"),
        ]);
        assert_matches!(result, Err(LL1Conflict { .. }));
        let conflict = result.unwrap_err();
        assert_eq!(conflict.nonterminal, Symbol::nonterminal("S"));
        assert_eq!(conflict.lookahead, Symbol::terminal("("));
        assert_eq!(format!("{}", conflict.existing), "S → S + T");
        assert_eq!(format!("{}", conflict.conflicting), "S → T");
    }

    #[test]
    fn test_ambiguous_conflict_cell() {
        let conflict = build(vec![rule!("S" => "SS"), rule!("S" => "a")]).unwrap_err();
        assert_eq!(conflict.lookahead, Symbol::terminal("a"));
        assert_eq!(
            format!("{}", conflict),
            "LL(1) conflict at M[S, a]: S → S S and S → a"
        );
    }

    #[test]
    fn test_conflict_is_deterministic() {
        let productions = vec![
            rule!("S" => "aA"),
            rule!("S" => "ab"),
            rule!("A" => "b"),
        ];
        let first = build(productions.clone()).unwrap_err();
        let second = build(productions).unwrap_err();
        assert_eq!(first, second);
        assert_eq!(first.lookahead, Symbol::terminal("a"));
    }
}
