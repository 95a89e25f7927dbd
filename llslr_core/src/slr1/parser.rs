use log::trace;

use crate::sets::{FirstSets, FollowSets};
use crate::traits::terminal_input;
use crate::{Action, Automaton, Grammar, ParseTable, Recognizer, SLR1Conflict};

/// Shift-reduce parser driven by SLR(1) tables
#[derive(Debug, Clone)]
pub struct SLR1Parser {
    automaton: Automaton,
    table: ParseTable,
}

impl SLR1Parser {
    /// Build the LR(0) automaton of `grammar` and derive its SLR(1) tables
    ///
    /// Only FOLLOW sets take part in the construction; FIRST sets are accepted for
    /// symmetry with `LL1Parser::build`.
    pub fn build(
        grammar: &Grammar,
        _first: &FirstSets,
        follow: &FollowSets,
    ) -> Result<Self, SLR1Conflict> {
        let automaton = Automaton::build(grammar);
        let table = ParseTable::generate(&automaton, follow)?;
        Ok(Self { automaton, table })
    }

    pub fn automaton(&self) -> &Automaton {
        &self.automaton
    }

    pub fn table(&self) -> &ParseTable {
        &self.table
    }

    /// Run the shift-reduce parser on a sequence of terminal atoms
    pub fn accepts<S: AsRef<str>>(&self, input: &[S]) -> bool {
        let input = match terminal_input(input) {
            Some(input) => input,
            None => return false,
        };

        let grammar = self.automaton.grammar();
        let mut states: Vec<usize> = vec![0];
        let mut symbols = Vec::new();
        let mut cursor = 0;

        loop {
            let current_state = match states.last() {
                Some(&state) => state,
                None => return false,
            };
            let current = &input[cursor];

            match self.table.action(current_state, current) {
                Some(Action::Shift(next_state)) => {
                    trace!("shift {} to {}", current, next_state);
                    symbols.push(current.clone());
                    states.push(next_state);
                    cursor += 1;
                }
                Some(Action::Reduce(rule_idx)) => {
                    let production = grammar.production(rule_idx);
                    trace!("reduce {}", production);

                    let to_be_popped = production.body().len();
                    if to_be_popped >= states.len() {
                        return false;
                    }
                    states.truncate(states.len() - to_be_popped);
                    symbols.truncate(symbols.len().saturating_sub(to_be_popped));
                    symbols.push(production.lhs.clone());

                    let top = states[states.len() - 1];
                    match self.table.goto(top, &production.lhs) {
                        Some(next_state) => states.push(next_state),
                        None => return false,
                    }
                }
                Some(Action::Accept) => {
                    trace!("accept");
                    return true;
                }
                None => {
                    trace!("no action in state {} on {}", current_state, current);
                    return false;
                }
            }
        }
    }
}

impl Recognizer for SLR1Parser {
    type Conflict = SLR1Conflict;

    fn build(
        grammar: &Grammar,
        first: &FirstSets,
        follow: &FollowSets,
    ) -> Result<Self, Self::Conflict> {
        SLR1Parser::build(grammar, first, follow)
    }

    fn accepts<S: AsRef<str>>(&self, input: &[S]) -> bool {
        SLR1Parser::accepts(self, input)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{split_input, Production, Symbol};
    use matches::assert_matches;

    fn parser(lines: &[(&str, &[&str])]) -> Result<SLR1Parser, SLR1Conflict> {
        let mut productions = Vec::new();
        for (lhs, alternatives) in lines {
            for alternative in alternatives.iter() {
                let rhs = split_input(alternative)
                    .iter()
                    .map(|atom| Symbol::classify(atom))
                    .collect();
                productions.push(Production::new(Symbol::nonterminal(*lhs), rhs).unwrap());
            }
        }
        let grammar = Grammar::with_default_start(productions).unwrap();
        let first = FirstSets::new(&grammar);
        let follow = FollowSets::new(&grammar, &first);
        SLR1Parser::build(&grammar, &first, &follow)
    }

    #[test]
    fn test_expression_grammar() {
        let parser = parser(&[
            ("S", &["S+T", "T"]),
            ("T", &["T*F", "F"]),
            ("F", &["(S)", "i"]),
        ])
        .unwrap();
        assert!(parser.accepts_str("i"));
        assert!(parser.accepts_str("i+i"));
        assert!(parser.accepts_str("(i)"));
        assert!(parser.accepts_str("i+i*i"));
        assert!(parser.accepts_str("(i+i)*i"));
        assert!(!parser.accepts_str("(i+i)*i)"));
        assert!(!parser.accepts_str("i+"));
        assert!(!parser.accepts_str(""));
    }

    #[test]
    fn test_epsilon_reduction() {
        let parser = parser(&[("S", &["aSb", "e"])]).unwrap();
        assert!(parser.accepts_str(""));
        assert!(parser.accepts_str("ab"));
        assert!(parser.accepts_str("aabb"));
        assert!(!parser.accepts_str("aab"));
        assert!(!parser.accepts_str("b"));
    }

    #[test]
    fn test_rejects_reserved_atoms() {
        let parser = parser(&[("S", &["a"])]).unwrap();
        assert!(parser.accepts(&["a"]));
        assert!(!parser.accepts(&["$"]));
        assert!(!parser.accepts(&["a", "$"]));
        assert!(!parser.accepts(&["A"]));
    }

    #[test]
    fn test_accept_reduce_collision_is_conflict() {
        // After S, A → ε competes with accepting on $
        let result = parser(&[("S", &["SA", "a"]), ("A", &["e"])]);
        assert_matches!(result, Err(SLR1Conflict::AcceptReduce { .. }));
    }

    #[test]
    fn test_start_symbol_reduced_on_end_marker() {
        // FOLLOW(S) contains $ through S → aS as well; no spurious conflict arises
        let parser = parser(&[("S", &["aS", "b"])]).unwrap();
        assert!(parser.accepts_str("b"));
        assert!(parser.accepts_str("aaab"));
        assert!(!parser.accepts_str("aaa"));
    }
}
