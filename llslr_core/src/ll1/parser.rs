use log::{trace, warn};

use crate::sets::{FirstSets, FollowSets};
use crate::traits::terminal_input;
use crate::{Grammar, LL1Conflict, LL1Table, Recognizer, Symbol};

/// Table-driven predictive parser
#[derive(Debug, Clone)]
pub struct LL1Parser {
    grammar: Grammar,
    table: LL1Table,
}

impl LL1Parser {
    pub fn build(
        grammar: &Grammar,
        first: &FirstSets,
        follow: &FollowSets,
    ) -> Result<Self, LL1Conflict> {
        let table = LL1Table::build(grammar, first, follow)?;
        Ok(Self {
            grammar: grammar.clone(),
            table,
        })
    }

    pub fn grammar(&self) -> &Grammar {
        &self.grammar
    }

    pub fn table(&self) -> &LL1Table {
        &self.table
    }

    /// Run the predictive parser on a sequence of terminal atoms
    ///
    /// The stack starts as `[$, S]`. Matching terminals are popped together with the
    /// input; a nonterminal on top is replaced by the right-hand side of the production
    /// predicted by the table. Missing table cells and mismatching terminals reject.
    pub fn accepts<S: AsRef<str>>(&self, input: &[S]) -> bool {
        let input = match terminal_input(input) {
            Some(input) => input,
            None => return false,
        };

        let mut stack = vec![Symbol::EndMarker, self.grammar.start().clone()];
        let mut cursor = 0;
        let mut expansions = ExpansionTracker::default();

        while let Some(top) = stack.pop() {
            let current = &input[cursor];
            if top == *current {
                trace!("match {}", current);
                cursor += 1;
                expansions.consume();
                if top.is_end_marker() {
                    return stack.is_empty();
                }
                continue;
            }

            if !top.is_nonterminal() {
                trace!("expected {}, found {}", top, current);
                return false;
            }

            if !expansions.expand(&top, stack.len()) {
                warn!(
                    "{} expands to itself without consuming {}, rejecting",
                    top, current
                );
                return false;
            }

            match self.table.get(&top, current) {
                Some(rule_idx) => {
                    let production = self.grammar.production(rule_idx);
                    trace!("expand {}", production);
                    stack.extend(production.body().iter().rev().cloned());
                }
                None => {
                    trace!("no entry at M[{}, {}]", top, current);
                    return false;
                }
            }
        }

        false
    }
}

/// Nonterminals expanded since the last consumed terminal
///
/// Each entry records the stack height below the expanded nonterminal. The
/// entry stays live while the driver works on symbols that expansion pushed.
/// Meeting the same nonterminal again inside a live expansion at the same
/// cursor means the driver would repeat itself forever.
#[derive(Debug, Default)]
struct ExpansionTracker {
    live: Vec<(Symbol, usize)>,
}

impl ExpansionTracker {
    /// Record the expansion of `nonterminal` with `height` symbols below it
    ///
    /// Returns `false` if the expansion is already live.
    fn expand(&mut self, nonterminal: &Symbol, height: usize) -> bool {
        while self.live.last().map_or(false, |(_, below)| *below > height) {
            self.live.pop();
        }
        if self.live.iter().any(|(n, _)| n == nonterminal) {
            return false;
        }
        self.live.push((nonterminal.clone(), height));
        true
    }

    fn consume(&mut self) {
        self.live.clear();
    }
}

impl Recognizer for LL1Parser {
    type Conflict = LL1Conflict;

    fn build(
        grammar: &Grammar,
        first: &FirstSets,
        follow: &FollowSets,
    ) -> Result<Self, Self::Conflict> {
        LL1Parser::build(grammar, first, follow)
    }

    fn accepts<S: AsRef<str>>(&self, input: &[S]) -> bool {
        LL1Parser::accepts(self, input)
    }
}
