use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use crate::{GrammarError, Production, Symbol};

/// Name of the distinguished start nonterminal
pub const DEFAULT_START: &str = "S";

/// An immutable context-free grammar
///
/// Terminal and nonterminal sets as well as the index from each nonterminal to its
/// productions are derived once in `Grammar::new`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grammar {
    start: Symbol,
    productions: Vec<Production>,
    nonterminals: BTreeSet<Symbol>,
    terminals: BTreeSet<Symbol>,
    // Production indices per lhs, in input order
    rules_by_lhs: BTreeMap<Symbol, Vec<usize>>,
}

impl Grammar {
    pub fn new(start: Symbol, productions: Vec<Production>) -> Result<Self, GrammarError> {
        if !start.is_nonterminal() {
            return Err(GrammarError::InvalidStart(start));
        }
        if productions.is_empty() {
            return Err(GrammarError::NoProductions);
        }

        let mut nonterminals = BTreeSet::new();
        let mut rules_by_lhs: BTreeMap<Symbol, Vec<usize>> = BTreeMap::new();
        for (idx, production) in productions.iter().enumerate() {
            production.check()?;
            nonterminals.insert(production.lhs.clone());
            rules_by_lhs
                .entry(production.lhs.clone())
                .or_insert_with(Vec::new)
                .push(idx);
        }

        if !nonterminals.contains(&start) {
            return Err(GrammarError::MissingStartRule(start));
        }

        let mut terminals = BTreeSet::new();
        for symbol in productions.iter().flat_map(|p| p.rhs.iter()) {
            match symbol {
                Symbol::Terminal(_) => {
                    terminals.insert(symbol.clone());
                }
                Symbol::Nonterminal(_) if !nonterminals.contains(symbol) => {
                    return Err(GrammarError::UndefinedNonterminal(symbol.clone()));
                }
                _ => {}
            }
        }

        Ok(Self {
            start,
            productions,
            nonterminals,
            terminals,
            rules_by_lhs,
        })
    }

    /// Create a grammar whose start symbol is `S`
    pub fn with_default_start(productions: Vec<Production>) -> Result<Self, GrammarError> {
        Self::new(Symbol::nonterminal(DEFAULT_START), productions)
    }

    pub fn start(&self) -> &Symbol {
        &self.start
    }

    pub fn productions(&self) -> &[Production] {
        &self.productions
    }

    pub fn production(&self, idx: usize) -> &Production {
        &self.productions[idx]
    }

    pub fn nonterminals(&self) -> &BTreeSet<Symbol> {
        &self.nonterminals
    }

    pub fn terminals(&self) -> &BTreeSet<Symbol> {
        &self.terminals
    }

    /// All productions of `nonterminal` together with their indices, in input order
    pub fn productions_for<'g>(
        &'g self,
        nonterminal: &Symbol,
    ) -> impl Iterator<Item = (usize, &'g Production)> + 'g {
        self.rules_by_lhs
            .get(nonterminal)
            .map(|indices| indices.as_slice())
            .unwrap_or(&[])
            .iter()
            .map(move |&idx| (idx, &self.productions[idx]))
    }

    /// Augment the grammar with a fresh start rule `S' → S`
    ///
    /// The new rule is appended last so the indices of the original productions stay
    /// valid in the augmented grammar. Returns the augmented grammar and the index of
    /// the start rule.
    pub fn augmented(&self) -> (Grammar, usize) {
        let mut name = format!("{}'", self.start.atom());
        while self.nonterminals.contains(&Symbol::nonterminal(name.as_str())) {
            name.push('\'');
        }
        let start = Symbol::nonterminal(name);

        let mut productions = self.productions.clone();
        productions.push(Production {
            lhs: start.clone(),
            rhs: vec![self.start.clone()],
        });
        let start_rule = productions.len() - 1;

        let mut nonterminals = self.nonterminals.clone();
        nonterminals.insert(start.clone());
        let mut rules_by_lhs = self.rules_by_lhs.clone();
        rules_by_lhs.insert(start.clone(), vec![start_rule]);

        let grammar = Grammar {
            start,
            productions,
            nonterminals,
            terminals: self.terminals.clone(),
            rules_by_lhs,
        };
        (grammar, start_rule)
    }
}

impl fmt::Display for Grammar {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        for (idx, production) in self.productions.iter().enumerate() {
            if idx > 0 {
                writeln!(f)?;
            }
            write!(f, "{}", production)?;
        }
        Ok(())
    }
}
