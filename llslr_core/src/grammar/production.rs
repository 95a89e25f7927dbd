use std::fmt;

use crate::{GrammarError, Symbol};

/// A single alternative `lhs → rhs`
///
/// The right-hand side `[ε]` denotes the empty alternative.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Production {
    pub lhs: Symbol,
    pub rhs: Vec<Symbol>,
}

impl Production {
    pub fn new(lhs: Symbol, rhs: Vec<Symbol>) -> Result<Self, GrammarError> {
        let production = Self { lhs, rhs };
        production.check()?;
        Ok(production)
    }

    pub(crate) fn check(&self) -> Result<(), GrammarError> {
        let lhs = || self.lhs.clone();
        if !self.lhs.is_nonterminal() {
            return Err(GrammarError::InvalidLhs(lhs()));
        }
        if self.rhs.is_empty() {
            return Err(GrammarError::EmptyRhs(lhs()));
        }
        if self.rhs.iter().any(Symbol::is_end_marker) {
            return Err(GrammarError::EndMarkerInRhs(lhs()));
        }
        if let Some(reserved) = self
            .rhs
            .iter()
            .find(|s| s.is_terminal() && !Symbol::classify(s.atom()).is_terminal())
        {
            return Err(GrammarError::ReservedTerminal(reserved.clone()));
        }
        if self.rhs.len() > 1 && self.rhs.iter().any(Symbol::is_epsilon) {
            return Err(GrammarError::MisplacedEpsilon(lhs()));
        }
        Ok(())
    }

    /// The empty alternative `lhs → ε`
    pub fn epsilon(lhs: Symbol) -> Result<Self, GrammarError> {
        Self::new(lhs, vec![Symbol::Epsilon])
    }

    pub fn is_epsilon(&self) -> bool {
        self.rhs.len() == 1 && self.rhs[0].is_epsilon()
    }

    /// Right-hand side with the epsilon marker removed
    ///
    /// This is what a parser actually pushes or pops.
    pub fn body(&self) -> &[Symbol] {
        if self.is_epsilon() {
            &[]
        } else {
            &self.rhs
        }
    }
}

impl fmt::Display for Production {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        write!(f, "{} →", self.lhs)?;
        for symbol in self.rhs.iter() {
            write!(f, " {}", symbol)?;
        }
        Ok(())
    }
}
