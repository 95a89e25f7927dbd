use std::error::Error;
use std::fmt;

use crate::Symbol;

/// Violation of a grammar invariant detected while constructing a `Grammar`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GrammarError {
    NoProductions,
    InvalidLhs(Symbol),
    EmptyRhs(Symbol),
    EndMarkerInRhs(Symbol),
    ReservedTerminal(Symbol),
    MisplacedEpsilon(Symbol),
    InvalidStart(Symbol),
    MissingStartRule(Symbol),
    UndefinedNonterminal(Symbol),
}

impl fmt::Display for GrammarError {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        match self {
            GrammarError::NoProductions => write!(f, "Grammar has no productions"),
            GrammarError::InvalidLhs(s) => {
                write!(f, "Left-hand side must be a nonterminal, found {}", s)
            }
            GrammarError::EmptyRhs(lhs) => write!(f, "Empty right-hand side for {}", lhs),
            GrammarError::EndMarkerInRhs(lhs) => {
                write!(f, "End marker $ in right-hand side of {}", lhs)
            }
            GrammarError::ReservedTerminal(t) => {
                write!(f, "Terminal {:?} is spelled like a reserved atom", t.atom())
            }
            GrammarError::MisplacedEpsilon(lhs) => write!(
                f,
                "Epsilon must be the only symbol of an alternative of {}",
                lhs
            ),
            GrammarError::InvalidStart(s) => {
                write!(f, "Start symbol must be a nonterminal, found {}", s)
            }
            GrammarError::MissingStartRule(s) => write!(f, "Missing start rule for {}", s),
            GrammarError::UndefinedNonterminal(s) => {
                write!(f, "Nonterminal {} is used but has no productions", s)
            }
        }
    }
}

impl Error for GrammarError {}
