use std::fmt;

use log::debug;

use llslr_core::{
    compute_first, compute_follow, FirstSets, FollowSets, Grammar, LL1Conflict, LL1Parser,
    SLR1Conflict, SLR1Parser,
};

/// Which of the two table driven methods accept a grammar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GrammarClass {
    Both,
    LL1Only,
    SLR1Only,
    Neither,
}

impl fmt::Display for GrammarClass {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        match self {
            GrammarClass::Both => write!(f, "Grammar is LL(1) and SLR(1)."),
            GrammarClass::LL1Only => write!(f, "Grammar is LL(1)."),
            GrammarClass::SLR1Only => write!(f, "Grammar is SLR(1)."),
            GrammarClass::Neither => write!(f, "Grammar is neither LL(1) nor SLR(1)."),
        }
    }
}

/// Sets and parsers of a grammar, computed once
#[derive(Debug)]
pub struct Analysis {
    pub first: FirstSets,
    pub follow: FollowSets,
    pub ll1: Result<LL1Parser, LL1Conflict>,
    pub slr1: Result<SLR1Parser, SLR1Conflict>,
}

impl Analysis {
    pub fn new(grammar: &Grammar) -> Self {
        let first = compute_first(grammar);
        let follow = compute_follow(grammar, &first);
        let ll1 = LL1Parser::build(grammar, &first, &follow);
        let slr1 = SLR1Parser::build(grammar, &first, &follow);

        let analysis = Self {
            first,
            follow,
            ll1,
            slr1,
        };
        debug!("{}", analysis.class());
        analysis
    }

    pub fn class(&self) -> GrammarClass {
        match (self.ll1.is_ok(), self.slr1.is_ok()) {
            (true, true) => GrammarClass::Both,
            (true, false) => GrammarClass::LL1Only,
            (false, true) => GrammarClass::SLR1Only,
            (false, false) => GrammarClass::Neither,
        }
    }
}
