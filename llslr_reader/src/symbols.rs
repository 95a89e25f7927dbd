use llslr_core::{GrammarError, Production, Symbol, EPSILON_ATOM};

/// Build the production `lhs → alternative`, one atom per character
///
/// The alternative `e` on its own is the empty alternative.
pub fn alternative_production(lhs: char, alternative: &str) -> Result<Production, GrammarError> {
    let lhs = Symbol::classify(&lhs.to_string());
    if alternative == EPSILON_ATOM {
        return Production::epsilon(lhs);
    }
    let rhs = alternative
        .chars()
        .map(|c| Symbol::classify(&c.to_string()))
        .collect();
    Production::new(lhs, rhs)
}

/// Render the right-hand side of a production in the textual format
pub fn alternative_string(production: &Production) -> String {
    if production.is_epsilon() {
        return EPSILON_ATOM.to_owned();
    }
    production.rhs.iter().map(Symbol::atom).collect()
}
