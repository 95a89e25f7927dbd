use llslr::Grammar;

/// `S → aSb | ε`
pub const BALANCED_AB: &str = "1\nS -> aSb e\n";

/// Left recursive expression grammar
pub const EXPRESSIONS: &str = "3\nS -> S+T T\nT -> T*F F\nF -> (S) i\n";

/// `S → SS | a`
pub const AMBIGUOUS: &str = "1\nS -> SS a\n";

/// `S → a`
pub const SINGLE_TERMINAL: &str = "1\nS -> a\n";

/// `S → AB`, `A → aA | d`, `B → bBc | ε`
pub const NULLABLE_TAIL: &str = "3\nS -> AB\nA -> aA d\nB -> bBc e\n";

/// LL(1) but not SLR(1): both empty nonterminals are reduced on the same lookaheads
pub const LL1_ONLY: &str = "3\nS -> AaAb BbBa\nA -> e\nB -> e\n";

/// Balanced parentheses, `S → (S)S | ε`
pub const PARENTHESES: &str = "1\nS -> (S)S e\n";

/// Every nonterminal derives two copies of the next one, ending in `ε`
pub const NESTED_NULLABLE: &str = "5\nS -> AA\nA -> BB\nB -> CC\nC -> DD\nD -> e\n";

/// Deeper nullable nesting in front of a single terminal
pub const NESTED_NULLABLE_PREFIX: &str =
    "8\nS -> AAx\nA -> BB\nB -> CC\nC -> DD\nD -> EE\nE -> FF\nF -> GG\nG -> e\n";

pub const ALL: &[&str] = &[
    BALANCED_AB,
    EXPRESSIONS,
    AMBIGUOUS,
    SINGLE_TERMINAL,
    NULLABLE_TAIL,
    LL1_ONLY,
    PARENTHESES,
    NESTED_NULLABLE,
    NESTED_NULLABLE_PREFIX,
];

pub fn grammar(text: &str) -> Grammar {
    llslr::parse_grammar(text).expect("fixture grammar is valid")
}
