use std::fmt;

/// Atom reserved for the empty string
pub const EPSILON_ATOM: &str = "e";
/// Atom reserved for the end of input
pub const END_MARKER_ATOM: &str = "$";

/// A grammar symbol
///
/// The variant order doubles as the display order of symbol sets:
/// epsilon first, then terminals, nonterminals and finally the end marker.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Symbol {
    Epsilon,
    Terminal(String),
    Nonterminal(String),
    EndMarker,
}

impl Symbol {
    /// Classify a textual atom
    ///
    /// `e` is epsilon, `$` is the end marker, a single uppercase letter is a
    /// nonterminal and anything else is a terminal.
    pub fn classify(atom: &str) -> Self {
        match atom {
            EPSILON_ATOM => Symbol::Epsilon,
            END_MARKER_ATOM => Symbol::EndMarker,
            _ if is_nonterminal_atom(atom) => Symbol::Nonterminal(atom.to_owned()),
            _ => Symbol::Terminal(atom.to_owned()),
        }
    }

    pub fn terminal<S: Into<String>>(atom: S) -> Self {
        Symbol::Terminal(atom.into())
    }

    pub fn nonterminal<S: Into<String>>(atom: S) -> Self {
        Symbol::Nonterminal(atom.into())
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, Symbol::Terminal(_))
    }

    pub fn is_nonterminal(&self) -> bool {
        matches!(self, Symbol::Nonterminal(_))
    }

    pub fn is_epsilon(&self) -> bool {
        matches!(self, Symbol::Epsilon)
    }

    pub fn is_end_marker(&self) -> bool {
        matches!(self, Symbol::EndMarker)
    }

    /// The atom this symbol was classified from
    pub fn atom(&self) -> &str {
        match self {
            Symbol::Epsilon => EPSILON_ATOM,
            Symbol::EndMarker => END_MARKER_ATOM,
            Symbol::Terminal(atom) | Symbol::Nonterminal(atom) => atom,
        }
    }
}

fn is_nonterminal_atom(atom: &str) -> bool {
    let mut chars = atom.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => c.is_ascii_uppercase(),
        _ => false,
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        match self {
            Symbol::Epsilon => write!(f, "ε"),
            Symbol::EndMarker => write!(f, "$"),
            Symbol::Terminal(t) => write!(f, "{}", t),
            Symbol::Nonterminal(n) => write!(f, "{}", n),
        }
    }
}

/// Render a set of symbols as `{a, b, $}`
pub fn symbol_set_string<'a, I>(symbols: I) -> String
where
    I: IntoIterator<Item = &'a Symbol>,
{
    let strings: Vec<String> = symbols.into_iter().map(|s| format!("{}", s)).collect();
    format!("{{{}}}", strings.join(", "))
}
