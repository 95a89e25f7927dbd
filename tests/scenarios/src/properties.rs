use llslr::{
    compute_first, compute_follow, write_grammar, Analysis, GrammarClass, Recognizer, Symbol,
};
use test_utils::{derives_prefix, grammar, strings_up_to, ALL};

#[test]
fn test_sets_are_deterministic() {
    for text in ALL {
        let grammar = grammar(text);
        let first = compute_first(&grammar);
        assert_eq!(first, compute_first(&grammar));
        assert_eq!(
            compute_follow(&grammar, &first),
            compute_follow(&grammar, &first)
        );
    }
}

#[test]
fn test_saturated_sets_stay_put() {
    for text in ALL {
        let grammar = grammar(text);
        let mut first = compute_first(&grammar);
        let mut follow = compute_follow(&grammar, &first);
        assert_eq!(first.saturate(&grammar), 0);
        assert_eq!(follow.saturate(&grammar, &first), 0);
    }
}

#[test]
fn test_first_sets_are_sound() {
    for text in ALL {
        let grammar = grammar(text);
        let first = compute_first(&grammar);
        for production in grammar.productions() {
            for t in first.first_of_string(production.body()) {
                if t.is_epsilon() {
                    continue;
                }
                assert!(
                    derives_prefix(&grammar, production.body(), &t, 12, 10_000),
                    "{} does not derive a string starting with {}",
                    production,
                    t
                );
            }
        }
    }
}

#[test]
fn test_builders_are_deterministic() {
    for text in ALL {
        let grammar = grammar(text);
        let a = Analysis::new(&grammar);
        let b = Analysis::new(&grammar);
        match (&a.ll1, &b.ll1) {
            (Ok(x), Ok(y)) => assert_eq!(x.table(), y.table()),
            (Err(x), Err(y)) => assert_eq!(x, y),
            _ => panic!("LL(1) outcome differs between runs"),
        }
        match (&a.slr1, &b.slr1) {
            (Ok(x), Ok(y)) => assert_eq!(x.table(), y.table()),
            (Err(x), Err(y)) => assert_eq!(x, y),
            _ => panic!("SLR(1) outcome differs between runs"),
        }
    }
}

#[test]
fn test_parsers_agree() {
    for text in ALL {
        let grammar = grammar(text);
        let analysis = Analysis::new(&grammar);
        if analysis.class() != GrammarClass::Both {
            continue;
        }
        let (ll1, slr1) = match (&analysis.ll1, &analysis.slr1) {
            (Ok(ll1), Ok(slr1)) => (ll1, slr1),
            _ => unreachable!(),
        };
        let alphabet: Vec<char> = grammar
            .terminals()
            .iter()
            .flat_map(|t| t.atom().chars())
            .collect();
        for input in strings_up_to(&alphabet, 6) {
            assert_eq!(
                ll1.accepts_str(&input),
                slr1.accepts_str(&input),
                "parsers disagree on {:?}",
                input
            );
        }
    }
}

#[test]
fn test_terminals_outside_the_grammar() {
    let grammar = grammar(test_utils::NULLABLE_TAIL);
    let analysis = Analysis::new(&grammar);
    let ll1 = analysis.ll1.as_ref().unwrap();
    let slr1 = analysis.slr1.as_ref().unwrap();
    assert!(!ll1.accepts(&["d", "x"]));
    assert!(!slr1.accepts(&["d", "x"]));
    assert!(ll1.accepts(&["a", "d", "b", "c"]));
}

#[test]
fn test_written_grammar_reads_back() {
    for text in ALL {
        let grammar = grammar(text);
        let written = write_grammar(&grammar);
        assert_eq!(written, *text);
        assert_eq!(llslr::parse_grammar(&written).unwrap(), grammar);
    }
}

#[test]
fn test_start_symbol() {
    for text in ALL {
        assert_eq!(grammar(text).start(), &Symbol::nonterminal("S"));
    }
}
