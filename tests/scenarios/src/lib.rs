#![cfg(test)]

mod properties;

use llslr::{
    compute_first, compute_follow, Analysis, GrammarClass, LL1Conflict, LL1Parser, Recognizer,
    SLR1Conflict, SLR1Parser, Symbol,
};
use matches::assert_matches;
use test_utils::{
    grammar, AMBIGUOUS, BALANCED_AB, EXPRESSIONS, NESTED_NULLABLE, NESTED_NULLABLE_PREFIX,
    NULLABLE_TAIL, SINGLE_TERMINAL,
};

fn verdicts<R: Recognizer>(parser: &R, inputs: &[&str]) -> Vec<bool> {
    inputs.iter().map(|input| parser.accepts_str(input)).collect()
}

fn parsers(text: &str) -> (LL1Parser, SLR1Parser) {
    let grammar = grammar(text);
    let first = compute_first(&grammar);
    let follow = compute_follow(&grammar, &first);
    (
        <LL1Parser as Recognizer>::build(&grammar, &first, &follow).unwrap(),
        <SLR1Parser as Recognizer>::build(&grammar, &first, &follow).unwrap(),
    )
}

#[test]
fn test_balanced_ab() {
    let (ll1, slr1) = parsers(BALANCED_AB);
    let inputs = ["ab", "aabb", "aab", ""];
    let expected = vec![true, true, false, true];
    assert_eq!(verdicts(&ll1, &inputs), expected);
    assert_eq!(verdicts(&slr1, &inputs), expected);
}

#[test]
fn test_expressions() {
    let analysis = Analysis::new(&grammar(EXPRESSIONS));
    assert_eq!(analysis.class(), GrammarClass::SLR1Only);
    assert_matches!(
        &analysis.ll1,
        Err(LL1Conflict { nonterminal, .. }) if *nonterminal == Symbol::nonterminal("S")
    );

    let slr1 = analysis.slr1.as_ref().unwrap();
    assert_eq!(
        verdicts(slr1, &["i+i", "(i)", "(i+i)*i)"]),
        vec![true, true, false]
    );
}

#[test]
fn test_ambiguous() {
    let analysis = Analysis::new(&grammar(AMBIGUOUS));
    assert_eq!(analysis.class(), GrammarClass::Neither);

    let ll1_conflict = analysis.ll1.unwrap_err();
    assert_eq!(ll1_conflict.nonterminal, Symbol::nonterminal("S"));
    assert_eq!(ll1_conflict.lookahead, Symbol::terminal("a"));

    let slr1_conflict = analysis.slr1.unwrap_err();
    assert_matches!(slr1_conflict, SLR1Conflict::ShiftReduce { .. });
    assert_eq!(slr1_conflict.lookahead(), &Symbol::terminal("a"));
}

#[test]
fn test_single_terminal() {
    let (ll1, slr1) = parsers(SINGLE_TERMINAL);
    let inputs = ["a", "aa", "b"];
    let expected = vec![true, false, false];
    assert_eq!(verdicts(&ll1, &inputs), expected);
    assert_eq!(verdicts(&slr1, &inputs), expected);
}

#[test]
fn test_nullable_tail() {
    let (ll1, slr1) = parsers(NULLABLE_TAIL);
    let inputs = ["d", "adbc", "a"];
    let expected = vec![true, true, false];
    assert_eq!(verdicts(&ll1, &inputs), expected);
    assert_eq!(verdicts(&slr1, &inputs), expected);
}

#[test]
fn test_nonterminal_atoms_are_rejected() {
    let (ll1, slr1) = parsers(BALANCED_AB);
    for input in &["aSb", "e", "$", "a$b"] {
        assert!(!ll1.accepts_str(input));
        assert!(!slr1.accepts_str(input));
    }
}

#[test]
fn test_nested_nullable() {
    let (ll1, slr1) = parsers(NESTED_NULLABLE);
    let inputs = [""];
    assert_eq!(verdicts(&ll1, &inputs), vec![true]);
    assert_eq!(verdicts(&slr1, &inputs), vec![true]);

    let (ll1, slr1) = parsers(NESTED_NULLABLE_PREFIX);
    let inputs = ["x", "", "xx"];
    let expected = vec![true, false, false];
    assert_eq!(verdicts(&ll1, &inputs), expected);
    assert_eq!(verdicts(&slr1, &inputs), expected);
}
