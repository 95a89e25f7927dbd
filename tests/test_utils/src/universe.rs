use std::collections::VecDeque;

use llslr::{Grammar, Symbol};

/// Every string over `alphabet` with at most `max_len` characters, shortest first
pub fn strings_up_to(alphabet: &[char], max_len: usize) -> Vec<String> {
    let mut strings = vec![String::new()];
    let mut last = vec![String::new()];
    for _ in 0..max_len {
        let next: Vec<String> = last
            .iter()
            .flat_map(|s| {
                alphabet.iter().map(move |c| {
                    let mut s = s.clone();
                    s.push(*c);
                    s
                })
            })
            .collect();
        strings.extend(next.iter().cloned());
        last = next;
    }
    strings
}

/// Search leftmost derivations of `form` for one whose first symbol is `terminal`
///
/// Sentential forms longer than `max_len` are not explored and at most `budget`
/// forms are expanded.
pub fn derives_prefix(
    grammar: &Grammar,
    form: &[Symbol],
    terminal: &Symbol,
    max_len: usize,
    budget: usize,
) -> bool {
    let mut queue: VecDeque<Vec<Symbol>> = VecDeque::new();
    queue.push_back(form.to_vec());
    let mut expanded = 0;

    while let Some(form) = queue.pop_front() {
        match form.first() {
            None => {}
            Some(first) if first.is_terminal() => {
                if first == terminal {
                    return true;
                }
            }
            Some(first) => {
                expanded += 1;
                if expanded > budget {
                    return false;
                }
                for (_, production) in grammar.productions_for(first) {
                    let mut next = production.body().to_vec();
                    next.extend(form[1..].iter().cloned());
                    if next.len() <= max_len {
                        queue.push_back(next);
                    }
                }
            }
        }
    }
    false
}
