//! Automata and helpers shared by the tests of several modules.

use regex::Regex;

use crate::{Nfa, Symbol, EPSILON};

// Initialize the logger for the tests
pub(crate) fn init() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// The NFA of the powerset construction example on Wikipedia.
pub(crate) fn wikipedia_nfa() -> Nfa {
    let mut nfa = Nfa::new();
    let (s1, s2, s3, s4) = (
        nfa.new_state(),
        nfa.new_state(),
        nfa.new_state(),
        nfa.new_state(),
    );
    nfa.add_edge(s1, 0, s2).unwrap();
    nfa.add_edge(s1, EPSILON, s3).unwrap();
    nfa.add_edge(s2, 1, s2).unwrap();
    nfa.add_edge(s2, 1, s4).unwrap();
    nfa.set_accepting(s3, true).unwrap();
    nfa.add_edge(s3, 0, s4).unwrap();
    nfa.add_edge(s3, EPSILON, s2).unwrap();
    nfa.set_accepting(s4, true).unwrap();
    nfa.add_edge(s4, 0, s3).unwrap();
    nfa
}

/// The language of [`wikipedia_nfa`] as a regular expression over the digits `0` and `1`.
pub(crate) const WIKIPEDIA_REGEX: &str = "((0|1)(1|0(00)*1)*0*)?";

/// NFA for the regex `(0|1)*1(0|1)(0|1)`.
pub(crate) fn third_from_last_nfa() -> Nfa {
    let mut nfa = Nfa::new();
    let (s0, s1, s2, s3) = (
        nfa.new_state(),
        nfa.new_state(),
        nfa.new_state(),
        nfa.new_state(),
    );
    nfa.add_edge(s0, 0, s0).unwrap();
    nfa.add_edge(s0, 1, s0).unwrap();
    nfa.add_edge(s0, 1, s1).unwrap();
    nfa.add_edge(s1, 0, s2).unwrap();
    nfa.add_edge(s1, 1, s2).unwrap();
    nfa.add_edge(s2, 0, s3).unwrap();
    nfa.add_edge(s2, 1, s3).unwrap();
    nfa.set_accepting(s3, true).unwrap();
    nfa
}

pub(crate) const THIRD_FROM_LAST_REGEX: &str = "(0|1)*1(0|1)(0|1)";

/// NFA for the regex `012|12|02`.
pub(crate) fn alternatives_nfa() -> Nfa {
    let mut nfa = Nfa::new();
    let s: Vec<_> = (0..6).map(|_| nfa.new_state()).collect();
    nfa.add_edge(s[0], 0, s[1]).unwrap();
    nfa.add_edge(s[0], 0, s[5]).unwrap();
    nfa.add_edge(s[0], 1, s[4]).unwrap();
    nfa.add_edge(s[1], 1, s[2]).unwrap();
    nfa.add_edge(s[2], 2, s[3]).unwrap();
    nfa.set_accepting(s[3], true).unwrap();
    nfa.add_edge(s[4], 2, s[3]).unwrap();
    nfa.add_edge(s[5], 2, s[3]).unwrap();
    nfa
}

pub(crate) const ALTERNATIVES_REGEX: &str = "012|12|02";

/// All words over `0..alphabet_size` with at most `max_len` symbols, shortest first.
pub(crate) fn words(alphabet_size: Symbol, max_len: usize) -> Vec<Vec<Symbol>> {
    let mut result = vec![Vec::new()];
    let mut last = vec![Vec::new()];
    for _ in 0..max_len {
        let mut next = Vec::new();
        for word in &last {
            for sym in 0..alphabet_size {
                let mut w: Vec<Symbol> = word.clone();
                w.push(sym);
                next.push(w);
            }
        }
        result.extend(next.iter().cloned());
        last = next;
    }
    result
}

/// Asserts that `nfa` accepts exactly the words matched by `pattern`, for all words over
/// `0..alphabet_size` up to `max_len` symbols. Symbols are spelled as decimal digits.
pub(crate) fn assert_language(nfa: &Nfa, pattern: &str, alphabet_size: Symbol, max_len: usize) {
    let re = Regex::new(&format!("^(?:{})$", pattern)).unwrap();
    for word in words(alphabet_size, max_len) {
        let text: String = word.iter().map(|sym| sym.to_string()).collect();
        assert_eq!(
            nfa.accepts(&word),
            re.is_match(&text),
            "word {:?} against {}",
            text,
            pattern
        );
    }
}

/// Asserts that `nfa` and `reference` agree on all words over `0..alphabet_size` up to `max_len`
/// symbols.
pub(crate) fn assert_same_language(
    nfa: &Nfa,
    reference: &Nfa,
    alphabet_size: Symbol,
    max_len: usize,
) {
    for word in words(alphabet_size, max_len) {
        assert_eq!(nfa.accepts(&word), reference.accepts(&word), "word {:?}", word);
    }
}

/// Asserts that `nfa` has no ε edges and at most one destination per symbol and state.
pub(crate) fn assert_deterministic(nfa: &Nfa) {
    for state in nfa.states() {
        for (sym, targets) in nfa.transitions(state).unwrap().iter() {
            assert!(sym >= 0, "state {} has an edge labeled {}", state, sym);
            assert_eq!(targets.len(), 1, "state {} symbol {}", state, sym);
        }
    }
}
