//! This module contains the minimization of automata.

use std::time::Instant;

use log::trace;

use crate::Nfa;

impl Nfa {
    /// Returns the automaton converted to a minimal DFA.
    ///
    /// The algorithm used is Brzozowski's: the automaton is reversed and determinized twice.
    /// `with_dead_state` is passed to both determinization steps, so `true` yields a complete
    /// minimal DFA and `false` a minimal partial DFA without a dead state.
    pub fn minimal_dfa(&self, with_dead_state: bool) -> Nfa {
        let now = Instant::now();

        let minimal = self
            .reverse()
            .powerset(with_dead_state)
            .reverse()
            .powerset(with_dead_state);

        let elapsed_time = now.elapsed();
        trace!(
            "Minimization of {} states to {} states took {} microseconds.",
            self.len(),
            minimal.len(),
            elapsed_time.as_micros()
        );
        minimal
    }
}

#[cfg(test)]
mod tests {
    use crate::test_data::{
        alternatives_nfa, assert_deterministic, assert_language, assert_same_language, init,
        third_from_last_nfa, wikipedia_nfa, ALTERNATIVES_REGEX, THIRD_FROM_LAST_REGEX,
        WIKIPEDIA_REGEX,
    };
    use crate::Nfa;

    const ALTERNATIVES_MINIMAL_DFA: &str = "\
->[0]
\t0 -> [1]
\t1 -> [2]
[1]
\t1 -> [2]
\t2 -> [3]
[2]
\t2 -> [3]
[[3]]
";

    const ALTERNATIVES_MINIMAL_DFA_WITH_DEAD_STATE: &str = "\
->[0]
\t0 -> [1]
\t1 -> [2]
\t2 -> [4]
[1]
\t0 -> [4]
\t1 -> [2]
\t2 -> [3]
[2]
\t0 -> [4]
\t1 -> [4]
\t2 -> [3]
[[3]]
\t0 -> [4]
\t1 -> [4]
\t2 -> [4]
[4]
\t0 -> [4]
\t1 -> [4]
\t2 -> [4]
";

    #[test]
    fn test_minimal_dfa_alternatives() {
        init();
        let nfa = alternatives_nfa();
        // The plain powerset keeps two equivalent states for the suffix "2".
        assert_eq!(nfa.powerset(false).len(), 5);

        let minimal = nfa.minimal_dfa(false);
        assert_eq!(minimal.to_string(), ALTERNATIVES_MINIMAL_DFA);
        assert_deterministic(&minimal);
        assert_language(&minimal, ALTERNATIVES_REGEX, 3, 5);
    }

    #[test]
    fn test_minimal_dfa_alternatives_with_dead_state() {
        init();
        let minimal = alternatives_nfa().minimal_dfa(true);
        assert_eq!(minimal.to_string(), ALTERNATIVES_MINIMAL_DFA_WITH_DEAD_STATE);
        assert_deterministic(&minimal);
        assert_language(&minimal, ALTERNATIVES_REGEX, 3, 5);
    }

    #[test]
    fn test_minimal_dfa_preserves_language() {
        init();
        let cases = [
            (wikipedia_nfa(), WIKIPEDIA_REGEX, 4),
            (third_from_last_nfa(), THIRD_FROM_LAST_REGEX, 8),
            (alternatives_nfa(), ALTERNATIVES_REGEX, 4),
        ];
        for (nfa, pattern, states) in cases {
            let minimal = nfa.minimal_dfa(false);
            assert_eq!(minimal.len(), states, "{}", pattern);
            assert_deterministic(&minimal);
            assert_language(&minimal, pattern, 3, 7);
        }
    }

    #[test]
    fn test_minimal_dfa_is_stable() {
        init();
        for nfa in [wikipedia_nfa(), third_from_last_nfa(), alternatives_nfa()] {
            for with_dead_state in [false, true] {
                let minimal = nfa.minimal_dfa(with_dead_state);
                let again = minimal.minimal_dfa(with_dead_state);
                // Both passes number states in the same canonical discovery order.
                assert_eq!(again.to_string(), minimal.to_string());
                assert_same_language(&again, &nfa, 3, 6);
            }
        }
    }

    #[test]
    fn test_minimal_dfa_of_epsilon_cycle() {
        init();
        // (01)* with a redundant ε cycle.
        let mut nfa = Nfa::new();
        let s: Vec<_> = (0..4).map(|_| nfa.new_state()).collect();
        nfa.add_edge(s[0], 0, s[1]).unwrap();
        nfa.add_edge(s[1], 1, s[2]).unwrap();
        nfa.add_edge(s[2], crate::EPSILON, s[3]).unwrap();
        nfa.add_edge(s[3], crate::EPSILON, s[0]).unwrap();
        nfa.add_edge(s[0], crate::EPSILON, s[3]).unwrap();
        nfa.set_accepting(s[3], true).unwrap();

        let minimal = nfa.minimal_dfa(false);
        assert_eq!(minimal.to_string(), "->[[0]]\n\t0 -> [1]\n[1]\n\t1 -> [0]\n");
        assert_language(&minimal, "(01)*", 2, 8);
    }
}
