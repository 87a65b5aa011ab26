//! This module contains the construction of an automaton for the reverse language.

use log::debug;

use crate::{Nfa, EPSILON};

impl Nfa {
    /// Returns an automaton for the reverse language accepted by `self`.
    ///
    /// Every state of `self` has a counterpart with the same index in the result and every edge is
    /// flipped, keeping its symbol. The counterpart of the start state becomes the only accepting
    /// state. If `self` has exactly one accepting state, its counterpart is the new start state.
    /// Otherwise a fresh start state is appended with ε edges to the counterparts of all accepting
    /// states.
    pub fn reverse(&self) -> Nfa {
        let mut reversed = Nfa::new();
        let Some(start) = self.start() else {
            debug!("Reverse of an empty automaton");
            return reversed;
        };

        let counterparts: Vec<_> = self.states().map(|_| reversed.new_state()).collect();
        let mut accepting_states = Vec::new();
        for from in self.states() {
            let state = self.nfa_state(from);
            if state.accepting {
                accepting_states.push(counterparts[from]);
            }
            for (sym, targets) in state.transitions.iter() {
                for to in targets.iter() {
                    reversed.connect(counterparts[to], sym, counterparts[from]);
                }
            }
        }

        reversed.nfa_state_mut(counterparts[start]).accepting = true;
        let new_start = match accepting_states.as_slice() {
            [accepting_state] => *accepting_state,
            _ => {
                let new_start = reversed.new_state();
                for accepting_state in &accepting_states {
                    reversed.connect(new_start, EPSILON, *accepting_state);
                }
                new_start
            }
        };
        reversed.replace_start(new_start);

        debug!(
            "Reverse: {} states -> {} states, {} accepting",
            self.len(),
            reversed.len(),
            accepting_states.len()
        );
        reversed
    }
}
