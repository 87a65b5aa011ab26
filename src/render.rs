//! Textual rendering of automata for debugging and golden tests.
//!
//! Each state is printed on its own line in identity order. `->` marks the start state, an
//! accepting state is wrapped in an extra pair of brackets. The edges follow indented by a tab,
//! one line per symbol in ascending order with the destinations in identity order:
//!
//! ```text
//! ->[0]
//! 	ε -> [2]
//! 	0 -> [1]
//! [1]
//! 	1 -> [1] [3]
//! [[2]]
//! ```

use std::fmt::{self, Display, Formatter};

use itertools::Itertools;

use crate::{Nfa, EPSILON};

impl Display for Nfa {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for state in self.states() {
            let nfa_state = self.nfa_state(state);
            let start = if Some(state) == self.start() { "->" } else { "" };
            if nfa_state.accepting {
                writeln!(f, "{}[[{}]]", start, state)?;
            } else {
                writeln!(f, "{}[{}]", start, state)?;
            }
            for (sym, targets) in nfa_state.transitions.iter() {
                let targets = targets.iter().map(|target| format!("[{}]", target)).join(" ");
                if sym == EPSILON {
                    writeln!(f, "\tε -> {}", targets)?;
                } else {
                    writeln!(f, "\t{} -> {}", sym, targets)?;
                }
            }
        }
        Ok(())
    }
}
