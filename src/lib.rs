#![forbid(missing_docs)]
//! The `fsm` crate provides utilities to build, transform and minimize finite state automata.
//!
//! Automata are built state by state and edge by edge on an [`Nfa`]. Edges are labeled with
//! non-negative integer symbols or with [`EPSILON`]. An automaton can be converted into a DFA
//! with [`Nfa::powerset`], reversed with [`Nfa::reverse`] and minimized with
//! [`Nfa::minimal_dfa`]. All transformations return a new automaton and leave their input
//! untouched.
//!
//! Passing `with_dead_state == true` to the DFA producing methods makes the resulting DFAs
//! complete. A dead state is a non-accepting state with no outgoing edges except to itself. For
//! many practical purposes the dead state is not needed and the additional edges to it only
//! waste memory.
//!
//! ```
//! use fsm::{Nfa, EPSILON};
//!
//! let mut nfa = Nfa::new();
//! let (s0, s1, s2) = (nfa.new_state(), nfa.new_state(), nfa.new_state());
//! nfa.add_edge(s0, 0, s1)?;
//! nfa.add_edge(s0, EPSILON, s1)?;
//! nfa.add_edge(s1, 1, s2)?;
//! nfa.set_accepting(s2, true)?;
//!
//! let dfa = nfa.minimal_dfa(false);
//! assert_eq!(dfa.len(), 3);
//! # Ok::<(), fsm::FsmError>(())
//! ```

/// Module with error definitions
mod errors;
pub use errors::{FsmError, FsmErrorKind, Result};

/// Module for the ID types of automata and states.
mod ids;
pub use ids::{NfaID, StateID};

/// Module that provides the set of states type.
mod closure;
pub use closure::Closure;

/// Module that provides the transition table of a state.
mod transitions;
pub use transitions::{Symbol, Transitions, EPSILON};

/// The nfa module contains the automaton container.
mod nfa;
pub use nfa::Nfa;

/// Module with the subset construction
mod powerset;

/// Module with the construction of the reverse automaton
mod reverse;

/// Module with the minimization
mod minimize;

/// Module with the textual rendering used for debugging
mod render;

/// Module with conversion to graphviz dot format
#[cfg(feature = "dot")]
pub mod dot;

#[cfg(test)]
mod test_data;
