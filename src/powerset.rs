//! This module contains the conversion of an NFA into a DFA.
//! The DFA is created using the subset construction algorithm. Every DFA state stands for the ε
//! closure of a set of NFA states.

use std::collections::{btree_map, BTreeMap};

use log::{debug, trace};

use crate::{Closure, Nfa, StateID, Symbol, Transitions, EPSILON};

// The symbols of a DFA state that still have to be connected, in ascending order.
type PendingEdges = btree_map::IntoIter<Symbol, Closure>;

impl Nfa {
    /// Converts the automaton into an automaton without ε edges, i.e. into a DFA.
    ///
    /// If `with_dead_state` is true, the DFA is completed: every state gets an edge for each
    /// symbol below the alphabet size, where the alphabet size is one more than the largest symbol
    /// used by `self`. Missing edges lead to a single, non-accepting dead state that loops to
    /// itself. No dead state is created if `self` uses no symbol at all.
    ///
    /// The states of the DFA are numbered in depth-first discovery order starting with the start
    /// state, visiting symbols in ascending order.
    ///
    /// Edges labeled with negative symbols other than [`EPSILON`] are ignored.
    pub fn powerset(&self, with_dead_state: bool) -> Nfa {
        let Some(start) = self.start() else {
            debug!("Powerset of an empty automaton");
            return Nfa::new();
        };

        let mut construction = SubsetConstruction::new(self);
        let (start_state, pending) = construction.add_state(&self.closure_of(start));
        // The work list emulates the recursion of a depth-first search.
        let mut work_list = vec![(start_state, pending)];

        while let Some((state, pending)) = work_list.last_mut() {
            let state = *state;
            let Some((sym, closure)) = pending.next() else {
                work_list.pop();
                continue;
            };
            let target_state = match construction.closures.get(&closure.id()).copied() {
                Some(target_state) => target_state,
                None => {
                    let (target_state, pending) = construction.add_state(&closure);
                    work_list.push((target_state, pending));
                    target_state
                }
            };
            construction.dfa.connect(state, sym, target_state);
        }

        if with_dead_state {
            construction.add_dead_state();
        }

        debug!(
            "Powerset: {} NFA states -> {} DFA states, alphabet size {}",
            self.len(),
            construction.dfa.len(),
            construction.alphabet_size()
        );
        construction.dfa
    }
}

struct SubsetConstruction<'a> {
    nfa: &'a Nfa,
    dfa: Nfa,
    // Maps the canonical key of a closure to the DFA state created for it.
    closures: BTreeMap<String, StateID>,
    // The largest symbol seen so far.
    max_symbol: Option<Symbol>,
}

impl<'a> SubsetConstruction<'a> {
    fn new(nfa: &'a Nfa) -> Self {
        Self {
            nfa,
            dfa: Nfa::new(),
            closures: BTreeMap::new(),
            max_symbol: None,
        }
    }

    /// Creates the DFA state for `closure` and collects the closures reachable from it per symbol.
    /// The DFA state is accepting if any of the NFA states in the closure is accepting.
    fn add_state(&mut self, closure: &Closure) -> (StateID, PendingEdges) {
        let nfa = self.nfa;
        let state = self.dfa.new_state();
        let key = closure.id();
        trace!("Add DFA state {}: {}", state, key);
        self.closures.insert(key, state);

        let mut accepting = false;
        let mut transitions = Transitions::new();
        for nfa_state in closure.iter() {
            let nfa_state = nfa.nfa_state(nfa_state);
            accepting |= nfa_state.accepting;
            for (sym, next_states) in nfa_state.transitions.iter() {
                if sym < 0 {
                    if sym != EPSILON {
                        debug!("Ignoring edge with reserved symbol {}", sym);
                    }
                    continue;
                }
                self.max_symbol = self.max_symbol.max(Some(sym));
                for next_state in next_states.iter() {
                    transitions.merge(sym, &nfa.closure_of(next_state));
                }
            }
        }
        self.dfa.nfa_state_mut(state).accepting = accepting;

        (state, transitions.into_iter())
    }

    /// One more than the largest symbol seen, zero if there was none.
    fn alphabet_size(&self) -> i64 {
        self.max_symbol.map_or(0, |sym| i64::from(sym) + 1)
    }

    /// Completes the DFA with a dead state.
    /// Existing edges are never changed.
    fn add_dead_state(&mut self) {
        let Some(max_symbol) = self.max_symbol else {
            return;
        };
        let states: Vec<StateID> = self.dfa.states().collect();
        let mut dead_state = None;
        for state in states {
            for sym in 0..=max_symbol {
                if self.dfa.nfa_state(state).transitions.contains(sym) {
                    continue;
                }
                let dead_state = *dead_state.get_or_insert_with(|| self.dfa.new_state());
                self.dfa.connect(state, sym, dead_state);
            }
        }
        if let Some(dead_state) = dead_state {
            trace!("Add dead state {}", dead_state);
            for sym in 0..=max_symbol {
                self.dfa.connect(dead_state, sym, dead_state);
            }
        }
    }
}
