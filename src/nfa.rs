//! This module contains the NFA (Non-deterministic Finite Automaton) container.
//! The container owns all states in an arena and refers to them by their dense index. Edges are
//! stored per state as a symbol to closure mapping, so cyclic graphs need no back references.

use crate::{
    errors::{FsmError, FsmErrorKind},
    Closure, NfaID, Result, StateID, Symbol, Transitions, EPSILON,
};

/// A nondeterministic finite automaton, possibly with ε edges.
///
/// A DFA is represented by the same type: it is an `Nfa` without ε edges and with at most one
/// destination per symbol and state. [`Nfa::powerset`] and [`Nfa::minimal_dfa`] produce such
/// automata.
#[derive(Debug)]
pub struct Nfa {
    id: NfaID,
    // The states of the automaton, indexed by the dense state index.
    states: Vec<NfaState>,
    // The start state. It is set automatically when the first state is created.
    start: Option<StateID>,
}

impl Nfa {
    /// Create a new, empty automaton.
    pub fn new() -> Self {
        Self {
            id: NfaID::fresh(),
            states: Vec::new(),
            start: None,
        }
    }

    /// The identity of this automaton. Every state created by it carries this id as owner.
    pub fn id(&self) -> NfaID {
        self.id
    }

    /// Returns a new state added to the automaton.
    /// If the automaton was empty, the new state becomes the start state.
    pub fn new_state(&mut self) -> StateID {
        let state = StateID::new(self.id, self.states.len());
        self.states.push(NfaState::default());
        if self.start.is_none() {
            self.start = Some(state);
        }
        state
    }

    /// Sets the start state.
    /// Passing a state of a different automaton is an error.
    pub fn set_start(&mut self, state: StateID) -> Result<()> {
        self.check(state)?;
        self.start = Some(state);
        Ok(())
    }

    /// The start state, or `None` if the automaton has no states.
    pub fn start(&self) -> Option<StateID> {
        self.start
    }

    /// Returns the state with the given dense index, or `None` if no such state exists.
    pub fn state(&self, index: usize) -> Option<StateID> {
        (index < self.states.len()).then(|| StateID::new(self.id, index))
    }

    /// The number of states.
    pub fn len(&self) -> usize {
        self.states.len()
    }

    /// Returns true if the automaton has no states.
    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    /// Iterate over all states in identity order.
    pub fn states(&self) -> impl Iterator<Item = StateID> + '_ {
        (0..self.states.len()).map(|index| StateID::new(self.id, index))
    }

    /// Returns whether `state` is an accepting state.
    pub fn is_accepting(&self, state: StateID) -> Result<bool> {
        self.check(state)?;
        Ok(self.states[state].accepting)
    }

    /// Marks `state` as accepting or non-accepting.
    pub fn set_accepting(&mut self, state: StateID, accepting: bool) -> Result<()> {
        self.check(state)?;
        self.states[state].accepting = accepting;
        Ok(())
    }

    /// Connects `from` and `to` by a new edge labeled `sym`.
    ///
    /// Passing [`EPSILON`] adds an ε edge. Both states must belong to this automaton; if either
    /// does not, nothing is changed and an error is returned.
    pub fn add_edge(&mut self, from: StateID, sym: Symbol, to: StateID) -> Result<()> {
        self.check(from)?;
        self.check(to)?;
        self.connect(from, sym, to);
        Ok(())
    }

    /// Returns the symbol to closure projection of `state`.
    pub fn transitions(&self, state: StateID) -> Result<&Transitions> {
        self.check(state)?;
        Ok(&self.states[state].transitions)
    }

    /// Returns the destinations of `state` over `sym`.
    /// The closure is empty if `state` has no edge labeled `sym`.
    pub fn edge(&self, state: StateID, sym: Symbol) -> Result<Closure> {
        Ok(self
            .transitions(state)?
            .get(sym)
            .cloned()
            .unwrap_or_default())
    }

    /// Returns the symbols of all edges leaving `state` in ascending order.
    pub fn symbols(&self, state: StateID) -> Result<Vec<Symbol>> {
        Ok(self.transitions(state)?.symbols())
    }

    /// Returns the set consisting of `state` and all states reachable from `state` through ε
    /// edges, transitively.
    pub fn epsilon_closure(&self, state: StateID) -> Result<Closure> {
        self.check(state)?;
        Ok(self.closure_of(state))
    }

    /// Computes the ε closure of a state known to belong to this automaton.
    pub(crate) fn closure_of(&self, state: StateID) -> Closure {
        let mut closure = Closure::new();
        let mut work_list = vec![state];
        while let Some(state) = work_list.pop() {
            if !closure.include(state) {
                continue;
            }
            if let Some(next_states) = self.states[state].transitions.get(EPSILON) {
                work_list.extend(next_states.iter().filter(|next| !closure.has(*next)));
            }
        }
        closure
    }

    /// Adds an edge between two states known to belong to this automaton.
    pub(crate) fn connect(&mut self, from: StateID, sym: Symbol, to: StateID) {
        debug_assert!(from.owner() == self.id && to.owner() == self.id);
        self.states[from].transitions.new_edge(sym, to);
    }

    /// Sets the start state to a state known to belong to this automaton.
    pub(crate) fn replace_start(&mut self, state: StateID) {
        debug_assert!(state.owner() == self.id);
        self.start = Some(state);
    }

    pub(crate) fn nfa_state(&self, state: StateID) -> &NfaState {
        &self.states[state]
    }

    pub(crate) fn nfa_state_mut(&mut self, state: StateID) -> &mut NfaState {
        &mut self.states[state]
    }

    fn check(&self, state: StateID) -> Result<()> {
        if state.owner() != self.id {
            return Err(FsmError::new(FsmErrorKind::ForeignState {
                state,
                owner: state.owner(),
                nfa: self.id,
            }));
        }
        // States are never removed, so an id of this automaton is always in range.
        debug_assert!(state.as_usize() < self.states.len());
        Ok(())
    }
}

impl Default for Nfa {
    fn default() -> Self {
        Self::new()
    }
}

/// One state of an automaton.
#[derive(Debug, Clone, Default)]
pub(crate) struct NfaState {
    pub(crate) accepting: bool,
    pub(crate) transitions: Transitions,
}

#[cfg(test)]
impl Nfa {
    /// Simulates the automaton on `input`. Used to compare languages in tests.
    pub(crate) fn accepts(&self, input: &[Symbol]) -> bool {
        let Some(start) = self.start else {
            return false;
        };
        let mut current = self.closure_of(start);
        for sym in input {
            let mut next = Closure::new();
            for state in current.iter() {
                if let Some(targets) = self.states[state].transitions.get(*sym) {
                    for target in targets.iter() {
                        next.union(&self.closure_of(target));
                    }
                }
            }
            current = next;
        }
        let accepted = current.iter().any(|state| self.states[state].accepting);
        accepted
    }
}
