//! This module contains the transition table of a single state.
//! The table maps a symbol to the set of destination states reachable over that symbol.

use std::collections::BTreeMap;

use crate::{Closure, StateID};

/// A transition label.
/// Non-negative values are input symbols, [`EPSILON`] marks an ε edge.
/// Other negative values are reserved for ε edges with priorities, which are not implemented.
pub type Symbol = i32;

/// The symbol value of an ε edge (with no priority).
pub const EPSILON: Symbol = -1;

/// Maps symbols to their destination closures.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Transitions(BTreeMap<Symbol, Closure>);

impl Transitions {
    /// Create a new, empty transition table.
    pub fn new() -> Self {
        Transitions(BTreeMap::new())
    }

    /// Returns the closure associated with `sym`, if any.
    pub fn get(&self, sym: Symbol) -> Option<&Closure> {
        self.0.get(&sym)
    }

    /// Sets `closure` as the closure associated with `sym`, replacing any previous one.
    pub fn set(&mut self, sym: Symbol, closure: Closure) {
        self.0.insert(sym, closure);
    }

    /// Removes the closure associated with `sym` and returns it.
    pub fn delete(&mut self, sym: Symbol) -> Option<Closure> {
        self.0.remove(&sym)
    }

    /// Returns all symbols appearing in the table in ascending order.
    /// [`EPSILON`] sorts before all input symbols.
    pub fn symbols(&self) -> Vec<Symbol> {
        self.0.keys().copied().collect()
    }

    /// Adds `next` to the destinations of `sym`. Adding the same edge twice has no effect.
    pub fn new_edge(&mut self, sym: Symbol, next: StateID) {
        self.0.entry(sym).or_default().include(next);
    }

    /// Adds all states of `closure` to the destinations of `sym`.
    pub(crate) fn merge(&mut self, sym: Symbol, closure: &Closure) {
        self.0.entry(sym).or_default().union(closure);
    }

    /// Returns true if there is at least one edge labeled `sym`.
    pub fn contains(&self, sym: Symbol) -> bool {
        self.0.get(&sym).is_some_and(|c| !c.is_empty())
    }

    /// Iterate over the symbols and their closures in ascending symbol order.
    pub fn iter(&self) -> impl Iterator<Item = (Symbol, &Closure)> + '_ {
        self.0.iter().map(|(sym, closure)| (*sym, closure))
    }

    /// The number of distinct symbols in the table.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if the table contains no symbol.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl IntoIterator for Transitions {
    type Item = (Symbol, Closure);
    type IntoIter = std::collections::btree_map::IntoIter<Symbol, Closure>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}
