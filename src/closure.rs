//! This module contains the `Closure` type, a set of states keyed by their identity.
//! Closures are used as destination sets of transitions and as the NFA state sets that make up a
//! single DFA state during the subset construction.

use std::collections::BTreeSet;

use itertools::Itertools;

use crate::StateID;

/// A set of states.
///
/// The set is deduplicated and ordered by state identity, so iteration always yields the members
/// in identity order regardless of insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Closure(BTreeSet<StateID>);

impl Closure {
    /// Create a new, empty closure.
    pub fn new() -> Self {
        Closure(BTreeSet::new())
    }

    /// Returns whether `state` is in the closure.
    pub fn has(&self, state: StateID) -> bool {
        self.0.contains(&state)
    }

    /// Adds `state` to the closure.
    /// Returns false if the state was already a member.
    pub fn include(&mut self, state: StateID) -> bool {
        self.0.insert(state)
    }

    /// Removes `state` from the closure.
    /// Returns false if the state was not a member.
    pub fn exclude(&mut self, state: StateID) -> bool {
        self.0.remove(&state)
    }

    /// Returns all states of the closure in identity order.
    pub fn list(&self) -> Vec<StateID> {
        self.0.iter().copied().collect()
    }

    /// Iterate over the states of the closure in identity order.
    pub fn iter(&self) -> impl Iterator<Item = StateID> + '_ {
        self.0.iter().copied()
    }

    /// The number of states in the closure.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if the closure contains no state.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Adds all states of `other` to this closure.
    pub fn union(&mut self, other: &Closure) {
        self.0.extend(other.iter());
    }

    /// The canonical key of the closure.
    ///
    /// The key is the sorted list of member indices, e.g. `[0 1 3]`. Two closures with the same
    /// members always have the same key.
    pub fn id(&self) -> String {
        format!("[{}]", self.0.iter().map(|s| s.as_usize()).join(" "))
    }
}

impl FromIterator<StateID> for Closure {
    fn from_iter<I: IntoIterator<Item = StateID>>(iter: I) -> Self {
        Closure(iter.into_iter().collect())
    }
}

impl Extend<StateID> for Closure {
    fn extend<I: IntoIterator<Item = StateID>>(&mut self, iter: I) {
        self.0.extend(iter)
    }
}

impl<'a> IntoIterator for &'a Closure {
    type Item = StateID;
    type IntoIter = std::iter::Copied<std::collections::btree_set::Iter<'a, StateID>>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter().copied()
    }
}
