use std::sync::atomic::{AtomicUsize, Ordering};

macro_rules! impl_id {
    ($name:ident) => {
        #[doc = concat!("The ID type ", stringify!($name), ".")]
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
        pub struct $name(usize);

        impl $name {
            /// Create a new id.
            #[inline]
            pub(crate) const fn new(index: usize) -> Self {
                $name(index)
            }

            /// Get the id as usize.
            #[inline]
            pub fn as_usize(&self) -> usize {
                self.0
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

impl_id!(NfaID);

// Source of automaton identities. Zero is never handed out so that a defaulted NfaID never
// matches a live automaton.
static NEXT_NFA_ID: AtomicUsize = AtomicUsize::new(1);

impl NfaID {
    /// Draw a fresh, process-unique automaton id.
    pub(crate) fn fresh() -> Self {
        NfaID::new(NEXT_NFA_ID.fetch_add(1, Ordering::Relaxed))
    }
}

/// The identity of a state.
///
/// A `StateID` is the dense, zero-based index of the state inside its automaton, tagged with the
/// identity of that automaton. Ordering and hashing consider both parts, so ids of different
/// automata never collide in a [`Closure`](crate::Closure).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct StateID {
    owner: NfaID,
    index: usize,
}

impl StateID {
    #[inline]
    pub(crate) const fn new(owner: NfaID, index: usize) -> Self {
        StateID { owner, index }
    }

    /// Get the dense index of the state as usize.
    #[inline]
    pub fn as_usize(&self) -> usize {
        self.index
    }

    /// The automaton this state belongs to.
    #[inline]
    pub fn owner(&self) -> NfaID {
        self.owner
    }
}

impl<T> std::ops::Index<StateID> for [T] {
    type Output = T;

    #[inline]
    fn index(&self, index: StateID) -> &Self::Output {
        &self[index.index]
    }
}

impl<T> std::ops::IndexMut<StateID> for [T] {
    #[inline]
    fn index_mut(&mut self, index: StateID) -> &mut T {
        &mut self[index.index]
    }
}

impl<T> std::ops::Index<StateID> for Vec<T> {
    type Output = T;

    #[inline]
    fn index(&self, index: StateID) -> &Self::Output {
        &self[index.index]
    }
}

impl<T> std::ops::IndexMut<StateID> for Vec<T> {
    #[inline]
    fn index_mut(&mut self, index: StateID) -> &mut T {
        &mut self[index.index]
    }
}

impl std::fmt::Display for StateID {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.index)
    }
}
