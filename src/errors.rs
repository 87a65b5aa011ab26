use thiserror::Error;

use crate::{NfaID, StateID};

/// The result type for the `fsm` crate.
pub type Result<T> = std::result::Result<T, FsmError>;

/// The error type for the `fsm` crate.
#[derive(Error, Debug)]
pub struct FsmError {
    /// The source of the error.
    pub source: Box<FsmErrorKind>,
}

impl FsmError {
    /// Create a new `FsmError`.
    pub fn new(kind: FsmErrorKind) -> Self {
        FsmError {
            source: Box::new(kind),
        }
    }

    /// Get the kind of the error.
    pub fn kind(&self) -> &FsmErrorKind {
        &self.source
    }
}

impl std::fmt::Display for FsmError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.source)
    }
}

/// The error kind type.
#[derive(Error, Debug)]
pub enum FsmErrorKind {
    /// A state owned by another automaton was used as start state, edge endpoint or query
    /// subject. This always indicates a bug in the caller.
    #[error("State {state} belongs to automaton {owner}, not to automaton {nfa}")]
    ForeignState {
        /// The offending state.
        state: StateID,
        /// The automaton that owns the state.
        owner: NfaID,
        /// The automaton the operation was applied to.
        nfa: NfaID,
    },

    /// A std::io error occurred.
    #[error(transparent)]
    IoError(#[from] std::io::Error),
}

impl From<std::io::Error> for FsmError {
    fn from(error: std::io::Error) -> Self {
        FsmError::new(FsmErrorKind::IoError(error))
    }
}
