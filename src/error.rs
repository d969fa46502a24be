use thiserror::Error;

use crate::automaton::{StateId, StateIndex};

/// Errors raised when building or reading a [`crate::dfa::DFA`]. All of them are returned
/// at the point of violation, nothing is caught or retried internally.
#[derive(Debug, Clone, Eq, PartialEq, Error)]
pub enum DfaError {
    /// An edge refers to a state that does not exist.
    #[error("edge refers to unknown state {0}")]
    InvalidState(StateId),
    /// The letter is not part of the automaton's alphabet.
    #[error("letter \"{0}\" is not in the input alphabet")]
    InvalidLetter(String),
    /// The source state already has an outgoing edge for the letter.
    #[error("state {state} already has an outgoing edge on \"{letter}\"")]
    DeterminismViolation {
        /// The source of the rejected edge.
        state: StateId,
        /// The label of the rejected edge.
        letter: String,
    },
    /// A read was attempted where no transition is defined.
    #[error("no transition from state {state} on \"{letter}\"")]
    UndefinedTransition {
        /// The state that was read from.
        state: StateId,
        /// The letter that was read.
        letter: String,
    },
    /// The cursor was moved to a state that does not belong to the automaton.
    #[error("the automaton has no state {0}")]
    UnknownState(StateId),
    /// A state index does not point into the automaton, for example because it was taken
    /// from a different automaton.
    #[error("the automaton has no state at index {0:?}")]
    UnknownStateIndex(StateIndex),
    /// A state with this identifier already exists.
    #[error("a state with id {0} already exists")]
    DuplicateState(StateId),
}
