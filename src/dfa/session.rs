use crate::prelude::*;

/// An interactive run through a [`DFA`]. The session owns its cursor, so any number of
/// sessions can read from the same automaton without interfering with each other or with
/// a running [`crate::minimization::MinDFA`].
#[derive(Clone, Debug)]
pub struct Session<'a> {
    dfa: &'a DFA,
    current: StateIndex,
}

impl<'a> Session<'a> {
    /// Starts a session at the initial state of `dfa`.
    pub fn new(dfa: &'a DFA) -> Self {
        Self {
            dfa,
            current: dfa.initial(),
        }
    }

    /// The state the cursor is currently on.
    pub fn current(&self) -> &'a DFAState {
        &self.dfa.states()[self.current.index()]
    }

    /// Reads `letter`, moves the cursor to the reached state and returns it.
    pub fn read(&mut self, letter: &Letter) -> Result<&'a DFAState, DfaError> {
        self.current = self.dfa.successor(self.current, letter)?;
        Ok(self.current())
    }

    /// Reads every letter of `word` in order. If a read fails, the cursor stays on the
    /// last state that could be reached.
    pub fn run_word(&mut self, word: &Word) -> Result<&'a DFAState, DfaError> {
        for letter in word {
            self.read(letter)?;
        }
        Ok(self.current())
    }

    /// Moves the cursor back to the initial state.
    pub fn reset(&mut self) {
        self.current = self.dfa.initial();
    }

    /// Moves the cursor to the state with identifier `id` without replaying any word.
    pub fn set_current_state(&mut self, id: &StateId) -> Result<(), DfaError> {
        self.current = self
            .dfa
            .index_of(id)
            .ok_or_else(|| DfaError::UnknownState(id.clone()))?;
        Ok(())
    }
}
