use std::sync::Arc;

use tracing::trace;

use crate::prelude::*;

mod session;
pub use session::Session;

/// A state of a [`DFA`], its data is the flag that tells whether it is accepting.
pub type DFAState = State<bool>;

impl State<bool> {
    /// Returns `true` if the state is accepting.
    pub fn is_final(&self) -> bool {
        self.data
    }
}

/// A deterministic finite automaton. Every state has at most one outgoing edge per letter,
/// which is enforced by [`DFA::add_edge`]. The transition function may be partial.
///
/// Besides the edge list kept by the underlying [`Automaton`], the DFA stores a dense
/// successor table with one slot per state and letter, so that looking up a transition
/// never has to scan edges.
///
/// # Example
/// ```
/// use std::sync::Arc;
/// use tablefill::prelude::*;
///
/// let alphabet = Arc::new(Alphabet::from_names(["a"]));
/// let a = alphabet.letter_named("a").unwrap();
/// let mut dfa = DFA::new("s0", "S0", false, Arc::clone(&alphabet));
/// dfa.add_state("s1", "S1", true).unwrap();
/// dfa.add_edge("s0", "s1", &a).unwrap();
/// dfa.add_edge("s1", "s1", &a).unwrap();
///
/// assert!(dfa.is_complete());
/// assert!(matches!(
///     dfa.add_edge("s0", "s0", &a),
///     Err(DfaError::DeterminismViolation { .. })
/// ));
/// ```
#[derive(Clone, Debug)]
pub struct DFA {
    automaton: Automaton<bool>,
    successors: Vec<Option<StateIndex>>,
}

impl std::ops::Deref for DFA {
    type Target = Automaton<bool>;

    fn deref(&self) -> &Self::Target {
        &self.automaton
    }
}

impl DFA {
    /// Creates a DFA that only has the given initial state.
    pub fn new<I, N>(id: I, name: N, is_final: bool, alphabet: Arc<Alphabet>) -> Self
    where
        I: Into<StateId>,
        N: Into<String>,
    {
        let width = alphabet.len();
        Self {
            automaton: Automaton::new(id.into(), name.into(), is_final, alphabet),
            successors: vec![None; width],
        }
    }

    /// Adds a state without outgoing edges. Fails with [`DfaError::DuplicateState`] if the
    /// identifier is already taken, in which case the DFA is left untouched.
    pub fn add_state<I, N>(&mut self, id: I, name: N, is_final: bool) -> Result<StateIndex, DfaError>
    where
        I: Into<StateId>,
        N: Into<String>,
    {
        let id = id.into();
        if self.automaton.index_of(&id).is_some() {
            return Err(DfaError::DuplicateState(id));
        }
        let index = self
            .automaton
            .add_state_unchecked(id, name.into(), is_final);
        self.successors
            .extend(std::iter::repeat(None).take(self.width()));
        Ok(index)
    }

    /// Adds an edge from the state `from` to the state `to` that is labelled with `letter`.
    /// Fails if one of the states is unknown, if the letter is not in the alphabet, or if
    /// `from` already has an outgoing edge on `letter`. On failure, nothing is changed.
    pub fn add_edge<X, Y>(&mut self, from: X, to: Y, letter: &Letter) -> Result<EdgeIndex, DfaError>
    where
        X: Into<StateId>,
        Y: Into<StateId>,
    {
        let (from, to) = (from.into(), to.into());
        let source = self
            .automaton
            .index_of(&from)
            .ok_or_else(|| DfaError::InvalidState(from.clone()))?;
        let target = self
            .automaton
            .index_of(&to)
            .ok_or_else(|| DfaError::InvalidState(to))?;
        let slot = self.slot(source, letter)?;
        if self.successors[slot].is_some() {
            return Err(DfaError::DeterminismViolation {
                state: from,
                letter: letter.name().to_string(),
            });
        }

        trace!("adding edge {:?} --{}--> {:?}", source, letter, target);
        self.successors[slot] = Some(target);
        Ok(self
            .automaton
            .add_edge_unchecked(source, target, letter.clone()))
    }

    /// Returns the state reached from `from` on `letter`, or `None` if no such transition
    /// is defined. This is a pure lookup and does not touch any cursor. Fails with
    /// [`DfaError::UnknownStateIndex`] if `from` does not belong to this automaton.
    pub fn transition(&self, from: StateIndex, letter: &Letter) -> Result<Option<StateIndex>, DfaError> {
        let slot = self.slot(from, letter)?;
        Ok(self.successors.get(slot).copied().flatten())
    }

    /// Like [`DFA::transition`], but treats a missing transition as an error.
    pub fn successor(&self, from: StateIndex, letter: &Letter) -> Result<StateIndex, DfaError> {
        self.transition(from, letter)?
            .ok_or_else(|| DfaError::UndefinedTransition {
                state: self.id_of(from),
                letter: letter.name().to_string(),
            })
    }

    /// Resolves the transition from the state with identifier `from` on `letter`.
    pub fn successor_by_id(&self, from: &StateId, letter: &Letter) -> Result<&DFAState, DfaError> {
        let source = self
            .automaton
            .index_of(from)
            .ok_or_else(|| DfaError::UnknownState(from.clone()))?;
        let target = self.successor(source, letter)?;
        Ok(&self.automaton.states()[target.0])
    }

    /// Returns `true` if the state at `index` exists and is accepting.
    pub fn is_final(&self, index: StateIndex) -> bool {
        self.automaton.state(index).is_some_and(DFAState::is_final)
    }

    /// Returns `true` if there is a transition for every state and every letter.
    pub fn is_complete(&self) -> bool {
        self.successors.iter().all(Option::is_some)
    }

    /// Lists all pairs of state and letter for which no transition is defined, in the
    /// order of the states and the alphabet.
    pub fn missing_transitions(&self) -> Vec<(StateIndex, Letter)> {
        let width = self.width();
        self.successors
            .iter()
            .enumerate()
            .filter(|(_, successor)| successor.is_none())
            .filter_map(|(slot, _)| {
                let letter = self.alphabet().nth(slot % width)?;
                Some((StateIndex(slot / width), letter.clone()))
            })
            .collect()
    }

    /// Starts a new [`Session`] positioned at the initial state.
    pub fn session(&self) -> Session<'_> {
        Session::new(self)
    }

    /// Runs `word` from the initial state and returns whether the reached state is
    /// accepting.
    pub fn accepts(&self, word: &Word) -> Result<bool, DfaError> {
        self.session().run_word(word).map(DFAState::is_final)
    }

    pub(crate) fn id_of(&self, index: StateIndex) -> StateId {
        self.automaton.states()[index.0].id().clone()
    }

    fn width(&self) -> usize {
        self.automaton.alphabet().len()
    }

    fn slot(&self, from: StateIndex, letter: &Letter) -> Result<usize, DfaError> {
        if self.automaton.state(from).is_none() {
            return Err(DfaError::UnknownStateIndex(from));
        }
        let pos = self
            .alphabet()
            .position(letter)
            .ok_or_else(|| DfaError::InvalidLetter(letter.name().to_string()))?;
        Ok(from.0 * self.width() + pos)
    }

    /// Returns a string representation of the transition table, one row per state and one
    /// column per letter. Undefined transitions are shown as `-`.
    #[cfg(feature = "render")]
    pub fn build_transition_table(&self) -> String {
        use itertools::Itertools;

        let mut builder = tabled::builder::Builder::default();
        builder.push_record(
            ["State", "Initial", "Final"]
                .into_iter()
                .map(String::from)
                .chain(self.alphabet().iter().map(|l| l.name().to_string())),
        );
        for index in self.state_indices() {
            let state = &self.states()[index.0];
            let mut row = vec![
                state.name().to_string(),
                if index == self.initial() { "*" } else { "" }.to_string(),
                if state.is_final() { "*" } else { "" }.to_string(),
            ];
            row.extend(self.alphabet().iter().map(|letter| {
                match self.transition(index, letter) {
                    Ok(Some(target)) => self.states()[target.0].name().to_string(),
                    _ => "-".to_string(),
                }
            }));
            builder.push_record(row);
        }
        trace!(
            "rendering transition table for states {}",
            self.states().iter().map(|s| s.id()).join(", ")
        );

        builder
            .build()
            .with(tabled::settings::Style::rounded())
            .to_string()
    }
}

#[cfg(feature = "render")]
impl Show for DFA {
    fn show(&self) -> String {
        self.build_transition_table()
    }
}
