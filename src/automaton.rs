//! Generic storage shared by all automata. States and edges live in dense arenas and are
//! referred to by [`StateIndex`] and [`EdgeIndex`]; the caller-facing [`StateId`]s are only
//! used at the boundary and are translated through a bijection.
use std::sync::{
    atomic::{AtomicU64, Ordering},
    Arc,
};

use crate::{alphabet::Alphabet, alphabet::Letter, math::Bijection};

static NEXT_FRESH_STATE: AtomicU64 = AtomicU64::new(0);

/// Caller-chosen identifier of a state. Identifiers are compared lexicographically.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct StateId(String);

impl StateId {
    /// Creates an identifier from the given string.
    pub fn new<S: Into<String>>(id: S) -> Self {
        Self(id.into())
    }

    /// Produces an identifier that has not been handed out by this function before.
    pub fn fresh() -> Self {
        Self(format!(
            "m{}",
            NEXT_FRESH_STATE.fetch_add(1, Ordering::Relaxed)
        ))
    }

    /// Returns the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for StateId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self.0)
    }
}

impl std::fmt::Display for StateId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for StateId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for StateId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// Position of a state in the state arena of an [`Automaton`]. The order of indices is the
/// order in which states were added.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct StateIndex(pub(crate) usize);

impl StateIndex {
    /// Returns the position as a `usize`.
    pub fn index(self) -> usize {
        self.0
    }
}

impl std::fmt::Debug for StateIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "q{}", self.0)
    }
}

/// Position of an edge in the edge arena of an [`Automaton`], this doubles as the
/// identifier of the edge.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EdgeIndex(pub(crate) usize);

impl EdgeIndex {
    /// Returns the position as a `usize`.
    pub fn index(self) -> usize {
        self.0
    }
}

/// A state with identifier, display name, some automaton specific `data` and the
/// indices of its outgoing edges.
#[derive(Clone, Debug)]
pub struct State<Q> {
    id: StateId,
    name: String,
    pub(crate) data: Q,
    edges: Vec<EdgeIndex>,
}

impl<Q> State<Q> {
    /// The identifier of the state.
    pub fn id(&self) -> &StateId {
        &self.id
    }

    /// The display name, which need not be unique.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Indices of the edges leaving this state, in insertion order.
    pub fn edges(&self) -> &[EdgeIndex] {
        &self.edges
    }
}

/// Edges connect a `source` with a `target` state and are labelled by a single [`Letter`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Edge {
    source: StateIndex,
    target: StateIndex,
    letter: Letter,
}

impl Edge {
    /// The state the edge leaves.
    pub fn source(&self) -> StateIndex {
        self.source
    }

    /// The state the edge leads to.
    pub fn target(&self) -> StateIndex {
        self.target
    }

    /// The label of the edge.
    pub fn letter(&self) -> &Letter {
        &self.letter
    }
}

/// Storage for the states and edges of an automaton over a shared [`Alphabet`]. The
/// mutating methods perform no validation whatsoever, checking that the result makes sense
/// (for example that it is deterministic) is the job of the concrete automaton wrapping
/// this, see [`crate::dfa::DFA`].
#[derive(Clone, Debug)]
pub struct Automaton<Q> {
    alphabet: Arc<Alphabet>,
    states: Vec<State<Q>>,
    edges: Vec<Edge>,
    ids: Bijection<StateId, StateIndex>,
    initial: StateIndex,
}

impl<Q> Automaton<Q> {
    /// Creates an automaton that consists of the given initial state only.
    pub(crate) fn new(id: StateId, name: String, data: Q, alphabet: Arc<Alphabet>) -> Self {
        let mut out = Self {
            alphabet,
            states: vec![],
            edges: vec![],
            ids: Bijection::new(),
            initial: StateIndex(0),
        };
        out.initial = out.add_state_unchecked(id, name, data);
        out
    }

    /// Pushes a new state without outgoing edges. If `id` is already taken, the id now
    /// refers to the new state.
    pub(crate) fn add_state_unchecked(&mut self, id: StateId, name: String, data: Q) -> StateIndex {
        let index = StateIndex(self.states.len());
        self.ids.insert(id.clone(), index);
        self.states.push(State {
            id,
            name,
            data,
            edges: vec![],
        });
        index
    }

    /// Pushes a new edge. Panics if `source` is not a valid index.
    pub(crate) fn add_edge_unchecked(
        &mut self,
        source: StateIndex,
        target: StateIndex,
        letter: Letter,
    ) -> EdgeIndex {
        let index = EdgeIndex(self.edges.len());
        self.edges.push(Edge {
            source,
            target,
            letter,
        });
        self.states[source.0].edges.push(index);
        index
    }

    /// The input alphabet.
    pub fn alphabet(&self) -> &Arc<Alphabet> {
        &self.alphabet
    }

    /// All states in insertion order.
    pub fn states(&self) -> &[State<Q>] {
        &self.states
    }

    /// Iterates over the indices of all states in insertion order.
    pub fn state_indices(&self) -> impl Iterator<Item = StateIndex> + '_ {
        (0..self.states.len()).map(StateIndex)
    }

    /// The number of states.
    pub fn size(&self) -> usize {
        self.states.len()
    }

    /// Returns the state at `index`.
    pub fn state(&self, index: StateIndex) -> Option<&State<Q>> {
        self.states.get(index.0)
    }

    /// Looks up the index of the state with the given identifier.
    pub fn index_of(&self, id: &StateId) -> Option<StateIndex> {
        self.ids.get_by_left(id).copied()
    }

    /// Looks up the state with the given identifier.
    pub fn state_by_id(&self, id: &StateId) -> Option<&State<Q>> {
        self.index_of(id).and_then(|index| self.state(index))
    }

    /// Index of the initial state.
    pub fn initial(&self) -> StateIndex {
        self.initial
    }

    /// The initial state.
    pub fn initial_state(&self) -> &State<Q> {
        &self.states[self.initial.0]
    }

    /// All edges in insertion order.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Returns the edge at `index`.
    pub fn edge(&self, index: EdgeIndex) -> Option<&Edge> {
        self.edges.get(index.0)
    }

    /// Iterates over the edges leaving `source`. Yields nothing if the state does not exist.
    pub fn edges_from(&self, source: StateIndex) -> impl Iterator<Item = &Edge> + '_ {
        self.state(source)
            .into_iter()
            .flat_map(|state| state.edges.iter())
            .map(|e| &self.edges[e.0])
    }
}
