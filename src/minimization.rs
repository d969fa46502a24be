//! Minimization of [`DFA`]s through the table-filling algorithm (also known as Moore's
//! algorithm).
//!
//! The algorithm maintains a [`MinimizationTable`] that records, for every pair of states that
//! is known to be distinguishable, a word witnessing this. In the first round all pairs
//! consisting of an accepting and a rejecting state are marked with the empty word. In every
//! further round, a pair `{p, q}` is marked if there is a letter `a` such that the pair of
//! successors `{p·a, q·a}` is already marked, the witness is then `a` followed by the witness
//! of the successors. Once a round does not mark anything, the unmarked pairs are exactly the
//! equivalent ones and the states can be merged.
//!
//! The letters are tried in the order of the alphabet and the first one that works is used.
//! The resulting witnesses are therefore correct, but not necessarily the shortest ones.
use itertools::Itertools;
use tracing::{debug, trace};

use crate::{
    math::{Map, Partition},
    prelude::*,
};

/// An algorithm that can be executed step by step.
pub trait Algorithm {
    /// What the algorithm produces once it has terminated.
    type Output;
    /// Summary of a single step.
    type StepResult;

    /// Runs a single step. Returns `None` if the step did not change anything, which means
    /// that the algorithm has terminated.
    fn step(&mut self) -> Result<Option<Self::StepResult>, DfaError>;

    /// Runs all remaining steps and produces the output. Calling this again after the
    /// algorithm has terminated returns the same output again.
    fn run(&mut self) -> Result<Self::Output, DfaError>;
}

/// The phase a [`MinDFA`] instance is in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    /// The next step compares the acceptance of states.
    InitialStep,
    /// The next step compares successors.
    Refinement,
    /// The last step did not change the table.
    Converged,
    /// The minimized automaton has been built.
    Finalized,
}

/// Summary of a step that changed the table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Round {
    number: usize,
    marked: Vec<(StateIndex, StateIndex)>,
}

impl Round {
    /// The number of the round, starting at `1` for the initial step.
    pub fn number(&self) -> usize {
        self.number
    }

    /// The pairs that were marked in this round, in the order they were marked.
    pub fn marked(&self) -> &[(StateIndex, StateIndex)] {
        &self.marked
    }
}

/// A state of the minimized automaton, which stands for a class of equivalent states of the
/// original one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CombinedState {
    id: StateId,
    name: String,
    is_final: bool,
    initial: bool,
    members: Vec<StateId>,
}

impl CombinedState {
    /// The freshly generated identifier.
    pub fn id(&self) -> &StateId {
        &self.id
    }

    /// The sorted names of all members, e.g. `{S0, S1}`.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether the members are accepting.
    pub fn is_final(&self) -> bool {
        self.is_final
    }

    /// Whether the initial state of the original automaton is among the members.
    pub fn is_initial(&self) -> bool {
        self.initial
    }

    /// Identifiers of the merged states, sorted.
    pub fn members(&self) -> &[StateId] {
        &self.members
    }
}

/// The result of running [`MinDFA`] to completion.
#[derive(Debug, Clone)]
pub struct MinDFAOutput {
    /// The minimized automaton, `None` if the input was minimal already.
    pub min_dfa: Option<DFA>,
    /// Maps the identifier of every original state to the identifier of the state of
    /// `min_dfa` it was merged into. `None` if the input was minimal already.
    pub state_map: Option<Map<StateId, StateId>>,
    /// The states of `min_dfa`, with the original states they represent.
    pub combined_states: Vec<CombinedState>,
    /// The table after convergence.
    pub table: MinimizationTable,
}

impl MinDFAOutput {
    /// Returns `true` if no two states of the input were equivalent.
    pub fn is_minimal(&self) -> bool {
        self.min_dfa.is_none()
    }

    /// Renders the state map as a table with one row per state of `dfa`, which has to be the
    /// automaton that was minimized, and the name of the state it was merged into. Returns
    /// `None` if the input was minimal already.
    #[cfg(feature = "render")]
    pub fn render_state_map(&self, dfa: &DFA) -> Option<String> {
        let state_map = self.state_map.as_ref()?;
        let names: Map<&StateId, &str> = self
            .combined_states
            .iter()
            .map(|state| (state.id(), state.name()))
            .collect();

        let mut builder = tabled::builder::Builder::default();
        builder.push_record(["State", "New State"]);
        for state in dfa.states() {
            let new_name = state_map
                .get(state.id())
                .and_then(|id| names.get(id))
                .copied()
                .unwrap_or_default();
            builder.push_record([state.name(), new_name]);
        }

        Some(
            builder
                .build()
                .with(tabled::settings::Style::rounded())
                .to_string(),
        )
    }
}

/// Computes a minimal [`DFA`] that is equivalent to a given one using the table-filling
/// algorithm. The table can be inspected after every [`Algorithm::step`].
///
/// The transition function of the input must be complete. This is not checked upfront, a
/// step that needs a missing transition fails with [`DfaError::UndefinedTransition`] and
/// leaves the table as it was before the step.
///
/// # Example
/// ```
/// use std::sync::Arc;
/// use tablefill::prelude::*;
///
/// let alphabet = Arc::new(Alphabet::from_names(["a"]));
/// let a = alphabet.letter_named("a").unwrap();
/// let mut dfa = DFA::new("s0", "S0", false, alphabet);
/// dfa.add_state("s1", "S1", false).unwrap();
/// dfa.add_state("s2", "S2", true).unwrap();
/// dfa.add_edge("s0", "s2", &a).unwrap();
/// dfa.add_edge("s1", "s2", &a).unwrap();
/// dfa.add_edge("s2", "s2", &a).unwrap();
///
/// let output = MinDFA::new(&dfa).run().unwrap();
/// let state_map = output.state_map.unwrap();
/// assert_eq!(output.min_dfa.unwrap().size(), 2);
/// assert_eq!(state_map[&StateId::from("s0")], state_map[&StateId::from("s1")]);
/// ```
#[derive(Debug, Clone)]
pub struct MinDFA<'a> {
    dfa: &'a DFA,
    state_count: usize,
    table: MinimizationTable,
    phase: Phase,
    rounds: usize,
    output: Option<MinDFAOutput>,
}

impl<'a> MinDFA<'a> {
    /// Prepares the minimization of `dfa` with an empty table.
    pub fn new(dfa: &'a DFA) -> Self {
        let state_count = dfa.size();
        Self {
            dfa,
            state_count,
            table: MinimizationTable::new(state_count),
            phase: Phase::InitialStep,
            rounds: 0,
            output: None,
        }
    }

    /// The automaton that is minimized.
    pub fn dfa(&self) -> &'a DFA {
        self.dfa
    }

    /// The current state of the table.
    pub fn table(&self) -> &MinimizationTable {
        &self.table
    }

    /// The current phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// The number of steps that completed successfully, including the last one that did
    /// not change anything.
    pub fn rounds(&self) -> usize {
        self.rounds
    }

    /// Returns `true` once a step did not change the table anymore.
    pub fn is_converged(&self) -> bool {
        matches!(self.phase, Phase::Converged | Phase::Finalized)
    }

    /// Groups the states into classes of states that have not been distinguished. After
    /// convergence, these are precisely the classes of equivalent states.
    pub fn equivalence_classes(&self) -> Partition<StateIndex> {
        Partition::new(self.dfa.state_indices().map(|p| self.unmarked_with(p)))
    }

    /// All states that are not known to be distinguishable from `p`, including `p` itself.
    fn unmarked_with(&self, p: StateIndex) -> Vec<StateIndex> {
        self.dfa
            .state_indices()
            .filter(|q| !self.table.is_distinguishable(p, *q))
            .collect()
    }

    /// Tries the letters in alphabet order and returns a witness for `{p, q}` built from the
    /// first letter whose successor pair is already marked.
    fn find_witness(&self, p: StateIndex, q: StateIndex) -> Result<Option<Word>, DfaError> {
        for letter in self.dfa.alphabet().iter() {
            let p_successor = self.dfa.successor(p, letter)?;
            let q_successor = self.dfa.successor(q, letter)?;
            if let Some(word) = self.table.get(p_successor, q_successor) {
                return Ok(Some(word.prepended(letter.clone())));
            }
        }
        Ok(None)
    }

    fn mark_round(&mut self, initial: bool) -> Result<Vec<(StateIndex, StateIndex)>, DfaError> {
        let mut marked = vec![];
        for i in 1..self.state_count {
            for j in 0..i {
                let (p, q) = (StateIndex(i), StateIndex(j));
                if self.table.is_distinguishable(p, q) {
                    continue;
                }
                let witness = if initial {
                    (self.dfa.is_final(p) != self.dfa.is_final(q)).then(Word::epsilon)
                } else {
                    match self.find_witness(p, q) {
                        Ok(witness) => witness,
                        Err(e) => {
                            for (p, q) in marked {
                                self.table.unset(p, q);
                            }
                            return Err(e);
                        }
                    }
                };
                if let Some(word) = witness {
                    trace!("marking {:?} and {:?} with witness {}", p, q, word);
                    self.table.set(p, q, word);
                    marked.push((p, q));
                }
            }
        }
        Ok(marked)
    }

    fn finalize(&self) -> Result<MinDFAOutput, DfaError> {
        let partition = self.equivalence_classes();
        debug_assert_eq!(
            partition.iter().map(|class| class.len()).sum::<usize>(),
            self.state_count,
            "indistinguishability must be transitive after convergence"
        );
        if partition.is_discrete() {
            debug!("all {} states are pairwise distinguishable", self.state_count);
            return Ok(MinDFAOutput {
                min_dfa: None,
                state_map: None,
                combined_states: vec![],
                table: self.table.clone(),
            });
        }

        let id = |q: &StateIndex| self.dfa.id_of(*q);
        let mut combined_of = vec![0; self.state_count];
        let mut combined_states = vec![];
        let mut representatives = vec![];
        for p in self.dfa.state_indices() {
            let class = partition
                .class_of(&p)
                .expect("every state belongs to a class");
            let members = class.iter().sorted_by_key(|q| id(*q)).collect_vec();
            if *members[0] != p {
                continue;
            }
            let position = combined_states.len();
            for q in class {
                combined_of[q.index()] = position;
            }
            combined_states.push(CombinedState {
                id: StateId::fresh(),
                name: format!(
                    "{{{}}}",
                    members
                        .iter()
                        .map(|q| self.dfa.states()[q.index()].name())
                        .sorted()
                        .join(", ")
                ),
                is_final: self.dfa.is_final(p),
                initial: class.contains(&self.dfa.initial()),
                members: members.iter().map(|q| id(*q)).collect(),
            });
            representatives.push(p);
        }
        debug!(
            "merging {} states into {} classes",
            self.state_count,
            combined_states.len()
        );

        let initial = combined_states
            .iter()
            .find(|state| state.initial)
            .expect("the initial state belongs to some class");
        let mut min_dfa = DFA::new(
            initial.id.clone(),
            initial.name.clone(),
            initial.is_final,
            std::sync::Arc::clone(self.dfa.alphabet()),
        );
        for state in combined_states.iter().filter(|state| !state.initial) {
            min_dfa.add_state(state.id.clone(), state.name.clone(), state.is_final)?;
        }
        for (state, representative) in combined_states.iter().zip(&representatives) {
            for edge in self.dfa.edges_from(*representative) {
                let target = &combined_states[combined_of[edge.target().index()]];
                min_dfa.add_edge(state.id.clone(), target.id.clone(), edge.letter())?;
            }
        }

        let state_map = self
            .dfa
            .state_indices()
            .map(|q| (id(&q), combined_states[combined_of[q.index()]].id.clone()))
            .collect();

        Ok(MinDFAOutput {
            min_dfa: Some(min_dfa),
            state_map: Some(state_map),
            combined_states,
            table: self.table.clone(),
        })
    }
}

impl<'a> Algorithm for MinDFA<'a> {
    type Output = MinDFAOutput;
    type StepResult = Round;

    /// Compares all pairs of states that are not marked yet. The first step marks pairs
    /// that differ in acceptance, every further step marks pairs whose successors on some
    /// letter are marked. Once a step returns `None`, every further step does so as well.
    fn step(&mut self) -> Result<Option<Round>, DfaError> {
        if self.is_converged() {
            return Ok(None);
        }
        let initial = self.phase == Phase::InitialStep;
        let marked = self.mark_round(initial)?;
        self.rounds += 1;
        debug!(
            "round {} marked {} pairs, {} in total",
            self.rounds,
            marked.len(),
            self.table.len()
        );

        if marked.is_empty() {
            self.phase = Phase::Converged;
            return Ok(None);
        }
        self.phase = Phase::Refinement;
        Ok(Some(Round {
            number: self.rounds,
            marked,
        }))
    }

    fn run(&mut self) -> Result<MinDFAOutput, DfaError> {
        if let Some(output) = &self.output {
            return Ok(output.clone());
        }
        while self.step()?.is_some() {}

        let output = self.finalize()?;
        self.phase = Phase::Finalized;
        self.output = Some(output.clone());
        Ok(output)
    }
}

#[cfg(feature = "render")]
impl<'a> Show for MinDFA<'a> {
    fn show(&self) -> String {
        self.table.render(self.dfa, self.is_converged())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;

    fn letters(names: &[&str]) -> (Arc<Alphabet>, Vec<Letter>) {
        let alphabet = Arc::new(Alphabet::from_names(names.iter().copied()));
        let letters = alphabet.iter().cloned().collect();
        (alphabet, letters)
    }

    /// Builds a complete DFA with states `q0, q1, ...` from the acceptance of the states and
    /// a list of `(source, letter position, target)` triples.
    fn build(names: &[&str], finals: &[bool], edges: &[(usize, usize, usize)]) -> DFA {
        let (alphabet, letters) = letters(names);
        let mut dfa = DFA::new("q0", "q0", finals[0], alphabet);
        for (i, is_final) in finals.iter().enumerate().skip(1) {
            dfa.add_state(format!("q{i}"), format!("q{i}"), *is_final)
                .unwrap();
        }
        for (source, letter, target) in edges {
            dfa.add_edge(format!("q{source}"), format!("q{target}"), &letters[*letter])
                .unwrap();
        }
        dfa
    }

    fn wiki_dfa() -> DFA {
        build(
            &["a", "b"],
            &[false, false, true, true, true, false],
            &[
                (0, 0, 1),
                (0, 1, 2),
                (1, 0, 0),
                (1, 1, 3),
                (2, 0, 4),
                (2, 1, 5),
                (3, 0, 4),
                (3, 1, 5),
                (4, 0, 4),
                (4, 1, 5),
                (5, 0, 5),
                (5, 1, 5),
            ],
        )
    }

    #[test_log::test]
    fn differing_acceptance_is_marked_with_empty_word() {
        let (alphabet, letters) = letters(&["a"]);
        let a = &letters[0];
        let mut dfa = DFA::new("S0", "S0", false, alphabet);
        dfa.add_state("S1", "S1", true).unwrap();
        dfa.add_edge("S0", "S1", a).unwrap();
        dfa.add_edge("S1", "S1", a).unwrap();

        let mut algorithm = MinDFA::new(&dfa);
        let round = algorithm.step().unwrap().unwrap();
        assert_eq!(round.number(), 1);
        assert_eq!(round.marked(), &[(StateIndex(1), StateIndex(0))]);
        assert_eq!(algorithm.step().unwrap(), None);

        let output = algorithm.run().unwrap();
        assert!(output.is_minimal());
        assert!(output.state_map.is_none());
        assert_eq!(output.table.len(), 1);
        assert_eq!(
            output.table.get(StateIndex(0), StateIndex(1)),
            Some(&Word::epsilon())
        );
    }

    #[test_log::test]
    fn states_with_same_future_are_merged() {
        let (alphabet, letters) = letters(&["a"]);
        let a = &letters[0];
        let mut dfa = DFA::new("S0", "S0", false, alphabet);
        dfa.add_state("S1", "S1", false).unwrap();
        dfa.add_state("S2", "S2", true).unwrap();
        dfa.add_edge("S0", "S2", a).unwrap();
        dfa.add_edge("S1", "S2", a).unwrap();
        dfa.add_edge("S2", "S2", a).unwrap();

        let mut algorithm = MinDFA::new(&dfa);
        let output = algorithm.run().unwrap();
        assert!(!algorithm.table().is_distinguishable(StateIndex(0), StateIndex(1)));
        assert_eq!(algorithm.phase(), Phase::Finalized);

        let min = output.min_dfa.unwrap();
        let state_map = output.state_map.unwrap();
        assert_eq!(min.size(), 2);
        assert_eq!(state_map[&StateId::from("S0")], state_map[&StateId::from("S1")]);
        assert_ne!(state_map[&StateId::from("S0")], state_map[&StateId::from("S2")]);
        assert_eq!(min.initial_state().id(), &state_map[&StateId::from("S0")]);
        assert_eq!(min.initial_state().name(), "{S0, S1}");
        assert!(!min.initial_state().is_final());
        assert!(min.is_complete());

        let merged = &output.combined_states[0];
        assert!(merged.is_initial());
        assert_eq!(merged.members(), &[StateId::from("S0"), StateId::from("S1")]);
    }

    #[test_log::test]
    fn chain_is_distinguished_by_its_suffix() {
        let (alphabet, letters) = letters(&["a"]);
        let a = &letters[0];
        let mut dfa = DFA::new("S0", "S0", false, alphabet);
        dfa.add_state("S1", "S1", false).unwrap();
        dfa.add_state("S2", "S2", true).unwrap();
        dfa.add_edge("S0", "S1", a).unwrap();
        dfa.add_edge("S1", "S2", a).unwrap();
        dfa.add_edge("S2", "S2", a).unwrap();

        let output = MinDFA::new(&dfa).run().unwrap();
        assert!(output.is_minimal());
        assert_eq!(
            output.table.get(StateIndex(1), StateIndex(0)),
            Some(&Word::from(vec![a.clone()]))
        );
    }

    #[test_log::test]
    fn wiki_example() {
        let dfa = wiki_dfa();
        let mut algorithm = MinDFA::new(&dfa);
        let mut previous = algorithm.table().clone();
        while let Some(round) = algorithm.step().unwrap() {
            for (p, q, word) in previous.iter() {
                assert_eq!(algorithm.table().get(p, q), Some(word));
            }
            assert_eq!(algorithm.table().len(), previous.len() + round.marked().len());
            previous = algorithm.table().clone();
        }
        assert_eq!(
            algorithm.equivalence_classes(),
            Partition::new([
                vec![StateIndex(0), StateIndex(1)],
                vec![StateIndex(2), StateIndex(3), StateIndex(4)],
                vec![StateIndex(5)],
            ])
        );

        let output = algorithm.run().unwrap();
        let min = output.min_dfa.unwrap();
        assert_eq!(min.size(), 3);
        assert_eq!(min.edges().len(), 6);
        let state_map = output.state_map.unwrap();
        assert_eq!(state_map.len(), 6);
        assert_eq!(min.initial_state().id(), &state_map[&StateId::from("q0")]);
        assert_eq!(state_map[&StateId::from("q2")], state_map[&StateId::from("q4")]);

        // the minimized automaton is minimal
        assert!(MinDFA::new(&min).run().unwrap().is_minimal());
    }

    #[test_log::test]
    fn converged_algorithm_stays_converged() {
        let dfa = wiki_dfa();
        let mut algorithm = MinDFA::new(&dfa);
        let first = algorithm.run().unwrap();
        let rounds = algorithm.rounds();
        assert_eq!(algorithm.step().unwrap(), None);
        assert_eq!(algorithm.rounds(), rounds);

        let second = algorithm.run().unwrap();
        assert_eq!(first.table, second.table);
        assert_eq!(first.state_map, second.state_map);
    }

    #[test_log::test]
    fn witnesses_separate_states() {
        let dfa = wiki_dfa();
        let mut algorithm = MinDFA::new(&dfa);
        let output = algorithm.run().unwrap();
        for (p, q, word) in output.table.iter() {
            let mut session = dfa.session();
            session.set_current_state(&dfa.id_of(p)).unwrap();
            let from_p = session.run_word(word).unwrap().is_final();
            session.set_current_state(&dfa.id_of(q)).unwrap();
            let from_q = session.run_word(word).unwrap().is_final();
            assert_ne!(from_p, from_q, "{word} does not separate {p:?} and {q:?}");
        }
    }

    #[test_log::test]
    fn missing_transition_aborts_round() {
        let (alphabet, letters) = letters(&["a", "b"]);
        let (a, b) = (&letters[0], &letters[1]);
        let mut dfa = DFA::new("S0", "S0", false, alphabet);
        dfa.add_state("S1", "S1", false).unwrap();
        dfa.add_state("S2", "S2", true).unwrap();
        dfa.add_state("S3", "S3", false).unwrap();
        dfa.add_edge("S0", "S2", a).unwrap();
        dfa.add_edge("S0", "S0", b).unwrap();
        dfa.add_edge("S1", "S0", a).unwrap();
        dfa.add_edge("S1", "S0", b).unwrap();
        dfa.add_edge("S2", "S2", a).unwrap();
        dfa.add_edge("S2", "S2", b).unwrap();

        let mut algorithm = MinDFA::new(&dfa);
        assert_eq!(algorithm.step().unwrap().unwrap().marked().len(), 3);
        let before = algorithm.table().clone();
        // {S1, S0} is marked before the missing transition of S3 is hit
        let result = algorithm.step();
        assert_eq!(
            result,
            Err(DfaError::UndefinedTransition {
                state: "S3".into(),
                letter: "a".into()
            })
        );
        assert_eq!(algorithm.table(), &before);
        assert_eq!(algorithm.phase(), Phase::Refinement);
        assert_eq!(algorithm.rounds(), 1);
        assert!(algorithm.run().is_err());
    }

    #[test_log::test]
    fn single_state_is_minimal() {
        let (alphabet, letters) = letters(&["a"]);
        let mut dfa = DFA::new("S0", "S0", true, alphabet);
        dfa.add_edge("S0", "S0", &letters[0]).unwrap();

        let mut algorithm = MinDFA::new(&dfa);
        assert_eq!(algorithm.step().unwrap(), None);
        assert!(algorithm.is_converged());
        assert!(algorithm.run().unwrap().is_minimal());
    }

    #[test_log::test]
    fn same_acceptance_everywhere_collapses() {
        let dfa = build(
            &["a"],
            &[true, true, true],
            &[(0, 0, 1), (1, 0, 2), (2, 0, 0)],
        );
        let output = MinDFA::new(&dfa).run().unwrap();
        let min = output.min_dfa.unwrap();
        assert_eq!(min.size(), 1);
        assert_eq!(min.initial_state().name(), "{q0, q1, q2}");
        assert_eq!(min.edges().len(), 1);
        assert!(min.initial_state().is_final());
    }

    #[test_log::test]
    fn merged_state_takes_smallest_id_and_sorted_names() {
        let (alphabet, letters) = letters(&["a"]);
        let a = &letters[0];
        let mut dfa = DFA::new("z", "Zed", false, alphabet);
        dfa.add_state("b", "Bee", false).unwrap();
        dfa.add_state("f", "F", true).unwrap();
        dfa.add_edge("z", "f", a).unwrap();
        dfa.add_edge("b", "f", a).unwrap();
        dfa.add_edge("f", "f", a).unwrap();

        let output = MinDFA::new(&dfa).run().unwrap();
        let merged = output
            .combined_states
            .iter()
            .find(|state| state.members().len() == 2)
            .unwrap();
        assert_eq!(merged.members(), &[StateId::from("b"), StateId::from("z")]);
        assert_eq!(merged.name(), "{Bee, Zed}");
        assert!(merged.is_initial());
        assert!(!merged.is_final());

        let min = output.min_dfa.unwrap();
        let state_map = output.state_map.unwrap();
        assert_eq!(min.initial_state().id(), merged.id());
        assert_eq!(min.initial_state().name(), "{Bee, Zed}");
        assert_eq!(&state_map[&StateId::from("z")], merged.id());
        assert_eq!(&state_map[&StateId::from("b")], merged.id());
    }

    #[test_log::test]
    fn marks_are_visible_within_the_same_round() {
        // q3 -a-> q2 -a-> q1 -a-> q0, only q0 accepts
        let dfa = build(
            &["a"],
            &[true, false, false, false],
            &[(0, 0, 0), (1, 0, 0), (2, 0, 1), (3, 0, 2)],
        );
        let a = dfa.alphabet().letter_named("a").unwrap();
        let q = StateIndex;
        let mut algorithm = MinDFA::new(&dfa);

        let first = algorithm.step().unwrap().unwrap();
        assert_eq!(first.marked(), &[(q(1), q(0)), (q(2), q(0)), (q(3), q(0))]);

        // {q3, q2} goes to {q2, q1}, which is marked just before it in this round
        let second = algorithm.step().unwrap().unwrap();
        assert_eq!(second.number(), 2);
        assert_eq!(second.marked(), &[(q(2), q(1)), (q(3), q(1)), (q(3), q(2))]);
        assert_eq!(
            algorithm.table().get(q(3), q(2)),
            Some(&Word::from(vec![a.clone(), a.clone()]))
        );

        assert_eq!(algorithm.step().unwrap(), None);
        assert_eq!(algorithm.rounds(), 3);
        assert!(algorithm.run().unwrap().is_minimal());
    }

    #[cfg(feature = "render")]
    #[test_log::test]
    fn rendering_of_the_state_map() {
        let dfa = wiki_dfa();
        let output = MinDFA::new(&dfa).run().unwrap();
        let rendered = output.render_state_map(&dfa).unwrap();
        assert!(rendered.contains("New State"));
        assert!(rendered.contains("{q0, q1}"));
        assert!(rendered.contains("{q2, q3, q4}"));
        assert_eq!(rendered.matches("{q2, q3, q4}").count(), 3);

        let minimal = MinDFA::new(&output.min_dfa.unwrap()).run().unwrap();
        assert_eq!(minimal.render_state_map(&dfa), None);
    }

    #[cfg(feature = "render")]
    #[test_log::test]
    fn rendering_of_the_table() {
        let dfa = wiki_dfa();
        let mut algorithm = MinDFA::new(&dfa);
        algorithm.step().unwrap();
        let partial = algorithm.show();
        assert!(partial.contains(EPSILON));
        assert!(!partial.contains('='));
        algorithm.run().unwrap();
        assert!(algorithm.show().contains('='));
    }
}
