//! Step-by-step minimization of deterministic finite automata.
//!
//! A [`dfa::DFA`] is built from an [`alphabet::Alphabet`] of [`alphabet::Letter`]s by adding
//! states and edges, where every operation is validated and fails with a [`error::DfaError`]
//! if it would break the automaton (for example by adding a second edge for the same letter
//! to a state). States are stored in an arena and addressed by dense
//! [`automaton::StateIndex`]es, the caller-chosen [`automaton::StateId`]s are only used when
//! talking to the outside.
//!
//! The minimization is done by [`minimization::MinDFA`], an implementation of the
//! table-filling algorithm that can be driven one round at a time through
//! [`minimization::Algorithm::step`]. After every round, the [`table::MinimizationTable`]
//! can be inspected, it records a distinguishing word for every pair of states that is known
//! to be inequivalent. [`minimization::Algorithm::run`] runs the remaining rounds and then
//! merges the equivalent states into a new DFA.
//!
//! ```
//! use std::sync::Arc;
//! use tablefill::prelude::*;
//!
//! let alphabet = Arc::new(Alphabet::from_names(["a"]));
//! let a = alphabet.letter_named("a").unwrap();
//! let mut dfa = DFA::new("s0", "S0", false, alphabet);
//! dfa.add_state("s1", "S1", true).unwrap();
//! dfa.add_edge("s0", "s1", &a).unwrap();
//! dfa.add_edge("s1", "s1", &a).unwrap();
//!
//! let mut algorithm = MinDFA::new(&dfa);
//! while let Some(round) = algorithm.step().unwrap() {
//!     println!("round {} marked {} pairs", round.number(), round.marked().len());
//! }
//! let output = algorithm.run().unwrap();
//! assert!(output.is_minimal());
//! assert_eq!(word_to_string(output.table.iter().next().map(|(_, _, w)| w)), EPSILON);
//! ```
//!
//! Rendering of tables for display is available with the `render` feature, random
//! automata can be generated with the `random` feature. Both are enabled by default.
#![warn(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

/// The prelude is supposed to make using this package easier. Including everything, i.e.
/// `use tablefill::prelude::*;` should be enough to use the package.
pub mod prelude {
    pub use super::{
        alphabet::{Alphabet, Letter, LetterId},
        automaton::{Automaton, Edge, EdgeIndex, State, StateId, StateIndex},
        dfa::{DFAState, Session, DFA},
        error::DfaError,
        math,
        minimization::{Algorithm, CombinedState, MinDFA, MinDFAOutput, Phase, Round},
        table::MinimizationTable,
        word::{word_to_string, Word, EPSILON},
        Show,
    };
}

/// Letters and alphabets.
pub mod alphabet;
/// Generic state and edge storage.
pub mod automaton;
/// Deterministic finite automata.
pub mod dfa;
/// The errors that can occur when building or reading automata.
pub mod error;
/// Collections and partitions.
pub mod math;
pub mod minimization;
#[cfg(feature = "random")]
pub mod random;
/// The table of distinguishable state pairs.
pub mod table;
/// Finite words.
pub mod word;

use prelude::*;

/// Helper trait which can be used to display words, automata and tables in a human readable
/// form. This is mainly meant for debugging and for printing intermediate results.
pub trait Show {
    /// Returns a human readable representation of `self`.
    fn show(&self) -> String;
}

impl Show for Word {
    fn show(&self) -> String {
        self.to_string()
    }
}

impl Show for Option<&Word> {
    fn show(&self) -> String {
        word_to_string(*self)
    }
}

impl Show for Letter {
    fn show(&self) -> String {
        self.name().to_string()
    }
}

impl Show for StateIndex {
    fn show(&self) -> String {
        format!("{:?}", self)
    }
}

impl<S: Show, T: Show> Show for (S, T) {
    fn show(&self) -> String {
        format!("({}, {})", self.0.show(), self.1.show())
    }
}
