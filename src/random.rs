//! Generation of random complete [`DFA`]s, mostly useful for testing and benchmarking the
//! minimization. States are named `q0, q1, ...` and `q0` is always initial.
use std::sync::Arc;

use fastrand::Rng;
use tracing::debug;

use crate::prelude::*;

/// Uses a sprout-like algorithm to generate a random complete DFA over an alphabet with
/// `symbols` letters. `probability` determines the probability of a back edge to some
/// state being inserted. The algorithm is as follows:
/// 1. Start with a single state.
/// 2. For each symbol, go through the existing states in order and with probability `probability`
///   add a back edge to that state.
/// 3. If no back edge to some state was added, we insert an edge to a new state.
/// 4. Repeat until all states and symbols have been treated.
///
/// Every state is accepting with probability one half.
///
/// # Panics
/// If `probability` is not positive, as the generation would then never stop adding states.
/// Values of `1.0` and above are fine and produce a single state.
pub fn generate_random_dfa(rng: &mut Rng, symbols: usize, probability: f64) -> DFA {
    assert!(
        probability > 0.0,
        "the back edge probability must be positive, got {probability}"
    );
    let mut finals = vec![rng.bool()];
    let mut edges = vec![];
    let mut current = 0;

    while current < finals.len() {
        'symbols: for symbol in 0..symbols {
            for target in 0..=current {
                if rng.f64() < probability {
                    edges.push((current, symbol, target));
                    continue 'symbols;
                }
            }
            // no target was found so we create it
            finals.push(rng.bool());
            edges.push((current, symbol, finals.len() - 1));
        }
        current += 1;
    }

    assemble(symbols, &finals, &edges)
}

/// Generates a random complete DFA with `size` states by drawing the target of every
/// transition uniformly. Depending on the draw, some states may be unreachable.
pub fn generate_random_dfa_sized(rng: &mut Rng, symbols: usize, size: usize) -> DFA {
    assert!(size > 0, "a DFA needs at least one state");
    let finals = (0..size).map(|_| rng.bool()).collect::<Vec<_>>();
    let edges = (0..size)
        .flat_map(|q| (0..symbols).map(move |symbol| (q, symbol)))
        .map(|(q, symbol)| (q, symbol, rng.usize(..size)))
        .collect::<Vec<_>>();

    assemble(symbols, &finals, &edges)
}

/// Draws a word over `alphabet` whose length is uniformly chosen from `0..=max_length`.
pub fn random_word(rng: &mut Rng, alphabet: &Alphabet, max_length: usize) -> Word {
    if alphabet.is_empty() {
        return Word::epsilon();
    }
    (0..rng.usize(..=max_length))
        .filter_map(|_| alphabet.nth(rng.usize(..alphabet.len())).cloned())
        .collect()
}

fn assemble(symbols: usize, finals: &[bool], edges: &[(usize, usize, usize)]) -> DFA {
    let alphabet = Arc::new(Alphabet::of_size(symbols));
    let letters = alphabet.iter().cloned().collect::<Vec<_>>();
    let mut dfa = DFA::new("q0", "q0", finals[0], alphabet);
    for (i, is_final) in finals.iter().enumerate().skip(1) {
        dfa.add_state(format!("q{i}"), format!("q{i}"), *is_final)
            .expect("generated state ids are unique");
    }
    for (source, symbol, target) in edges {
        dfa.add_edge(format!("q{source}"), format!("q{target}"), &letters[*symbol])
            .expect("generated edges are deterministic");
    }
    debug!(
        "generated random DFA with {} states over {} symbols",
        dfa.size(),
        symbols
    );
    dfa
}
