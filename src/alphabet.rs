use std::sync::atomic::{AtomicU32, Ordering};

use itertools::Itertools;

use crate::math::Map;

static NEXT_LETTER_ID: AtomicU32 = AtomicU32::new(0);

/// Unique identifier of a [`Letter`]. Two letters are the same letter if and only if their
/// identifiers coincide, the display name plays no role in comparisons.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LetterId(u32);

impl LetterId {
    fn fresh() -> Self {
        Self(NEXT_LETTER_ID.fetch_add(1, Ordering::Relaxed))
    }

    /// Returns the raw value of the identifier.
    pub fn inner(self) -> u32 {
        self.0
    }
}

/// A letter that can label a transition. Usually the name is a single character, but any
/// string is accepted.
#[derive(Clone, Debug)]
pub struct Letter {
    id: LetterId,
    name: String,
}

impl Letter {
    /// Creates a fresh letter with a new unique identifier. Calling this twice with the same
    /// name gives two *different* letters, so callers should create each letter only once
    /// and share it afterwards.
    pub fn new<S: Into<String>>(name: S) -> Self {
        Self {
            id: LetterId::fresh(),
            name: name.into(),
        }
    }

    /// The identifier of the letter.
    pub fn id(&self) -> LetterId {
        self.id
    }

    /// The display name of the letter.
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl PartialEq for Letter {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}
impl Eq for Letter {}

impl std::hash::Hash for Letter {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.id.hash(state)
    }
}

impl std::fmt::Display for Letter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// A finite set of [`Letter`]s. The letters keep the order in which they were given, which
/// is the order used whenever the alphabet is enumerated.
///
/// # Example
/// ```
/// use tablefill::prelude::*;
///
/// let alphabet = Alphabet::from_names(["a", "b"]);
/// let a = alphabet.letter_named("a").unwrap();
/// assert_eq!(alphabet.position(&a), Some(0));
/// assert!(!alphabet.contains(&Letter::new("a")));
/// ```
#[derive(Clone, Debug, Default)]
pub struct Alphabet {
    letters: Vec<Letter>,
    positions: Map<LetterId, usize>,
}

impl Alphabet {
    /// Builds an alphabet from the given letters. Letters that occur more than once (by
    /// identifier) are only kept at their first position.
    pub fn new<I: IntoIterator<Item = Letter>>(letters: I) -> Self {
        let letters = letters.into_iter().unique_by(|l| l.id()).collect_vec();
        let positions = letters
            .iter()
            .enumerate()
            .map(|(i, l)| (l.id(), i))
            .collect();
        Self { letters, positions }
    }

    /// Creates a fresh letter for every given name and collects them into an alphabet.
    pub fn from_names<S: Into<String>, I: IntoIterator<Item = S>>(names: I) -> Self {
        Self::new(names.into_iter().map(Letter::new))
    }

    /// Creates an alphabet of the given size whose letters are named after the first `size`
    /// letters of the latin alphabet, i.e. `a` to `z`.
    pub fn of_size(size: usize) -> Self {
        assert!(size <= 26, "Alphabet is too large");
        Self::from_names((0..size).map(|i| ((b'a' + i as u8) as char).to_string()))
    }

    /// Returns `true` if `letter` belongs to the alphabet.
    pub fn contains(&self, letter: &Letter) -> bool {
        self.positions.contains_key(&letter.id())
    }

    /// Returns the position of `letter` in the enumeration order, if it belongs to the alphabet.
    pub fn position(&self, letter: &Letter) -> Option<usize> {
        self.positions.get(&letter.id()).copied()
    }

    /// Returns the letter at position `pos`.
    pub fn nth(&self, pos: usize) -> Option<&Letter> {
        self.letters.get(pos)
    }

    /// Finds the first letter with the given display name.
    pub fn letter_named(&self, name: &str) -> Option<Letter> {
        self.letters.iter().find(|l| l.name() == name).cloned()
    }

    /// Iterates over the letters in enumeration order.
    pub fn iter(&self) -> std::slice::Iter<'_, Letter> {
        self.letters.iter()
    }

    /// The number of letters.
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    /// Returns `true` if the alphabet has no letters.
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }
}

impl PartialEq for Alphabet {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().all(|l| other.contains(l))
    }
}
impl Eq for Alphabet {}

impl<'a> IntoIterator for &'a Alphabet {
    type Item = &'a Letter;
    type IntoIter = std::slice::Iter<'a, Letter>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl FromIterator<Letter> for Alphabet {
    fn from_iter<T: IntoIterator<Item = Letter>>(iter: T) -> Self {
        Self::new(iter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn letters_are_compared_by_id() {
        let a = Letter::new("a");
        let other_a = Letter::new("a");
        assert_ne!(a, other_a);
        assert_eq!(a, a.clone());
    }

    #[test]
    fn alphabet_drops_duplicates_and_keeps_order() {
        let a = Letter::new("a");
        let b = Letter::new("b");
        let alphabet = Alphabet::new([b.clone(), a.clone(), b.clone()]);
        assert_eq!(alphabet.len(), 2);
        assert_eq!(alphabet.position(&b), Some(0));
        assert_eq!(alphabet.position(&a), Some(1));
        assert_eq!(alphabet, Alphabet::new([a, b]));
    }
}
