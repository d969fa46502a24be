use std::collections::VecDeque;

use crate::alphabet::Letter;

/// The symbol used to display the empty word.
pub const EPSILON: &str = "ε";

/// A finite sequence of [`Letter`]s. The empty word is a proper value (displayed as
/// [`EPSILON`]) and has to be distinguished from the absence of a word, which is
/// modelled as `Option<Word>` throughout the crate.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Word(VecDeque<Letter>);

impl std::ops::Deref for Word {
    type Target = VecDeque<Letter>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Word {
    /// Returns the empty word.
    pub fn epsilon() -> Self {
        Self(VecDeque::new())
    }

    /// Returns a new word consisting of `letter` followed by `self`.
    pub fn prepended(&self, letter: Letter) -> Self {
        let mut out = self.clone();
        out.0.push_front(letter);
        out
    }

    /// Appends `letter` at the end.
    pub fn push(&mut self, letter: Letter) {
        self.0.push_back(letter)
    }
}

impl FromIterator<Letter> for Word {
    fn from_iter<T: IntoIterator<Item = Letter>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl From<Vec<Letter>> for Word {
    fn from(value: Vec<Letter>) -> Self {
        Self(value.into())
    }
}

impl<'a> IntoIterator for &'a Word {
    type Item = &'a Letter;
    type IntoIter = std::collections::vec_deque::Iter<'a, Letter>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl std::fmt::Display for Word {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_empty() {
            return write!(f, "{EPSILON}");
        }
        for letter in self {
            write!(f, "{}", letter.name())?;
        }
        Ok(())
    }
}

/// Serializes a possibly absent word for display. The empty word becomes [`EPSILON`],
/// an absent word becomes the empty string.
///
/// # Example
/// ```
/// use tablefill::prelude::*;
///
/// let (a, b) = (Letter::new("a"), Letter::new("b"));
/// assert_eq!(word_to_string(None), "");
/// assert_eq!(word_to_string(Some(&Word::epsilon())), EPSILON);
/// assert_eq!(word_to_string(Some(&Word::from(vec![a, b]))), "ab");
/// ```
pub fn word_to_string(word: Option<&Word>) -> String {
    word.map(Word::to_string).unwrap_or_default()
}
