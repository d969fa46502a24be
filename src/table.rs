use crate::prelude::*;

/// The table that the table-filling algorithm fills in. For each unordered pair of distinct
/// states it stores either nothing, meaning the two states could not be distinguished yet,
/// or a [`Word`] witnessing that they are distinguishable. Entries are only ever added.
///
/// The pairs are laid out as a flat lower triangle: the pair `{p, q}` with `p < q` lives at
/// position `q * (q - 1) / 2 + p`, see [`MinimizationTable::index`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MinimizationTable {
    state_count: usize,
    cells: Vec<Option<Word>>,
    entries: usize,
}

impl MinimizationTable {
    /// Creates an empty table for `state_count` states.
    pub fn new(state_count: usize) -> Self {
        Self {
            state_count,
            cells: vec![None; state_count * state_count.saturating_sub(1) / 2],
            entries: 0,
        }
    }

    /// Maps the unordered pair `{p, q}` to its position in the table. The result does not
    /// depend on the order of the arguments. Returns `None` for `p == q`, as a state is
    /// never distinguishable from itself.
    pub fn index(p: StateIndex, q: StateIndex) -> Option<usize> {
        let (low, high) = if p <= q { (p.0, q.0) } else { (q.0, p.0) };
        if low == high {
            return None;
        }
        Some(high * (high - 1) / 2 + low)
    }

    /// Returns the witness for the pair `{p, q}`, or `None` if the states are not known to
    /// be distinguishable.
    pub fn get(&self, p: StateIndex, q: StateIndex) -> Option<&Word> {
        self.cells.get(Self::index(p, q)?)?.as_ref()
    }

    /// Returns `true` if the table has an entry for `{p, q}`.
    pub fn is_distinguishable(&self, p: StateIndex, q: StateIndex) -> bool {
        self.get(p, q).is_some()
    }

    /// Records `word` as witness for `{p, q}`. Existing entries are never overwritten, in
    /// that case (and for `p == q` or out of range states) `false` is returned and the
    /// table is unchanged.
    pub fn set(&mut self, p: StateIndex, q: StateIndex, word: Word) -> bool {
        let Some(cell) = Self::index(p, q).and_then(|i| self.cells.get_mut(i)) else {
            return false;
        };
        if cell.is_some() {
            return false;
        }
        *cell = Some(word);
        self.entries += 1;
        true
    }

    /// Removes the entry for `{p, q}` again, only used to roll back a failed round.
    pub(crate) fn unset(&mut self, p: StateIndex, q: StateIndex) {
        if let Some(cell) = Self::index(p, q).and_then(|i| self.cells.get_mut(i)) {
            if cell.take().is_some() {
                self.entries -= 1;
            }
        }
    }

    /// The number of states the table was created for.
    pub fn state_count(&self) -> usize {
        self.state_count
    }

    /// The number of pairs known to be distinguishable.
    pub fn len(&self) -> usize {
        self.entries
    }

    /// Returns `true` if no pair has been marked yet.
    pub fn is_empty(&self) -> bool {
        self.entries == 0
    }

    /// Iterates over all entries as `(q, p, witness)` with `p < q`, in the order in which
    /// the algorithm enumerates pairs.
    pub fn iter(&self) -> impl Iterator<Item = (StateIndex, StateIndex, &Word)> + '_ {
        (1..self.state_count)
            .flat_map(|high| (0..high).map(move |low| (StateIndex(high), StateIndex(low))))
            .filter_map(|(high, low)| self.get(high, low).map(|word| (high, low, word)))
    }

    /// Renders the table for the states of `dfa`. Only the lower triangle carries
    /// information, the remaining cells show `-`. Once the algorithm is `done`, empty cells
    /// denote equivalent states and are shown as a bold `=`.
    #[cfg(feature = "render")]
    pub fn render(&self, dfa: &DFA, done: bool) -> String {
        use owo_colors::OwoColorize;

        let mut builder = tabled::builder::Builder::default();
        builder.push_record(
            std::iter::once(String::new()).chain(dfa.states().iter().map(|s| s.name().to_string())),
        );
        for row in dfa.state_indices() {
            let mut record = vec![dfa.states()[row.0].name().to_string()];
            for column in dfa.state_indices() {
                record.push(if row <= column {
                    "-".to_string()
                } else {
                    match self.get(row, column) {
                        Some(word) => word_to_string(Some(word)),
                        None if done => "=".bold().to_string(),
                        None => String::new(),
                    }
                });
            }
            builder.push_record(record);
        }

        builder
            .build()
            .with(tabled::settings::Style::rounded())
            .to_string()
    }
}
