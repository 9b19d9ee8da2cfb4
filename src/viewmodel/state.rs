use super::{
    filter::FilterMode,
    search,
    sort::{
        self,
        SortMode,
    },
};
use crate::core::Word;

/// Owns the canonical word collection and the active filter, sort, and
/// search overlay, and derives the visible projection from them. This is the
/// single source of truth for rendering and charting; network round trips
/// live in the controller, which feeds results in through `load_all` /
/// `load_filtered`.
///
/// The projection is recomputed wholesale on every change, never patched
/// incrementally, so it is always a deterministic function of the stored
/// state.
#[derive(Debug, Default)]
pub struct WordListState {
    all_words: Vec<Word>,
    filter: FilterMode,
    sort: SortMode,
    search_query: String,
    search_active: bool,
    visible_indices: Vec<usize>,
}

impl WordListState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the canonical collection with an unfiltered reload. The
    /// reference client always clears an active search on a full reload, so
    /// this does too.
    pub fn load_all(&mut self, words: Vec<Word>) {
        self.all_words = words;
        self.filter = FilterMode::All;
        self.deactivate_search();
        self.recompute();
    }

    /// Replaces the canonical collection with a difficulty-filtered fetch.
    /// An active search is cleared first; the guarantee after this call is
    /// that the projection reflects `mode` and the active sort with no
    /// residual search restriction.
    pub fn load_filtered(&mut self, mode: FilterMode, words: Vec<Word>) {
        self.all_words = words;
        self.filter = mode;
        self.deactivate_search();
        self.recompute();
    }

    /// Switches the sort mode and re-derives the projection. `ByAlphabet`
    /// is purely local; `ByDate` restores the order the source returned
    /// (the controller additionally re-fetches so the canonical order is
    /// authoritative, see `WordListController::apply_sort`).
    pub fn set_sort(&mut self, mode: SortMode) {
        if self.sort != mode {
            self.sort = mode;
            self.recompute();
        }
    }

    /// Applies the search overlay and returns the match count for user
    /// feedback. An empty query behaves as `clear_search`.
    pub fn search(&mut self, query: &str) -> usize {
        let query = query.trim();
        if query.is_empty() {
            self.clear_search();
        } else {
            self.search_query = query.to_string();
            self.search_active = true;
            self.recompute();
        }
        self.visible_indices.len()
    }

    /// Removes the search overlay, restoring the projection exactly as if
    /// the search had never been applied: filter and sort are re-derived
    /// from the canonical collection.
    pub fn clear_search(&mut self) {
        self.deactivate_search();
        self.recompute();
    }

    /// Inserts or replaces by id. Used after a create or edit completes; a
    /// replaced word keeps its position in the canonical order.
    pub fn upsert(&mut self, word: Word) {
        match self.all_words.iter_mut().find(|existing| existing.id == word.id) {
            Some(existing) => *existing = word,
            None => self.all_words.push(word),
        }
        self.recompute();
    }

    pub fn remove(&mut self, id: u64) {
        self.all_words.retain(|word| word.id != id);
        self.recompute();
    }

    /// The read-only visible projection, in projection order.
    pub fn visible(&self) -> Vec<&Word> {
        self.visible_indices.iter().map(|&idx| &self.all_words[idx]).collect()
    }

    pub fn visible_len(&self) -> usize {
        self.visible_indices.len()
    }

    pub fn all_words(&self) -> &[Word] {
        &self.all_words
    }

    pub fn filter(&self) -> FilterMode {
        self.filter
    }

    pub fn sort(&self) -> SortMode {
        self.sort
    }

    pub fn search_active(&self) -> bool {
        self.search_active
    }

    pub fn search_query(&self) -> &str {
        &self.search_query
    }

    fn deactivate_search(&mut self) {
        self.search_active = false;
        self.search_query.clear();
    }

    fn recompute(&mut self) {
        self.visible_indices.clear();

        for (idx, word) in self.all_words.iter().enumerate() {
            if !self.filter.matches(word) {
                continue;
            }
            if self.search_active && !search::matches_search(word, &self.search_query) {
                continue;
            }
            self.visible_indices.push(idx);
        }

        sort::sort_indices(&mut self.visible_indices, &self.all_words, self.sort);
    }
}
