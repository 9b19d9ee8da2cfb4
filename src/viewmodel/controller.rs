use chrono::Local;

use super::{
    events::{
        EventQueue,
        ViewEvent,
    },
    filter::FilterMode,
    sort::SortMode,
    state::WordListState,
};
use crate::{
    api::WordSource,
    charts::{
        self,
        ChartData,
    },
    core::{
        Word,
        WordDraft,
        WordStatistics,
        WordVaultError,
    },
};

/// Handle for an in-flight collection reload. Completing a ticket whose
/// generation has been superseded discards the result instead of applying
/// it, so a re-filter issued while an older fetch is still outstanding can
/// never clobber the newer state.
#[derive(Debug, Clone, Copy)]
pub struct ReloadTicket {
    generation: u64,
    mode: FilterMode,
}

/// Command layer over `WordListState`: runs the server round trips the
/// view-model delegates (full reloads, difficulty filters, word CRUD) and
/// queues change events for the presentation layer to drain.
///
/// All operations take `&mut self`, so on a multi-threaded host access must
/// be serialized by the owner (the reference runs on a single UI thread).
/// No operation retries, and a failed round trip leaves the prior state
/// untouched.
pub struct WordListController<S: WordSource> {
    state: WordListState,
    source: S,
    events: EventQueue,
    statistics: Option<WordStatistics>,
    generation: u64,
}

impl<S: WordSource> WordListController<S> {
    /// The session collaborator gates construction: callers run
    /// `SessionApi::check_login` first and only build a controller once it
    /// succeeds.
    pub fn new(source: S) -> Self {
        Self {
            state: WordListState::new(),
            source,
            events: EventQueue::new(),
            statistics: None,
            generation: 0,
        }
    }

    pub fn state(&self) -> &WordListState {
        &self.state
    }

    pub fn statistics(&self) -> Option<WordStatistics> {
        self.statistics
    }

    pub fn drain_events(&mut self) -> std::vec::Drain<'_, ViewEvent> {
        self.events.drain()
    }

    /// Both chart histograms over the current visible projection.
    pub fn chart_data(&self) -> ChartData {
        charts::chart_data(&self.state.visible(), Local::now().date_naive())
    }

    /// Starts a collection reload; the matching `complete_reload` applies
    /// the fetched words unless a newer reload began in the meantime.
    pub fn begin_reload(&mut self, mode: FilterMode) -> ReloadTicket {
        self.generation += 1;
        ReloadTicket { generation: self.generation, mode }
    }

    /// Applies a finished reload. Returns false when the ticket is stale
    /// and the result was discarded.
    pub fn complete_reload(&mut self, ticket: ReloadTicket, words: Vec<Word>) -> bool {
        if ticket.generation != self.generation {
            eprintln!(
                "Discarding superseded reload (generation {} behind {})",
                ticket.generation, self.generation
            );
            return false;
        }

        match ticket.mode {
            FilterMode::All => self.state.load_all(words),
            mode => self.state.load_filtered(mode, words),
        }
        self.events.push(ViewEvent::ProjectionChanged);
        true
    }

    /// Full canonical reload plus a statistics refresh in one round trip
    /// pair. A statistics failure is logged but does not fail the reload.
    pub async fn refresh(&mut self) -> Result<(), WordVaultError> {
        let ticket = self.begin_reload(FilterMode::All);
        let (words, stats) =
            futures::join!(self.source.fetch_all_sorted(), self.source.fetch_statistics());

        match stats {
            Ok(stats) => {
                self.statistics = Some(stats);
                self.events.push(ViewEvent::StatisticsChanged);
            }
            Err(e) => eprintln!("Statistics error: {e}"),
        }

        match words {
            Ok(words) => {
                self.complete_reload(ticket, words);
                Ok(())
            }
            Err(e) => Err(self.note_error(e)),
        }
    }

    /// Switches the difficulty filter. `All` is a full reload; any other
    /// mode asks the backend for the matching subset. After this call the
    /// projection reflects the mode and the active sort with no residual
    /// search restriction.
    pub async fn apply_filter(&mut self, mode: FilterMode) -> Result<(), WordVaultError> {
        let ticket = self.begin_reload(mode);
        let result = match mode.difficulty() {
            None => self.source.fetch_all_sorted().await,
            Some(level) => self.source.fetch_by_difficulty(level).await,
        };

        match result {
            Ok(words) => {
                self.complete_reload(ticket, words);
                Ok(())
            }
            Err(e) => Err(self.note_error(e)),
        }
    }

    /// Switches the sort mode. Alphabetic sorting is local; switching back
    /// to date order re-fetches the current filter so the canonical order
    /// comes from the source. On a failed fetch the sort mode is left
    /// unchanged.
    pub async fn apply_sort(&mut self, mode: SortMode) -> Result<(), WordVaultError> {
        match mode {
            SortMode::ByAlphabet => {
                self.state.set_sort(mode);
                self.events.push(ViewEvent::ProjectionChanged);
                Ok(())
            }
            SortMode::ByDate => {
                let filter = self.state.filter();
                let ticket = self.begin_reload(filter);
                let result = match filter.difficulty() {
                    None => self.source.fetch_all_sorted().await,
                    Some(level) => self.source.fetch_by_difficulty(level).await,
                };

                match result {
                    Ok(words) => {
                        self.state.set_sort(SortMode::ByDate);
                        self.complete_reload(ticket, words);
                        Ok(())
                    }
                    Err(e) => Err(self.note_error(e)),
                }
            }
        }
    }

    /// Applies the local search overlay and reports the match count.
    pub fn search(&mut self, query: &str) -> usize {
        let query = query.trim().to_string();
        if query.is_empty() {
            self.clear_search();
            return self.state.visible_len();
        }

        let count = self.state.search(&query);
        self.events.push(ViewEvent::ProjectionChanged);
        self.events.push(ViewEvent::Notify {
            message: format!("Found {count} words matching \"{query}\""),
            is_error: false,
        });
        count
    }

    pub fn clear_search(&mut self) {
        self.state.clear_search();
        self.events.push(ViewEvent::ProjectionChanged);
        self.events
            .push(ViewEvent::Notify { message: "Search cleared".to_string(), is_error: false });
    }

    /// Creates a word. A `Conflict` error is a confirmation request, not a
    /// failure: the caller asks the user and retries with `force_add_word`.
    pub async fn add_word(&mut self, english: &str) -> Result<Word, WordVaultError> {
        let english = english.trim();
        if english.is_empty() {
            return Err(
                self.note_error(WordVaultError::Validation(
                    "Please enter an English word".to_string(),
                )),
            );
        }

        match self.source.create_word(english).await {
            Ok(word) => {
                self.apply_created(word.clone()).await;
                Ok(word)
            }
            Err(e) if e.is_conflict() => Err(e),
            Err(e) => Err(self.note_error(e)),
        }
    }

    /// Creates a word bypassing the duplicate-name check, after the user
    /// confirmed the conflict.
    pub async fn force_add_word(&mut self, english: &str) -> Result<Word, WordVaultError> {
        let english = english.trim();
        if english.is_empty() {
            return Err(
                self.note_error(WordVaultError::Validation(
                    "Please enter an English word".to_string(),
                )),
            );
        }

        match self.source.force_create_word(english).await {
            Ok(word) => {
                self.apply_created(word.clone()).await;
                Ok(word)
            }
            Err(e) => Err(self.note_error(e)),
        }
    }

    pub async fn update_word(
        &mut self,
        id: u64,
        draft: WordDraft,
    ) -> Result<Word, WordVaultError> {
        if draft.english.trim().is_empty()
            || draft.meaning.as_deref().map_or(true, |m| m.trim().is_empty())
            || draft.turkish_meaning.as_deref().map_or(true, |m| m.trim().is_empty())
        {
            return Err(self.note_error(WordVaultError::Validation(
                "Please fill in all required fields".to_string(),
            )));
        }

        match self.source.update_word(id, &draft).await {
            Ok(word) => {
                self.state.upsert(word.clone());
                self.events.push(ViewEvent::ProjectionChanged);
                self.events.push(ViewEvent::Notify {
                    message: format!("Word \"{}\" updated successfully!", word.english),
                    is_error: false,
                });
                self.refresh_statistics().await;
                Ok(word)
            }
            Err(e) => Err(self.note_error(e)),
        }
    }

    pub async fn delete_word(&mut self, id: u64) -> Result<(), WordVaultError> {
        match self.source.delete_word(id).await {
            Ok(()) => {
                self.state.remove(id);
                self.events.push(ViewEvent::ProjectionChanged);
                self.events.push(ViewEvent::Notify {
                    message: "Word deleted successfully!".to_string(),
                    is_error: false,
                });
                self.refresh_statistics().await;
                Ok(())
            }
            Err(e) => Err(self.note_error(e)),
        }
    }

    /// Fetch-one passthrough for the meanings modal; the returned word
    /// carries the long-form `full_meaning` when the backend found one.
    pub async fn full_meaning(&mut self, id: u64) -> Result<Word, WordVaultError> {
        match self.source.fetch_word(id).await {
            Ok(word) => Ok(word),
            Err(e) => Err(self.note_error(e)),
        }
    }

    pub async fn refresh_statistics(&mut self) {
        match self.source.fetch_statistics().await {
            Ok(stats) => {
                self.statistics = Some(stats);
                self.events.push(ViewEvent::StatisticsChanged);
            }
            Err(e) => eprintln!("Statistics error: {e}"),
        }
    }

    async fn apply_created(&mut self, word: Word) {
        let english = word.english.clone();
        self.state.upsert(word);
        self.events.push(ViewEvent::ProjectionChanged);
        self.events.push(ViewEvent::Notify {
            message: format!("Word \"{english}\" added successfully!"),
            is_error: false,
        });
        self.refresh_statistics().await;
    }

    fn note_error(&mut self, error: WordVaultError) -> WordVaultError {
        self.events.push(ViewEvent::Notify { message: error.to_string(), is_error: true });
        error
    }
}
