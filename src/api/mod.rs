pub mod session;
pub mod words;

use crate::{
    charts::ChartData,
    core::{
        DifficultyLevel,
        Word,
        WordDraft,
        WordStatistics,
        WordVaultError,
    },
};

/// The backend word collection as the view-model sees it. Filtering by
/// difficulty is delegated here because the backend is the source of truth
/// for what exists; sort and search stay client-side for responsiveness.
///
/// Implementations do not retry; a failed call surfaces the error and the
/// caller's in-memory state is left untouched.
pub trait WordSource {
    /// All words for the session user, most recently added first.
    fn fetch_all_sorted(
        &self,
    ) -> impl std::future::Future<Output = Result<Vec<Word>, WordVaultError>> + Send;

    /// The subset matching one difficulty, in the backend's recency order.
    fn fetch_by_difficulty(
        &self,
        level: DifficultyLevel,
    ) -> impl std::future::Future<Output = Result<Vec<Word>, WordVaultError>> + Send;

    /// Server-side search used by the home page's search box.
    fn search_words(
        &self,
        query: &str,
    ) -> impl std::future::Future<Output = Result<Vec<Word>, WordVaultError>> + Send;

    fn fetch_statistics(
        &self,
    ) -> impl std::future::Future<Output = Result<WordStatistics, WordVaultError>> + Send;

    /// Precomputed chart payload; clients that hold the word list can also
    /// derive the same histograms locally (see the `charts` module).
    fn fetch_chart_data(
        &self,
    ) -> impl std::future::Future<Output = Result<ChartData, WordVaultError>> + Send;

    /// Single word by id, with the long-form `full_meaning` populated.
    fn fetch_word(
        &self,
        id: u64,
    ) -> impl std::future::Future<Output = Result<Word, WordVaultError>> + Send;

    /// Creates a word. If the name already exists this fails with
    /// `WordVaultError::Conflict`; the caller decides whether to confirm and
    /// retry via `force_create_word`.
    fn create_word(
        &self,
        english: &str,
    ) -> impl std::future::Future<Output = Result<Word, WordVaultError>> + Send;

    /// Creates a word bypassing the duplicate-name check.
    fn force_create_word(
        &self,
        english: &str,
    ) -> impl std::future::Future<Output = Result<Word, WordVaultError>> + Send;

    fn update_word(
        &self,
        id: u64,
        draft: &WordDraft,
    ) -> impl std::future::Future<Output = Result<Word, WordVaultError>> + Send;

    fn delete_word(
        &self,
        id: u64,
    ) -> impl std::future::Future<Output = Result<(), WordVaultError>> + Send;
}
