use crate::core::{
    utils::{
        optional_matches_search,
        text_matches_search,
    },
    Word,
};

/// Search is an overlay over the canonical collection: a word matches when
/// the query is a case-insensitive substring of its english form, meaning,
/// or turkish meaning.
pub fn matches_search(word: &Word, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }

    text_matches_search(&word.english, query)
        || optional_matches_search(word.meaning.as_deref(), query)
        || optional_matches_search(word.turkish_meaning.as_deref(), query)
}
