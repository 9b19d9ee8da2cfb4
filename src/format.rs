use std::sync::OnceLock;

use regex::Regex;

use crate::core::{
    DifficultyLevel,
    Word,
};

const NOT_AVAILABLE: &str = "Not available";

/// Fixed icon + label mapping for the difficulty badge on a word card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DifficultyBadge {
    pub icon: &'static str,
    pub label: &'static str,
    pub color: &'static str,
}

pub fn difficulty_badge(level: DifficultyLevel) -> DifficultyBadge {
    match level {
        DifficultyLevel::Easy => {
            DifficultyBadge { icon: "fa-star", label: "EASY", color: "#ffd700" }
        }
        DifficultyLevel::Medium => {
            DifficultyBadge { icon: "fa-star-half-alt", label: "MEDIUM", color: "#ff8c00" }
        }
        DifficultyLevel::Hard => {
            DifficultyBadge { icon: "fa-fire", label: "HARD", color: "#ff4757" }
        }
    }
}

fn sentence_end() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[.!?]").unwrap())
}

/// Short meaning for the card view: the text up to and including the first
/// sentence terminator, or the whole text when there is none.
pub fn short_meaning(word: &Word) -> String {
    let meaning = match word.meaning.as_deref() {
        Some(m) if !m.trim().is_empty() => m,
        _ => return NOT_AVAILABLE.to_string(),
    };

    match sentence_end().find(meaning) {
        Some(found) => meaning[..found.end()].to_string(),
        None => meaning.to_string(),
    }
}

/// Localized date display under each card.
pub fn format_added_date(word: &Word) -> String {
    word.added_date.format("%x %X").to_string()
}

/// Splits a long-form `fullMeaning` blob into list entries for the meanings
/// modal, dropping empty fragments.
pub fn full_meaning_entries(full_meaning: &str) -> Vec<String> {
    full_meaning
        .split(". ")
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(str::to_string)
        .collect()
}
