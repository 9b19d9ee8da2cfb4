use crate::core::{
    DifficultyLevel,
    Word,
};

/// Exactly one filter mode is active at a time. Difficulty filtering is
/// delegated to the backend, so a mode change usually means a round trip;
/// `matches` exists for the local re-projection after a search is cleared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FilterMode {
    #[default]
    All,
    Easy,
    Medium,
    Hard,
}

impl FilterMode {
    pub fn from_difficulty(level: DifficultyLevel) -> Self {
        match level {
            DifficultyLevel::Easy => FilterMode::Easy,
            DifficultyLevel::Medium => FilterMode::Medium,
            DifficultyLevel::Hard => FilterMode::Hard,
        }
    }

    /// The difficulty this mode restricts to, `None` for `All`.
    pub fn difficulty(&self) -> Option<DifficultyLevel> {
        match self {
            FilterMode::All => None,
            FilterMode::Easy => Some(DifficultyLevel::Easy),
            FilterMode::Medium => Some(DifficultyLevel::Medium),
            FilterMode::Hard => Some(DifficultyLevel::Hard),
        }
    }

    pub fn matches(&self, word: &Word) -> bool {
        match self.difficulty() {
            None => true,
            Some(level) => word.difficulty_level == Some(level),
        }
    }
}
