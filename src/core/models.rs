use chrono::NaiveDateTime;
use serde::{
    Deserialize,
    Serialize,
};

/// Coarse difficulty tag on a word. "Unset" is the absence of a tag, which
/// the backend represents as null or an empty string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DifficultyLevel {
    Easy,
    Medium,
    Hard,
}

impl DifficultyLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            DifficultyLevel::Easy => "easy",
            DifficultyLevel::Medium => "medium",
            DifficultyLevel::Hard => "hard",
        }
    }

    pub fn from_str(value: &str) -> Option<Self> {
        match value.to_lowercase().as_str() {
            "easy" => Some(DifficultyLevel::Easy),
            "medium" => Some(DifficultyLevel::Medium),
            "hard" => Some(DifficultyLevel::Hard),
            _ => None,
        }
    }
}

/// A tracked vocabulary word as the list endpoints return it. `full_meaning`
/// is only populated by the fetch-one endpoint, which asks an external
/// dictionary for long-form definitions.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Word {
    pub id: u64,
    pub english: String,
    #[serde(default)]
    pub meaning: Option<String>,
    #[serde(default)]
    pub turkish_meaning: Option<String>,
    #[serde(default)]
    pub example_usage: Option<String>,
    #[serde(default, deserialize_with = "deserialize_difficulty")]
    pub difficulty_level: Option<DifficultyLevel>,
    pub added_date: NaiveDateTime,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full_meaning: Option<String>,
}

// The backend stores the difficulty as a free string and older rows carry "".
// Treat anything unrecognized as unset rather than failing the whole list.
fn deserialize_difficulty<'de, D>(deserializer: D) -> Result<Option<DifficultyLevel>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    Ok(raw.as_deref().and_then(DifficultyLevel::from_str))
}

/// Editable fields sent on update. The added date is preserved from the
/// existing word so edits never reshuffle the recency order.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WordDraft {
    pub english: String,
    pub meaning: Option<String>,
    pub turkish_meaning: Option<String>,
    pub example_usage: Option<String>,
    pub difficulty_level: Option<DifficultyLevel>,
    pub added_date: Option<NaiveDateTime>,
}

impl WordDraft {
    pub fn from_word(word: &Word) -> Self {
        Self {
            english: word.english.clone(),
            meaning: word.meaning.clone(),
            turkish_meaning: word.turkish_meaning.clone(),
            example_usage: word.example_usage.clone(),
            difficulty_level: word.difficulty_level,
            added_date: Some(word.added_date),
        }
    }
}

/// Aggregate counters from the statistics endpoint. `last_year` exists on
/// newer backends only.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WordStatistics {
    pub total_words: u64,
    pub today_words: u64,
    #[serde(rename = "last7Days")]
    pub last7_days: u64,
    pub last_month: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_year: Option<u64>,
}

/// Session payload returned by the login check.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: u64,
    pub email: String,
    #[serde(default)]
    pub name: Option<String>,
}
