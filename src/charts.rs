use chrono::NaiveDate;
use serde::{
    Deserialize,
    Serialize,
};

use crate::core::{
    DifficultyLevel,
    Word,
};

/// Wire shape of the backend's precomputed `/chart-data` payload. The same
/// numbers can be derived locally from the visible projection with
/// `recency_histogram` and `difficulty_histogram`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ChartData {
    /// Seven buckets, oldest first: index 0 is six days ago, index 6 today.
    pub time_data: [u32; 7],
    /// Easy, medium, hard, unset.
    pub difficulty_data: [u32; 4],
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DifficultyCounts {
    pub easy: u32,
    pub medium: u32,
    pub hard: u32,
    pub unset: u32,
}

impl DifficultyCounts {
    pub fn as_array(&self) -> [u32; 4] {
        [self.easy, self.medium, self.hard, self.unset]
    }
}

/// Per-day addition counts over the trailing 7 days. Bucket 6 is `today`,
/// bucket 0 is six days ago; words outside the window are dropped, not
/// clamped.
pub fn recency_histogram(words: &[&Word], today: NaiveDate) -> [u32; 7] {
    let mut buckets = [0u32; 7];

    for word in words {
        let day = word.added_date.date();
        let days_ago = (today - day).num_days();
        if (0..7).contains(&days_ago) {
            buckets[(6 - days_ago) as usize] += 1;
        }
    }

    buckets
}

/// Difficulty breakdown over the same word set, for the proportion chart.
pub fn difficulty_histogram(words: &[&Word]) -> DifficultyCounts {
    let mut counts = DifficultyCounts::default();

    for word in words {
        match word.difficulty_level {
            Some(DifficultyLevel::Easy) => counts.easy += 1,
            Some(DifficultyLevel::Medium) => counts.medium += 1,
            Some(DifficultyLevel::Hard) => counts.hard += 1,
            None => counts.unset += 1,
        }
    }

    counts
}

/// Both histograms over the projection, in the backend payload shape, so
/// the chart collaborator consumes one type either way.
pub fn chart_data(words: &[&Word], today: NaiveDate) -> ChartData {
    ChartData {
        time_data: recency_histogram(words, today),
        difficulty_data: difficulty_histogram(words).as_array(),
    }
}

#[cfg(test)]
mod tests {
    use chrono::Duration;

    use super::*;

    fn word_added(id: u64, date: NaiveDate) -> Word {
        Word {
            id,
            english: format!("word{id}"),
            meaning: None,
            turkish_meaning: None,
            example_usage: None,
            difficulty_level: None,
            added_date: date.and_hms_opt(15, 30, 0).unwrap(),
            full_meaning: None,
        }
    }

    #[test]
    fn buckets_count_trailing_week_only() {
        let today = NaiveDate::from_ymd_opt(2026, 8, 30).unwrap();
        let words = vec![
            word_added(1, today),
            word_added(2, today - Duration::days(1)),
            word_added(3, today - Duration::days(8)),
        ];
        let refs: Vec<&Word> = words.iter().collect();

        let buckets = recency_histogram(&refs, today);
        assert_eq!(buckets[6], 1); // today
        assert_eq!(buckets[5], 1); // yesterday
        assert_eq!(buckets.iter().sum::<u32>(), 2); // day-8 word dropped entirely
    }

    #[test]
    fn future_dates_are_dropped() {
        let today = NaiveDate::from_ymd_opt(2026, 8, 30).unwrap();
        let words = vec![word_added(1, today + Duration::days(1))];
        let refs: Vec<&Word> = words.iter().collect();
        assert_eq!(recency_histogram(&refs, today), [0; 7]);
    }

    #[test]
    fn oldest_in_window_lands_in_bucket_zero() {
        let today = NaiveDate::from_ymd_opt(2026, 8, 30).unwrap();
        let words = vec![word_added(1, today - Duration::days(6))];
        let refs: Vec<&Word> = words.iter().collect();
        let buckets = recency_histogram(&refs, today);
        assert_eq!(buckets[0], 1);
    }

    #[test]
    fn difficulty_counts_cover_all_categories() {
        let today = NaiveDate::from_ymd_opt(2026, 8, 30).unwrap();
        let mut words = vec![
            word_added(1, today),
            word_added(2, today),
            word_added(3, today),
            word_added(4, today),
        ];
        words[0].difficulty_level = Some(DifficultyLevel::Easy);
        words[1].difficulty_level = Some(DifficultyLevel::Medium);
        words[2].difficulty_level = Some(DifficultyLevel::Hard);
        let refs: Vec<&Word> = words.iter().collect();

        let counts = difficulty_histogram(&refs);
        assert_eq!(counts, DifficultyCounts { easy: 1, medium: 1, hard: 1, unset: 1 });
        assert_eq!(counts.as_array(), [1, 1, 1, 1]);
    }

    #[test]
    fn chart_data_matches_backend_payload_shape() {
        let json = r#"{"timeData": [1, 2, 0, 3, 1, 2, 4], "difficultyData": [5, 3, 2, 10]}"#;
        let data: ChartData = serde_json::from_str(json).unwrap();
        assert_eq!(data.time_data[6], 4);
        assert_eq!(data.difficulty_data[3], 10);
    }
}
