use std::time::Duration;

use reqwest::{
    Client,
    Response,
    StatusCode,
};
use serde::Deserialize;

use super::WordSource;
use crate::{
    charts::ChartData,
    config::ClientConfig,
    core::{
        DifficultyLevel,
        Word,
        WordDraft,
        WordStatistics,
        WordVaultError,
    },
};

/// REST client for the `/api/words` collection.
pub struct HttpWordApi {
    client: Client,
    base_url: String,
}

/// 409 payload from the create endpoint.
#[derive(Debug, Deserialize)]
struct ConflictResponse {
    #[serde(default)]
    exists: bool,
    #[serde(default)]
    message: String,
}

impl HttpWordApi {
    pub fn new(config: &ClientConfig) -> Result<Self, WordVaultError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .cookie_store(true)
            .build()
            .map_err(|e| WordVaultError::Custom(format!("HTTP client build failed: {e}")))?;

        Ok(Self { client, base_url: config.api_base_url.trim_end_matches('/').to_string() })
    }

    fn url(&self, path: &str) -> String {
        format!("{}/api/words{}", self.base_url, path)
    }

    /// Maps non-success statuses into the error taxonomy. Conflicts are
    /// handled separately by the create path since they carry a payload.
    async fn expect_success(response: Response) -> Result<Response, WordVaultError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        if status == StatusCode::UNAUTHORIZED {
            return Err(WordVaultError::Auth);
        }

        let message = response.text().await.unwrap_or_default();
        Err(WordVaultError::BadStatus { status: status.as_u16(), message })
    }

    async fn get_words(&self, url: String) -> Result<Vec<Word>, WordVaultError> {
        let response = self.client.get(&url).send().await?;
        let words = Self::expect_success(response).await?.json::<Vec<Word>>().await?;
        Ok(words)
    }

    async fn post_english(&self, path: &str, english: &str) -> Result<Word, WordVaultError> {
        let body = serde_json::json!({ "english": english });
        let response = self.client.post(self.url(path)).json(&body).send().await?;

        if response.status() == StatusCode::CONFLICT {
            let conflict: ConflictResponse = response.json().await?;
            if conflict.exists {
                return Err(WordVaultError::Conflict {
                    english: english.to_string(),
                    message: conflict.message,
                });
            }
            return Err(WordVaultError::BadStatus { status: 409, message: conflict.message });
        }

        let word = Self::expect_success(response).await?.json::<Word>().await?;
        Ok(word)
    }
}

impl WordSource for HttpWordApi {
    async fn fetch_all_sorted(&self) -> Result<Vec<Word>, WordVaultError> {
        self.get_words(self.url("/sorted")).await
    }

    async fn fetch_by_difficulty(
        &self,
        level: DifficultyLevel,
    ) -> Result<Vec<Word>, WordVaultError> {
        self.get_words(format!("{}?difficulty={}", self.url("/filter"), level.as_str())).await
    }

    async fn search_words(&self, query: &str) -> Result<Vec<Word>, WordVaultError> {
        let response = self
            .client
            .get(self.url("/search"))
            .query(&[("query", query)])
            .send()
            .await?;
        let words = Self::expect_success(response).await?.json::<Vec<Word>>().await?;
        Ok(words)
    }

    async fn fetch_statistics(&self) -> Result<WordStatistics, WordVaultError> {
        let response = self.client.get(self.url("/statistics")).send().await?;
        let stats = Self::expect_success(response).await?.json::<WordStatistics>().await?;
        Ok(stats)
    }

    async fn fetch_chart_data(&self) -> Result<ChartData, WordVaultError> {
        let response = self.client.get(self.url("/chart-data")).send().await?;
        let data = Self::expect_success(response).await?.json::<ChartData>().await?;
        Ok(data)
    }

    async fn fetch_word(&self, id: u64) -> Result<Word, WordVaultError> {
        let response = self.client.get(self.url(&format!("/{id}"))).send().await?;
        if response.status() == StatusCode::NOT_FOUND {
            return Err(WordVaultError::NotFound(id));
        }
        let word = Self::expect_success(response).await?.json::<Word>().await?;
        Ok(word)
    }

    async fn create_word(&self, english: &str) -> Result<Word, WordVaultError> {
        self.post_english("", english).await
    }

    async fn force_create_word(&self, english: &str) -> Result<Word, WordVaultError> {
        self.post_english("/force", english).await
    }

    async fn update_word(&self, id: u64, draft: &WordDraft) -> Result<Word, WordVaultError> {
        let response =
            self.client.put(self.url(&format!("/{id}"))).json(draft).send().await?;
        if response.status() == StatusCode::NOT_FOUND {
            return Err(WordVaultError::NotFound(id));
        }
        let word = Self::expect_success(response).await?.json::<Word>().await?;
        Ok(word)
    }

    async fn delete_word(&self, id: u64) -> Result<(), WordVaultError> {
        let response = self.client.delete(self.url(&format!("/{id}"))).send().await?;
        if response.status() == StatusCode::NOT_FOUND {
            return Err(WordVaultError::NotFound(id));
        }
        Self::expect_success(response).await?;
        Ok(())
    }
}
