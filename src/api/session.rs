use std::time::Duration;

use reqwest::{
    Client,
    StatusCode,
};
use serde::Serialize;

use crate::{
    config::ClientConfig,
    core::{
        UserProfile,
        WordVaultError,
    },
};

/// Session collaborator. The login check must succeed before the word-list
/// view-model is constructed; on failure the caller redirects to the login
/// page and never builds one.
pub struct SessionApi {
    client: Client,
    base_url: String,
}

/// Profile edit form. A new password requires its confirmation and the
/// current password before the request is sent at all.
#[derive(Debug, Clone, Default)]
pub struct ProfileUpdate {
    pub name: Option<String>,
    pub email: String,
    pub password: Option<String>,
    pub confirm_password: Option<String>,
    pub current_password: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ProfileUpdateBody<'a> {
    name: Option<&'a str>,
    email: &'a str,
    password: Option<&'a str>,
    current_password: &'a str,
}

impl ProfileUpdate {
    fn validate(&self) -> Result<(), WordVaultError> {
        if let Some(password) = &self.password {
            if self.confirm_password.as_deref() != Some(password.as_str()) {
                return Err(WordVaultError::Validation("Passwords do not match".to_string()));
            }
        }
        if self.current_password.trim().is_empty() {
            return Err(WordVaultError::Validation(
                "Current password is required".to_string(),
            ));
        }
        Ok(())
    }
}

impl SessionApi {
    pub fn new(config: &ClientConfig) -> Result<Self, WordVaultError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .cookie_store(true)
            .build()
            .map_err(|e| WordVaultError::Custom(format!("HTTP client build failed: {e}")))?;

        Ok(Self { client, base_url: config.api_base_url.trim_end_matches('/').to_string() })
    }

    fn url(&self, path: &str) -> String {
        format!("{}/api/users{}", self.base_url, path)
    }

    /// Returns the logged-in user, or `Auth` when there is no live session.
    pub async fn check_login(&self) -> Result<UserProfile, WordVaultError> {
        let response = self.client.get(self.url("/login")).send().await?;
        if response.status() == StatusCode::UNAUTHORIZED {
            return Err(WordVaultError::Auth);
        }
        if !response.status().is_success() {
            return Err(WordVaultError::BadStatus {
                status: response.status().as_u16(),
                message: response.text().await.unwrap_or_default(),
            });
        }
        let profile = response.json::<UserProfile>().await?;
        Ok(profile)
    }

    pub async fn login(&self, email: &str, password: &str) -> Result<UserProfile, WordVaultError> {
        if email.trim().is_empty() || password.is_empty() {
            return Err(WordVaultError::Validation(
                "Email and password are required".to_string(),
            ));
        }

        let body = serde_json::json!({ "email": email, "password": password });
        let response = self.client.post(self.url("/login")).json(&body).send().await?;
        if response.status() == StatusCode::UNAUTHORIZED {
            return Err(WordVaultError::Auth);
        }
        if !response.status().is_success() {
            return Err(WordVaultError::BadStatus {
                status: response.status().as_u16(),
                message: response.text().await.unwrap_or_default(),
            });
        }
        let profile = response.json::<UserProfile>().await?;
        Ok(profile)
    }

    pub async fn logout(&self) -> Result<(), WordVaultError> {
        let response = self.client.post(self.url("/logout")).send().await?;
        if !response.status().is_success() {
            return Err(WordVaultError::BadStatus {
                status: response.status().as_u16(),
                message: response.text().await.unwrap_or_default(),
            });
        }
        Ok(())
    }

    pub async fn update_profile(
        &self,
        update: &ProfileUpdate,
    ) -> Result<UserProfile, WordVaultError> {
        update.validate()?;

        let body = ProfileUpdateBody {
            name: update.name.as_deref(),
            email: &update.email,
            password: update.password.as_deref(),
            current_password: &update.current_password,
        };
        let response = self.client.put(self.url("/update")).json(&body).send().await?;
        if response.status() == StatusCode::UNAUTHORIZED {
            return Err(WordVaultError::Auth);
        }
        if !response.status().is_success() {
            return Err(WordVaultError::BadStatus {
                status: response.status().as_u16(),
                message: response.text().await.unwrap_or_default(),
            });
        }
        let profile = response.json::<UserProfile>().await?;
        Ok(profile)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn password_confirmation_must_match() {
        let update = ProfileUpdate {
            email: "user@example.com".to_string(),
            password: Some("secret".to_string()),
            confirm_password: Some("typo".to_string()),
            current_password: "old".to_string(),
            ..ProfileUpdate::default()
        };
        let err = update.validate().unwrap_err();
        assert!(matches!(err, WordVaultError::Validation(_)));
    }

    #[test]
    fn current_password_is_required() {
        let update = ProfileUpdate {
            email: "user@example.com".to_string(),
            current_password: "  ".to_string(),
            ..ProfileUpdate::default()
        };
        assert!(update.validate().is_err());
    }

    #[test]
    fn unchanged_password_skips_confirmation() {
        let update = ProfileUpdate {
            email: "user@example.com".to_string(),
            current_password: "old".to_string(),
            ..ProfileUpdate::default()
        };
        assert!(update.validate().is_ok());
    }
}
