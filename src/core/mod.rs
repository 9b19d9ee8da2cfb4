pub mod errors;
pub mod models;
pub mod utils;

pub use errors::WordVaultError;
pub use models::{ DifficultyLevel, UserProfile, Word, WordDraft, WordStatistics };
