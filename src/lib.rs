pub mod api;
pub mod charts;
pub mod config;
pub mod core;
pub mod format;
pub mod persistence;
pub mod viewmodel;

pub use crate::{
    api::{
        session::SessionApi,
        words::HttpWordApi,
        WordSource,
    },
    core::{
        DifficultyLevel,
        Word,
        WordStatistics,
        WordVaultError,
    },
    viewmodel::{
        controller::WordListController,
        state::WordListState,
        FilterMode,
        SortMode,
    },
};
