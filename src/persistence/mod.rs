use std::{
    fs,
    path::PathBuf,
};

use serde::{
    de::DeserializeOwned,
    Serialize,
};

use crate::core::WordVaultError;

const APP_NAME: &str = "wordvault";

pub fn app_data_dir() -> PathBuf {
    match dirs::data_local_dir() {
        Some(data_dir) => {
            let app_dir = data_dir.join(APP_NAME);
            let _ = fs::create_dir_all(&app_dir);
            app_dir
        }
        None => PathBuf::from("."),
    }
}

pub fn data_file_path(filename: &str) -> PathBuf {
    app_data_dir().join(filename)
}

pub fn save_json<T: Serialize>(data: &T, filename: &str) -> Result<(), WordVaultError> {
    let json = serde_json::to_string_pretty(data)?;
    fs::write(data_file_path(filename), json)?;
    Ok(())
}

/// Loads a JSON data file, falling back to `Default` when the file does not
/// exist yet.
pub fn load_json<T: DeserializeOwned + Default>(filename: &str) -> Result<T, WordVaultError> {
    let file_path = data_file_path(filename);
    if !file_path.exists() {
        return Ok(T::default());
    }

    let json = fs::read_to_string(&file_path)?;
    Ok(serde_json::from_str(&json)?)
}

/// Like `load_json` but never fails; a corrupt file logs and yields defaults.
pub fn load_json_or_default<T: DeserializeOwned + Default>(filename: &str) -> T {
    match load_json::<T>(filename) {
        Ok(data) => data,
        Err(e) => {
            eprintln!("Failed to load {}: {}. Using defaults.", filename, e);
            T::default()
        }
    }
}
