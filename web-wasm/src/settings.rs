//! 設定の保存（localStorage）

use gloo::storage::{LocalStorage, Storage};
use paper_summary_common::ClientConfig;

const STORAGE_KEY: &str = "paper-summary.config";

/// 保存済みの設定、なければ既定値
pub fn load() -> ClientConfig {
    match LocalStorage::get::<ClientConfig>(STORAGE_KEY) {
        Ok(config) => config,
        Err(gloo::storage::errors::StorageError::KeyNotFound(_)) => ClientConfig::default(),
        Err(e) => {
            log::warn!("ignoring stored settings: {}", e);
            ClientConfig::default()
        }
    }
}

pub fn save(config: &ClientConfig) -> Result<(), String> {
    LocalStorage::set(STORAGE_KEY, config).map_err(|e| format!("Failed to save settings: {}", e))
}

pub fn clear() {
    LocalStorage::delete(STORAGE_KEY);
}
