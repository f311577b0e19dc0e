//! Cross-platform storage for client settings.
//!
//! - Web: `localStorage`
//! - Desktop: JSON files in the platform config directory (`<config>/threadline/`)

use anyhow::{anyhow, Context, Result};
use serde::{de::DeserializeOwned, Serialize};

/// Save a value to persistent storage.
pub fn save<T: Serialize>(key: &str, value: &T) -> Result<()> {
    let json = serde_json::to_string(value).context("failed to encode stored value")?;
    save_raw(key, &json)
}

/// Load a value from persistent storage.
///
/// `Ok(None)` means nothing is stored under `key`.
pub fn load<T: DeserializeOwned>(key: &str) -> Result<Option<T>> {
    let Some(json) = load_raw(key) else {
        return Ok(None);
    };
    let value = serde_json::from_str(&json)
        .with_context(|| format!("stored value under {key:?} is not valid"))?;
    Ok(Some(value))
}

// =========================================
// Web (WASM) implementation
// =========================================

#[cfg(target_arch = "wasm32")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok()?
}

#[cfg(target_arch = "wasm32")]
fn save_raw(key: &str, value: &str) -> Result<()> {
    let storage = local_storage().ok_or_else(|| anyhow!("localStorage is unavailable"))?;
    storage
        .set_item(&storage_key(key), value)
        .map_err(|_| anyhow!("localStorage rejected {key:?}"))
}

#[cfg(target_arch = "wasm32")]
fn load_raw(key: &str) -> Option<String> {
    local_storage()?.get_item(&storage_key(key)).ok()?
}

#[cfg(target_arch = "wasm32")]
fn storage_key(key: &str) -> String {
    format!("threadline_{key}")
}

// =========================================
// Desktop (native) implementation
// =========================================

#[cfg(not(target_arch = "wasm32"))]
fn file_path(key: &str) -> Result<std::path::PathBuf> {
    let app_dir = dirs::config_dir()
        .ok_or_else(|| anyhow!("no platform config directory"))?
        .join("threadline");
    std::fs::create_dir_all(&app_dir)
        .with_context(|| format!("failed to create {}", app_dir.display()))?;

    let safe_key = key.replace(['/', '\\', ':', '*', '?', '"', '<', '>', '|'], "_");
    Ok(app_dir.join(format!("{safe_key}.json")))
}

#[cfg(not(target_arch = "wasm32"))]
fn save_raw(key: &str, value: &str) -> Result<()> {
    let path = file_path(key)?;
    std::fs::write(&path, value).with_context(|| format!("failed to write {}", path.display()))
}

#[cfg(not(target_arch = "wasm32"))]
fn load_raw(key: &str) -> Option<String> {
    let path = file_path(key).ok()?;
    std::fs::read_to_string(path).ok()
}
