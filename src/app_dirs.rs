//! Application directory paths for jarvis.
//!
//! Uses the [`dirs`] crate for platform-appropriate resolution.
//!
//! | Purpose | macOS | Linux |
//! |---------|-------|-------|
//! | Config | `~/Library/Application Support/jarvis/` | `~/.config/jarvis/` |
//! | Cache | `~/Library/Caches/jarvis/` | `~/.cache/jarvis/` |
//!
//! # Environment Overrides
//!
//! - `JARVIS_CONFIG_DIR` overrides [`config_dir`]
//! - `JARVIS_CACHE_DIR` overrides [`cache_dir`]

use std::path::PathBuf;

/// Application config directory.
///
/// Resolves to `dirs::config_dir()/jarvis/` by default. Override with
/// the `JARVIS_CONFIG_DIR` environment variable.
#[must_use]
pub fn config_dir() -> PathBuf {
    if let Some(override_dir) = std::env::var_os("JARVIS_CONFIG_DIR") {
        return PathBuf::from(override_dir);
    }
    dirs::config_dir()
        .map(|d| d.join("jarvis"))
        .unwrap_or_else(|| PathBuf::from("/tmp/jarvis-config"))
}

/// Application cache directory, used for downloaded model files.
///
/// Resolves to `dirs::cache_dir()/jarvis/` by default. Override with
/// the `JARVIS_CACHE_DIR` environment variable.
#[must_use]
pub fn cache_dir() -> PathBuf {
    if let Some(override_dir) = std::env::var_os("JARVIS_CACHE_DIR") {
        return PathBuf::from(override_dir);
    }
    dirs::cache_dir()
        .map(|d| d.join("jarvis"))
        .unwrap_or_else(|| PathBuf::from("/tmp/jarvis-cache"))
}

/// Config file path (`config_dir()/config.toml`).
#[must_use]
pub fn config_file() -> PathBuf {
    config_dir().join("config.toml")
}

/// HuggingFace Hub cache directory (`cache_dir()/huggingface/`).
#[must_use]
pub fn hf_cache_dir() -> PathBuf {
    cache_dir().join("huggingface")
}
