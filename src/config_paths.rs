//! Centralized configuration paths for stencil
//!
//! All config files live under:
//! - Unix/macOS: `~/.config/stencil/`
//! - Windows: `%APPDATA%\stencil\`
//!
//! This module is the single source of truth for config paths.

use std::{env, fs, path::PathBuf};

const APP_DIR: &str = "stencil";

/// Base config directory for stencil
///
/// Unix/macOS:
///   - If XDG_CONFIG_HOME is set: `$XDG_CONFIG_HOME/stencil`
///   - Else: `~/.config/stencil`
///
/// Windows:
///   - `%APPDATA%\stencil`
pub fn config_dir() -> Option<PathBuf> {
    #[cfg(target_os = "windows")]
    {
        env::var("APPDATA")
            .ok()
            .map(|appdata| PathBuf::from(appdata).join(APP_DIR))
    }

    #[cfg(not(target_os = "windows"))]
    {
        env::var_os("XDG_CONFIG_HOME")
            .map(PathBuf::from)
            .or_else(|| dirs::home_dir().map(|h| h.join(".config")))
            .map(|config| config.join(APP_DIR))
    }
}

/// `~/.config/stencil/variables.yaml` — the user variable catalog
pub fn catalog_file() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("variables.yaml"))
}

/// `~/.config/stencil/logs/`
pub fn logs_dir() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("logs"))
}

/// Logs directory, created if missing
pub fn ensure_logs_dir() -> Result<PathBuf, String> {
    let dir = logs_dir().ok_or_else(|| "No config directory available".to_string())?;
    fs::create_dir_all(&dir).map_err(|e| format!("Failed to create logs directory: {}", e))?;
    Ok(dir)
}
