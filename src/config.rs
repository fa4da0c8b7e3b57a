//! Manager Configuration
//!
//! Loads and saves the manager's configuration from
//! `~/.hangar/hangar.json`.

use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::types::{default_manager_config, ManagerConfig};

/// Config file name within the hangar directory.
const CONFIG_FILENAME: &str = "hangar.json";

/// Returns the hangar data directory: `~/.hangar`.
pub fn get_hangar_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("/root"))
        .join(".hangar")
}

/// Returns the full path to the manager config file.
pub fn get_config_path() -> PathBuf {
    get_hangar_dir().join(CONFIG_FILENAME)
}

/// Load the manager config from disk, merging missing fields with
/// defaults. Returns `None` if the file does not exist or cannot be
/// parsed.
pub fn load_config() -> Option<ManagerConfig> {
    let config_path = get_config_path();
    if !config_path.exists() {
        return None;
    }

    let contents = fs::read_to_string(&config_path).ok()?;
    let mut config: ManagerConfig = serde_json::from_str(&contents).ok()?;

    let defaults = default_manager_config();
    if config.backend_url.is_empty() {
        config.backend_url = defaults.backend_url;
    }
    if config.store_path.is_empty() {
        config.store_path = defaults.store_path;
    }
    if config.version.is_empty() {
        config.version = defaults.version;
    }

    Some(config)
}

/// Save the manager config with owner-only permissions.
pub fn save_config(config: &ManagerConfig) -> Result<()> {
    let dir = get_hangar_dir();
    fs::create_dir_all(&dir)
        .with_context(|| format!("failed to create config directory: {}", dir.display()))?;

    let config_path = get_config_path();
    let contents = serde_json::to_string_pretty(config)?;
    fs::write(&config_path, contents)
        .with_context(|| format!("failed to write config: {}", config_path.display()))?;
    fs::set_permissions(&config_path, fs::Permissions::from_mode(0o600))?;
    Ok(())
}

/// Expand a leading `~` to the home directory.
pub fn resolve_path(path: &str) -> String {
    if let Some(rest) = path.strip_prefix("~/") {
        let home = dirs::home_dir()
            .map(|h| h.to_string_lossy().to_string())
            .unwrap_or_else(|| "/root".to_string());
        format!("{home}/{rest}")
    } else {
        path.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::LogLevel;

    #[test]
    fn test_resolve_path_with_tilde() {
        let resolved = resolve_path("~/some/path");
        assert!(!resolved.starts_with('~'));
        assert!(resolved.ends_with("some/path"));
    }

    #[test]
    fn test_resolve_path_without_tilde() {
        let path = "/absolute/path/to/file";
        assert_eq!(resolve_path(path), path);
    }

    #[test]
    fn test_default_config_values() {
        let defaults = default_manager_config();
        assert_eq!(defaults.backend_url, "http://localhost:8765");
        assert_eq!(defaults.store_path, "~/.hangar/state.db");
        assert_eq!(defaults.log_level, LogLevel::Info);
        assert_eq!(defaults.version, "0.1.0");
    }
}
