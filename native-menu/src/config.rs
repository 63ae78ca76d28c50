//! Runtime tunables for the menu controller.
//!
//! Every value has a compile-time default. Hosts can override them from the
//! environment ([`MenuConfig::from_env`]) or from a JSON file
//! ([`MenuConfig::from_json_file`]); a file may list only the fields it wants
//! to change.

use crate::error::{MenuError, MenuResult};
use crate::submenu::{SubmenuId, DEFAULT_VISIBLE_OPTIONS};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Env variable overriding [`MenuConfig::default_visible_options`].
pub const VISIBLE_OPTIONS_ENV: &str = "NATIVE_MENU_VISIBLE_OPTIONS";
/// Env variable overriding [`MenuConfig::wrap_selection`].
pub const WRAP_ENV: &str = "NATIVE_MENU_WRAP";
/// Env variable overriding [`MenuConfig::play_sounds`].
pub const SOUNDS_ENV: &str = "NATIVE_MENU_SOUNDS";
/// Env variable overriding [`MenuConfig::root_submenu`].
pub const ROOT_ENV: &str = "NATIVE_MENU_ROOT";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MenuConfig {
    /// Window size for submenus created through the controller's helpers.
    pub default_visible_options: usize,
    /// Whether up/down wrap from the last option to the first and back.
    pub wrap_selection: bool,
    /// Whether navigation asks the host to play sounds.
    pub play_sounds: bool,
    /// Page shown when the menu opens for the first time.
    pub root_submenu: SubmenuId,
}

impl Default for MenuConfig {
    fn default() -> Self {
        Self {
            default_visible_options: DEFAULT_VISIBLE_OPTIONS,
            wrap_selection: true,
            play_sounds: true,
            root_submenu: SubmenuId(0),
        }
    }
}

impl MenuConfig {
    /// Defaults overridden by any of the `NATIVE_MENU_*` variables that are set.
    /// Values that fail to parse keep their default.
    pub fn from_env() -> Self {
        Self::default().with_overrides(|key| std::env::var(key).ok())
    }

    /// Load a config from a JSON file. Missing fields keep their defaults.
    pub fn from_json_file(path: &Path) -> MenuResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| MenuError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&content)
    }

    pub fn from_json_str(json: &str) -> MenuResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Apply overrides looked up by env variable name.
    pub fn with_overrides<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(value) = lookup(VISIBLE_OPTIONS_ENV).and_then(|v| v.trim().parse().ok()) {
            self.default_visible_options = value;
        }
        if let Some(value) = lookup(WRAP_ENV).and_then(|v| parse_flag(&v)) {
            self.wrap_selection = value;
        }
        if let Some(value) = lookup(SOUNDS_ENV).and_then(|v| parse_flag(&v)) {
            self.play_sounds = value;
        }
        if let Some(value) = lookup(ROOT_ENV).and_then(|v| v.trim().parse().ok()) {
            self.root_submenu = SubmenuId(value);
        }
        self
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = MenuConfig::default();
        assert_eq!(config.default_visible_options, 8);
        assert!(config.wrap_selection);
        assert!(config.play_sounds);
        assert_eq!(config.root_submenu, SubmenuId(0));
    }

    #[test]
    fn test_overrides_applied() {
        let config = MenuConfig::default().with_overrides(lookup_from(&[
            (VISIBLE_OPTIONS_ENV, "12"),
            (WRAP_ENV, "off"),
            (SOUNDS_ENV, "0"),
            (ROOT_ENV, "100"),
        ]));
        assert_eq!(config.default_visible_options, 12);
        assert!(!config.wrap_selection);
        assert!(!config.play_sounds);
        assert_eq!(config.root_submenu, SubmenuId(100));
    }

    #[test]
    fn test_unparsable_overrides_fall_back() {
        let config = MenuConfig::default().with_overrides(lookup_from(&[
            (VISIBLE_OPTIONS_ENV, "lots"),
            (WRAP_ENV, "maybe"),
        ]));
        assert_eq!(config, MenuConfig::default());
    }

    #[test]
    fn test_partial_json() {
        let config = MenuConfig::from_json_str(r#"{ "play_sounds": false }"#).unwrap();
        assert!(!config.play_sounds);
        assert_eq!(config.default_visible_options, 8);
    }

    #[test]
    fn test_json_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "root_submenu": 3, "default_visible_options": 5 }}"#).unwrap();
        let config = MenuConfig::from_json_file(file.path()).unwrap();
        assert_eq!(config.root_submenu, SubmenuId(3));
        assert_eq!(config.default_visible_options, 5);
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = MenuConfig::from_json_file(&dir.path().join("absent.json")).unwrap_err();
        assert!(matches!(err, MenuError::ConfigRead { .. }));
    }

    #[test]
    fn test_bad_json() {
        let err = MenuConfig::from_json_str("{ not json").unwrap_err();
        assert!(matches!(err, MenuError::ConfigParse(_)));
    }
}
