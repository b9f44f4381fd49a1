//! Keybindings configuration for regionmark
//!
//! Configurable keyboard shortcuts stored in YAML format.
//! Default location: ~/.config/regionmark/keybindings.yaml

use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::input::Modifiers;

/// Root keybindings configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct KeybindingsConfig {
    /// Keybindings while annotating a loaded file
    pub annotate: AnnotateKeybindings,
}

/// Keybindings for annotation mode
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AnnotateKeybindings {
    /// Play/pause toggle
    pub play_pause: Vec<String>,
    /// Start a region at the playhead, or finish the pending one
    pub region: Vec<String>,
}

impl Default for AnnotateKeybindings {
    fn default() -> Self {
        Self {
            play_pause: vec!["Space".into()],
            region: vec!["Enter".into()],
        }
    }
}

impl AnnotateKeybindings {
    pub fn match_play_pause(&self, key_str: &str) -> bool {
        self.play_pause.iter().any(|b| b == key_str)
    }

    pub fn match_region(&self, key_str: &str) -> bool {
        self.region.iter().any(|b| b == key_str)
    }

    /// Help lines shown under the waveform
    pub fn help_lines(&self) -> Vec<String> {
        let describe = |keys: &[String]| {
            if keys.is_empty() {
                "(unbound)".to_string()
            } else {
                keys.join(" / ")
            }
        };
        vec![
            format!("{} = play / pause", describe(&self.play_pause)),
            "Mouse wheel = zoom".to_string(),
            format!("{} = start / end region", describe(&self.region)),
        ]
    }
}

/// Get the default keybindings file path
///
/// Returns: ~/.config/regionmark/keybindings.yaml
pub fn default_keybindings_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("regionmark")
        .join("keybindings.yaml")
}

/// Load keybindings from a YAML file
///
/// If the file doesn't exist, returns default keybindings.
/// If the file exists but is invalid, logs a warning and returns defaults.
pub fn load_keybindings(path: &Path) -> KeybindingsConfig {
    log::info!("load_keybindings: Loading from {:?}", path);

    if !path.exists() {
        log::info!("load_keybindings: File doesn't exist, using defaults");
        return KeybindingsConfig::default();
    }

    match std::fs::read_to_string(path) {
        Ok(contents) => match serde_yaml::from_str::<KeybindingsConfig>(&contents) {
            Ok(config) => {
                log::info!("load_keybindings: Loaded custom keybindings");
                config
            }
            Err(e) => {
                log::warn!("load_keybindings: Failed to parse: {}, using defaults", e);
                KeybindingsConfig::default()
            }
        },
        Err(e) => {
            log::warn!("load_keybindings: Failed to read file: {}, using defaults", e);
            KeybindingsConfig::default()
        }
    }
}

/// Save keybindings to a YAML file, creating parent directories
pub fn save_keybindings(config: &KeybindingsConfig, path: &Path) -> anyhow::Result<()> {
    log::info!("save_keybindings: Saving to {:?}", path);

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create keybindings directory: {:?}", parent))?;
    }

    let yaml = serde_yaml::to_string(config).context("Failed to serialize keybindings")?;
    std::fs::write(path, yaml)
        .with_context(|| format!("Failed to write keybindings file: {:?}", path))?;

    log::info!("save_keybindings: Saved successfully");
    Ok(())
}

/// Convert a key name + modifiers to a string for matching
///
/// Format: "Shift+Ctrl+Alt+KeyName"
pub fn key_to_string(key: &str, modifiers: &Modifiers) -> String {
    if key.is_empty() {
        return String::new();
    }

    let mut parts = Vec::new();
    if modifiers.shift {
        parts.push("Shift");
    }
    if modifiers.ctrl {
        parts.push("Ctrl");
    }
    if modifiers.alt {
        parts.push("Alt");
    }

    if parts.is_empty() {
        key.to_string()
    } else {
        parts.push(key);
        parts.join("+")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_keybindings() {
        let config = KeybindingsConfig::default();
        assert!(config.annotate.match_play_pause("Space"));
        assert!(config.annotate.match_region("Enter"));
        assert!(!config.annotate.match_region("Space"));
    }

    #[test]
    fn test_yaml_roundtrip() {
        let mut config = KeybindingsConfig::default();
        config.annotate.region.push("r".into());
        let yaml = serde_yaml::to_string(&config).unwrap();
        let parsed: KeybindingsConfig = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(parsed.annotate.region, vec!["Enter".to_string(), "r".to_string()]);
    }

    #[test]
    fn test_key_to_string() {
        let none = Modifiers::default();
        let shift_ctrl = Modifiers {
            shift: true,
            ctrl: true,
            alt: false,
        };
        assert_eq!(key_to_string("Enter", &none), "Enter");
        assert_eq!(key_to_string("Enter", &shift_ctrl), "Shift+Ctrl+Enter");
        assert_eq!(key_to_string("", &shift_ctrl), "");
    }

    #[test]
    fn test_help_lines_follow_bindings() {
        let lines = AnnotateKeybindings::default().help_lines();
        assert_eq!(
            lines,
            vec![
                "Space = play / pause".to_string(),
                "Mouse wheel = zoom".to_string(),
                "Enter = start / end region".to_string(),
            ]
        );
    }

    #[test]
    fn test_saved_bindings_drive_the_help_text() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("keybindings.yaml");
        let mut config = KeybindingsConfig::default();
        config.annotate.play_pause = vec!["p".into(), "Space".into()];
        config.annotate.region.clear();

        save_keybindings(&config, &path).unwrap();
        let loaded = load_keybindings(&path);
        assert!(loaded.annotate.match_play_pause("p"));
        assert!(!loaded.annotate.match_region("Enter"));
        assert_eq!(loaded.annotate.help_lines()[0], "p / Space = play / pause");
        assert_eq!(loaded.annotate.help_lines()[2], "(unbound) = start / end region");
    }

    #[test]
    fn test_load_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = load_keybindings(&dir.path().join("keys.yaml"));
        assert!(config.annotate.match_play_pause("Space"));
    }
}
