//! Configuration settings for shopgen.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main configuration struct.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Generator defaults.
    pub generator: GeneratorConfig,
    /// UI configuration.
    pub ui: UiConfig,
    /// Key bindings.
    pub keybindings: KeyBindings,
}

impl Config {
    /// Load configuration from file, returning default if file doesn't exist or fails.
    pub fn load_or_default() -> crate::Result<Self> {
        Self::load(None)
    }

    /// Load configuration from file.
    pub fn load(path: Option<PathBuf>) -> crate::Result<Self> {
        let config_path = path.unwrap_or_else(|| {
            super::config_dir()
                .map(|p| p.join("config.toml"))
                .unwrap_or_else(|_| PathBuf::from("config.toml"))
        });

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            toml::from_str(&content).map_err(|e| crate::Error::config(e.to_string()))
        } else {
            Ok(Self::default())
        }
    }

    /// Save configuration to file.
    pub fn save(&self, path: Option<PathBuf>) -> crate::Result<()> {
        let config_path = path.unwrap_or_else(|| {
            super::config_dir()
                .map(|p| p.join("config.toml"))
                .unwrap_or_else(|_| PathBuf::from("config.toml"))
        });

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content =
            toml::to_string_pretty(self).map_err(|e| crate::Error::config(e.to_string()))?;
        std::fs::write(&config_path, content)?;
        Ok(())
    }
}

/// Generator defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Scoreboard objective prefilled into both forms.
    pub default_objective: String,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            default_objective: "coins".to_string(),
        }
    }
}

/// UI configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Enable mouse support.
    pub mouse_support: bool,
    /// Show status bar.
    pub show_status_bar: bool,
    /// Show tab bar.
    pub show_tab_bar: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            mouse_support: true,
            show_status_bar: true,
            show_tab_bar: true,
        }
    }
}

/// Key bindings configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct KeyBindings {
    /// Quit the application.
    pub quit: String,
    /// Show help.
    pub help: String,
    /// Navigate up a field.
    pub up: String,
    /// Navigate down a field.
    pub down: String,
    /// Edit the focused field.
    pub edit: String,
    /// Cancel/back.
    pub back: String,
    /// Focus the purchase form.
    pub purchase: String,
    /// Focus the sale form.
    pub sale: String,
    /// Generate commands for the focused form.
    pub generate: String,
    /// Copy the focused form's output.
    pub copy: String,
    /// Clear the focused form.
    pub clear: String,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            quit: "q".to_string(),
            help: "?".to_string(),
            up: "k".to_string(),
            down: "j".to_string(),
            edit: "i".to_string(),
            back: "Esc".to_string(),
            purchase: "1".to_string(),
            sale: "2".to_string(),
            generate: "g".to_string(),
            copy: "y".to_string(),
            clear: "c".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_roundtrip() {
        let config = Config::default();
        let text = toml::to_string_pretty(&config).unwrap();
        let parsed: Config = toml::from_str(&text).unwrap();
        assert_eq!(parsed.generator.default_objective, "coins");
        assert_eq!(parsed.keybindings.generate, "g");
        assert!(parsed.ui.show_status_bar);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let parsed: Config = toml::from_str("[generator]\ndefault_objective = \"gems\"\n").unwrap();
        assert_eq!(parsed.generator.default_objective, "gems");
        assert_eq!(parsed.keybindings.quit, "q");
    }
}
