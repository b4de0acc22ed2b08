pub mod general;
pub mod keybindings;
pub mod theme;

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

pub use general::{FeatureFlags, GeneralConfig};
pub use keybindings::{check_collisions, validate_keybindings, Key, KeyChord, KeybindingsConfig};
pub use theme::ThemeConfig;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AppConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub features: FeatureFlags,
    #[serde(default)]
    pub theme: ThemeConfig,
    #[serde(default)]
    pub keybindings: KeybindingsConfig,
}

pub const DEFAULT_CONFIG: &str = include_str!("defaults.toml");

impl Default for AppConfig {
    fn default() -> Self {
        toml::from_str(DEFAULT_CONFIG).expect("embedded defaults must parse")
    }
}

impl AppConfig {
    /// Defaults overlaid with the user file, if one exists and parses.
    /// Problems with the user file are logged and otherwise ignored.
    pub fn load() -> Self {
        let mut config = Self::default();

        let path = Self::default_path();
        if path.exists() {
            match std::fs::read_to_string(&path) {
                Ok(contents) => match toml::from_str::<AppConfig>(&contents) {
                    Ok(user) => config.merge(user),
                    Err(e) => tracing::warn!("invalid config at {}: {e}", path.display()),
                },
                Err(e) => tracing::warn!("could not read {}: {e}", path.display()),
            }
        }

        config.drop_invalid_keybindings();
        config
    }

    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        let mut config = Self::default();
        let contents = std::fs::read_to_string(path)?;
        let user: AppConfig = toml::from_str(&contents)?;
        config.merge(user);
        config.drop_invalid_keybindings();
        Ok(config)
    }

    pub fn default_path() -> PathBuf {
        dirs::config_dir().unwrap_or_else(|| PathBuf::from(".")).join("kubepick").join("config.toml")
    }

    pub fn init_default() -> anyhow::Result<PathBuf> {
        let path = Self::default_path();
        Self::init_at(&path)?;
        Ok(path)
    }

    pub fn init_at(path: &Path) -> anyhow::Result<()> {
        if path.exists() {
            anyhow::bail!("Config already exists at {}", path.display());
        }
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, DEFAULT_CONFIG)?;
        Ok(())
    }

    fn merge(&mut self, user: AppConfig) {
        self.general = user.general;
        self.features = user.features;
        self.theme = user.theme;

        // Keybindings: merge per-key (user overrides, defaults preserved)
        for (k, v) in user.keybindings.bindings {
            self.keybindings.bindings.insert(k, v);
        }
    }

    fn drop_invalid_keybindings(&mut self) {
        for (name, err) in validate_keybindings(&self.keybindings) {
            tracing::warn!("ignoring keybinding {name}: {err}");
            self.keybindings.bindings.shift_remove(&name);
        }
        for (key, first, second) in check_collisions(&self.keybindings) {
            tracing::warn!("key {key} is bound to both {first} and {second}; {first} wins");
        }
    }
}

#[cfg(test)]
mod tests;
