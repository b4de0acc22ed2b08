use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ThemeConfig {
    pub accent: String,
    pub fg: String,
    #[serde(alias = "selection-bg")]
    pub selection_bg: String,
    #[serde(alias = "selection-fg")]
    pub selection_fg: String,
    pub active: String,
    pub border: String,
    #[serde(alias = "text-dim")]
    pub text_dim: String,
    pub label: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            accent: "cyan".into(),
            fg: "white".into(),
            selection_bg: "default".into(),
            selection_fg: "cyan".into(),
            active: "lightcyan".into(),
            border: "darkgray".into(),
            text_dim: "darkgray".into(),
            label: "default".into(),
        }
    }
}
