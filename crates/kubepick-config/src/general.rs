use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct GeneralConfig {
    pub prompt: String,
    #[serde(alias = "page-size")]
    pub page_size: u16,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self { prompt: "Select Kubernetes cluster context".into(), page_size: 5 }
    }
}

impl GeneralConfig {
    /// Visible rows in the picker; never less than one.
    pub fn page_size(&self) -> u16 {
        self.page_size.max(1)
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct FeatureFlags {
    #[serde(alias = "mark-current")]
    pub mark_current: bool,
    pub search: bool,
    pub details: bool,
    pub color: bool,
}

impl Default for FeatureFlags {
    fn default() -> Self {
        Self { mark_current: true, search: true, details: false, color: true }
    }
}
