use std::path::PathBuf;

use crate::error::SwitchError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Windows,
    Unix,
}

impl Platform {
    pub fn from_os(os: &str) -> Result<Self, SwitchError> {
        match os {
            "windows" => Ok(Self::Windows),
            "linux" | "macos" | "freebsd" | "netbsd" | "openbsd" | "dragonfly" => Ok(Self::Unix),
            other => Err(SwitchError::UnsupportedPlatform(other.to_string())),
        }
    }

    pub fn current() -> Result<Self, SwitchError> {
        Self::from_os(std::env::consts::OS)
    }
}

/// Home-directory inputs for locating the kubeconfig. Unset variables are
/// carried as empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HomeEnv {
    pub home: String,
    pub home_drive: String,
    pub home_path: String,
}

impl HomeEnv {
    pub fn from_process() -> Self {
        let var = |key: &str| std::env::var(key).unwrap_or_default();
        Self { home: var("HOME"), home_drive: var("HOMEDRIVE"), home_path: var("HOMEPATH") }
    }
}

pub fn kubeconfig_path(platform: Platform, env: &HomeEnv) -> PathBuf {
    match platform {
        Platform::Windows => {
            PathBuf::from(format!("{}{}", env.home_drive, env.home_path)).join(".kube").join("config")
        }
        Platform::Unix => PathBuf::from(format!("{}/.kube/config", env.home)),
    }
}

pub fn resolve_kubeconfig_path(os: &str, env: &HomeEnv) -> Result<PathBuf, SwitchError> {
    let platform = Platform::from_os(os)?;
    let path = kubeconfig_path(platform, env);
    tracing::debug!(?platform, path = %path.display(), "resolved kubeconfig path");
    Ok(path)
}
