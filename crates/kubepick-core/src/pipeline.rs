use std::fmt;
use std::path::{Path, PathBuf};

use crate::error::SwitchError;
use crate::path::{resolve_kubeconfig_path, HomeEnv};
use crate::selector::{compute_highlight, pick, ContextPicker};
use crate::store;
use crate::switcher::switch_context;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    ResolvePath,
    Read,
    Select,
    Switch,
    Write,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::ResolvePath => "resolving kubeconfig path",
            Self::Read => "reading kubeconfig",
            Self::Select => "selecting context",
            Self::Switch => "switching context",
            Self::Write => "writing kubeconfig",
        };
        f.write_str(label)
    }
}

#[derive(Debug)]
pub struct StageError {
    pub stage: Stage,
    pub source: SwitchError,
}

impl StageError {
    fn at(stage: Stage) -> impl FnOnce(SwitchError) -> Self {
        move |source| Self { stage, source }
    }

    /// Only an unrecognised platform aborts the process; everything else is
    /// reported and the run ends normally.
    pub fn is_fatal(&self) -> bool {
        matches!(self.source, SwitchError::UnsupportedPlatform(_))
    }
}

impl fmt::Display for StageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Error {}: {}", self.stage, self.source)
    }
}

// Display already carries the SwitchError text, so the chain starts below it.
impl std::error::Error for StageError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        std::error::Error::source(&self.source)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SwitchOptions {
    pub mark_active: bool,
}

impl Default for SwitchOptions {
    fn default() -> Self {
        Self { mark_active: true }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Switched {
    pub path: PathBuf,
    pub previous: String,
    pub current: String,
}

pub fn resolve_path(os: &str, env: &HomeEnv) -> Result<PathBuf, StageError> {
    resolve_kubeconfig_path(os, env).map_err(StageError::at(Stage::ResolvePath))
}

/// Load, pick, switch and save. Each stage runs once; the first failure stops
/// the run and nothing after it executes.
pub fn run(path: &Path, picker: &mut dyn ContextPicker, options: SwitchOptions) -> Result<Switched, StageError> {
    let mut config = store::load(path).map_err(StageError::at(Stage::Read))?;
    let previous = config.current_context.clone();

    picker.prepare(&config);
    let (highlight, choices) = compute_highlight(&config, options.mark_active);
    let chosen = pick(picker, &choices, highlight).map_err(StageError::at(Stage::Select))?;

    let current = switch_context(&mut config, &chosen).map_err(StageError::at(Stage::Switch))?;

    store::save(path, &config).map_err(StageError::at(Stage::Write))?;
    tracing::info!(path = %path.display(), %previous, %current, "context switched");

    Ok(Switched { path: path.to_path_buf(), previous, current })
}
