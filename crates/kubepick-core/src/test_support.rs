use crate::error::SwitchError;
use crate::kubeconfig::{KubeConfig, NamedContext};
use crate::selector::ContextPicker;

pub fn config_with(names: &[&str], current: &str) -> KubeConfig {
    KubeConfig {
        api_version: "v1".into(),
        kind: "Config".into(),
        contexts: names.iter().map(|n| NamedContext::new(*n, &format!("{n}-cluster"), &format!("{n}-user"))).collect(),
        current_context: current.into(),
        ..Default::default()
    }
}

/// Picker that answers from a fixed script and records what it was shown.
pub struct ScriptedPicker {
    answer: Option<Result<usize, SwitchError>>,
    pub seen: Option<(Vec<String>, Option<usize>)>,
}

impl ScriptedPicker {
    pub fn choosing(index: usize) -> Self {
        Self { answer: Some(Ok(index)), seen: None }
    }

    pub fn cancelling() -> Self {
        Self { answer: Some(Err(SwitchError::SelectionCancelled)), seen: None }
    }
}

impl ContextPicker for ScriptedPicker {
    fn select(&mut self, labels: &[String], initial: Option<usize>) -> Result<usize, SwitchError> {
        self.seen = Some((labels.to_vec(), initial));
        self.answer.take().unwrap_or(Err(SwitchError::SelectionCancelled))
    }
}
