use crate::error::SwitchError;
use crate::kubeconfig::KubeConfig;

/// Appended to the display label of the active context.
pub const ACTIVE_MARKER: &str = " *";

/// One row offered to the picker. `label` is presentation only; `name` is
/// what gets written back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContextChoice {
    pub name: String,
    pub label: String,
    pub active: bool,
}

/// Interactive list picker. Returns the index into `labels` the user chose.
pub trait ContextPicker {
    /// Called with the loaded kubeconfig before `select`, for pickers that
    /// show more than the labels.
    fn prepare(&mut self, _config: &KubeConfig) {}

    fn select(&mut self, labels: &[String], initial: Option<usize>) -> Result<usize, SwitchError>;
}

/// Finds the active context and builds the rows to present. Only the first
/// entry whose name equals `current-context` is highlighted.
pub fn compute_highlight(config: &KubeConfig, mark_active: bool) -> (Option<usize>, Vec<ContextChoice>) {
    let current = config.current_context.as_str();
    let highlight = if current.trim().is_empty() {
        None
    } else {
        config.contexts.iter().position(|c| c.name == current)
    };

    let choices = config
        .contexts
        .iter()
        .enumerate()
        .map(|(i, c)| {
            let active = highlight == Some(i);
            let label = if active && mark_active { format!("{}{ACTIVE_MARKER}", c.name) } else { c.name.clone() };
            ContextChoice { name: c.name.clone(), label, active }
        })
        .collect();

    (highlight, choices)
}

/// Case-insensitive substring match that ignores whitespace on both sides.
pub fn matches(label: &str, query: &str) -> bool {
    normalize(label).contains(&normalize(query))
}

fn normalize(s: &str) -> String {
    s.chars().filter(|c| !c.is_whitespace()).flat_map(char::to_lowercase).collect()
}

pub fn pick(
    picker: &mut dyn ContextPicker,
    choices: &[ContextChoice],
    highlight: Option<usize>,
) -> Result<String, SwitchError> {
    let labels: Vec<String> = choices.iter().map(|c| c.label.clone()).collect();
    let index = picker.select(&labels, highlight)?;
    let choice = choices.get(index).ok_or(SwitchError::InvalidSelection(index))?;
    tracing::debug!(index, name = %choice.name, "context picked");
    Ok(choice.name.clone())
}
