use crate::error::SwitchError;
use crate::kubeconfig::KubeConfig;
use crate::selector::ACTIVE_MARKER;

/// Makes `name` the current context. The name is looked up again here rather
/// than trusted from the picker; a trailing active marker is tolerated.
pub fn switch_context(config: &mut KubeConfig, name: &str) -> Result<String, SwitchError> {
    let found = config
        .find_context(name)
        .or_else(|| name.strip_suffix(ACTIVE_MARKER).and_then(|stripped| config.find_context(stripped)))
        .map(|c| c.name.clone())
        .ok_or_else(|| SwitchError::ContextNotFound(name.to_string()))?;

    tracing::debug!(from = %config.current_context, to = %found, "switching context");
    config.current_context = found.clone();
    Ok(found)
}
