use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;

use crate::error::SwitchError;
use crate::kubeconfig::KubeConfig;

pub fn load(path: &Path) -> Result<KubeConfig, SwitchError> {
    let bytes = std::fs::read(path).map_err(|source| SwitchError::FileRead { path: path.to_path_buf(), source })?;
    let config = KubeConfig::from_slice(&bytes).map_err(SwitchError::Decode)?;
    tracing::debug!(path = %path.display(), contexts = config.contexts.len(), "loaded kubeconfig");
    Ok(config)
}

/// Writes `config` to `path` through a sibling temp file renamed into place,
/// so an interrupted write never leaves a truncated kubeconfig behind.
pub fn save(path: &Path, config: &KubeConfig) -> Result<(), SwitchError> {
    let data = config.to_yaml().map_err(SwitchError::Encode)?;
    let write_err = |source: std::io::Error| SwitchError::FileWrite { path: path.to_path_buf(), source };

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut tmp = NamedTempFile::new_in(dir).map_err(write_err)?;
    tmp.write_all(data.as_bytes()).map_err(write_err)?;
    tmp.as_file().sync_all().map_err(write_err)?;

    if let Ok(meta) = std::fs::metadata(path) {
        tmp.as_file().set_permissions(meta.permissions()).map_err(write_err)?;
    }

    tmp.persist(path).map_err(|e| write_err(e.error))?;
    tracing::debug!(path = %path.display(), bytes = data.len(), "wrote kubeconfig");
    Ok(())
}
