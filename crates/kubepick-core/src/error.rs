use std::fmt;
use std::io;
use std::path::PathBuf;

#[derive(Debug)]
pub enum SwitchError {
    UnsupportedPlatform(String),
    FileRead { path: PathBuf, source: io::Error },
    Decode(serde_yaml::Error),
    SelectionCancelled,
    InvalidSelection(usize),
    ContextNotFound(String),
    Encode(serde_yaml::Error),
    FileWrite { path: PathBuf, source: io::Error },
    Terminal(io::Error),
}

impl fmt::Display for SwitchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnsupportedPlatform(os) => write!(f, "Unsupported OS: {os}"),
            Self::FileRead { path, source } => write!(f, "could not read {}: {source}", path.display()),
            Self::Decode(e) => write!(f, "invalid kubeconfig: {e}"),
            Self::SelectionCancelled => write!(f, "selection cancelled"),
            Self::InvalidSelection(index) => write!(f, "picker returned out-of-range index {index}"),
            Self::ContextNotFound(name) => write!(f, "context {name} not found"),
            Self::Encode(e) => write!(f, "could not encode kubeconfig: {e}"),
            Self::FileWrite { path, source } => write!(f, "could not write {}: {source}", path.display()),
            Self::Terminal(e) => write!(f, "terminal error: {e}"),
        }
    }
}

impl std::error::Error for SwitchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::FileRead { source, .. } | Self::FileWrite { source, .. } => Some(source),
            Self::Decode(e) | Self::Encode(e) => Some(e),
            Self::Terminal(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for SwitchError {
    fn from(e: io::Error) -> Self {
        Self::Terminal(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn not_found_names_the_context() {
        let err = SwitchError::ContextNotFound("prod".into());
        assert_eq!(err.to_string(), "context prod not found");
    }

    #[test]
    fn file_read_exposes_io_source() {
        let err = SwitchError::FileRead {
            path: PathBuf::from("/tmp/missing"),
            source: io::Error::new(io::ErrorKind::NotFound, "gone"),
        };
        assert!(err.to_string().contains("/tmp/missing"));
        assert!(err.source().is_some());
    }

    #[test]
    fn cancelled_has_plain_message() {
        assert_eq!(SwitchError::SelectionCancelled.to_string(), "selection cancelled");
        assert!(SwitchError::SelectionCancelled.source().is_none());
    }
}
