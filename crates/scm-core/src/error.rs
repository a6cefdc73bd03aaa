//! Error types for menu building and action dispatch.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that prevent a menu from being built.
///
/// These are configuration-level failures: the host should show no menu
/// rather than a partial one. Problems with individual entries below a root
/// are logged and skipped instead of being reported here.
#[derive(Debug, Error)]
pub enum MenuError {
    /// A menu root does not exist or is not a directory.
    #[error("menu root not found: {path}")]
    RootNotFound { path: PathBuf },

    /// A menu root exists but could not be listed.
    #[error("failed to read directory {path}: {source}")]
    DirectoryRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Neither an extensions root nor a top-level root is available.
    #[error("no menu roots configured or found")]
    NoRoots,

    /// The folder of the running executable could not be determined.
    #[error("could not resolve the executable location: {reason}")]
    ExecutableLocation { reason: String },
}

/// Errors raised while starting an action.
#[derive(Debug, Error)]
pub enum DispatchError {
    /// The operating system refused to start the process.
    #[error("failed to launch {program}: {source}")]
    Spawn {
        program: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Result type for menu building.
pub type Result<T> = std::result::Result<T, MenuError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = MenuError::RootNotFound {
            path: PathBuf::from("/opt/menus/Extensions"),
        };
        assert_eq!(err.to_string(), "menu root not found: /opt/menus/Extensions");
    }

    #[test]
    fn test_dispatch_error_keeps_source() {
        let err = DispatchError::Spawn {
            program: PathBuf::from("/ext/run.py"),
            source: std::io::Error::from(std::io::ErrorKind::NotFound),
        };
        assert!(std::error::Error::source(&err).is_some());
        assert!(err.to_string().starts_with("failed to launch /ext/run.py"));
    }
}
