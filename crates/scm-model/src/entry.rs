use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Attributes of a single file-system entry, read once per traversal.
///
/// The snapshot is taken when the entry is first visited and then passed to
/// the decoder, the matcher and the builder, so no later stage re-queries the
/// file system for the same path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirectoryEntry {
    pub path: PathBuf,
    pub is_dir: bool,
    pub is_hidden: bool,
}

impl DirectoryEntry {
    pub fn new(path: impl Into<PathBuf>, is_dir: bool, is_hidden: bool) -> Self {
        Self {
            path: path.into(),
            is_dir,
            is_hidden,
        }
    }

    /// Final path segment, lossily converted for display and parsing.
    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default()
    }
}
