use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// The paths the user right-clicked on, in host order.
///
/// An empty selection means the menu was opened on a folder background and
/// acts on the folder's contents. Duplicates are kept as supplied.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Selection {
    paths: Vec<PathBuf>,
}

impl Selection {
    pub fn new(paths: Vec<PathBuf>) -> Self {
        Self { paths }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Path> {
        self.paths.iter().map(PathBuf::as_path)
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    pub fn len(&self) -> usize {
        self.paths.len()
    }
}

impl<P: Into<PathBuf>> FromIterator<P> for Selection {
    fn from_iter<I: IntoIterator<Item = P>>(iter: I) -> Self {
        Self::new(iter.into_iter().map(Into::into).collect())
    }
}
