//! Recursive menu-tree builder with bottom-up pruning.
//!
//! A directory only becomes a group when something below it survived the
//! matcher. Empty submenus are left out of the tree instead of being hidden,
//! so hosts never have to honour a visibility flag.

use std::fs;
use std::path::{Path, PathBuf};

use scm_model::{ActionNode, DirectoryEntry, Selection};
use tracing::{debug, info_span, warn};

use crate::applicability::MatchProfile;
use crate::discovery::list_entries;
use crate::error::{MenuError, Result};
use crate::naming::decode_entry;

/// Nodes built for one directory level.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Subtree {
    pub nodes: Vec<ActionNode>,
    /// At least one leaf exists at this level or below.
    pub any_visible: bool,
}

/// Builds pruned action trees against a fixed selection.
///
/// The selection is classified once; the same profile is used at every depth
/// of every root built with this builder.
#[derive(Debug, Clone)]
pub struct TreeBuilder {
    profile: MatchProfile,
}

impl TreeBuilder {
    pub fn new(selection: &Selection, current_folder: &Path) -> Self {
        Self::with_profile(MatchProfile::from_selection(selection, current_folder))
    }

    pub fn with_profile(profile: MatchProfile) -> Self {
        Self { profile }
    }

    pub fn profile(&self) -> &MatchProfile {
        &self.profile
    }

    /// Builds the top-level actions under `root`.
    ///
    /// # Errors
    ///
    /// Fails when `root` is missing, not a directory, or cannot be listed.
    /// Failures below the root are logged and the affected entry skipped.
    pub fn build(&self, root: &Path) -> Result<Vec<ActionNode>> {
        let span = info_span!("build_tree", root = %root.display());
        let _guard = span.enter();

        if !root.is_dir() {
            return Err(MenuError::RootNotFound {
                path: root.to_path_buf(),
            });
        }
        Ok(self.build_subtree(root)?.nodes)
    }

    /// Builds one directory level and everything below it.
    ///
    /// # Errors
    ///
    /// Fails only when `directory` itself cannot be listed.
    pub fn build_subtree(&self, directory: &Path) -> Result<Subtree> {
        let mut ancestors = vec![canonical(directory)];
        self.walk(directory, &mut ancestors)
    }

    fn walk(&self, directory: &Path, ancestors: &mut Vec<PathBuf>) -> Result<Subtree> {
        let mut subtree = Subtree::default();

        for entry in list_entries(directory)? {
            if entry.is_hidden {
                continue;
            }

            let name = decode_entry(&entry);
            if !self.profile.applies_to(&name) {
                debug!(path = %entry.path.display(), "entry does not apply to selection");
                continue;
            }

            if !entry.is_dir {
                subtree.nodes.push(ActionNode::leaf(name.display_label, entry.path));
                subtree.any_visible = true;
                continue;
            }

            let Some(children) = self.walk_child(&entry, ancestors) else {
                continue;
            };
            if children.any_visible {
                subtree.nodes.push(ActionNode::group(name.display_label, children.nodes));
            } else {
                debug!(path = %entry.path.display(), "pruning directory without visible actions");
            }
            subtree.any_visible |= children.any_visible;
        }

        Ok(subtree)
    }

    fn walk_child(
        &self,
        entry: &DirectoryEntry,
        ancestors: &mut Vec<PathBuf>,
    ) -> Option<Subtree> {
        let resolved = canonical(&entry.path);
        if ancestors.contains(&resolved) {
            warn!(path = %entry.path.display(), "skipping directory that loops back to an ancestor");
            return None;
        }

        ancestors.push(resolved);
        let result = self.walk(&entry.path, ancestors);
        ancestors.pop();

        match result {
            Ok(children) => Some(children),
            Err(error) => {
                warn!(path = %entry.path.display(), %error, "skipping unreadable directory");
                None
            }
        }
    }
}

/// Builds the pruned tree under `root` for `selection`.
///
/// `current_folder` is the folder the menu was opened in; its contents stand
/// in for the selection when nothing is selected.
pub fn build(root: &Path, selection: &Selection, current_folder: &Path) -> Result<Vec<ActionNode>> {
    TreeBuilder::new(selection, current_folder).build(root)
}

fn canonical(path: &Path) -> PathBuf {
    fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf())
}
