//! Composition of the full context menu from its two roots.
//!
//! The extensions root is shown as a single submenu; the top-level root's
//! actions sit directly in the context menu. Both are bracketed by
//! separators.

use std::path::{Path, PathBuf};

use scm_model::{ActionNode, ContextMenu, MenuItem, Selection};
use tracing::{debug, info};

use crate::error::{MenuError, Result};
use crate::tree::TreeBuilder;

/// Folder holding the actions shown inside the extensions submenu.
pub const EXTENSIONS_DIR_NAME: &str = "Extensions";
/// Folder holding the actions shown directly in the context menu.
pub const TOP_LEVEL_DIR_NAME: &str = "TopLevelItems";
/// Label of the submenu built from [`EXTENSIONS_DIR_NAME`].
pub const DEFAULT_EXTENSIONS_LABEL: &str = "Extensions";

/// Where the two menu roots live.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuRoots {
    pub extensions: Option<PathBuf>,
    pub top_level: Option<PathBuf>,
    pub extensions_label: String,
}

impl Default for MenuRoots {
    fn default() -> Self {
        Self {
            extensions: None,
            top_level: None,
            extensions_label: DEFAULT_EXTENSIONS_LABEL.to_string(),
        }
    }
}

impl MenuRoots {
    pub fn new(extensions: Option<PathBuf>, top_level: Option<PathBuf>) -> Self {
        Self {
            extensions,
            top_level,
            ..Self::default()
        }
    }

    /// Roots found inside `dir`. Folders that do not exist are left unset.
    pub fn beside(dir: &Path) -> Self {
        let existing = |name: &str| Some(dir.join(name)).filter(|path| path.is_dir());
        Self::new(existing(EXTENSIONS_DIR_NAME), existing(TOP_LEVEL_DIR_NAME))
    }

    #[must_use]
    pub fn with_extensions_label(mut self, label: impl Into<String>) -> Self {
        self.extensions_label = label.into();
        self
    }

    /// Fills unset roots from `fallback`, keeping the label of `self`.
    #[must_use]
    pub fn or(self, fallback: MenuRoots) -> Self {
        Self {
            extensions: self.extensions.or(fallback.extensions),
            top_level: self.top_level.or(fallback.top_level),
            extensions_label: self.extensions_label,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.extensions.is_none() && self.top_level.is_none()
    }
}

/// Directory containing the running executable.
///
/// # Errors
///
/// Fails when the OS cannot report the executable path or it has no parent.
pub fn executable_dir() -> Result<PathBuf> {
    let exe = std::env::current_exe().map_err(|e| MenuError::ExecutableLocation {
        reason: e.to_string(),
    })?;
    exe.parent()
        .map(Path::to_path_buf)
        .ok_or_else(|| MenuError::ExecutableLocation {
            reason: format!("{} has no parent directory", exe.display()),
        })
}

/// Builds the complete context menu for one invocation.
///
/// # Errors
///
/// Fails closed: a missing or unreadable root, or no root at all, aborts the
/// whole menu.
pub fn compose_menu(
    roots: &MenuRoots,
    selection: &Selection,
    current_folder: &Path,
) -> Result<ContextMenu> {
    if roots.is_empty() {
        return Err(MenuError::NoRoots);
    }

    let builder = TreeBuilder::new(selection, current_folder);
    debug!(profile = ?builder.profile(), "classified selection");

    let mut items = vec![MenuItem::Separator];

    if let Some(root) = &roots.extensions {
        let nodes = builder.build(root)?;
        items.push(MenuItem::Node(ActionNode::group(roots.extensions_label.clone(), nodes)));
    }

    if let Some(root) = &roots.top_level {
        items.extend(builder.build(root)?.into_iter().map(MenuItem::Node));
    }

    items.push(MenuItem::Separator);

    let menu = ContextMenu::new(items);
    info!(selected = selection.len(), actions = menu.leaf_count(), "built context menu");
    Ok(menu)
}
