//! Menu-tree builder and dispatch engine.
//!
//! This crate turns a directory of action scripts into a context menu that
//! only offers actions relevant to the current selection, and starts the
//! chosen action with the selection as its arguments.
//!
//! # Features
//!
//! - **Naming Convention**: Decode `Label.TAG.ext.py` names into a label and tags
//! - **Applicability**: Match tags against the MIME types and extensions of the selection
//! - **Tree Building**: Mirror a directory tree, pruning branches with nothing to show
//! - **Menu Composition**: Combine the `Extensions` and `TopLevelItems` roots
//! - **Dispatch**: Launch a leaf with quoted selection arguments
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use scm_core::{MenuRoots, compose_menu, executable_dir, launch};
//! use scm_model::Selection;
//!
//! let folder = Path::new("C:/Users/me/Documents");
//! let selection: Selection = ["C:/Users/me/Documents/report.txt"].into_iter().collect();
//!
//! let roots = MenuRoots::beside(&executable_dir()?);
//! let menu = compose_menu(&roots, &selection, folder)?;
//!
//! if let Some(leaf) = menu.find_leaf(&["Extensions", "Convert"]) {
//!     launch(leaf.launch_path().unwrap(), &selection, folder)?;
//! }
//! ```

mod applicability;
mod discovery;
mod dispatch;
mod error;
mod menu;
mod naming;
mod tree;

// === Error Types ===
pub use error::{DispatchError, MenuError, Result};

// === Naming Convention ===
pub use naming::{decode, decode_base_name, decode_entry};

// === Applicability ===
pub use applicability::{
    FOLDER_EXTENSION, FOLDER_FALLBACK_LIMIT, MatchProfile, is_applicable, mime_major_type,
};

// === Tree Building ===
pub use discovery::{count_entries, list_entries, read_entry};
pub use tree::{Subtree, TreeBuilder, build};

// === Menu Composition ===
pub use menu::{
    DEFAULT_EXTENSIONS_LABEL, EXTENSIONS_DIR_NAME, MenuRoots, TOP_LEVEL_DIR_NAME, compose_menu,
    executable_dir,
};

// === Dispatch ===
pub use dispatch::{
    LaunchRequest, ProcessSpawner, SystemSpawner, argument_string, launch, launch_with,
};
