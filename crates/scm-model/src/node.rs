use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// A node of the pruned action tree.
///
/// Groups mirror directories and leaves mirror launchable files. A built tree
/// never contains a group without at least one leaf somewhere below it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ActionNode {
    Group {
        label: String,
        children: Vec<ActionNode>,
    },
    Leaf {
        label: String,
        path: PathBuf,
    },
}

impl ActionNode {
    pub fn group(label: impl Into<String>, children: Vec<ActionNode>) -> Self {
        Self::Group {
            label: label.into(),
            children,
        }
    }

    pub fn leaf(label: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self::Leaf {
            label: label.into(),
            path: path.into(),
        }
    }

    pub fn label(&self) -> &str {
        match self {
            Self::Group { label, .. } | Self::Leaf { label, .. } => label,
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, Self::Leaf { .. })
    }

    /// Children of a group; leaves have none.
    pub fn children(&self) -> &[ActionNode] {
        match self {
            Self::Group { children, .. } => children,
            Self::Leaf { .. } => &[],
        }
    }

    /// Launch path of a leaf.
    pub fn launch_path(&self) -> Option<&Path> {
        match self {
            Self::Leaf { path, .. } => Some(path),
            Self::Group { .. } => None,
        }
    }

    /// Number of leaves at or below this node.
    pub fn leaf_count(&self) -> usize {
        match self {
            Self::Leaf { .. } => 1,
            Self::Group { children, .. } => children.iter().map(Self::leaf_count).sum(),
        }
    }

    /// Follows `labels` downwards from this node and returns the leaf it names.
    ///
    /// The first label must match this node. Labels are not unique within a
    /// group; the first match in display order wins.
    pub fn find_leaf<S: AsRef<str>>(&self, labels: &[S]) -> Option<&ActionNode> {
        let (first, rest) = labels.split_first()?;
        if self.label() != first.as_ref() {
            return None;
        }
        if rest.is_empty() {
            return self.is_leaf().then_some(self);
        }
        find_leaf_in(self.children(), rest)
    }
}

/// Resolves a label path against a list of sibling nodes.
pub fn find_leaf_in<'a, S: AsRef<str>>(
    nodes: &'a [ActionNode],
    labels: &[S],
) -> Option<&'a ActionNode> {
    nodes.iter().find_map(|node| node.find_leaf(labels))
}
