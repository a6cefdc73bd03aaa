use serde::{Deserialize, Serialize};

use crate::node::ActionNode;

/// One row of a composed context menu.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "node", rename_all = "snake_case")]
pub enum MenuItem {
    Separator,
    Node(ActionNode),
}

/// The menu handed to the host for rendering.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContextMenu {
    pub items: Vec<MenuItem>,
}

impl ContextMenu {
    pub fn new(items: Vec<MenuItem>) -> Self {
        Self { items }
    }

    /// Action nodes in menu order, separators skipped.
    pub fn nodes(&self) -> impl Iterator<Item = &ActionNode> {
        self.items.iter().filter_map(|item| match item {
            MenuItem::Node(node) => Some(node),
            MenuItem::Separator => None,
        })
    }

    pub fn leaf_count(&self) -> usize {
        self.nodes().map(ActionNode::leaf_count).sum()
    }

    /// Resolves a leaf by its label path, starting at the top of the menu.
    pub fn find_leaf<S: AsRef<str>>(&self, labels: &[S]) -> Option<&ActionNode> {
        self.nodes().find_map(|node| node.find_leaf(labels))
    }
}

impl From<Vec<ActionNode>> for ContextMenu {
    fn from(nodes: Vec<ActionNode>) -> Self {
        Self::new(nodes.into_iter().map(MenuItem::Node).collect())
    }
}
