pub mod entry;
pub mod menu;
pub mod name;
pub mod node;
pub mod selection;

pub use entry::DirectoryEntry;
pub use menu::{ContextMenu, MenuItem};
pub use name::ParsedName;
pub use node::{ActionNode, find_leaf_in};
pub use selection::Selection;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leaf_serializes_with_kind_tag() {
        let node = ActionNode::leaf("Convert", "/ext/Convert.TXT.py");
        let json = serde_json::to_value(&node).expect("serialize node");
        assert_eq!(json["kind"], "leaf");
        assert_eq!(json["label"], "Convert");
        assert_eq!(json["path"], "/ext/Convert.TXT.py");
    }

    #[test]
    fn menu_round_trips_through_json() {
        let menu = ContextMenu::new(vec![
            MenuItem::Separator,
            MenuItem::Node(ActionNode::group(
                "Extensions",
                vec![ActionNode::leaf("Run", "/ext/Run.py")],
            )),
            MenuItem::Separator,
        ]);
        let json = serde_json::to_string(&menu).expect("serialize menu");
        let round: ContextMenu = serde_json::from_str(&json).expect("deserialize menu");
        assert_eq!(round, menu);
    }
}
