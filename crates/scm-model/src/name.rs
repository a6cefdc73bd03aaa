use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// A decoded entry name: what to show and what it applies to.
///
/// `display_label` is never empty. A name without tags is applicable to any
/// selection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedName {
    pub display_label: String,
    /// MIME major types such as `text` or `image`, always lower-case.
    pub mime_tags: BTreeSet<String>,
    /// File extensions without the leading dot, case preserved.
    pub extension_tags: BTreeSet<String>,
}

impl ParsedName {
    pub fn untagged(display_label: impl Into<String>) -> Self {
        Self {
            display_label: display_label.into(),
            ..Self::default()
        }
    }

    pub fn is_untagged(&self) -> bool {
        self.mime_tags.is_empty() && self.extension_tags.is_empty()
    }
}
