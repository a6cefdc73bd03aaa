//! Applicability matching between entry tags and the current selection.
//!
//! The selection (or, when nothing is selected, the contents of the folder
//! the menu was opened in) is reduced once into a [`MatchProfile`]: the set of
//! MIME major types and the set of extensions it contains. Every entry of the
//! menu tree is then checked against that profile.

use std::collections::BTreeSet;
use std::path::Path;

use scm_model::{DirectoryEntry, ParsedName, Selection};
use tracing::{debug, warn};

use crate::discovery::{count_entries, list_entries, read_entry};

/// Folder listings at or above this size skip classification entirely.
///
/// Only applies when nothing was selected; explicit selections are always
/// classified, however large.
pub const FOLDER_FALLBACK_LIMIT: usize = 50;

/// Pseudo-extension contributed by any directory in the match set.
pub const FOLDER_EXTENSION: &str = "folder";

/// The classified match set an entry's tags are compared against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchProfile {
    /// Every entry applies (large folder with nothing selected).
    Unrestricted,
    /// MIME major types and lower-case extensions found in the match set.
    Tags {
        mime_types: BTreeSet<String>,
        extensions: BTreeSet<String>,
    },
}

impl MatchProfile {
    /// Builds the profile for a menu opened with `selection` inside
    /// `current_folder`.
    pub fn from_selection(selection: &Selection, current_folder: &Path) -> Self {
        if !selection.is_empty() {
            let entries: Vec<DirectoryEntry> = selection.iter().map(snapshot_or_file).collect();
            return Self::classify(&entries);
        }

        // Counted before any attributes are read.
        let listed = count_entries(current_folder).and_then(|count| {
            if count >= FOLDER_FALLBACK_LIMIT {
                debug!(
                    folder = %current_folder.display(),
                    entries = count,
                    "folder fallback over limit, all entries apply"
                );
                return Ok(None);
            }
            list_entries(current_folder).map(Some)
        });

        match listed {
            Ok(None) => Self::Unrestricted,
            Ok(Some(entries)) => Self::classify(&entries),
            Err(error) => {
                warn!(folder = %current_folder.display(), %error, "could not list current folder");
                Self::classify(&[])
            }
        }
    }

    /// Classifies an explicit list of entries.
    pub fn classify(entries: &[DirectoryEntry]) -> Self {
        let mut mime_types = BTreeSet::new();
        let mut extensions = BTreeSet::new();

        for entry in entries {
            if entry.is_dir {
                extensions.insert(FOLDER_EXTENSION.to_string());
                continue;
            }
            mime_types.insert(mime_major_type(&entry.path));
            if let Some(extension) = lower_extension(&entry.path) {
                extensions.insert(extension);
            }
        }

        Self::Tags {
            mime_types,
            extensions,
        }
    }

    /// Whether an entry with these tags belongs in the menu.
    ///
    /// Untagged entries always apply. An upper-case tag is compared with the
    /// selection's MIME major types and also with its extensions, so
    /// `Convert.TXT.py` applies to `report.txt`.
    pub fn applies(
        &self,
        mime_tags: &BTreeSet<String>,
        extension_tags: &BTreeSet<String>,
    ) -> bool {
        if mime_tags.is_empty() && extension_tags.is_empty() {
            return true;
        }

        match self {
            Self::Unrestricted => true,
            Self::Tags {
                mime_types,
                extensions,
            } => {
                mime_tags
                    .iter()
                    .any(|tag| mime_types.contains(tag) || extensions.contains(tag))
                    || extension_tags.iter().any(|tag| extensions.contains(tag))
            }
        }
    }

    pub fn applies_to(&self, name: &ParsedName) -> bool {
        self.applies(&name.mime_tags, &name.extension_tags)
    }
}

/// One-shot applicability check.
///
/// Prefer building a [`MatchProfile`] once when checking many entries against
/// the same selection.
pub fn is_applicable(
    mime_tags: &BTreeSet<String>,
    extension_tags: &BTreeSet<String>,
    selection: &Selection,
    current_folder: &Path,
) -> bool {
    if mime_tags.is_empty() && extension_tags.is_empty() {
        return true;
    }
    MatchProfile::from_selection(selection, current_folder).applies(mime_tags, extension_tags)
}

/// The part of the guessed MIME type before `/`.
///
/// Unknown extensions fall back to `application/octet-stream`.
pub fn mime_major_type(path: &Path) -> String {
    mime_guess::from_path(path)
        .first_or_octet_stream()
        .type_()
        .as_str()
        .to_lowercase()
}

fn lower_extension(path: &Path) -> Option<String> {
    path.extension()
        .map(|extension| extension.to_string_lossy().to_lowercase())
        .filter(|extension| !extension.is_empty())
}

// Selected paths that vanished or cannot be stat'ed are classified by name.
fn snapshot_or_file(path: &Path) -> DirectoryEntry {
    read_entry(path).unwrap_or_else(|error| {
        debug!(path = %path.display(), %error, "classifying unreadable selection by name");
        DirectoryEntry::new(path, false, false)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn set(items: &[&str]) -> BTreeSet<String> {
        items.iter().map(|item| (*item).to_string()).collect()
    }

    fn files(names: &[&str]) -> Vec<DirectoryEntry> {
        names
            .iter()
            .map(|name| DirectoryEntry::new(format!("/data/{name}"), false, false))
            .collect()
    }

    #[test]
    fn test_untagged_always_applies() {
        let profile = MatchProfile::classify(&[]);
        assert!(profile.applies(&set(&[]), &set(&[])));
    }

    #[test]
    fn test_extension_match() {
        let profile = MatchProfile::classify(&files(&["a.txt"]));
        assert!(profile.applies(&set(&[]), &set(&["txt"])));
        assert!(!profile.applies(&set(&[]), &set(&["csv"])));
    }

    #[test]
    fn test_mime_major_match() {
        let profile = MatchProfile::classify(&files(&["photo.png"]));
        assert!(profile.applies(&set(&["image"]), &set(&[])));
        assert!(!profile.applies(&set(&["text"]), &set(&[])));
    }

    #[test]
    fn test_upper_case_tag_matches_extension() {
        let profile = MatchProfile::classify(&files(&["report.txt"]));
        assert!(profile.applies(&set(&["txt"]), &set(&[])));
    }

    #[test]
    fn test_selection_extension_lower_cased() {
        let profile = MatchProfile::classify(&files(&["SCAN.PDF"]));
        assert!(profile.applies(&set(&[]), &set(&["pdf"])));
        // Extension tags keep their case and are compared verbatim.
        assert!(!profile.applies(&set(&[]), &set(&["PDF2"])));
    }

    #[test]
    fn test_directory_adds_folder_extension() {
        let entries = vec![DirectoryEntry::new("/data/photos", true, false)];
        let profile = MatchProfile::classify(&entries);
        assert!(profile.applies(&set(&[]), &set(&["folder"])));
        assert!(!profile.applies(&set(&["application"]), &set(&[])));
    }

    #[test]
    fn test_file_without_extension_contributes_octet_stream() {
        let profile = MatchProfile::classify(&files(&["Makefile"]));
        assert_eq!(
            profile,
            MatchProfile::Tags {
                mime_types: set(&["application"]),
                extensions: set(&[]),
            }
        );
    }

    #[test]
    fn test_no_overlap_rejects() {
        let profile = MatchProfile::classify(&files(&["data.csv"]));
        assert!(!profile.applies(&set(&["json"]), &set(&[])));
    }

    #[test]
    fn test_folder_fallback_classifies_contents() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("notes.md"), "").unwrap();

        let profile = MatchProfile::from_selection(&Selection::empty(), dir.path());

        assert!(profile.applies(&set(&[]), &set(&["md"])));
        assert!(!profile.applies(&set(&[]), &set(&["folder"])));
    }

    #[test]
    fn test_folder_fallback_over_limit_is_unrestricted() {
        let dir = TempDir::new().unwrap();
        for index in 0..FOLDER_FALLBACK_LIMIT {
            std::fs::write(dir.path().join(format!("file{index}.bin")), "").unwrap();
        }

        let profile = MatchProfile::from_selection(&Selection::empty(), dir.path());

        assert_eq!(profile, MatchProfile::Unrestricted);
        assert!(profile.applies(&set(&["video"]), &set(&["xyz"])));
    }

    #[cfg(unix)]
    #[test]
    fn test_folder_fallback_counts_entries_without_attributes() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("missing-target");
        for index in 0..FOLDER_FALLBACK_LIMIT {
            std::os::unix::fs::symlink(&missing, dir.path().join(format!("broken{index}")))
                .unwrap();
        }

        let profile = MatchProfile::from_selection(&Selection::empty(), dir.path());

        assert_eq!(profile, MatchProfile::Unrestricted);
    }

    #[test]
    fn test_large_explicit_selection_is_classified() {
        let selection: Selection = (0..FOLDER_FALLBACK_LIMIT * 2)
            .map(|index| format!("/data/file{index}.csv"))
            .collect();

        let profile = MatchProfile::from_selection(&selection, Path::new("/data"));

        assert!(!profile.applies(&set(&["video"]), &set(&[])));
        assert!(profile.applies(&set(&[]), &set(&["csv"])));
    }

    #[test]
    fn test_unreadable_folder_only_allows_untagged() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("gone");

        let profile = MatchProfile::from_selection(&Selection::empty(), &missing);

        assert!(profile.applies(&set(&[]), &set(&[])));
        assert!(!profile.applies(&set(&["text"]), &set(&["txt"])));
    }

    #[test]
    fn test_is_applicable_with_selected_directory() {
        let dir = TempDir::new().unwrap();
        let sub = dir.path().join("sub");
        std::fs::create_dir(&sub).unwrap();

        let selection = Selection::new(vec![sub]);

        assert!(is_applicable(&set(&[]), &set(&["folder"]), &selection, dir.path()));
    }
}
