//! Naming convention decoder.
//!
//! Entries under a menu root are named
//! `<label>[.<tag>]*[.<extension-if-file>]`. The OS extension of a file is
//! stripped first (it decides how the file is launched, not where it shows).
//! Each remaining segment after the label is a tag:
//!
//! - an upper-case segment (`TXT`, `IMAGE`) is a MIME major type, stored
//!   lower-cased;
//! - anything else (`json`, `Csv`) is a file extension, stored verbatim.
//!
//! A segment without letters (`7`) counts as upper-case and therefore as a
//! MIME tag.

use std::path::Path;

use scm_model::{DirectoryEntry, ParsedName};

/// Decodes the name of the entry at `entry_path`.
///
/// Directories keep their full final segment; files lose their extension
/// before tags are read.
pub fn decode(entry_path: &Path, is_directory: bool) -> ParsedName {
    let base = if is_directory {
        entry_path.file_name()
    } else {
        entry_path.file_stem()
    };

    match base {
        Some(base) if !base.is_empty() => decode_base_name(&base.to_string_lossy()),
        _ => ParsedName::untagged(entry_path.to_string_lossy()),
    }
}

/// Decodes a snapshot taken during traversal.
pub fn decode_entry(entry: &DirectoryEntry) -> ParsedName {
    decode(&entry.path, entry.is_dir)
}

/// Decodes a base name that has already had any OS extension removed.
pub fn decode_base_name(base: &str) -> ParsedName {
    let mut segments = base.split('.');
    let label = segments.next().unwrap_or_default();
    if label.is_empty() {
        // `.config` style names: keep the label non-empty.
        return ParsedName::untagged(base);
    }

    let mut parsed = ParsedName::untagged(label);
    // `Scripts.` and `a..b`: an empty segment is not a tag.
    for segment in segments.filter(|segment| !segment.is_empty()) {
        if is_mime_segment(segment) {
            parsed.mime_tags.insert(segment.to_lowercase());
        } else {
            parsed.extension_tags.insert(segment.to_string());
        }
    }
    parsed
}

fn is_mime_segment(segment: &str) -> bool {
    segment == segment.to_uppercase()
}
