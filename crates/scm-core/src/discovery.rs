//! Directory listing with one attribute read per entry.

use std::fs::{self, Metadata};
use std::io;
use std::path::Path;

use scm_model::DirectoryEntry;
use tracing::warn;

use crate::error::{MenuError, Result};

/// Reads the attributes of `path` into a snapshot.
///
/// Symlinks are followed, so a link to a directory is a directory.
pub fn read_entry(path: &Path) -> io::Result<DirectoryEntry> {
    let metadata = fs::metadata(path)?;
    Ok(DirectoryEntry::new(
        path,
        metadata.is_dir(),
        is_hidden(path, &metadata),
    ))
}

/// Number of direct entries of `dir`, hidden and unreadable ones included.
///
/// No attributes are read.
pub fn count_entries(dir: &Path) -> Result<usize> {
    fs::read_dir(dir)
        .map(Iterator::count)
        .map_err(|e| MenuError::DirectoryRead {
            path: dir.to_path_buf(),
            source: e,
        })
}

/// Lists the direct entries of `dir`, directories first, then files.
///
/// Within each group the file-system enumeration order is kept. Hidden
/// entries are included; callers filter them as needed. Entries whose
/// attributes cannot be read are logged and left out.
pub fn list_entries(dir: &Path) -> Result<Vec<DirectoryEntry>> {
    let entries = fs::read_dir(dir).map_err(|e| MenuError::DirectoryRead {
        path: dir.to_path_buf(),
        source: e,
    })?;

    let mut directories = Vec::new();
    let mut files = Vec::new();

    for entry_result in entries {
        let entry = match entry_result {
            Ok(entry) => entry,
            Err(error) => {
                warn!(dir = %dir.display(), %error, "skipping unreadable directory entry");
                continue;
            }
        };

        let path = entry.path();
        match read_entry(&path) {
            Ok(snapshot) if snapshot.is_dir => directories.push(snapshot),
            Ok(snapshot) => files.push(snapshot),
            Err(error) => {
                warn!(path = %path.display(), %error, "skipping entry with unreadable attributes");
            }
        }
    }

    directories.extend(files);
    Ok(directories)
}

#[cfg(windows)]
fn is_hidden(_path: &Path, metadata: &Metadata) -> bool {
    use std::os::windows::fs::MetadataExt;

    const FILE_ATTRIBUTE_HIDDEN: u32 = 0x2;
    metadata.file_attributes() & FILE_ATTRIBUTE_HIDDEN != 0
}

#[cfg(not(windows))]
fn is_hidden(path: &Path, _metadata: &Metadata) -> bool {
    path.file_name()
        .and_then(|name| name.to_str())
        .is_some_and(|name| name.starts_with('.'))
}
