use crate::core::errors::{Error, Result};
use crate::models::file_entry::{DirectoryEntry, FileKind};
use std::ffi::{OsStr, OsString};
use std::fs;
use std::path::{Path, PathBuf};

/// Lists the immediate children of `dir`, sorted by raw name.
///
/// The order is ordinal over the platform's encoded name (bytes on Unix),
/// never case-folded or locale-aware, so repeated runs print identically.
/// Directory detection follows symlinks; an entry whose metadata cannot be
/// read is classified as a file.
pub fn list_dir_sorted(dir: &Path) -> Result<Vec<DirectoryEntry>> {
    let access = |source| Error::Access {
        path: dir.to_path_buf(),
        source,
    };

    // Collect names and paths first (cheap), then sort before touching metadata.
    let mut names: Vec<(OsString, PathBuf)> = Vec::new();
    for entry in fs::read_dir(dir).map_err(access)? {
        let entry = entry.map_err(access)?;
        names.push((entry.file_name(), entry.path()));
    }
    names.sort_by(|a, b| a.0.cmp(&b.0));

    let entries = names
        .into_iter()
        .map(|(name, path)| {
            let kind = match fs::metadata(&path) {
                Ok(md) if md.is_dir() => FileKind::Dir,
                Ok(_) => FileKind::File,
                Err(err) => {
                    tracing::trace!("metadata unavailable for {}: {}", path.display(), err);
                    FileKind::File
                }
            };
            DirectoryEntry {
                name: os_str_to_string(name),
                path,
                kind,
            }
        })
        .collect();

    Ok(entries)
}

fn os_str_to_string(s: impl AsRef<OsStr>) -> String {
    s.as_ref().to_string_lossy().into_owned()
}
