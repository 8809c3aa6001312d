//! Plain filesystem reads used by the manager and the linter

use std::fs;

use crate::{Error, NormalizedPath, Result};

/// Read text content from a file.
pub fn read_text(path: &NormalizedPath) -> Result<String> {
    let native_path = path.to_native();
    fs::read_to_string(&native_path).map_err(|e| Error::io(&native_path, e))
}

/// Read text content from a file, treating a missing file as `None`.
pub fn read_text_if_exists(path: &NormalizedPath) -> Result<Option<String>> {
    match read_text(path) {
        Ok(content) => Ok(Some(content)),
        Err(e) if e.is_not_found() => Ok(None),
        Err(e) => Err(e),
    }
}

/// Names of the subdirectories of `dir`, sorted.
///
/// Hidden entries (leading `.`) and non-UTF-8 names are skipped.
/// A missing `dir` yields an empty list.
pub fn list_subdirectories(dir: &NormalizedPath) -> Result<Vec<String>> {
    list_entries(dir, true)
}

/// Names of the regular files directly inside `dir`, sorted.
///
/// Hidden entries are skipped. A missing `dir` yields an empty list.
pub fn list_files(dir: &NormalizedPath) -> Result<Vec<String>> {
    list_entries(dir, false)
}

fn list_entries(dir: &NormalizedPath, directories: bool) -> Result<Vec<String>> {
    let native = dir.to_native();
    let entries = match fs::read_dir(&native) {
        Ok(entries) => entries,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
        Err(e) => return Err(Error::io(&native, e)),
    };

    let mut names = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| Error::io(&native, e))?;
        // Follows symlinks, so a linked repository still counts as a directory.
        let path = entry.path();
        let wanted = if directories { path.is_dir() } else { path.is_file() };
        if !wanted {
            continue;
        }
        let Some(name) = entry.file_name().to_str().map(str::to_string) else {
            tracing::warn!(path = ?entry.path(), "Skipping entry with a non UTF-8 name");
            continue;
        };
        if name.starts_with('.') {
            continue;
        }
        names.push(name);
    }

    names.sort();
    Ok(names)
}

/// True when `dir` does not exist or has no entries at all.
pub fn is_empty_dir(dir: &NormalizedPath) -> Result<bool> {
    let native = dir.to_native();
    match fs::read_dir(&native) {
        Ok(mut entries) => Ok(entries.next().is_none()),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(true),
        Err(e) => Err(Error::io(&native, e)),
    }
}

/// Create `dir` and any missing parents.
pub fn create_dir_all(dir: &NormalizedPath) -> Result<()> {
    let native = dir.to_native();
    fs::create_dir_all(&native).map_err(|e| Error::io(&native, e))
}

/// Remove `dir` recursively. A missing directory is not an error.
pub fn remove_dir_all(dir: &NormalizedPath) -> Result<()> {
    let native = dir.to_native();
    match fs::remove_dir_all(&native) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
        Err(e) => Err(Error::io(&native, e)),
    }
}
