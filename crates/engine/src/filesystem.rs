use crate::error::{EngineError, Result};
use std::fs::{self, Metadata};
use std::path::{Component, Path, PathBuf};

/// Turn one line of user input into the path that is checked and displayed.
///
/// Surrounding whitespace is trimmed, `.` components and repeated or trailing
/// separators are dropped. Input that reduces to nothing becomes `.`.
/// On POSIX exactly two leading slashes are kept, since `//` may name a
/// distinct root there.
#[must_use]
pub fn resolve_input(raw: &str) -> PathBuf {
    let trimmed = raw.trim();
    let double_root = cfg!(unix) && trimmed.starts_with("//") && !trimmed.starts_with("///");

    let mut resolved = PathBuf::new();
    if double_root {
        resolved.push("//");
    }
    for component in Path::new(trimmed).components() {
        match component {
            Component::CurDir => {}
            Component::RootDir if double_root => {}
            other => resolved.push(other.as_os_str()),
        }
    }

    if resolved.as_os_str().is_empty() {
        resolved.push(".");
    }
    resolved
}

/// Check that `path` names an existing regular file.
///
/// Symlinks are followed; a dangling link counts as missing.
///
/// # Errors
/// `NotFound` when nothing can be stat'ed at `path`, `NotAFile` when the entry
/// is a directory or other non-regular file.
pub fn validate(path: &Path) -> Result<Metadata> {
    let Ok(meta) = fs::metadata(path) else {
        log::debug!("no entry at {}", path.display());
        return Err(EngineError::NotFound {
            path: path.to_path_buf(),
        });
    };

    if !meta.is_file() {
        log::debug!("{} is not a regular file ({:?})", path.display(), meta.file_type());
        return Err(EngineError::NotAFile {
            path: path.to_path_buf(),
        });
    }

    Ok(meta)
}

/// Current size of `path` in bytes.
///
/// # Errors
/// Returns `Metadata` if the entry can no longer be stat'ed.
pub fn file_size(path: &Path) -> Result<u64> {
    fs::metadata(path)
        .map(|meta| meta.len())
        .map_err(|source| EngineError::Metadata {
            path: path.to_path_buf(),
            source,
        })
}

/// Final path component, or an empty string when there is none (e.g. `/`).
#[must_use]
pub fn base_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default()
}
