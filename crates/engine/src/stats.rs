use std::path::{Path, PathBuf};

/// Facts gathered for one file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileReport {
    pub path: PathBuf,
    pub name: String,
    pub lines: u64,
    pub size: u64,
}

impl FileReport {
    #[must_use]
    pub fn new(path: &Path) -> Self {
        Self {
            path: path.to_path_buf(),
            name: crate::filesystem::base_name(path),
            lines: 0,
            size: 0,
        }
    }
}
