// crates/engine/src/lib.rs
use std::path::Path;

pub mod config;
pub mod error;
pub mod filesystem;
pub mod processor;
pub mod stats;

use crate::config::{RunConfig, SizeProbe};
use crate::error::Result;
use crate::stats::FileReport;

/// Validate `path`, count its lines and read its size.
///
/// Validation runs in order (existence, then regular file) and stops at the
/// first failure. With `SizeProbe::AfterCount` the size is read once counting
/// has finished.
///
/// # Errors
/// Returns the first `EngineError` hit; no partial report is produced.
pub fn run(path: &Path, config: &RunConfig) -> Result<FileReport> {
    run_with(path, config, processor::count_file)
}

fn run_with<F>(path: &Path, config: &RunConfig, count: F) -> Result<FileReport>
where
    F: FnOnce(&Path, &RunConfig) -> Result<u64>,
{
    let meta = filesystem::validate(path)?;
    log::debug!("validated {} ({:?})", path.display(), config.size_probe);

    let mut report = FileReport::new(path);
    report.lines = count(path, config)?;
    report.size = match config.size_probe {
        SizeProbe::BeforeCount => meta.len(),
        SizeProbe::AfterCount => filesystem::file_size(path)?,
    };

    log::debug!(
        "{}: {} lines, {} bytes",
        report.path.display(),
        report.lines,
        report.size
    );
    Ok(report)
}
