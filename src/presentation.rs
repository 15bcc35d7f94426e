// src/presentation.rs
use crate::error::AppError;
use line_report_engine::stats::FileReport;
use std::fmt::Write as _;
use std::io::{self, Write};

/// Render the three-line success report.
#[must_use]
pub fn render_report(report: &FileReport) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "File: {}", report.name);
    let _ = writeln!(out, "Lines: {}", report.lines);
    let _ = writeln!(out, "Size: {} bytes", report.size);
    out
}

/// Write the report in a single call so an error never lands mid-report.
///
/// # Errors
/// Propagates write or flush failures.
pub fn write_report<W: Write>(out: &mut W, report: &FileReport) -> io::Result<()> {
    out.write_all(render_report(report).as_bytes())?;
    out.flush()
}

/// Write the one-line error message.
///
/// # Errors
/// Propagates write or flush failures.
pub fn write_error<W: Write>(out: &mut W, err: &AppError) -> io::Result<()> {
    writeln!(out, "{err}")?;
    out.flush()
}
