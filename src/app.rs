// src/app.rs
use crate::error::{AppError, Result};
use crate::presentation;
use crate::prompt::Prompt;
use line_report_engine::config::RunConfig;
use line_report_engine::stats::FileReport;
use std::io::{BufRead, Write};

/// Read a path, measure it and write the report.
///
/// # Errors
/// Returns the first failure; nothing has been written to `out` except the
/// prompt when that happens.
pub fn run<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    prompt: &Prompt,
    config: &RunConfig,
) -> Result<FileReport> {
    let path = prompt.read_path(input, out)?;
    log::debug!("input resolved to {}", path.display());

    let report = line_report_engine::run(&path, config)?;
    presentation::write_report(out, &report).map_err(AppError::Output)?;
    Ok(report)
}

/// Run one session and turn its outcome into an exit status, writing the error
/// line to `out` on failure.
pub fn run_session<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    prompt: &Prompt,
    config: &RunConfig,
) -> u8 {
    match run(input, out, prompt, config) {
        Ok(_) => 0,
        Err(err @ AppError::Output(_)) => {
            // stdout is what failed; part of the report may already be out
            log::warn!("{err}");
            err.exit_code()
        }
        Err(err) => {
            log::debug!("run failed: {err:?}");
            if let Err(write_err) = presentation::write_error(out, &err) {
                log::warn!("could not report error: {write_err}");
            }
            err.exit_code()
        }
    }
}
