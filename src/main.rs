// src/main.rs
use anyhow::{Context, Result};
use env_logger::{Env, Target};
use line_report::app;
use line_report::prompt::Prompt;
use line_report_engine::config::RunConfig;
use std::io::{self, IsTerminal};
use std::process::ExitCode;

/// Diagnostics go to stderr and stay silent unless `RUST_LOG` asks for them.
fn init_logger() -> Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("off"))
        .target(Target::Stderr)
        .try_init()
        .context("failed to install logger")
}

fn main() -> ExitCode {
    if let Err(e) = init_logger() {
        eprintln!("[warn] {e:#}");
    }
    log::debug!("line_report v{}", line_report::VERSION);

    let stdin = io::stdin();
    let prompt = Prompt::for_terminal(stdin.is_terminal());

    let code = app::run_session(
        &mut stdin.lock(),
        &mut io::stdout().lock(),
        &prompt,
        &RunConfig::default(),
    );
    ExitCode::from(code)
}
