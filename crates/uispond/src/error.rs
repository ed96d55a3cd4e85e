// ── CLI error type ──
//
// Thin wrapper mapping config/core failures onto exit codes and miette
// diagnostics. 2 for configuration/usage problems, 1 for runtime failures.

use miette::Diagnostic;
use thiserror::Error;

#[derive(Debug, Error, Diagnostic)]
pub enum CliError {
    #[error("no controller configured")]
    #[diagnostic(help("set `controller` in {path} or pass --controller"))]
    NoController { path: String },

    #[error(transparent)]
    Config(#[from] uispond_config::ConfigError),

    #[error(transparent)]
    Core(#[from] uispond_core::CoreError),
}

impl CliError {
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::NoController { .. } | Self::Config(_) => 2,
            Self::Core(_) => 1,
        }
    }
}
