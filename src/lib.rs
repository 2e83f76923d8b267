// Patchup - one-shot migration applier for the appscript code generator
// Applies the phase-3 edits to EnhancedCodeGenerator.tsx and reports
// per-edit outcomes instead of silently swallowing missed matches.

pub mod diff;
pub mod error;
pub mod migration;
pub mod patch;
pub mod utils;

use anyhow::Result;
use tracing::info;

pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

/// Initialize the tracing subscriber for CLI usage
///
/// @param ansi_colors - Whether to enable ANSI color codes in logs
pub fn init_with_logger(ansi_colors: bool) -> Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::EnvFilter;

    fmt::Subscriber::builder()
        .with_ansi(ansi_colors)
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::from_default_env())
        .with_target(false)
        .init();

    info!("Initializing patchup v{}", version());

    Ok(())
}
