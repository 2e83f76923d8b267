use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use tracing::{info, warn};

use patchup::{
    diff, migration,
    patch::PatchApplier,
    utils::fs,
};

#[derive(Debug, Parser)]
#[command(
    name = "patchup",
    version,
    about = "Apply the phase-3 template-storage migration to the code generator component"
)]
struct Cli {
    /// File to patch; defaults to the known component path under --root
    target: Option<PathBuf>,

    /// Directory the default target path is resolved against
    #[arg(long, default_value = ".")]
    root: PathBuf,

    /// Show the resulting diff without writing the file
    #[arg(long)]
    dry_run: bool,
}

fn main() -> Result<()> {
    patchup::init_with_logger(true).context("Failed to initialize logging")?;

    let cli = Cli::parse();
    let target = cli
        .target
        .unwrap_or_else(|| cli.root.join(migration::DEFAULT_TARGET));

    if !fs::file_exists(&target) {
        return Err(patchup::error::PatchError::invalid_path(target.display().to_string()))
            .context("Target file does not exist");
    }

    info!("Patching {}", target.display());

    let content = fs::read_file_to_string(&target)
        .with_context(|| format!("Failed to read {}", target.display()))?;

    let applier = PatchApplier::new(migration::plan());
    let (patched, report) = applier.run(&content);

    print!("{}", report);

    if cli.dry_run {
        if patched == content {
            println!("Dry run: no changes.");
        } else {
            print!("{}", diff::unified_diff(&target, &content, &patched));
        }
    } else if report.changed() {
        fs::write_file_sync(&target, &patched)
            .with_context(|| format!("Failed to write {}", target.display()))?;
        println!("OK {} updated", target.display());
    } else {
        println!("OK {} already up to date", target.display());
    }

    if report.is_clean() {
        println!("Migration complete.");
        Ok(())
    } else {
        for label in report.missed() {
            warn!("edit did not apply: {}", label);
        }
        anyhow::bail!("{} edit(s) found no match", report.missed().len());
    }
}
