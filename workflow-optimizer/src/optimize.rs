//! Driver for a workflow optimization run.

use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::info;

use crate::io::rewrite::rewrite_file;

/// Workflow files rewritten by a run, relative to the repository root, in order.
pub const DEFAULT_TARGETS: &[&str] = &[".github/workflows/04-configure-environment.yml"];

/// Rewrite each target under `root` in order, reporting progress to `out`.
///
/// Returns the targets that changed, spelled as given. The first error aborts
/// the run: later targets are skipped and no summary is printed.
pub fn optimize_workflows<W: Write>(
    root: &Path,
    targets: &[PathBuf],
    out: &mut W,
) -> Result<Vec<PathBuf>> {
    let mut changed = Vec::new();
    for target in targets {
        writeln!(out, "Optimizing {}...", target.display()).context("write progress")?;
        if rewrite_file(&root.join(target))? {
            writeln!(out, "✅ Updated {}", target.display()).context("write progress")?;
            changed.push(target.clone());
        } else {
            writeln!(out, "ℹ️ No changes needed in {}", target.display())
                .context("write progress")?;
        }
    }
    write_summary(out, &changed).context("write summary")?;
    info!(targets = targets.len(), changed = changed.len(), "optimization finished");
    Ok(changed)
}

/// Optimize [`DEFAULT_TARGETS`] under `root`.
pub fn optimize_from_root<W: Write>(root: &Path, out: &mut W) -> Result<Vec<PathBuf>> {
    let targets: Vec<PathBuf> = DEFAULT_TARGETS.iter().map(PathBuf::from).collect();
    optimize_workflows(root, &targets, out)
}

fn write_summary<W: Write>(out: &mut W, changed: &[PathBuf]) -> std::io::Result<()> {
    if changed.is_empty() {
        return writeln!(out, "\nℹ️ No files needed optimization");
    }
    writeln!(out, "\n✅ Optimized {} files:", changed.len())?;
    for target in changed {
        writeln!(out, "  - {}", target.display())?;
    }
    Ok(())
}
