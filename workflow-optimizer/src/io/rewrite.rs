//! Whole-file rewrite of a workflow definition.

use std::fs;
use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use tempfile::NamedTempFile;
use tracing::debug;

use crate::core::infra_block::{count_infra_blocks, replace_infra_block};

/// Swap the deployment-info step in `path` for the GitHub Variables step.
///
/// The new content is computed in memory first. Returns `false` without
/// touching the file when nothing matched; otherwise replaces the whole file
/// and returns `true`.
pub fn rewrite_file(path: &Path) -> Result<bool> {
    let content = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    debug!(
        path = %path.display(),
        bytes = content.len(),
        matches = count_infra_blocks(&content),
        "loaded workflow"
    );

    let updated = replace_infra_block(&content);
    if updated == content {
        debug!(path = %path.display(), "workflow unchanged");
        return Ok(false);
    }

    write_atomic(path, &updated)?;
    debug!(path = %path.display(), bytes = updated.len(), "workflow rewritten");
    Ok(true)
}

/// Replace `path` with `contents` via a uniquely named sibling temp file.
///
/// Keeps the original file's permissions. The temp file is removed if any step
/// fails, including the final rename.
fn write_atomic(path: &Path, contents: &str) -> Result<()> {
    let permissions = fs::metadata(path)
        .with_context(|| format!("stat {}", path.display()))?
        .permissions();
    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut tmp = NamedTempFile::new_in(parent)
        .with_context(|| format!("create temp workflow in {}", parent.display()))?;
    tmp.write_all(contents.as_bytes())
        .with_context(|| format!("write temp workflow {}", tmp.path().display()))?;
    tmp.as_file()
        .set_permissions(permissions)
        .with_context(|| format!("set permissions {}", tmp.path().display()))?;
    tmp.persist(path)
        .map_err(|err| err.error)
        .with_context(|| format!("replace workflow {}", path.display()))?;
    Ok(())
}
