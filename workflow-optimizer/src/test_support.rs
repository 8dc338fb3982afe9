//! Test-only helpers for building workflow fixtures.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tempfile::TempDir;

use crate::core::infra_block::{DEPLOYMENT_INFO_BLOCK, GITHUB_VARIABLES_BLOCK};
use crate::optimize::DEFAULT_TARGETS;

/// Workflow text with the legacy deployment-info step between `prefix` and `suffix`.
pub fn legacy_workflow(prefix: &str, suffix: &str) -> String {
    format!("{prefix}{DEPLOYMENT_INFO_BLOCK}{suffix}")
}

/// Expected text after optimizing `legacy_workflow(prefix, suffix)`.
pub fn optimized_workflow(prefix: &str, suffix: &str) -> String {
    format!("{prefix}{GITHUB_VARIABLES_BLOCK}{suffix}")
}

/// Temporary repository root holding the default target workflow.
pub struct TestWorkspace {
    dir: TempDir,
}

impl TestWorkspace {
    /// Create a temp root and write `contents` to the default target path.
    pub fn with_default_target(contents: &str) -> Result<Self> {
        let dir = tempfile::tempdir().context("create tempdir")?;
        let ws = Self { dir };
        let path = ws.default_target_path();
        let parent = path
            .parent()
            .with_context(|| format!("target path missing parent {}", path.display()))?;
        fs::create_dir_all(parent)
            .with_context(|| format!("create directory {}", parent.display()))?;
        fs::write(&path, contents).with_context(|| format!("write {}", path.display()))?;
        Ok(ws)
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    pub fn default_target_path(&self) -> PathBuf {
        self.root().join(DEFAULT_TARGETS[0])
    }

    pub fn read_default_target(&self) -> Result<String> {
        let path = self.default_target_path();
        fs::read_to_string(&path).with_context(|| format!("read {}", path.display()))
    }
}
