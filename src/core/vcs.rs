//! Source checkout acquisition and disposal.

use std::path::{Path, PathBuf};
use std::process::Command;

use crate::error::{Error, Result};

/// Trait for fetching and removing source checkouts - git or otherwise.
pub trait Vcs {
    fn fetch(&self, url: &str, target_dir: &Path) -> Result<()>;
    fn remove(&self, path: &Path) -> Result<()>;
}

/// Production implementation: shells out to `git clone` for fetch and uses
/// recursive directory removal for cleanup.
pub struct Git;

impl Git {
    pub fn new() -> Self {
        Self
    }
}

impl Default for Git {
    fn default() -> Self {
        Self::new()
    }
}

impl Vcs for Git {
    fn fetch(&self, url: &str, target_dir: &Path) -> Result<()> {
        let output = Command::new("git")
            .args(["clone", url, &target_dir.to_string_lossy()])
            .output()
            .map_err(|e| Error::git_command_failed(format!("Failed to run git clone: {}", e)))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(Error::git_command_failed(format!(
                "git clone failed: {}",
                stderr.trim()
            )));
        }

        Ok(())
    }

    fn remove(&self, path: &Path) -> Result<()> {
        if !path.exists() {
            return Ok(());
        }

        std::fs::remove_dir_all(path)
            .map_err(|e| Error::internal_io(e.to_string(), Some("remove checkout".to_string())))
    }
}

/// A fetched checkout, removed when dropped.
///
/// Removal runs on every exit path, so a failed page build never leaves a
/// stray clone behind. Removal failures are logged, not propagated.
pub struct Checkout<'a> {
    vcs: &'a dyn Vcs,
    path: PathBuf,
}

impl<'a> Checkout<'a> {
    pub fn fetch(vcs: &'a dyn Vcs, url: &str, target_dir: &Path) -> Result<Self> {
        vcs.fetch(url, target_dir)?;
        Ok(Self {
            vcs,
            path: target_dir.to_path_buf(),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for Checkout<'_> {
    fn drop(&mut self) {
        if let Err(e) = self.vcs.remove(&self.path) {
            log_status!("prepare", "Failed to remove checkout {}: {}", self.path.display(), e);
        }
    }
}
