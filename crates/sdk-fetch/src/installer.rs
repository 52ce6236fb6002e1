//! Post-extraction steps: layout check, framework move and cleanup.

use std::path::{Path, PathBuf};

use crate::layout::SdkLayout;
use crate::{FetchError, Result};

/// Moves an extracted framework into the project tree.
pub struct FrameworkInstaller<'a> {
    root: &'a Path,
    layout: &'a SdkLayout,
}

impl<'a> FrameworkInstaller<'a> {
    pub fn new(root: &'a Path, layout: &'a SdkLayout) -> Self {
        Self { root, layout }
    }

    fn path(&self, relative: &Path) -> PathBuf {
        SdkLayout::resolve(self.root, relative)
    }

    /// Whether the framework is already installed
    pub fn is_installed(&self) -> bool {
        self.path(&self.layout.installed_framework()).exists()
    }

    /// Check that extraction produced the source root and the framework
    /// inside it. Reports the first missing path.
    pub fn validate_layout(&self) -> Result<()> {
        for required in self.layout.required_paths() {
            if !self.path(&required).exists() {
                return Err(FetchError::LayoutMissing { path: required });
            }
        }
        Ok(())
    }

    /// Create the destination directory if needed and move the framework
    /// into it. Returns the installed path.
    pub fn relocate(&self) -> Result<PathBuf> {
        let from = self.path(&self.layout.extracted_framework());
        let destination = self.path(&self.layout.destination_dir);
        let to = self.path(&self.layout.installed_framework());

        if !destination.exists() {
            std::fs::create_dir_all(&destination).map_err(|source| FetchError::Relocate {
                from: from.clone(),
                to: destination.clone(),
                source,
            })?;
        }

        std::fs::rename(&from, &to).map_err(|source| FetchError::Relocate {
            from: from.clone(),
            to: destination.clone(),
            source,
        })?;

        log::debug!("Moved {} to {}", from.display(), to.display());
        Ok(to)
    }

    /// Remove the temporary extraction directories. A directory that is
    /// already gone is an error.
    pub fn cleanup(&self) -> Result<()> {
        for dir in &self.layout.cleanup_dirs {
            let path = self.path(dir);
            std::fs::remove_dir_all(&path).map_err(|source| FetchError::Cleanup {
                path: path.clone(),
                source,
            })?;
            log::debug!("Removed {}", path.display());
        }
        Ok(())
    }
}
