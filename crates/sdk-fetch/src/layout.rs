//! Filesystem layout of the SDK archive and the project it installs into.

use std::path::{Path, PathBuf};

pub const DEFAULT_FRAMEWORK_NAME: &str = "DJISDK.framework";
pub const DEFAULT_SOURCE_ROOT: &str = "iOS_Mobile_SDK";
pub const DEFAULT_DESTINATION_DIR: &str = "Frameworks";
pub const MACOS_METADATA_DIR: &str = "__MACOSX";

/// Relative paths the fetcher reads, moves and removes.
///
/// Every path is relative to the working root passed to the fetcher.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SdkLayout {
    /// Framework bundle directory name
    pub framework_name: String,

    /// Top-level directory the archive extracts into
    pub source_root: PathBuf,

    /// Project directory that receives the framework
    pub destination_dir: PathBuf,

    /// Directories removed once the framework is in place
    pub cleanup_dirs: Vec<PathBuf>,
}

impl Default for SdkLayout {
    fn default() -> Self {
        Self {
            framework_name: DEFAULT_FRAMEWORK_NAME.to_string(),
            source_root: PathBuf::from(DEFAULT_SOURCE_ROOT),
            destination_dir: PathBuf::from(DEFAULT_DESTINATION_DIR),
            cleanup_dirs: vec![
                PathBuf::from(MACOS_METADATA_DIR),
                PathBuf::from(DEFAULT_SOURCE_ROOT),
            ],
        }
    }
}

impl SdkLayout {
    /// Change the extraction root. Cleanup entries that pointed at the old
    /// root follow it.
    pub fn with_source_root(mut self, source_root: impl Into<PathBuf>) -> Self {
        let source_root = source_root.into();
        for dir in &mut self.cleanup_dirs {
            if *dir == self.source_root {
                *dir = source_root.clone();
            }
        }
        self.source_root = source_root;
        self
    }

    pub fn with_framework_name(mut self, framework_name: impl Into<String>) -> Self {
        self.framework_name = framework_name.into();
        self
    }

    pub fn with_destination_dir(mut self, destination_dir: impl Into<PathBuf>) -> Self {
        self.destination_dir = destination_dir.into();
        self
    }

    pub fn with_cleanup_dirs(mut self, cleanup_dirs: Vec<PathBuf>) -> Self {
        self.cleanup_dirs = cleanup_dirs;
        self
    }

    /// Where the framework lives once installed (`Frameworks/DJISDK.framework`)
    pub fn installed_framework(&self) -> PathBuf {
        self.destination_dir.join(&self.framework_name)
    }

    /// Where the framework lives right after extraction
    /// (`iOS_Mobile_SDK/DJISDK.framework`)
    pub fn extracted_framework(&self) -> PathBuf {
        self.source_root.join(&self.framework_name)
    }

    /// Paths that must exist after extraction, in checking order
    pub fn required_paths(&self) -> [PathBuf; 2] {
        [self.source_root.clone(), self.extracted_framework()]
    }

    /// Resolve a layout path against a working root
    pub fn resolve(root: &Path, relative: &Path) -> PathBuf {
        if root == Path::new(".") {
            relative.to_path_buf()
        } else {
            root.join(relative)
        }
    }
}
