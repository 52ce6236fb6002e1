use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

pub const CONFIG_FILE_NAME: &str = "sdk-fetch.toml";

/// Optional project configuration file (sdk-fetch.toml)
#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "kebab-case", deny_unknown_fields)]
pub struct FileConfig {
    /// Podspec to read the SDK location from
    pub manifest_url: Option<String>,

    /// Pinned SDK archive URL (skips the podspec)
    pub sdk_url: Option<String>,

    /// HTTP settings
    pub http: HttpSection,

    /// Archive and project layout
    pub layout: LayoutSection,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "kebab-case", deny_unknown_fields)]
pub struct HttpSection {
    /// Overall request timeout in seconds
    pub timeout: Option<u64>,

    /// Connect timeout in seconds
    pub connect_timeout: Option<u64>,

    /// Proxy URL applied to all requests
    pub proxy: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "kebab-case", deny_unknown_fields)]
pub struct LayoutSection {
    pub framework_name: Option<String>,
    pub source_root: Option<PathBuf>,
    pub destination_dir: Option<PathBuf>,
    pub cleanup_dirs: Option<Vec<PathBuf>>,
}

impl FileConfig {
    /// Load sdk-fetch.toml, searching upward from the given directory
    pub fn load(start_dir: &Path) -> Result<Option<Self>> {
        let mut current = start_dir.to_path_buf();

        loop {
            let config_path = current.join(CONFIG_FILE_NAME);

            if config_path.is_file() {
                return Self::load_file(&config_path).map(Some);
            }

            if !current.pop() {
                return Ok(None);
            }
        }
    }

    /// Load an explicit config file
    pub fn load_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let config = toml::from_str(&content)
            .with_context(|| format!("Invalid config file {}", path.display()))?;
        log::debug!("Loaded configuration from {}", path.display());
        Ok(config)
    }
}
