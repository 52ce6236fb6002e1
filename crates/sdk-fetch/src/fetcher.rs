//! The fetch procedure: check, resolve, download, extract, validate,
//! relocate, clean up.
//!
//! Each step runs once and in order. The first failing step ends the run and
//! its error is returned unchanged; nothing is retried or rolled back.

use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

use crate::config::FetchConfig;
use crate::downloader::{ArchiveExtractor, FileDownloader};
use crate::http::{HttpClient, HttpError};
use crate::installer::FrameworkInstaller;
use crate::podspec;
use crate::{FetchError, Result};

/// Progress milestones reported while fetching
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchStep {
    DownloadingManifest { url: String },
    DownloadingArchive { url: String },
    Extracting,
    Relocating,
    CleaningUp,
    Done,
}

impl fmt::Display for FetchStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchStep::DownloadingManifest { url } => {
                write!(f, "downloading latest DJI SDK podspec from {}", url)
            }
            FetchStep::DownloadingArchive { url } => {
                write!(f, "downloading latest DJI SDK from {}", url)
            }
            FetchStep::Extracting => write!(f, "extracting DJI SDK"),
            FetchStep::Relocating => write!(f, "moving items into place"),
            FetchStep::CleaningUp => write!(f, "cleaning up"),
            FetchStep::Done => write!(f, "done"),
        }
    }
}

/// Receives progress while a fetch runs
pub trait FetchReporter {
    /// Called as each step starts
    fn step(&self, _step: &FetchStep) {}

    /// Called per received chunk of the archive; `total` is 0 when unknown
    fn download_progress(&self, _downloaded: u64, _total: u64) {}
}

/// Reporter that ignores everything
pub struct SilentReporter;

impl FetchReporter for SilentReporter {}

/// How a successful run ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchOutcome {
    /// The framework was already in place; nothing was touched
    AlreadyPresent { path: PathBuf },

    /// The framework was downloaded and installed
    Installed { path: PathBuf, source_url: String },
}

/// Downloads the SDK and installs its framework
pub struct SdkFetcher {
    config: FetchConfig,
    http_client: Arc<HttpClient>,
}

impl SdkFetcher {
    pub fn new(config: FetchConfig) -> Result<Self> {
        let http_client = HttpClient::with_config(config.http.clone()).map_err(HttpError::from)?;
        Ok(Self::with_client(config, Arc::new(http_client)))
    }

    pub fn with_client(config: FetchConfig, http_client: Arc<HttpClient>) -> Self {
        Self { config, http_client }
    }

    fn installer(&self) -> FrameworkInstaller<'_> {
        FrameworkInstaller::new(&self.config.root, &self.config.layout)
    }

    /// Run every step in order
    pub async fn run(&self, reporter: &dyn FetchReporter) -> Result<FetchOutcome> {
        let installer = self.installer();

        if installer.is_installed() {
            let path = self.config.installed_framework_path();
            log::debug!("{} already present, skipping fetch", path.display());
            return Ok(FetchOutcome::AlreadyPresent { path });
        }

        let source_url = self.resolve_url(reporter).await?;

        reporter.step(&FetchStep::DownloadingArchive { url: source_url.clone() });
        let archive = self.download(&source_url, reporter).await?;

        reporter.step(&FetchStep::Extracting);
        ArchiveExtractor::extract_zip_bytes(&archive, &self.config.root)?;
        drop(archive);

        installer.validate_layout()?;

        reporter.step(&FetchStep::Relocating);
        let path = installer.relocate()?;

        reporter.step(&FetchStep::CleaningUp);
        installer.cleanup()?;

        reporter.step(&FetchStep::Done);
        Ok(FetchOutcome::Installed { path, source_url })
    }

    /// Determine the archive URL: the preset one if configured, otherwise
    /// the first source declared by the podspec
    pub async fn resolve_url(&self, reporter: &dyn FetchReporter) -> Result<String> {
        if let Some(url) = self.config.preset_url() {
            log::debug!("Using preset SDK URL {}", url);
            return Ok(url.to_string());
        }

        let manifest_url = &self.config.manifest_url;
        reporter.step(&FetchStep::DownloadingManifest { url: manifest_url.clone() });
        let podspec = self.http_client.get_text(manifest_url).await?;

        podspec::find_source_url(&podspec).ok_or_else(|| FetchError::UrlNotFound {
            manifest_url: manifest_url.clone(),
        })
    }

    /// Download the archive into memory
    pub async fn download(&self, url: &str, reporter: &dyn FetchReporter) -> Result<Vec<u8>> {
        let downloader = FileDownloader::new(Arc::clone(&self.http_client));
        downloader
            .download(url, Some(|downloaded, total| reporter.download_progress(downloaded, total)))
            .await
    }
}
