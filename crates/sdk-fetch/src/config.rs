//! Fetcher configuration.

use std::path::PathBuf;

use crate::http::HttpClientConfig;
use crate::layout::SdkLayout;

/// Podspec published alongside the DJI iOS SDK.
pub const DEFAULT_MANIFEST_URL: &str =
    "https://raw.githubusercontent.com/dji-sdk/Mobile-SDK-iOS/master/DJI-SDK-iOS.podspec";

/// Everything a single fetch run needs.
#[derive(Debug, Clone)]
pub struct FetchConfig {
    /// Podspec consulted when no archive URL is preset
    pub manifest_url: String,

    /// Preset archive URL; skips the podspec entirely when set. Pin a
    /// specific SDK release here.
    pub sdk_url: Option<String>,

    /// Working root every layout path is relative to
    pub root: PathBuf,

    pub layout: SdkLayout,

    pub http: HttpClientConfig,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            manifest_url: DEFAULT_MANIFEST_URL.to_string(),
            sdk_url: None,
            root: PathBuf::from("."),
            layout: SdkLayout::default(),
            http: HttpClientConfig::default(),
        }
    }
}

impl FetchConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_manifest_url(mut self, manifest_url: impl Into<String>) -> Self {
        self.manifest_url = manifest_url.into();
        self
    }

    pub fn with_sdk_url(mut self, sdk_url: impl Into<String>) -> Self {
        self.sdk_url = Some(sdk_url.into());
        self
    }

    pub fn with_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.root = root.into();
        self
    }

    pub fn with_layout(mut self, layout: SdkLayout) -> Self {
        self.layout = layout;
        self
    }

    pub fn with_http(mut self, http: HttpClientConfig) -> Self {
        self.http = http;
        self
    }

    /// The preset archive URL, if one is configured. An empty string counts
    /// as unset.
    pub fn preset_url(&self) -> Option<&str> {
        self.sdk_url.as_deref().filter(|url| !url.is_empty())
    }

    pub fn installed_framework_path(&self) -> PathBuf {
        SdkLayout::resolve(&self.root, &self.layout.installed_framework())
    }
}
