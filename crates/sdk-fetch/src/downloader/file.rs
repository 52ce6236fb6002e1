//! File downloader for HTTP/HTTPS archives.

use std::sync::Arc;

use crate::http::HttpClient;
use crate::Result;

/// File downloader for HTTP archives
pub struct FileDownloader {
    http_client: Arc<HttpClient>,
}

impl FileDownloader {
    pub fn new(http_client: Arc<HttpClient>) -> Self {
        Self { http_client }
    }

    /// Download an archive into memory
    pub async fn download<F>(&self, url: &str, progress: Option<F>) -> Result<Vec<u8>>
    where
        F: Fn(u64, u64),
    {
        Ok(self.http_client.download_bytes(url, progress).await?)
    }
}
