//! HTTP client used by the fetcher.
//!
//! A thin wrapper around `reqwest` that adds:
//! - A fixed User-Agent and gzip transfer encoding
//! - Connect and overall request timeouts
//! - Progress reporting while a body is streamed into memory
//!
//! Requests are never retried; any failure is returned to the caller.
//!
//! # Examples
//!
//! ```no_run
//! use sdk_fetch::http::{HttpClient, HttpClientConfig};
//! use std::time::Duration;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = HttpClientConfig::new().with_timeout(Duration::from_secs(120));
//! let client = HttpClient::with_config(config)?;
//!
//! let podspec = client.get_text("https://example.com/DJI-SDK-iOS.podspec").await?;
//! let archive = client
//!     .download_bytes(
//!         "https://example.com/sdk.zip",
//!         Some(|downloaded, total| println!("{}/{} bytes", downloaded, total)),
//!     )
//!     .await?;
//! # Ok(())
//! # }
//! ```

use futures_util::StreamExt;
use reqwest::{Client, Response};
use std::time::Duration;
use thiserror::Error;

const DEFAULT_USER_AGENT: &str = concat!("sdk-fetch/", env!("CARGO_PKG_VERSION"));
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(600);
const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Error)]
pub enum HttpError {
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("HTTP {status}: {url}")]
    HttpStatus { status: u16, url: String },
}

pub struct HttpClient {
    client: Client,
    user_agent: String,
}

impl HttpClient {
    pub fn new() -> Result<Self, reqwest::Error> {
        Self::with_config(HttpClientConfig::default())
    }

    pub fn with_config(config: HttpClientConfig) -> Result<Self, reqwest::Error> {
        let mut builder = Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .gzip(true)
            .user_agent(&config.user_agent);

        if let Some(proxy_url) = &config.proxy {
            let proxy = reqwest::Proxy::all(proxy_url)?;
            builder = builder.proxy(proxy);
        }

        let client = builder.build()?;

        Ok(Self {
            client,
            user_agent: config.user_agent,
        })
    }

    /// Perform a single GET request, failing on any non-success status
    pub async fn get(&self, url: &str) -> Result<Response, HttpError> {
        log::debug!("GET {}", url);

        let response = self.client.get(url).send().await?;
        let status = response.status();

        if !status.is_success() {
            return Err(HttpError::HttpStatus {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        Ok(response)
    }

    /// GET a document as text
    pub async fn get_text(&self, url: &str) -> Result<String, HttpError> {
        let response = self.get(url).await?;
        let text = response.text().await?;
        log::debug!("Received {} bytes of text from {}", text.len(), url);
        Ok(text)
    }

    /// Download a body into memory, reporting `(downloaded, total)` as
    /// chunks arrive. `total` is 0 when the server sends no length.
    pub async fn download_bytes<F>(
        &self,
        url: &str,
        progress: Option<F>,
    ) -> Result<Vec<u8>, HttpError>
    where
        F: Fn(u64, u64),
    {
        let response = self.get(url).await?;

        let total_size = response.content_length().unwrap_or(0);
        let mut body = Vec::with_capacity(total_size as usize);

        let mut stream = response.bytes_stream();
        while let Some(chunk) = stream.next().await {
            let chunk = chunk?;
            body.extend_from_slice(&chunk);

            if let Some(ref callback) = progress {
                callback(body.len() as u64, total_size);
            }
        }

        log::debug!("Downloaded {} bytes from {}", body.len(), url);
        Ok(body)
    }

    /// Get the configured user agent
    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }
}

#[derive(Debug, Clone)]
pub struct HttpClientConfig {
    pub timeout: Duration,
    pub connect_timeout: Duration,
    pub proxy: Option<String>,
    pub user_agent: String,
}

impl Default for HttpClientConfig {
    fn default() -> Self {
        Self {
            timeout: DEFAULT_TIMEOUT,
            connect_timeout: DEFAULT_CONNECT_TIMEOUT,
            proxy: None,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

impl HttpClientConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_connect_timeout(mut self, connect_timeout: Duration) -> Self {
        self.connect_timeout = connect_timeout;
        self
    }

    pub fn with_proxy(mut self, proxy: String) -> Self {
        self.proxy = Some(proxy);
        self
    }

    pub fn with_user_agent(mut self, user_agent: String) -> Self {
        self.user_agent = user_agent;
        self
    }
}
