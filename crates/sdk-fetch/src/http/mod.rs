//! HTTP transport for manifest and archive downloads.

mod client;

pub use client::{HttpClient, HttpClientConfig, HttpError};
