//! Fetch the DJI iOS SDK and install `DJISDK.framework` into a project.
//!
//! ```no_run
//! use sdk_fetch::{FetchConfig, SdkFetcher, SilentReporter};
//!
//! # async fn example() -> sdk_fetch::Result<()> {
//! let fetcher = SdkFetcher::new(FetchConfig::default())?;
//! let outcome = fetcher.run(&SilentReporter).await?;
//! println!("{:?}", outcome);
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod downloader;
pub mod error;
pub mod fetcher;
pub mod http;
pub mod installer;
pub mod layout;
pub mod podspec;

pub use config::{FetchConfig, DEFAULT_MANIFEST_URL};
pub use error::{FetchError, Result};
pub use fetcher::{FetchOutcome, FetchReporter, FetchStep, SdkFetcher, SilentReporter};
pub use http::{HttpClient, HttpClientConfig, HttpError};
pub use installer::FrameworkInstaller;
pub use layout::SdkLayout;
