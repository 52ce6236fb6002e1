//! Archive downloading and extraction.
//!
//! The SDK archive is pulled over HTTP straight into memory and unpacked
//! from there; nothing is written to a temporary file.

mod archive;
mod file;

pub use archive::ArchiveExtractor;
pub use file::FileDownloader;
