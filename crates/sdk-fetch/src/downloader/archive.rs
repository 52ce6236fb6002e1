//! Zip extraction from an in-memory archive.

use std::fs::File;
use std::io::{Cursor, Read, Seek};
use std::path::Path;

use crate::{FetchError, Result};

/// Archive extractor
pub struct ArchiveExtractor;

impl ArchiveExtractor {
    /// Extract a zip archive held in memory into `dest_dir`, keeping the
    /// archive's internal paths. Returns the number of entries written.
    pub fn extract_zip_bytes(bytes: &[u8], dest_dir: &Path) -> Result<usize> {
        Self::extract_zip(Cursor::new(bytes), dest_dir)
    }

    /// Extract a zip archive from any seekable reader
    pub fn extract_zip<R: Read + Seek>(reader: R, dest_dir: &Path) -> Result<usize> {
        std::fs::create_dir_all(dest_dir)?;

        let mut archive = zip::ZipArchive::new(reader)
            .map_err(|e| FetchError::Extract(format!("Failed to open zip: {}", e)))?;

        // Canonicalize dest_dir for path traversal check
        let dest_dir_canonical = dest_dir.canonicalize()
            .map_err(|e| FetchError::Extract(format!("Failed to canonicalize destination: {}", e)))?;

        let mut written = 0;
        for i in 0..archive.len() {
            let mut file = archive.by_index(i)
                .map_err(|e| FetchError::Extract(format!("Failed to read zip entry: {}", e)))?;

            // Rejects absolute paths and `..` components
            let relative_path = file.enclosed_name().ok_or_else(|| {
                FetchError::Extract(format!("Path traversal detected in archive: {}", file.name()))
            })?;

            if relative_path.as_os_str().is_empty() {
                continue;
            }

            let outpath = dest_dir.join(&relative_path);

            if file.is_dir() {
                std::fs::create_dir_all(&outpath)?;
            } else if let Some(parent) = outpath.parent() {
                std::fs::create_dir_all(parent)?;
            }

            // A symlinked directory already on disk could still redirect the entry
            let parent_canonical = outpath
                .parent()
                .map(Path::canonicalize)
                .transpose()?
                .unwrap_or_else(|| dest_dir_canonical.clone());
            if !parent_canonical.starts_with(&dest_dir_canonical) {
                return Err(FetchError::Extract(format!(
                    "Path traversal detected: {} escapes destination directory",
                    relative_path.display()
                )));
            }

            if !file.is_dir() {
                let mut outfile = File::create(&outpath)?;
                std::io::copy(&mut file, &mut outfile)?;

                #[cfg(unix)]
                {
                    use std::os::unix::fs::PermissionsExt;
                    if let Some(mode) = file.unix_mode() {
                        std::fs::set_permissions(&outpath, std::fs::Permissions::from_mode(mode))?;
                    }
                }
            }

            written += 1;
        }

        log::debug!("Extracted {} entries into {}", written, dest_dir.display());
        Ok(written)
    }
}
