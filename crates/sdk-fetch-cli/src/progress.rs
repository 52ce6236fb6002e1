//! Download progress bar and step narration.

use indicatif::{ProgressBar, ProgressStyle};
use std::sync::Mutex;
use std::time::Duration;

use sdk_fetch::{FetchReporter, FetchStep};

use crate::output::Output;

/// Creates progress bars, or hidden ones when disabled
pub struct ProgressManager {
    enabled: bool,
}

impl ProgressManager {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    /// Create a download progress bar; the length is filled in once known
    pub fn create_download_bar(&self, name: &str) -> ProgressBar {
        if !self.enabled {
            return ProgressBar::hidden();
        }

        let pb = ProgressBar::new(0);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {bytes}/{total_bytes} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_bar())
                .progress_chars("#>-"),
        );
        pb.set_message(name.to_string());
        pb.enable_steady_tick(Duration::from_millis(100));
        pb
    }
}

/// Narrates each step and drives the download bar
pub struct ConsoleReporter<'a> {
    output: &'a Output,
    progress: &'a ProgressManager,
    bar: Mutex<Option<ProgressBar>>,
}

impl<'a> ConsoleReporter<'a> {
    pub fn new(output: &'a Output, progress: &'a ProgressManager) -> Self {
        Self {
            output,
            progress,
            bar: Mutex::new(None),
        }
    }

    /// Clear the download bar if one is still showing
    pub fn finish(&self) {
        if let Ok(mut bar) = self.bar.lock() {
            if let Some(pb) = bar.take() {
                pb.finish_and_clear();
                self.output.verbose(&format!("downloaded {}", format_bytes(pb.position())));
            }
        }
    }
}

impl FetchReporter for ConsoleReporter<'_> {
    fn step(&self, step: &FetchStep) {
        // Any step after the download ends the bar
        self.finish();

        match step {
            FetchStep::Done => self.output.success(&step.to_string()),
            _ => self.output.writeln(&step.to_string()),
        }

        if let FetchStep::DownloadingArchive { .. } = step {
            if let Ok(mut bar) = self.bar.lock() {
                *bar = Some(self.progress.create_download_bar("DJI SDK"));
            }
        }
    }

    fn download_progress(&self, downloaded: u64, total: u64) {
        if let Ok(bar) = self.bar.lock() {
            if let Some(pb) = bar.as_ref() {
                if total > 0 {
                    pb.set_length(total);
                }
                pb.set_position(downloaded);
            }
        }
    }
}

/// Helper to format bytes for display
pub fn format_bytes(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;
    const GB: u64 = MB * 1024;

    if bytes >= GB {
        format!("{:.2} GB", bytes as f64 / GB as f64)
    } else if bytes >= MB {
        format!("{:.2} MB", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{:.2} KB", bytes as f64 / KB as f64)
    } else {
        format!("{} B", bytes)
    }
}
