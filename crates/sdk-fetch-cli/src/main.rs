mod config;
mod output;
mod progress;

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

use config::FileConfig;
use output::{Output, Verbosity};
use progress::{ConsoleReporter, ProgressManager};
use sdk_fetch::{FetchConfig, FetchError, FetchOutcome, HttpClientConfig, SdkFetcher, SdkLayout};

/// Exit status for a missing podspec source or a bad archive layout
const EXIT_CHECK_FAILED: u8 = 1;
/// Exit status for transport, filesystem and configuration failures
const EXIT_ERROR: u8 = 2;

#[derive(Parser, Debug)]
#[command(name = "fetch-dji-sdk")]
#[command(about = "Download the DJI iOS SDK and install DJISDK.framework into Frameworks/")]
#[command(version)]
struct Args {
    /// Podspec to read the SDK archive location from
    #[arg(long, value_name = "URL")]
    manifest_url: Option<String>,

    /// SDK archive URL to use instead of the podspec source
    #[arg(long, value_name = "URL")]
    sdk_url: Option<String>,

    /// Project directory to install into
    #[arg(short = 'd', long, default_value = ".")]
    working_dir: PathBuf,

    /// Config file (defaults to sdk-fetch.toml found from the working directory upward)
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Overall HTTP timeout in seconds
    #[arg(long, value_name = "SECS")]
    timeout: Option<u64>,

    /// Hide the download progress bar
    #[arg(long)]
    no_progress: bool,

    /// Increase verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Only print errors
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

/// Merge flags over the config file over built-in defaults
fn build_config(args: &Args, file: Option<FileConfig>) -> FetchConfig {
    let file = file.unwrap_or_default();

    let mut http = HttpClientConfig::new();
    if let Some(secs) = args.timeout.or(file.http.timeout) {
        http = http.with_timeout(Duration::from_secs(secs));
    }
    if let Some(secs) = file.http.connect_timeout {
        http = http.with_connect_timeout(Duration::from_secs(secs));
    }
    if let Some(proxy) = file.http.proxy {
        http = http.with_proxy(proxy);
    }

    // Source root first so default cleanup entries follow it
    let mut layout = SdkLayout::default();
    if let Some(root) = file.layout.source_root {
        layout = layout.with_source_root(root);
    }
    if let Some(name) = file.layout.framework_name {
        layout = layout.with_framework_name(name);
    }
    if let Some(dir) = file.layout.destination_dir {
        layout = layout.with_destination_dir(dir);
    }
    if let Some(dirs) = file.layout.cleanup_dirs {
        layout = layout.with_cleanup_dirs(dirs);
    }

    let mut config = FetchConfig::new()
        .with_root(args.working_dir.clone())
        .with_layout(layout)
        .with_http(http);

    if let Some(url) = args.manifest_url.clone().or(file.manifest_url) {
        config = config.with_manifest_url(url);
    }
    if let Some(url) = args.sdk_url.clone().or(file.sdk_url) {
        config = config.with_sdk_url(url);
    }

    config
}

fn exit_code_for(err: &FetchError) -> u8 {
    if err.is_curated() {
        EXIT_CHECK_FAILED
    } else {
        EXIT_ERROR
    }
}

fn report_error(output: &Output, err: &dyn std::error::Error) {
    output.error(&err.to_string());
    let mut cause = err.source();
    while let Some(e) = cause {
        output.cause(&e.to_string());
        cause = e.source();
    }
}

async fn run(args: Args, output: &Output) -> Result<u8> {
    let file_config = match &args.config {
        Some(path) => Some(FileConfig::load_file(path)?),
        None => FileConfig::load(&args.working_dir)?,
    };
    let config = build_config(&args, file_config);
    log::debug!("Fetch configuration: {:?}", config);

    let fetcher = SdkFetcher::new(config)?;
    let progress = ProgressManager::new(!args.no_progress && !output.is_quiet());
    let reporter = ConsoleReporter::new(output, &progress);

    match fetcher.run(&reporter).await {
        Ok(FetchOutcome::AlreadyPresent { path }) => {
            output.verbose(&format!("{} already present, nothing to do", path.display()));
            Ok(0)
        }
        Ok(FetchOutcome::Installed { path, source_url }) => {
            output.verbose(&format!("installed {} from {}", path.display(), source_url));
            Ok(0)
        }
        Err(e) => {
            reporter.finish();
            report_error(output, &e);
            Ok(exit_code_for(&e))
        }
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let args = Args::parse();
    let verbosity = Verbosity::from_flags(args.quiet, args.verbose);

    env_logger::Builder::new()
        .filter_level(verbosity.log_level())
        .parse_default_env()
        .init();

    let output = Output::new(verbosity);

    match run(args, &output).await {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            output.error(&e.to_string());
            for cause in e.chain().skip(1) {
                output.cause(&cause.to_string());
            }
            ExitCode::from(EXIT_ERROR)
        }
    }
}
