use doc_bookmarks::runtime::fetcher::HttpFetcher;
use doc_bookmarks::runtime::logging;
use doc_bookmarks::{build_bookmarks, BookmarksConfig};
use std::time::Duration;

type DynError = Box<dyn std::error::Error + Send + Sync + 'static>;

const USAGE: &str = "Usage: doc-bookmarks [config.json] [--version <version>]";

#[tokio::main]
async fn main() {
    logging::init();

    if let Err(err) = run().await {
        tracing::error!("[Bookmarks] {}", err);
        std::process::exit(1);
    }
}

async fn run() -> Result<(), DynError> {
    let mut config_path: Option<String> = None;
    let mut version: Option<String> = None;

    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--version" => version = Some(args.next().ok_or(USAGE)?),
            "-h" | "--help" => {
                eprintln!("{USAGE}");
                return Ok(());
            }
            _ if config_path.is_none() => config_path = Some(arg),
            _ => return Err(USAGE.into()),
        }
    }

    let mut config = match &config_path {
        Some(path) => BookmarksConfig::load_from_file(path)?,
        None => BookmarksConfig::default(),
    };
    if let Some(version) = version {
        config = config.with_version(version);
    }

    let fetcher = HttpFetcher::with_timeout(Duration::from_secs(config.request_timeout_secs))?;
    let report = build_bookmarks(&fetcher, &config).await?;

    if !report.warnings.is_empty() {
        tracing::warn!(
            "[Bookmarks] Tree is incomplete: {} documents skipped or malformed",
            report.warnings.len()
        );
    }

    println!("{}", serde_json::to_string_pretty(&report.tree)?);
    Ok(())
}
