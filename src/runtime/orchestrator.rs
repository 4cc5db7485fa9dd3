use crate::config::BookmarksConfig;
use crate::error::BookmarkError;
use crate::manual::article::parse_article;
use crate::manual::discover::discover_manual;
use crate::manual::numbering::SerialNumbers;
use crate::manual::tree::{assemble_tree, ParsedArticles};
use crate::runtime::fetcher::Fetcher;
use crate::runtime::logging::{log_event, LogLevel};
use crate::runtime::types::{ArticleJob, ArticleOutcome, ArticleStatus, BuildContext};
use crate::types::{ArticleContent, BuildReport, TableOfContents};
use futures_util::stream::{self, StreamExt};
use serde_json::json;

/// Builds the complete bookmark tree for one manual version.
///
/// Only a failure to fetch the index document is returned as an error.
/// Unreachable or malformed articles end up in `BuildReport::warnings`.
pub async fn build_bookmarks(
    fetcher: &dyn Fetcher,
    config: &BookmarksConfig,
) -> Result<BuildReport, BookmarkError> {
    let docs_base = config.docs_base();
    let index_url = config.index_url();
    let context = BuildContext {
        docs_base: &docs_base,
        index_url: &index_url,
        root_label: &config.root_label,
    };

    log_event(
        LogLevel::Info,
        "Fetching table of contents",
        Some(json!({ "url": context.index_url, "version": config.version })),
    );

    let discovery = match discover_manual(fetcher, context.index_url).await {
        Ok(discovery) => discovery,
        Err(err) => {
            log_event(
                LogLevel::Error,
                "Table of contents unavailable, aborting build",
                Some(json!({ "error": err.to_string() })),
            );
            return Err(err);
        }
    };

    let mut warnings = Vec::new();
    if let Some(warning) = discovery.warning {
        log_event(LogLevel::Warn, &warning.to_string(), None);
        warnings.push(warning);
    }

    let jobs = article_jobs(&discovery.toc, config);
    tracing::info!(
        "[Bookmarks] {} sections, {} articles",
        discovery.toc.len(),
        jobs.len()
    );

    let outcomes: Vec<ArticleOutcome> = stream::iter(jobs)
        .map(|job| process_article(fetcher, job))
        .buffered(config.concurrency())
        .collect()
        .await;

    let mut articles = ParsedArticles::with_capacity(outcomes.len());
    for outcome in outcomes {
        warnings.extend(outcome.warnings);
        articles.insert((outcome.job.section, outcome.job.name), outcome.article);
    }

    let tree = assemble_tree(
        context.root_label,
        context.docs_base,
        &discovery.toc,
        &articles,
    );

    tracing::info!(
        "[Bookmarks] Build complete: {} entries, {} warnings",
        tree.entries.len(),
        warnings.len()
    );

    Ok(BuildReport { tree, warnings })
}

pub fn article_jobs(toc: &TableOfContents, config: &BookmarksConfig) -> Vec<ArticleJob> {
    toc.sections
        .iter()
        .flat_map(|(section_name, section)| {
            section.articles.iter().map(|(name, article_id)| ArticleJob {
                section: section_name.clone(),
                name: name.clone(),
                article_id: article_id.clone(),
                url: config.article_url(article_id),
            })
        })
        .collect()
}

async fn process_article(fetcher: &dyn Fetcher, job: ArticleJob) -> ArticleOutcome {
    let mut warnings = Vec::new();

    let content = match fetcher.fetch(&job.url).await {
        Ok(text) => ArticleContent::Fetched(text),
        Err(err) => {
            log_event(
                LogLevel::Warn,
                &format!("{}: skipped, {err}", job.label()),
                Some(json!({ "articleId": job.article_id })),
            );
            warnings.push(err);
            ArticleContent::Unavailable
        }
    };

    let mut numbering = SerialNumbers::new();
    let article = parse_article(&job.article_id, &content, &mut numbering);

    let status = match (&content, &article.title) {
        (ArticleContent::Unavailable, _) => ArticleStatus::Unavailable,
        (ArticleContent::Fetched(_), None) => {
            let warning = BookmarkError::malformed(&job.url, "no `# <title>` heading found");
            log_event(LogLevel::Warn, &warning.to_string(), None);
            warnings.push(warning);
            ArticleStatus::Untitled
        }
        (ArticleContent::Fetched(_), Some(_)) => ArticleStatus::Parsed,
    };

    tracing::debug!(
        "[Bookmarks] {}: {} ({} headings)",
        job.label(),
        status.as_str(),
        article.headings.len()
    );

    ArticleOutcome {
        job,
        article,
        warnings,
    }
}
