use crate::error::BookmarkError;
use crate::manual::toc::parse_table_of_contents;
use crate::runtime::fetcher::Fetcher;
use crate::types::TableOfContents;

#[derive(Debug)]
pub struct DiscoveryResult {
    pub index_url: String,
    pub toc: TableOfContents,
    /// Set when the index had no section delimiters at all.
    pub warning: Option<BookmarkError>,
}

/// Fetches the index document and parses it into the section skeleton.
///
/// A failed fetch is returned as an error: nothing can be built without the
/// table of contents.
pub async fn discover_manual(
    fetcher: &dyn Fetcher,
    index_url: &str,
) -> Result<DiscoveryResult, BookmarkError> {
    let index = fetcher.fetch(index_url).await?;
    let toc = parse_table_of_contents(&index);

    let warning = if toc.is_empty() {
        Some(BookmarkError::malformed(
            index_url,
            "no `- ## <section>` delimiters found",
        ))
    } else {
        None
    };

    Ok(DiscoveryResult {
        index_url: index_url.to_string(),
        toc,
        warning,
    })
}
