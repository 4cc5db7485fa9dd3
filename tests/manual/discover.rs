use crate::common::{load_fixture, raw_url, MockFetcher};
use doc_bookmarks::manual::discover::discover_manual;
use doc_bookmarks::BookmarkError;

#[tokio::test]
async fn test_discovers_sections_from_index_document() {
    let mut fetcher = MockFetcher::new();
    let index_url = raw_url("documentation.md");
    fetcher.add_fixture(&index_url, &load_fixture("manual/documentation.md"));

    let result = discover_manual(&fetcher, &index_url)
        .await
        .expect("discovery should succeed");

    assert_eq!(result.index_url, index_url);
    assert_eq!(result.toc.len(), 4);
    assert!(result.warning.is_none());
    assert_eq!(fetcher.requested(), vec![index_url]);
}

#[tokio::test]
async fn test_unreachable_index_is_an_error() {
    let fetcher = MockFetcher::new();
    let err = discover_manual(&fetcher, &raw_url("documentation.md"))
        .await
        .expect_err("missing index must fail");

    assert!(err.is_retrieval());
    assert!(err.to_string().contains("documentation.md"));
}

#[tokio::test]
async fn test_index_without_sections_is_reported_as_malformed() {
    let mut fetcher = MockFetcher::new();
    let index_url = raw_url("documentation.md");
    fetcher.add_fixture(&index_url, "# Documentation\n\nNothing here yet.\n");

    let result = discover_manual(&fetcher, &index_url)
        .await
        .expect("malformed index is not fatal");

    assert!(result.toc.is_empty());
    assert!(matches!(
        result.warning,
        Some(BookmarkError::MalformedDocument { .. })
    ));
}
