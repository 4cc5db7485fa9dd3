use crate::common::load_fixture;
use doc_bookmarks::manual::toc::{
    article_id_from_path, is_template_placeholder, parse_article_links, parse_table_of_contents,
};

#[test]
fn test_parses_sections_in_source_order() {
    let toc = parse_table_of_contents(&load_fixture("manual/documentation.md"));

    let names: Vec<&str> = toc.sections.keys().map(String::as_str).collect();
    assert_eq!(
        names,
        vec![
            "Prologue",
            "Getting Started",
            "Architecture Concepts",
            "API Documentation"
        ]
    );

    let getting_started = &toc.sections["Getting Started"];
    assert_eq!(getting_started.name, "Getting Started");
    let articles: Vec<(&str, &str)> = getting_started
        .articles
        .iter()
        .map(|(name, id)| (name.as_str(), id.as_str()))
        .collect();
    assert_eq!(
        articles,
        vec![
            ("Installation", "installation"),
            ("Configuration", "configuration"),
            ("Directory Structure", "structure"),
        ]
    );
    assert_eq!(toc.article_count(), 6);
}

#[test]
fn test_skips_placeholder_links_but_keeps_their_section() {
    let toc = parse_table_of_contents(&load_fixture("manual/documentation.md"));
    let api = &toc.sections["API Documentation"];
    assert!(api.articles.is_empty());
    assert!(toc
        .sections
        .values()
        .flat_map(|section| section.articles.values())
        .all(|id| !id.contains('{')));
}

#[test]
fn test_yields_one_section_per_delimiter() {
    let index = "intro text\n- ## One\n- [A](/docs/{{version}}/a)\n- ## Two\n- ## Three\n    - [B](b.md)\n";
    let toc = parse_table_of_contents(index);
    assert_eq!(toc.len(), 3);
    assert_eq!(toc.sections["One"].articles["A"], "a");
    assert!(toc.sections["Two"].articles.is_empty());
    assert_eq!(toc.sections["Three"].articles["B"], "b");
}

#[test]
fn test_repeated_article_name_overwrites_in_place() {
    let index = "- ## Basics\n- [Routing](/docs/routing)\n- [Views](/docs/views)\n- [Routing](/docs/routes)\n";
    let toc = parse_table_of_contents(index);
    let basics = &toc.sections["Basics"];
    let entries: Vec<(&str, &str)> = basics
        .articles
        .iter()
        .map(|(name, id)| (name.as_str(), id.as_str()))
        .collect();
    assert_eq!(entries, vec![("Routing", "routes"), ("Views", "views")]);
}

#[test]
fn test_placeholder_with_extension_is_not_an_article() {
    let toc = parse_table_of_contents("- ## API\n- [API](/api/{{version}}.md)\n- [Docs](/docs/{{version}}/readme.md)\n");
    let api = &toc.sections["API"];
    assert!(api.articles.values().all(|id| !id.contains('{')));
    assert_eq!(api.articles.len(), 1);
    assert_eq!(api.articles["Docs"], "readme");
}

#[test]
fn test_document_without_delimiters_has_no_sections() {
    let toc = parse_table_of_contents("# Docs\n\n- [Installation](/docs/installation)\n");
    assert!(toc.is_empty());
}

#[test]
fn test_handles_crlf_line_endings() {
    let toc = parse_table_of_contents("- ## Prologue\r\n- [Release Notes](/docs/releases)\r\n");
    assert_eq!(toc.sections["Prologue"].articles["Release Notes"], "releases");
}

#[test]
fn test_derives_article_id_from_last_segment() {
    assert_eq!(
        article_id_from_path("/docs/{{version}}/installation").as_deref(),
        Some("installation")
    );
    assert_eq!(article_id_from_path("guides/setup.md").as_deref(), Some("setup"));
    assert_eq!(
        article_id_from_path("/docs/11.x/routing#basic-routing").as_deref(),
        Some("routing")
    );
    assert_eq!(article_id_from_path("/docs/views?tab=1").as_deref(), Some("views"));
    assert_eq!(article_id_from_path("/api/{{version}}"), None);
    assert_eq!(article_id_from_path("/api/{{version}}.html"), None);
    assert_eq!(article_id_from_path("{{version}}.md"), None);
    assert_eq!(article_id_from_path("/docs/"), None);
    assert_eq!(article_id_from_path("#anchor-only"), None);
}

#[test]
fn test_recognises_template_placeholders() {
    assert!(is_template_placeholder("{{version}}"));
    assert!(is_template_placeholder("{version}"));
    assert!(!is_template_placeholder("installation"));
    assert!(!is_template_placeholder("{{version}}-notes"));
}

#[test]
fn test_extracts_links_from_block() {
    let links = parse_article_links("    - [Release Notes](/docs/{{version}}/releases)\n    - [API](/api/{{version}})\n");
    assert_eq!(links.len(), 1);
    assert_eq!(links[0].name, "Release Notes");
    assert_eq!(links[0].article_id, "releases");
}
