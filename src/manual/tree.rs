use crate::types::{Article, BookmarkTree, SectionEntry, TableOfContents};
use indexmap::IndexMap;

/// Parsed articles keyed by (section name, article display name).
pub type ParsedArticles = IndexMap<(String, String), Article>;

/// Builds the bookmark tree from the table of contents and the parsed
/// articles, then numbers sections and articles.
///
/// The root link is placed first and therefore takes section number 0.
pub fn assemble_tree(
    root_label: &str,
    docs_base: &str,
    toc: &TableOfContents,
    articles: &ParsedArticles,
) -> BookmarkTree {
    let mut tree = BookmarkTree::default();
    tree.entries
        .insert(root_label.to_string(), SectionEntry::Link(docs_base.to_string()));

    for (section_name, section) in &toc.sections {
        let mut article_links = IndexMap::with_capacity(section.articles.len());
        for article_name in section.articles.keys() {
            let key = (section_name.clone(), article_name.clone());
            if let Some(article) = articles.get(&key) {
                article_links.insert(article_name.clone(), article.links(docs_base));
            }
        }
        tree.entries
            .insert(section_name.clone(), SectionEntry::Articles(article_links));
    }

    number_sections_and_articles(tree)
}

/// Prefixes every top-level label with `"<i>. "` (from 0) and every article
/// label inside a section with `"<j>. "` (from 1, per section). Links are
/// numbered but not descended into.
pub fn number_sections_and_articles(tree: BookmarkTree) -> BookmarkTree {
    let entries = tree
        .entries
        .into_iter()
        .enumerate()
        .map(|(section_index, (section_name, entry))| {
            let entry = match entry {
                SectionEntry::Link(url) => SectionEntry::Link(url),
                SectionEntry::Articles(articles) => SectionEntry::Articles(
                    articles
                        .into_iter()
                        .enumerate()
                        .map(|(article_index, (article_name, links))| {
                            (format!("{}. {article_name}", article_index + 1), links)
                        })
                        .collect(),
                ),
            };
            (format!("{section_index}. {section_name}"), entry)
        })
        .collect();

    BookmarkTree { entries }
}
