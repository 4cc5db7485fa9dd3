use crate::types::{IndexSection, TableOfContents};
use regex::Regex;
use std::sync::LazyLock;

static SECTION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^[ \t]*- ## (.+?)[ \t]*\r?$").expect("SECTION_RE should compile")
});
static LINK_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[(.+?)\]\((.+?)\)").expect("LINK_RE should compile"));

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleLink {
    pub name: String,
    pub article_id: String,
}

/// Splits the index document into its sections and their article links.
///
/// Sections appear in source order. Text before the first `- ## ` line is
/// ignored. Links whose last path segment is a template placeholder such as
/// `{{version}}` point at generated API docs and are left out.
pub fn parse_table_of_contents(index: &str) -> TableOfContents {
    let delimiters: Vec<(String, usize, usize)> = SECTION_RE
        .captures_iter(index)
        .filter_map(|caps| {
            let whole = caps.get(0)?;
            Some((caps[1].trim().to_string(), whole.start(), whole.end()))
        })
        .collect();

    let mut toc = TableOfContents::default();
    for (position, (name, _, body_start)) in delimiters.iter().enumerate() {
        let body_end = delimiters
            .get(position + 1)
            .map_or(index.len(), |(_, next_start, _)| *next_start);
        let section = toc
            .sections
            .entry(name.clone())
            .or_insert_with(|| IndexSection {
                name: name.clone(),
                ..IndexSection::default()
            });

        for link in parse_article_links(&index[*body_start..body_end]) {
            section.articles.insert(link.name, link.article_id);
        }
    }

    toc
}

pub fn parse_article_links(block: &str) -> Vec<ArticleLink> {
    LINK_RE
        .captures_iter(block)
        .filter_map(|caps| {
            let article_id = article_id_from_path(&caps[2])?;
            Some(ArticleLink {
                name: caps[1].trim().to_string(),
                article_id,
            })
        })
        .collect()
}

/// Last path segment without query, fragment or extension.
///
/// Returns `None` for placeholders and for paths that end in a separator.
pub fn article_id_from_path(path: &str) -> Option<String> {
    let path = path.split(['?', '#']).next().unwrap_or_default().trim();
    let segment = path.rsplit('/').next().unwrap_or_default();
    let stem = match segment.rsplit_once('.') {
        Some((stem, _extension)) if !stem.is_empty() => stem,
        _ => segment,
    };
    if stem.is_empty() || is_template_placeholder(segment) || is_template_placeholder(stem) {
        return None;
    }
    Some(stem.to_string())
}

pub fn is_template_placeholder(segment: &str) -> bool {
    segment.starts_with('{') && segment.ends_with('}')
}
