use crate::error::BookmarkError;
use crate::types::Article;

/// Per-build values derived once from the configuration.
pub struct BuildContext<'a> {
    pub docs_base: &'a str,
    pub index_url: &'a str,
    pub root_label: &'a str,
}

/// One article to fetch and parse, as listed in the table of contents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleJob {
    pub section: String,
    pub name: String,
    pub article_id: String,
    pub url: String,
}

impl ArticleJob {
    pub fn label(&self) -> String {
        format!("{} / {}", self.section, self.name)
    }
}

pub struct ArticleOutcome {
    pub job: ArticleJob,
    pub article: Article,
    pub warnings: Vec<BookmarkError>,
}

pub enum ArticleStatus {
    Parsed,
    Untitled,
    Unavailable,
}

impl ArticleStatus {
    pub fn as_str(&self) -> &str {
        match self {
            ArticleStatus::Parsed => "parsed",
            ArticleStatus::Untitled => "untitled",
            ArticleStatus::Unavailable => "unavailable",
        }
    }
}
