use crate::error::BookmarkError;
use indexmap::IndexMap;
use serde::Serialize;

/// One `- ## <name>` block of the index document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct IndexSection {
    pub name: String,
    /// Display name -> article id, in first-seen order.
    pub articles: IndexMap<String, String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TableOfContents {
    pub sections: IndexMap<String, IndexSection>,
}

impl TableOfContents {
    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    pub fn article_count(&self) -> usize {
        self.sections
            .values()
            .map(|section| section.articles.len())
            .sum()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Heading {
    pub level: u8,
    pub text: String,
    pub serial_number: String,
    pub anchor: String,
}

impl Heading {
    pub fn label(&self) -> String {
        format!("{} {}", self.serial_number, self.text)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Article {
    pub id: String,
    pub title: Option<String>,
    pub headings: Vec<Heading>,
}

impl Article {
    pub fn title_label(&self) -> String {
        format!("0. {}", self.title.as_deref().unwrap_or_default())
    }

    /// Heading label -> absolute URL, starting with the synthetic title entry.
    pub fn links(&self, docs_base: &str) -> IndexMap<String, String> {
        let page_url = format!("{docs_base}/{}", self.id);
        let mut links = IndexMap::with_capacity(self.headings.len() + 1);
        links.insert(self.title_label(), page_url.clone());
        for heading in &self.headings {
            links.insert(heading.label(), format!("{page_url}{}", heading.anchor));
        }
        links
    }
}

/// Raw text of an article, or an explicit marker that it could not be fetched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArticleContent {
    Fetched(String),
    Unavailable,
}

impl ArticleContent {
    pub fn as_text(&self) -> &str {
        match self {
            ArticleContent::Fetched(text) => text,
            ArticleContent::Unavailable => "",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum SectionEntry {
    Link(String),
    Articles(IndexMap<String, IndexMap<String, String>>),
}

impl SectionEntry {
    pub fn as_link(&self) -> Option<&str> {
        match self {
            SectionEntry::Link(url) => Some(url),
            SectionEntry::Articles(_) => None,
        }
    }

    pub fn as_articles(&self) -> Option<&IndexMap<String, IndexMap<String, String>>> {
        match self {
            SectionEntry::Link(_) => None,
            SectionEntry::Articles(articles) => Some(articles),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct BookmarkTree {
    pub entries: IndexMap<String, SectionEntry>,
}

impl BookmarkTree {
    pub fn get(&self, label: &str) -> Option<&SectionEntry> {
        self.entries.get(label)
    }

    pub fn labels(&self) -> Vec<&str> {
        self.entries.keys().map(String::as_str).collect()
    }
}

#[derive(Debug, Default)]
pub struct BuildReport {
    pub tree: BookmarkTree,
    pub warnings: Vec<BookmarkError>,
}
