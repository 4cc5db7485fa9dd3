use crate::error::BookmarkError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const VERSION_PLACEHOLDER: &str = "{version}";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BookmarksConfig {
    pub version: String,
    /// Raw markdown location, `{version}` is substituted.
    pub raw_base_url: String,
    /// Published documentation location, `{version}` is substituted.
    pub docs_base_url: String,
    pub index_document: String,
    pub article_extension: String,
    pub root_label: String,
    pub fetch_concurrency: usize,
    pub request_timeout_secs: u64,
}

impl Default for BookmarksConfig {
    fn default() -> Self {
        Self {
            version: "master".to_string(),
            raw_base_url: "https://raw.githubusercontent.com/laravel/docs/{version}".to_string(),
            docs_base_url: "https://laravel.com/docs/{version}".to_string(),
            index_document: "documentation.md".to_string(),
            article_extension: ".md".to_string(),
            root_label: "Documentation".to_string(),
            fetch_concurrency: 8,
            request_timeout_secs: 30,
        }
    }
}

impl BookmarksConfig {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, BookmarkError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| BookmarkError::Config {
            path: path.display().to_string(),
            reason: format!("Failed to read config: {e}"),
        })?;
        let config: BookmarksConfig =
            serde_json::from_str(&content).map_err(|e| BookmarkError::Config {
                path: path.display().to_string(),
                reason: format!("Failed to parse config: {e}"),
            })?;
        Ok(config)
    }

    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = version.into();
        self
    }

    pub fn raw_base(&self) -> String {
        expand_version(&self.raw_base_url, &self.version)
    }

    pub fn docs_base(&self) -> String {
        expand_version(&self.docs_base_url, &self.version)
    }

    pub fn index_url(&self) -> String {
        format!("{}/{}", self.raw_base(), self.index_document)
    }

    pub fn article_url(&self, article_id: &str) -> String {
        format!("{}/{article_id}{}", self.raw_base(), self.article_extension)
    }

    pub fn concurrency(&self) -> usize {
        self.fetch_concurrency.max(1)
    }
}

fn expand_version(template: &str, version: &str) -> String {
    template
        .replace(VERSION_PLACEHOLDER, version)
        .trim_end_matches('/')
        .to_string()
}
