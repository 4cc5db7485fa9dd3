use thiserror::Error;

#[derive(Debug, Error)]
pub enum BookmarkError {
    #[error("Failed to retrieve {url}: {reason}")]
    Retrieval { url: String, reason: String },

    #[error("Malformed document {document}: {reason}")]
    MalformedDocument { document: String, reason: String },

    #[error("Invalid configuration at {path}: {reason}")]
    Config { path: String, reason: String },
}

impl BookmarkError {
    pub fn retrieval(url: &str, reason: impl Into<String>) -> Self {
        BookmarkError::Retrieval {
            url: url.to_string(),
            reason: reason.into(),
        }
    }

    pub fn malformed(document: &str, reason: impl Into<String>) -> Self {
        BookmarkError::MalformedDocument {
            document: document.to_string(),
            reason: reason.into(),
        }
    }

    pub fn is_retrieval(&self) -> bool {
        matches!(self, BookmarkError::Retrieval { .. })
    }
}
