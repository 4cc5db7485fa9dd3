pub mod config;
pub mod error;
pub mod manual;
pub mod runtime;
pub mod types;

pub use config::BookmarksConfig;
pub use error::BookmarkError;
pub use runtime::orchestrator::build_bookmarks;
pub use types::{BookmarkTree, BuildReport, SectionEntry};
