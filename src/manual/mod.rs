pub mod anchor;
pub mod article;
pub mod discover;
pub mod numbering;
pub mod toc;
pub mod tree;
