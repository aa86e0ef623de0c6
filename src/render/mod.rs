//! Rendering of component sections and the assembled document.

pub mod markdown;
pub mod table;

pub use markdown::{MarkdownRenderer, DEFAULT_HEADER};
