//! Generate a README for a GitLab CI component project.
//!
//! Every component below `<project>/templates` is loaded into a [`Component`]
//! and rendered as a Markdown section with an input table. The sections are
//! wrapped in a global header and footer and written to a single document.

pub mod config;
pub mod discover;
pub mod error;
pub mod generate;
pub mod loader;
pub mod model;
pub mod render;
pub mod yaml;

pub use config::{Config, LoaderConfig, RenderConfig};
pub use error::{Error, Result, SpecError};
pub use generate::{generate, render_project};
pub use loader::Loader;
pub use model::{Component, ComponentInput, ComponentSpec};
pub use render::MarkdownRenderer;
