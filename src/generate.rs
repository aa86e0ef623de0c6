//! End-to-end pipeline: discover → load → render → write.

use crate::config::Config;
use crate::discover;
use crate::error::{Error, Result};
use crate::loader::{read_optional, Loader};
use crate::render::MarkdownRenderer;
use std::fs;
use std::path::PathBuf;
use tracing::info;

/// Build the document for the project described by `config`.
///
/// Any failing component aborts the whole run.
pub fn render_project(config: &Config) -> Result<String> {
    if !config.project.is_dir() {
        return Err(Error::ProjectNotFound {
            path: config.project.clone(),
        });
    }

    let paths = discover::discover(&config.templates_dir())?;

    let loader = Loader::new(&config.loader);
    let components = paths
        .iter()
        .map(|path| loader.load(path))
        .collect::<Result<Vec<_>>>()?;

    let header = read_optional(&config.header_path())?;
    let footer = read_optional(&config.footer_path())?;

    let renderer = MarkdownRenderer::new(&config.render);
    Ok(renderer.render(&components, header.as_deref(), footer.as_deref()))
}

/// Render the project and write the document to the configured output.
///
/// Nothing is written unless rendering succeeded. Returns the output path.
pub fn generate(config: &Config) -> Result<PathBuf> {
    let document = render_project(config)?;
    let output = config.output_path();
    fs::write(&output, &document).map_err(|e| Error::io(&output, e))?;
    info!(path = %output.display(), bytes = document.len(), "wrote document");
    Ok(output)
}
