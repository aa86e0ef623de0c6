//! Run configuration, threaded explicitly into the loader and renderer.

use std::path::{Path, PathBuf};

pub const DEFAULT_OUTPUT: &str = "README.md";
pub const DEFAULT_HEADER: &str = "HEADER.md";
pub const DEFAULT_FOOTER: &str = "FOOTER.md";
pub const DEFAULT_HEADING_LEVEL: usize = 2;

/// Name of the directory, directly below the project root, holding components.
pub const TEMPLATES_DIR: &str = "templates";

/// Full configuration for one documentation run.
#[derive(Debug, Clone)]
pub struct Config {
    /// Root of the CI component project.
    pub project: PathBuf,
    /// Output file, relative to `project` unless absolute.
    pub output: PathBuf,
    /// Global header file, relative to `project`.
    pub header: PathBuf,
    /// Global footer file, relative to `project`.
    pub footer: PathBuf,
    pub loader: LoaderConfig,
    pub render: RenderConfig,
}

impl Config {
    /// Configuration with every setting at its default, rooted at `project`.
    pub fn new(project: impl Into<PathBuf>) -> Self {
        Self {
            project: project.into(),
            output: PathBuf::from(DEFAULT_OUTPUT),
            header: PathBuf::from(DEFAULT_HEADER),
            footer: PathBuf::from(DEFAULT_FOOTER),
            loader: LoaderConfig::default(),
            render: RenderConfig::default(),
        }
    }

    pub fn templates_dir(&self) -> PathBuf {
        self.project.join(TEMPLATES_DIR)
    }

    pub fn output_path(&self) -> PathBuf {
        self.project_file(&self.output)
    }

    pub fn header_path(&self) -> PathBuf {
        self.project_file(&self.header)
    }

    pub fn footer_path(&self) -> PathBuf {
        self.project_file(&self.footer)
    }

    // Path::join keeps absolute paths as-is.
    fn project_file(&self, file: &Path) -> PathBuf {
        self.project.join(file)
    }
}

/// File names the loader looks for next to a `template.yaml` bundle.
#[derive(Debug, Clone)]
pub struct LoaderConfig {
    pub component_header: String,
    pub component_footer: String,
    /// Combined prose file; when present it replaces header and footer.
    pub component_readme: Option<String>,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            component_header: DEFAULT_HEADER.to_string(),
            component_footer: DEFAULT_FOOTER.to_string(),
            component_readme: None,
        }
    }
}

/// Settings consulted while rendering component sections.
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Number of `#` characters prefixed to each component heading.
    pub heading_level: usize,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            heading_level: DEFAULT_HEADING_LEVEL,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paths_are_relative_to_project() {
        let config = Config::new("/work/project");
        assert_eq!(config.templates_dir(), PathBuf::from("/work/project/templates"));
        assert_eq!(config.output_path(), PathBuf::from("/work/project/README.md"));
        assert_eq!(config.header_path(), PathBuf::from("/work/project/HEADER.md"));
        assert_eq!(config.footer_path(), PathBuf::from("/work/project/FOOTER.md"));
    }

    #[test]
    fn absolute_output_is_kept() {
        let mut config = Config::new("/work/project");
        config.output = PathBuf::from("/tmp/docs.md");
        assert_eq!(config.output_path(), PathBuf::from("/tmp/docs.md"));
    }

    #[test]
    fn defaults_match_cli() {
        let loader = LoaderConfig::default();
        assert_eq!(loader.component_header, "HEADER.md");
        assert_eq!(loader.component_footer, "FOOTER.md");
        assert!(loader.component_readme.is_none());
        assert_eq!(RenderConfig::default().heading_level, 2);
    }
}
