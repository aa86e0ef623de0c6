//! Turns a discovered spec file into a [`Component`].

use crate::config::LoaderConfig;
use crate::discover::is_bundle_file;
use crate::error::{Error, Result, SpecError};
use crate::model::{Component, ComponentSpec, SpecFile};
use crate::yaml;
use std::fs;
use std::io;
use std::path::Path;
use tracing::debug;

pub struct Loader<'a> {
    config: &'a LoaderConfig,
}

impl<'a> Loader<'a> {
    pub fn new(config: &'a LoaderConfig) -> Self {
        Self { config }
    }

    /// Load one component.
    ///
    /// Bundles (`<name>/template.yaml`) take their name from the directory and
    /// may carry prose files next to the spec; lone files take their name from
    /// the file stem and never carry prose.
    pub fn load(&self, path: &Path) -> Result<Component> {
        let content = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        let spec = parse_spec(&content).map_err(|source| Error::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        let mut component = Component {
            name: derive_name(path),
            spec,
            ..Default::default()
        };

        if is_bundle_file(path) {
            let dir = path.parent().unwrap_or_else(|| Path::new("."));
            self.attach_prose(dir, &mut component)?;
        }

        debug!(
            name = %component.name,
            path = %path.display(),
            inputs = component.spec.as_ref().map_or(0, |s| s.inputs.len()),
            "loaded component"
        );
        Ok(component)
    }

    fn attach_prose(&self, dir: &Path, component: &mut Component) -> Result<()> {
        if let Some(ref readme) = self.config.component_readme {
            if let Some(text) = read_optional(&dir.join(readme))? {
                component.header = Some(text);
                return Ok(());
            }
        }
        component.header = read_optional(&dir.join(&self.config.component_header))?;
        component.footer = read_optional(&dir.join(&self.config.component_footer))?;
        Ok(())
    }
}

/// Derive the component name from its spec path.
///
/// "templates/build.yml" → "build", "templates/deploy/template.yaml" → "deploy"
pub fn derive_name(path: &Path) -> String {
    let name = if is_bundle_file(path) {
        path.parent().and_then(|p| p.file_name())
    } else {
        path.file_stem()
    };
    name.map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// Parse the `spec:` block from the first document of a YAML stream.
///
/// Component templates put the spec header and the job definitions in
/// separate documents; only the header matters here. Scalars keep the
/// spelling they have in the file.
pub(crate) fn parse_spec(
    content: &str,
) -> std::result::Result<Option<ComponentSpec>, SpecError> {
    let Some(document) = yaml::first_document(content)? else {
        return Ok(None);
    };
    let file: Option<SpecFile> = serde_yaml::from_value(document)?;
    Ok(file.and_then(|f| f.spec))
}

/// Read a prose file, treating "not found" as absent.
pub(crate) fn read_optional(path: &Path) -> Result<Option<String>> {
    match fs::read_to_string(path) {
        Ok(text) => Ok(Some(text)),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(Error::io(path, e)),
    }
}
