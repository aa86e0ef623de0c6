//! Markdown document for a list of components.
//!
//! Layout:
//!
//! ```text
//! <global header, or DEFAULT_HEADER>
//!
//! ## <component>          (one section per non-empty component)
//!
//! <component header>
//!
//! <input table>
//!
//! <component footer>
//!
//! <global footer>
//! ```
//!
//! The result is trimmed and ends with exactly one newline, so rendering the
//! same components twice is byte-identical.

use crate::config::RenderConfig;
use crate::model::Component;
use crate::render::table;

/// Document header used when the project has no header file.
pub const DEFAULT_HEADER: &str = "# GitLab CI Components

This repository contains the following components:

[[_TOC_]]
";

pub struct MarkdownRenderer<'a> {
    config: &'a RenderConfig,
}

impl<'a> MarkdownRenderer<'a> {
    pub fn new(config: &'a RenderConfig) -> Self {
        Self { config }
    }

    /// Render the full document.
    ///
    /// `header` is emitted verbatim, followed by whatever newlines it lacks to
    /// end in a blank line; `footer` is trimmed.
    pub fn render(
        &self,
        components: &[Component],
        header: Option<&str>,
        footer: Option<&str>,
    ) -> String {
        let mut output = String::new();
        output.push_str(header.unwrap_or(DEFAULT_HEADER));

        for component in components {
            let section = self.render_component(component);
            if !section.is_empty() {
                push_block(&mut output, &section);
            }
        }

        if let Some(footer) = footer.map(str::trim).filter(|f| !f.is_empty()) {
            push_block(&mut output, footer);
        }

        format!("{}\n", output.trim())
    }

    /// Render one component section, or `""` when it has nothing to show.
    pub fn render_component(&self, component: &Component) -> String {
        if component.is_empty() {
            return String::new();
        }

        let mut blocks: Vec<String> = Vec::with_capacity(4);
        blocks.push(self.heading(&component.name));
        if let Some(header) = component.header_text() {
            blocks.push(header.to_string());
        }
        if let Some(ref spec) = component.spec {
            blocks.push(table::render_table(spec));
        }
        if let Some(footer) = component.footer_text() {
            blocks.push(footer.to_string());
        }

        let mut section = blocks.join("\n\n");
        section.push('\n');
        section
    }

    fn heading(&self, name: &str) -> String {
        format!("{} {}", "#".repeat(self.config.heading_level), name)
    }
}

/// Append `block` separated from what precedes it by one blank line.
fn push_block(output: &mut String, block: &str) {
    if !output.is_empty() && !output.ends_with("\n\n") {
        output.push_str(if output.ends_with('\n') { "\n" } else { "\n\n" });
    }
    output.push_str(block);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ComponentSpec;

    const NO_DEFAULT: &str = table::NO_DEFAULT;

    fn spec(yaml: &str) -> Option<ComponentSpec> {
        Some(serde_yaml::from_str(yaml).unwrap())
    }

    fn prefix_spec() -> Option<ComponentSpec> {
        spec("inputs:\n  job-prefix:\n    description: Define a prefix for the job name\n")
    }

    fn prefix_table() -> String {
        format!(
            "| Input / Variable | Description                      | Default value |\n\
             | ---------------- | -------------------------------- | ------------- |\n\
             | `job-prefix`     | Define a prefix for the job name | {NO_DEFAULT}             |"
        )
    }

    fn component(name: &str) -> Component {
        Component {
            name: name.to_string(),
            spec: prefix_spec(),
            ..Default::default()
        }
    }

    #[test]
    fn minimal_component() {
        let config = RenderConfig::default();
        let out = MarkdownRenderer::new(&config).render_component(&component("Component test"));
        assert_eq!(out, format!("## Component test\n\n{}\n", prefix_table()));
    }

    #[test]
    fn component_header_is_trimmed() {
        let config = RenderConfig::default();
        let mut c = component("Header test");
        c.header = Some("\nSome\nHeader\n\n".to_string());
        let out = MarkdownRenderer::new(&config).render_component(&c);
        assert_eq!(
            out,
            format!("## Header test\n\nSome\nHeader\n\n{}\n", prefix_table())
        );
    }

    #[test]
    fn component_footer_follows_table() {
        let config = RenderConfig::default();
        let mut c = component("Footer test");
        c.footer = Some("Some Footer\n".to_string());
        let out = MarkdownRenderer::new(&config).render_component(&c);
        assert_eq!(
            out,
            format!("## Footer test\n\n{}\n\nSome Footer\n", prefix_table())
        );
    }

    #[test]
    fn heading_level_is_configurable() {
        let config = RenderConfig { heading_level: 3 };
        let out = MarkdownRenderer::new(&config).render_component(&component("Level test"));
        assert!(out.starts_with("### Level test\n\n"));
    }

    #[test]
    fn prose_only_component_has_no_table() {
        let config = RenderConfig::default();
        let c = Component {
            name: "docs".to_string(),
            header: Some("Only prose".to_string()),
            ..Default::default()
        };
        let out = MarkdownRenderer::new(&config).render_component(&c);
        assert_eq!(out, "## docs\n\nOnly prose\n");
    }

    #[test]
    fn empty_component_renders_nothing() {
        let config = RenderConfig::default();
        let renderer = MarkdownRenderer::new(&config);
        let c = Component {
            name: "placeholder".to_string(),
            ..Default::default()
        };
        assert_eq!(renderer.render_component(&c), "");

        let doc = renderer.render(&[c], None, None);
        assert!(!doc.contains("placeholder"));
        assert_eq!(doc, DEFAULT_HEADER);
    }

    #[test]
    fn default_header_block() {
        let config = RenderConfig::default();
        let doc = MarkdownRenderer::new(&config).render(&[component("a")], None, None);
        assert!(doc.starts_with(
            "# GitLab CI Components\n\nThis repository contains the following components:\n\n[[_TOC_]]\n\n## a\n"
        ));
    }

    #[test]
    fn custom_header_and_footer() {
        let config = RenderConfig::default();
        let doc = MarkdownRenderer::new(&config).render(
            &[component("a")],
            Some("# My Components"),
            Some("\n\nMaintained by the platform team.\n\n"),
        );
        assert_eq!(
            doc,
            format!(
                "# My Components\n\n## a\n\n{}\n\nMaintained by the platform team.\n",
                prefix_table()
            )
        );
    }

    #[test]
    fn header_gets_a_blank_line_before_sections() {
        let config = RenderConfig::default();
        let renderer = MarkdownRenderer::new(&config);
        for header in ["# Title", "# Title\n", "# Title\n\n"] {
            let doc = renderer.render(&[component("a")], Some(header), None);
            assert!(doc.starts_with("# Title\n\n## a\n"), "{header:?} gave {doc:?}");
        }

        let header = "# Title\n\n  kept as is\n";
        let doc = renderer.render(&[component("a")], Some(header), None);
        assert!(doc.starts_with("# Title\n\n  kept as is\n\n## a\n"));
    }

    #[test]
    fn sections_keep_discovery_order() {
        let config = RenderConfig::default();
        let doc = MarkdownRenderer::new(&config).render(
            &[component("zeta"), component("alpha")],
            None,
            None,
        );
        let zeta = doc.find("## zeta").unwrap();
        let alpha = doc.find("## alpha").unwrap();
        assert!(zeta < alpha);
    }

    #[test]
    fn document_ends_with_single_newline() {
        let config = RenderConfig::default();
        let renderer = MarkdownRenderer::new(&config);
        let doc = renderer.render(&[component("a")], Some("\n\n# Title\n\n\n"), Some("bye\n\n\n"));
        assert!(doc.starts_with("# Title"));
        assert!(doc.ends_with("bye\n"));
        assert!(!doc.ends_with("\n\n"));
    }

    #[test]
    fn rendering_is_idempotent() {
        let config = RenderConfig::default();
        let renderer = MarkdownRenderer::new(&config);
        let components = [component("a"), component("b")];
        let first = renderer.render(&components, None, Some("footer"));
        let second = renderer.render(&components, None, Some("footer"));
        assert_eq!(first, second);
    }
}
