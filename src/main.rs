//! README generator for GitLab CI component projects.
//!
//! `component-docgen readme -p path/to/project` gathers every component in
//! `<project>/templates`, renders its inputs as a table and writes
//! `<project>/README.md`. Header and footer files are picked up when present,
//! both for the whole document and for each component directory.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use component_docgen::config::{
    Config, LoaderConfig, RenderConfig, DEFAULT_FOOTER, DEFAULT_HEADER, DEFAULT_OUTPUT,
};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser)]
#[command(
    name = "component-docgen",
    version,
    about = "Generate documentation for GitLab CI components"
)]
struct Cli {
    /// Verbose output (-v for progress, -vv for per-component detail)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a README.md for all components within the given project directory.
    ///
    /// Gathers all components in <project>/templates and generates a README
    /// from their input specs. The README is wrapped in a HEADER and FOOTER
    /// file if present; the same goes for each component directory.
    #[command(visible_alias = "r")]
    Readme(ReadmeArgs),
}

#[derive(clap::Args)]
struct ReadmeArgs {
    /// Path to the GitLab CI component project
    #[arg(short = 'p', long, default_value = ".")]
    project: PathBuf,

    /// Output file, relative to the project directory
    #[arg(short = 'o', long, default_value = DEFAULT_OUTPUT)]
    output: PathBuf,

    /// File prepended to the list of components, relative to the project directory
    #[arg(long, default_value = DEFAULT_HEADER)]
    header: PathBuf,

    /// File appended to the list of components, relative to the project directory
    #[arg(long, default_value = DEFAULT_FOOTER)]
    footer: PathBuf,

    /// File prepended to a component; must live in the component directory
    #[arg(long, default_value = DEFAULT_HEADER)]
    component_header: String,

    /// File appended to a component; must live in the component directory
    #[arg(long, default_value = DEFAULT_FOOTER)]
    component_footer: String,

    /// Single prose file per component directory, used instead of header and footer
    #[arg(long)]
    component_readme: Option<String>,

    /// Heading level of each component section
    #[arg(long, default_value_t = 2, value_parser = clap::value_parser!(u8).range(1..=6))]
    component_header_level: u8,
}

impl ReadmeArgs {
    fn into_config(self) -> Config {
        Config {
            project: self.project,
            output: self.output,
            header: self.header,
            footer: self.footer,
            loader: LoaderConfig {
                component_header: self.component_header,
                component_footer: self.component_footer,
                component_readme: self.component_readme,
            },
            render: RenderConfig {
                heading_level: usize::from(self.component_header_level),
            },
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Readme(args) => readme(args.into_config()),
    }
}

/// RUST_LOG wins over -v when set.
fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "component_docgen=warn",
        1 => "component_docgen=info",
        _ => "component_docgen=debug",
    };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| default_level.into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn readme(config: Config) -> Result<()> {
    component_docgen::generate(&config).with_context(|| {
        format!(
            "failed to generate documentation for {}",
            config.project.display()
        )
    })?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn defaults_match_config_defaults() {
        let cli = Cli::try_parse_from(["component-docgen", "readme"]).unwrap();
        let Commands::Readme(args) = cli.command;
        let config = args.into_config();
        assert_eq!(config.project, PathBuf::from("."));
        assert_eq!(config.output, PathBuf::from("README.md"));
        assert_eq!(config.header, PathBuf::from("HEADER.md"));
        assert_eq!(config.footer, PathBuf::from("FOOTER.md"));
        assert_eq!(config.loader.component_header, "HEADER.md");
        assert_eq!(config.loader.component_footer, "FOOTER.md");
        assert_eq!(config.loader.component_readme, None);
        assert_eq!(config.render.heading_level, 2);
    }

    #[test]
    fn alias_and_flags() {
        let cli = Cli::try_parse_from([
            "component-docgen",
            "r",
            "-p",
            "proj",
            "-o",
            "DOCS.md",
            "--component-readme",
            "README.md",
            "--component-header-level",
            "3",
        ])
        .unwrap();
        let Commands::Readme(args) = cli.command;
        let config = args.into_config();
        assert_eq!(config.project, PathBuf::from("proj"));
        assert_eq!(config.output_path(), PathBuf::from("proj/DOCS.md"));
        assert_eq!(config.loader.component_readme.as_deref(), Some("README.md"));
        assert_eq!(config.render.heading_level, 3);
    }

    #[test]
    fn heading_level_is_bounded() {
        for level in ["0", "7"] {
            let parsed = Cli::try_parse_from([
                "component-docgen",
                "readme",
                "--component-header-level",
                level,
            ]);
            assert!(parsed.is_err(), "level {level} should be rejected");
        }
    }
}
