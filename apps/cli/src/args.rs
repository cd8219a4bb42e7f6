//! # CLI Argument Definitions
//!
//! This module defines the command-line interface (CLI) structure using the `clap` crate.
//! Flags carry the action metadata and the catalog target; secrets and the branch
//! name come from the environment (see [`oaspub_kernel::config`]).

use clap::{Parser, ValueEnum};
use oaspub_kernel::domain::config::{
    ActionMetadata, CatalogTarget, CiEnvironment, DEFAULT_CATALOG_URL, DEFAULT_IMAGE,
    DEFAULT_PACKAGE_PATH, PublishConfig,
};
use oaspub_logger::LevelFilter;
use std::path::PathBuf;

/// The main CLI structure parsing command-line arguments.
#[derive(Debug, Parser)]
#[command(name = "oaspub")]
#[command(author = env!("CARGO_PKG_AUTHORS"))]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Publish an OpenAPI document to SwaggerHub, versioned by the current branch")]
#[command(after_help = "Environment: SWAGGERHUB_API_KEY, SWAGGER_FILE, GIT_BRANCH, GITHUB_TOKEN, email")]
pub struct Cli {
    /// Path to the main package
    #[arg(long, default_value = DEFAULT_PACKAGE_PATH)]
    pub path: PathBuf,

    /// API name in the catalog (also the action name)
    #[arg(long)]
    pub name: Option<String>,

    /// Override the action description
    #[arg(long = "desc")]
    pub description: Option<String>,

    /// Docker image to run the action with
    #[arg(long, default_value = DEFAULT_IMAGE)]
    pub image: String,

    /// Comma-separated list of packages to install
    #[arg(long)]
    pub install: Option<String>,

    /// Branding icon (see https://feathericons.com)
    #[arg(long)]
    pub icon: Option<String>,

    /// Branding color (white, yellow, blue, green, orange, red, purple or gray-dark)
    #[arg(long)]
    pub color: Option<String>,

    /// Organization (owner) registered in SwaggerHub
    #[arg(long)]
    pub domain: Option<String>,

    /// Root URL of the SwaggerHub registry API
    #[arg(long = "catalog-url", env = "SWAGGERHUB_URL", default_value = DEFAULT_CATALOG_URL)]
    pub catalog_url: String,

    /// Optional settings file layered under the environment (e.g. 'oaspub.toml')
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Always exit with status 0, whatever the outcome
    #[arg(long)]
    pub exit_zero: bool,

    /// Minimum level of diagnostics written to stderr (`RUST_LOG` overrides)
    #[arg(long, value_enum, default_value_t = LogLevel::Warn)]
    pub log_level: LogLevel,

    /// Emit stderr diagnostics as JSON lines
    #[arg(long)]
    pub log_json: bool,
}

impl Cli {
    /// Merges the flags with the loaded environment into the run configuration.
    #[must_use]
    pub fn publish_config(&self, env: CiEnvironment) -> PublishConfig {
        let metadata = ActionMetadata {
            path: self.path.clone(),
            name: self.name.clone().unwrap_or_default(),
            description: self.description.clone().unwrap_or_default(),
            image: self.image.clone(),
            install: self.install.clone().unwrap_or_default(),
            icon: self.icon.clone().unwrap_or_default(),
            color: self.color.clone().unwrap_or_default(),
        };
        let target = CatalogTarget {
            base_url: self.catalog_url.clone(),
            domain: self.domain.clone().unwrap_or_default(),
        };

        PublishConfig::new(metadata, env, target)
    }
}

/// Verbosity of the stderr diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Off => Self::OFF,
            LogLevel::Error => Self::ERROR,
            LogLevel::Warn => Self::WARN,
            LogLevel::Info => Self::INFO,
            LogLevel::Debug => Self::DEBUG,
            LogLevel::Trace => Self::TRACE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["oaspub"]).unwrap();
        assert_eq!(cli.path, PathBuf::from("."));
        assert_eq!(cli.image, DEFAULT_IMAGE);
        assert!(cli.name.is_none());
        assert!(!cli.exit_zero);
        assert_eq!(cli.log_level, LogLevel::Warn);
    }

    #[test]
    fn test_publish_config_merges_flags_and_env() {
        let cli = Cli::try_parse_from([
            "oaspub",
            "--name",
            "petstore",
            "--domain",
            "acme",
            "--desc",
            "Pet API",
            "--install",
            "git,curl",
            "--catalog-url",
            "http://localhost:9000",
        ])
        .unwrap();
        let env = CiEnvironment { git_branch: Some("main".to_owned()), ..Default::default() };

        let cfg = cli.publish_config(env);
        assert_eq!(cfg.metadata.name, "petstore");
        assert_eq!(cfg.metadata.description, "Pet API");
        assert_eq!(cfg.metadata.install_list(), vec!["git", "curl"]);
        assert_eq!(cfg.target.domain, "acme");
        assert_eq!(cfg.target.base_url, "http://localhost:9000");
        assert_eq!(cfg.env.branch(), "main");
    }

    #[test]
    fn test_log_level_maps_to_filter() {
        assert_eq!(LevelFilter::from(LogLevel::Off), LevelFilter::OFF);
        assert_eq!(LevelFilter::from(LogLevel::Debug), LevelFilter::DEBUG);
    }
}
