use serde::Deserialize;
use std::fmt;
use std::ops::Deref;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Public SwaggerHub registry endpoint.
pub const DEFAULT_CATALOG_URL: &str = "https://api.swaggerhub.com";
/// Container image recorded in the action metadata when none is given.
pub const DEFAULT_IMAGE: &str = "golang:1.14.2-alpine3.11";
/// Main package path recorded in the action metadata when none is given.
pub const DEFAULT_PACKAGE_PATH: &str = ".";

const REDACTED: &str = "<redacted>";

/// Top-level publish configuration, assembled once at startup.
#[derive(Debug, Clone)]
pub struct PublishConfigInner {
    pub metadata: ActionMetadata,
    pub env: CiEnvironment,
    pub target: CatalogTarget,
}

/// Thin Arc-wrapped config for inexpensive cloning into subsystems.
///
/// There is no `DerefMut`: once built the configuration is read-only.
#[derive(Debug, Clone)]
pub struct PublishConfig {
    inner: Arc<PublishConfigInner>,
}

impl PublishConfig {
    #[must_use]
    pub fn new(metadata: ActionMetadata, env: CiEnvironment, target: CatalogTarget) -> Self {
        Self { inner: Arc::new(PublishConfigInner { metadata, env, target }) }
    }
}

impl Deref for PublishConfig {
    type Target = PublishConfigInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

/// Action metadata supplied through process flags.
///
/// Only `name` takes part in the upload; the rest is carried for the
/// surrounding CI tooling.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ActionMetadata {
    pub path: PathBuf,
    pub name: String,
    pub description: String,
    pub image: String,
    pub install: String,
    pub icon: String,
    pub color: String,
}

impl ActionMetadata {
    /// Splits the comma separated `install` field into package names.
    #[must_use]
    pub fn install_list(&self) -> Vec<&str> {
        self.install.split(',').map(str::trim).filter(|s| !s.is_empty()).collect()
    }
}

/// Values read from the CI environment.
///
/// Field names match the lowercased environment variable names
/// (`GIT_BRANCH` -> `git_branch`).
#[derive(Default, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct CiEnvironment {
    pub email: Option<String>,
    pub github_token: Option<String>,
    pub git_branch: Option<String>,
    pub swaggerhub_api_key: Option<String>,
    pub swagger_file: Option<PathBuf>,
}

impl CiEnvironment {
    /// Returns the catalog API key, treating an empty value as absent.
    #[must_use]
    pub fn api_key(&self) -> Option<&str> {
        self.swaggerhub_api_key.as_deref().filter(|k| !k.is_empty())
    }

    /// Returns the raw branch name, or an empty string if unset.
    #[must_use]
    pub fn branch(&self) -> &str {
        self.git_branch.as_deref().unwrap_or_default()
    }

    #[must_use]
    pub fn document_path(&self) -> Option<&Path> {
        self.swagger_file.as_deref().filter(|p| !p.as_os_str().is_empty())
    }
}

impl fmt::Debug for CiEnvironment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CiEnvironment")
            .field("email", &self.email)
            .field("github_token", &self.github_token.as_ref().map(|_| REDACTED))
            .field("git_branch", &self.git_branch)
            .field("swaggerhub_api_key", &self.swaggerhub_api_key.as_ref().map(|_| REDACTED))
            .field("swagger_file", &self.swagger_file)
            .finish()
    }
}

/// Where the document gets published.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct CatalogTarget {
    pub base_url: String,
    pub domain: String,
}

// --- Default ---

impl Default for ActionMetadata {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_PACKAGE_PATH),
            name: String::new(),
            description: String::new(),
            image: DEFAULT_IMAGE.to_owned(),
            install: String::new(),
            icon: String::new(),
            color: String::new(),
        }
    }
}

impl Default for CatalogTarget {
    fn default() -> Self {
        Self { base_url: DEFAULT_CATALOG_URL.to_owned(), domain: String::new() }
    }
}
