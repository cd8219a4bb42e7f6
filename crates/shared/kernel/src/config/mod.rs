use config::{Config, Environment, File, Map};
use oaspub_domain::config::CiEnvironment;
use std::borrow::Cow;
use std::path::Path;
use tracing::{debug, info};

/// Custom error type for settings loading.
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("Config error{}: {source}", format_context(.context))]
    Config { source: config::ConfigError, context: Option<Cow<'static, str>> },
}

trait SettingsErrorExt<T> {
    fn context(self, context: impl Into<Cow<'static, str>>) -> Result<T, SettingsError>;
}

impl<T> SettingsErrorExt<T> for Result<T, config::ConfigError> {
    fn context(self, context: impl Into<Cow<'static, str>>) -> Result<T, SettingsError> {
        self.map_err(|source| SettingsError::Config { source, context: Some(context.into()) })
    }
}

fn format_context(context: &Option<Cow<'static, str>>) -> Cow<'static, str> {
    context.as_ref().map_or(Cow::Borrowed(""), |c| Cow::Owned(format!(" ({c})")))
}

/// Environment variables read by [`load_settings`], matched by exact name.
pub const CI_VARIABLES: [&str; 5] =
    ["email", "GITHUB_TOKEN", "GIT_BRANCH", "SWAGGERHUB_API_KEY", "SWAGGER_FILE"];

/// Loads the CI settings from the process environment, optionally layered over a file.
///
/// This function implements a layered configuration strategy:
/// 1. **Base File** (optional): settings from `path` (format picked from the extension,
///    e.g. `oaspub.toml`). Keys are the lowercase variable names (`git_branch`, ...).
/// 2. **Environment Overrides**: `email`, `GITHUB_TOKEN`, `GIT_BRANCH`,
///    `SWAGGERHUB_API_KEY` and `SWAGGER_FILE` always win over the file.
///
/// # Errors
/// This function will return an error if:
/// * `path` is given but the file cannot be found or parsed.
/// * A value does not fit the [`CiEnvironment`] structure.
///
/// # Example
/// ```rust,no_run
/// use oaspub_kernel::config::load_settings;
///
/// let env = load_settings(Some("oaspub.toml")).unwrap_or_default();
/// println!("branch: {}", env.branch());
/// ```
pub fn load_settings(path: Option<impl AsRef<Path>>) -> Result<CiEnvironment, SettingsError> {
    load_settings_from(path, None)
}

/// Same as [`load_settings`], but reads variables from `env` instead of the process
/// environment when it is `Some`. Only the names in [`CI_VARIABLES`] are kept.
///
/// # Errors
/// See [`load_settings`].
pub fn load_settings_from(
    path: Option<impl AsRef<Path>>,
    env: Option<Map<String, String>>,
) -> Result<CiEnvironment, SettingsError> {
    let mut builder = Config::builder();

    if let Some(path) = path.as_ref().map(AsRef::as_ref) {
        info!("Loading settings from {}", path.display());
        builder = builder.add_source(File::from(path).required(true));
    }

    let settings = builder
        .add_source(Environment::default().source(Some(ci_variables(env))))
        .build()
        .context("Failed to build settings")?
        .try_deserialize::<CiEnvironment>()
        .context("Failed to deserialize settings")?;

    debug!(settings = ?settings, "Settings loaded");

    Ok(settings)
}

fn ci_variables(env: Option<Map<String, String>>) -> Map<String, String> {
    let vars = env.unwrap_or_else(|| {
        std::env::vars_os()
            .filter_map(|(key, value)| Some((key.into_string().ok()?, value.into_string().ok()?)))
            .collect()
    });

    vars.into_iter().filter(|(key, _)| CI_VARIABLES.contains(&key.as_str())).collect()
}
