use config::{Config, Environment, File};
use serde::de::DeserializeOwned;
use std::borrow::Cow;
use std::path::{Path, PathBuf};
use tracing::info;

/// Environment variable prefix, e.g. `FOLIO__GITHUB__ACCOUNT`.
pub const ENV_PREFIX: &str = "FOLIO";

/// Custom error type for config loading.
#[folio_derive::folio_error]
pub enum ConfigError {
    #[error("Config error{}: {source}", format_context(context))]
    Config { source: config::ConfigError, context: Option<Cow<'static, str>> },
}

/// Loads configuration from an optional file overlaid with environment variables.
///
/// 1. **Base File**: settings from `path` (any format the `config` crate detects
///    by extension). Defaults to `folio` in the working directory. A missing file
///    is not an error: every field of the site config has a default.
/// 2. **Environment Overrides**: variables prefixed with `FOLIO__`. Nested keys use
///    double underscores (`FOLIO__GITHUB__PER_PAGE` maps to `github.per_page`).
///    `FOLIO__SECTIONS` is read as a comma separated list.
///
/// # Errors
/// Returns [`ConfigError::Config`] when the file exists but cannot be parsed or
/// when the merged values do not match `T`.
///
/// # Example
/// ```rust
/// use folio_kernel::config::load_config;
///
/// #[derive(Default, serde::Deserialize)]
/// struct AppConfig {
///     port: u16,
/// }
///
/// let cfg: AppConfig = load_config(Some("config/local")).unwrap_or_default();
/// ```
pub fn load_config<T>(path: Option<impl AsRef<Path>>) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    let effective_path = path.map_or_else(|| PathBuf::from("folio"), |p| p.as_ref().to_path_buf());

    let builder = Config::builder()
        .add_source(File::from(effective_path.as_path()).required(false))
        .add_source(
            Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("__")
                .separator("__")
                .list_separator(",")
                .with_list_parse_key("sections")
                .try_parsing(true)
                .convert_case(config::Case::Snake),
        );

    info!("Loading config from {}", effective_path.display());

    let config = builder
        .build()
        .context("Failed to build config")?
        .try_deserialize::<T>()
        .context("Failed to deserialize config")?;

    Ok(config)
}
