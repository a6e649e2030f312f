//! # Logger
//!
//! Installs the global `tracing` subscriber for native Folio builds.
//!
//! * Console output is on by default; with the `file` feature logs can also go
//!   to a rolling file written on a background thread.
//! * The level set on the builder is the default directive; `RUST_LOG` is
//!   layered on top, and [`LoggerBuilder::env_filter`] replaces both.
//! * Webview and HTTP internals are capped at `warn` unless a filter names them.
//!
//! Browser builds do not use this crate; they route `tracing` to the console
//! through the renderer's own logger.
//!
//! ## Example
//!
//! ```rust
//! use folio_logger::{LevelFilter, Logger};
//!
//! let _logger = Logger::builder()
//!     .name("folio-desktop")
//!     .level(LevelFilter::DEBUG)
//!     .init()
//!     .unwrap();
//! ```

mod error;

pub use crate::error::{LoggerError, LoggerErrorExt};
pub use tracing::level_filters::LevelFilter;
#[cfg(feature = "file")]
pub use tracing_appender::rolling::Rotation;

use private::Sealed;
use std::str::FromStr;
use tracing_subscriber::fmt::layer;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

/// Targets that are noisy at `info` inside a desktop webview.
const QUIET_TARGETS: &[&str] = &["tao", "wry", "hyper", "hyper_util", "reqwest", "rustls"];

#[cfg(feature = "file")]
const DEFAULT_MAX_FILES: usize = 7;
#[cfg(feature = "file")]
const LOG_FILE_SUFFIX: &str = "log";

#[derive(Debug)]
struct LoggerConfig {
    console: bool,
    level: LevelFilter,
    env_filter: Option<String>,
    #[cfg(feature = "file")]
    file: Option<FileOutput>,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            console: true,
            level: LevelFilter::INFO,
            env_filter: None,
            #[cfg(feature = "file")]
            file: None,
        }
    }
}

/// Where and how the rolling file is written.
#[cfg(feature = "file")]
#[derive(Debug)]
struct FileOutput {
    directory: std::path::PathBuf,
    rotation: Rotation,
    max_files: usize,
    json: bool,
}

#[derive(Debug)]
pub struct NoName;
#[derive(Debug)]
pub struct WithName(String);

mod private {
    pub trait Sealed {}
}
impl Sealed for NoName {}
impl Sealed for WithName {}

/// Configures the global subscriber. A name is required before [`LoggerBuilder::init`].
#[derive(Debug)]
pub struct LoggerBuilder<N: Sealed = NoName> {
    config: LoggerConfig,
    name: N,
}

impl LoggerBuilder<NoName> {
    /// Names the application. The name prefixes rolling log files.
    pub fn name(self, name: impl Into<String>) -> LoggerBuilder<WithName> {
        LoggerBuilder { config: self.config, name: WithName(name.into()) }
    }
}

impl LoggerBuilder<WithName> {
    #[must_use = "The builder must be configured before it can be used to initialize the logger."]
    pub const fn level(mut self, level: LevelFilter) -> Self {
        self.config.level = level;
        self
    }

    /// Replaces the level and `RUST_LOG` with explicit directives,
    /// e.g. `folio_github=debug,info`.
    #[must_use = "The builder must be configured before it can be used to initialize the logger."]
    pub fn env_filter(mut self, filter: impl Into<String>) -> Self {
        self.config.env_filter = Some(filter.into());
        self
    }

    #[must_use = "The builder must be configured before it can be used to initialize the logger."]
    pub const fn console(mut self, enabled: bool) -> Self {
        self.config.console = enabled;
        self
    }

    /// Also writes logs to daily rolling files in `directory`.
    #[cfg(feature = "file")]
    #[must_use = "The builder must be configured before it can be used to initialize the logger."]
    pub fn directory(mut self, directory: impl Into<std::path::PathBuf>) -> Self {
        self.config.file = Some(FileOutput {
            directory: directory.into(),
            rotation: Rotation::DAILY,
            max_files: DEFAULT_MAX_FILES,
            json: false,
        });
        self
    }

    /// Rotation of the log file. No effect without [`LoggerBuilder::directory`].
    #[cfg(feature = "file")]
    #[must_use = "The builder must be configured before it can be used to initialize the logger."]
    pub fn rotation(mut self, rotation: Rotation) -> Self {
        if let Some(file) = &mut self.config.file {
            file.rotation = rotation;
        }
        self
    }

    /// Number of rotated files to keep. No effect without [`LoggerBuilder::directory`].
    #[cfg(feature = "file")]
    #[must_use = "The builder must be configured before it can be used to initialize the logger."]
    pub const fn max_files(mut self, max: usize) -> Self {
        if let Some(file) = &mut self.config.file {
            file.max_files = max;
        }
        self
    }

    /// Writes the file as JSON lines. No effect without [`LoggerBuilder::directory`].
    #[cfg(feature = "file")]
    #[must_use = "The builder must be configured before it can be used to initialize the logger."]
    pub const fn json(mut self) -> Self {
        if let Some(file) = &mut self.config.file {
            file.json = true;
        }
        self
    }

    /// Installs the subscriber.
    ///
    /// Keep the returned [`Logger`] alive until shutdown; dropping it stops the
    /// file writer.
    ///
    /// # Errors
    /// [`LoggerError::Subscriber`] if a global subscriber is already set,
    /// [`LoggerError::Filter`] for an unparsable filter, and
    /// [`LoggerError::InvalidConfiguration`] when nothing would be written.
    pub fn init(self) -> Result<Logger, LoggerError> {
        let name = self.name.0;
        if name.trim().is_empty() {
            return Err(LoggerError::InvalidConfiguration {
                message: "logger name cannot be empty".into(),
                context: None,
            });
        }

        let filter = build_filter(&self.config)?;
        let mut layers = Vec::new();

        if self.config.console {
            layers.push(layer().compact().with_target(true).boxed());
        }

        #[cfg(feature = "file")]
        let guard = match self.config.file {
            Some(file) => {
                let (file_layer, guard) = file_layer(&name, file)?;
                layers.push(file_layer);
                Some(guard)
            }
            None => None,
        };

        if layers.is_empty() {
            return Err(LoggerError::InvalidConfiguration {
                message: "no output enabled; turn on the console or a log directory".into(),
                context: None,
            });
        }

        tracing_subscriber::registry()
            .with(filter)
            .with(layers)
            .try_init()
            .context("Installing global subscriber")?;

        tracing::debug!(logger = %name, "Logging initialized");

        Ok(Logger {
            name,
            #[cfg(feature = "file")]
            guard,
        })
    }
}

#[cfg(feature = "file")]
type BoxedLayer<S> = Box<dyn Layer<S> + Send + Sync>;

#[cfg(feature = "file")]
fn file_layer<S>(
    name: &str,
    file: FileOutput,
) -> Result<(BoxedLayer<S>, tracing_appender::non_blocking::WorkerGuard), LoggerError>
where
    S: tracing::Subscriber + for<'a> tracing_subscriber::registry::LookupSpan<'a>,
{
    use tracing_appender::rolling::RollingFileAppender;

    if file.max_files == 0 {
        return Err(LoggerError::InvalidConfiguration {
            message: "max_files must be greater than zero".into(),
            context: None,
        });
    }

    std::fs::create_dir_all(&file.directory).map_err(|e| LoggerError::Internal {
        message: e.to_string().into(),
        context: Some(format!("Creating {}", file.directory.display()).into()),
    })?;

    let appender = RollingFileAppender::builder()
        .rotation(file.rotation)
        .filename_prefix(name)
        .filename_suffix(LOG_FILE_SUFFIX)
        .max_log_files(file.max_files)
        .build(&file.directory)
        .context("Building rolling appender")?;

    let (writer, guard) = tracing_appender::non_blocking(appender);
    let base = layer().with_writer(writer).with_ansi(false);
    let boxed = if file.json { base.json().boxed() } else { base.boxed() };

    Ok((boxed, guard))
}

/// Handle to the installed subscriber.
#[must_use = "Dropping this handle stops the background log writer."]
#[derive(Debug)]
pub struct Logger {
    name: String,
    #[cfg(feature = "file")]
    guard: Option<tracing_appender::non_blocking::WorkerGuard>,
}

impl Logger {
    #[must_use = "The builder must be configured before it can be used to initialize the logger."]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder { config: LoggerConfig::default(), name: NoName }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// True when logs are also written to a file.
    #[must_use]
    pub const fn writes_file(&self) -> bool {
        #[cfg(feature = "file")]
        {
            self.guard.is_some()
        }
        #[cfg(not(feature = "file"))]
        {
            false
        }
    }
}

/// Parses a level name such as `info` or `DEBUG`.
///
/// # Errors
/// [`LoggerError::Filter`] for anything that is not a level name.
pub fn parse_level(level: &str) -> Result<LevelFilter, LoggerError> {
    LevelFilter::from_str(level.trim()).map_err(|e| LoggerError::Filter {
        message: format!("'{level}' is not a log level: {e}").into(),
        context: None,
    })
}

fn build_filter(config: &LoggerConfig) -> Result<EnvFilter, LoggerError> {
    let builder = EnvFilter::builder().with_default_directive(config.level.into());

    if let Some(directives) = &config.env_filter {
        return builder.parse(directives).map_err(|e| LoggerError::Filter {
            message: format!("'{directives}': {e}").into(),
            context: None,
        });
    }

    let mut filter = builder.from_env_lossy();
    for target in QUIET_TARGETS {
        let directive = format!("{target}=warn").parse().map_err(|e| LoggerError::Filter {
            message: format!("'{target}=warn': {e}").into(),
            context: None,
        })?;
        filter = filter.add_directive(directive);
    }
    Ok(filter)
}
