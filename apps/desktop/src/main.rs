#![windows_subsystem = "windows"]

use folio::domain::config::SiteConfig;
use folio::kernel::config::load_config;
use folio_desktop::{DesktopApp, DesktopSettings};
use folio_logger::{Logger, parse_level};
use std::path::PathBuf;
use tracing::info;

/// Path of the settings file; `folio.toml` in the working directory otherwise.
const CONFIG_PATH_VAR: &str = "FOLIO_CONFIG";

fn main() -> anyhow::Result<()> {
    let path = std::env::var_os(CONFIG_PATH_VAR).map(PathBuf::from);
    let settings: DesktopSettings = load_config(path.as_deref())?;

    let mut builder =
        Logger::builder().name(env!("CARGO_PKG_NAME")).level(parse_level(&settings.log.level)?);
    if let Some(directory) = &settings.log.directory {
        builder = builder.directory(directory);
    }
    let _logger = builder.init()?;

    let site: SiteConfig = load_config(path.as_deref())?;
    info!(account = %site.github.account, theme = ?site.appearance.theme, "Starting desktop portfolio");

    DesktopApp::from_settings(&settings.window).launch(site, folio::ui::App);

    Ok(())
}
