use folio::domain::config::{SiteConfig, Theme};
use folio::kernel::config::load_config;
use folio_desktop::DesktopSettings;
use std::fs;
use std::path::PathBuf;
use tempfile::tempdir;

#[test]
fn one_file_feeds_window_log_and_site_settings() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let path = dir.path().join("folio.toml");
    fs::write(
        &path,
        r#"
        [window]
        title = "Folio"
        width = 1024.0

        [log]
        level = "debug"
        directory = "logs"

        [appearance]
        theme = "dark"
        "#,
    )?;

    let settings: DesktopSettings = load_config(Some(&path))?;
    let site: SiteConfig = load_config(Some(&path))?;

    assert_eq!(settings.window.title, "Folio");
    assert!((settings.window.width - 1024.0).abs() < f64::EPSILON);
    assert!((settings.window.height - 860.0).abs() < f64::EPSILON);
    assert_eq!(settings.log.level, "debug");
    assert_eq!(settings.log.directory, Some(PathBuf::from("logs")));
    assert_eq!(site.appearance.theme, Theme::Dark);
    Ok(())
}
