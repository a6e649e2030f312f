use folio_kernel::config::{ConfigError, load_config};
use folio_kernel::domain::config::{SiteConfig, Theme};
use folio_kernel::domain::sections::{Section, SectionSet};
use std::fs;
use tempfile::tempdir;

#[test]
fn missing_file_yields_defaults() -> Result<(), Box<dyn std::error::Error>> {
    let tmp_dir = tempdir()?;
    let cfg: SiteConfig = load_config(Some(tmp_dir.path().join("absent.toml")))?;

    assert_eq!(cfg, SiteConfig::default());
    Ok(())
}

#[test]
fn toml_file_overrides_selected_fields() -> Result<(), Box<dyn std::error::Error>> {
    let tmp_dir = tempdir()?;
    let path = tmp_dir.path().join("folio.toml");
    fs::write(
        &path,
        r#"
sections = ["home", "projects", "contact"]

[github]
account = "octocat"
per_page = 4

[contact]
submit_delay_ms = 250

[appearance]
theme = "dark"
"#,
    )?;

    let cfg: SiteConfig = load_config(Some(&path))?;

    assert_eq!(cfg.github.account, "octocat");
    assert_eq!(cfg.github.per_page, 4);
    assert_eq!(cfg.github.api_url, "https://api.github.com");
    assert_eq!(cfg.contact.submit_delay_ms, 250);
    assert_eq!(cfg.contact.status_display_ms, 3_000);
    assert_eq!(cfg.appearance.theme, Theme::Dark);
    assert_eq!(
        cfg.sections,
        SectionSet::from_iter([Section::Home, Section::Projects, Section::Contact])
    );
    Ok(())
}

#[test]
fn malformed_file_reports_context() -> Result<(), Box<dyn std::error::Error>> {
    let tmp_dir = tempdir()?;
    let path = tmp_dir.path().join("broken.toml");
    fs::write(&path, "[github\naccount = ")?;

    let err = load_config::<SiteConfig>(Some(&path)).expect_err("broken toml must fail");

    assert!(matches!(err, ConfigError::Config { .. }));
    assert!(err.to_string().contains("Failed to build config"), "unexpected message: {err}");
    Ok(())
}

#[test]
fn type_mismatch_is_a_deserialize_error() -> Result<(), Box<dyn std::error::Error>> {
    let tmp_dir = tempdir()?;
    let path = tmp_dir.path().join("mistyped.toml");
    fs::write(&path, "[github]\nper_page = \"many\"\n")?;

    let err = load_config::<SiteConfig>(Some(&path)).expect_err("string per_page must fail");

    assert!(err.to_string().contains("Failed to deserialize config"), "unexpected message: {err}");
    Ok(())
}
