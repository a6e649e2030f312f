use folio_domain::config::{ContactConfig, GithubConfig, SiteConfig, Theme};
use folio_domain::sections::{Section, SectionSet};
use serde_json::json;

#[test]
fn config_defaults_are_sane() {
    let github = GithubConfig::default();
    assert_eq!(github.account, "ashishraj875718-jpg");
    assert_eq!(github.api_url, "https://api.github.com");
    assert_eq!(github.per_page, 6);

    let contact = ContactConfig::default();
    assert_eq!(contact.submit_delay_ms, 1_000);
    assert_eq!(contact.status_display_ms, 3_000);

    let cfg = SiteConfig::default();
    assert_eq!(cfg.appearance.theme, Theme::Light);
    assert_eq!(cfg.sections, SectionSet::ALL);
}

#[test]
fn site_config_deserializes() {
    let raw = json!({
        "github": { "account": "octocat", "per_page": 3 },
        "appearance": { "theme": "dark" },
        "sections": ["home", "github", "contact"]
    });

    let cfg: SiteConfig = serde_json::from_value(raw).expect("config deserialize");
    assert_eq!(cfg.github.account, "octocat");
    assert_eq!(cfg.github.per_page, 3);
    assert_eq!(cfg.github.api_url, "https://api.github.com");
    assert_eq!(cfg.appearance.theme, Theme::Dark);
    assert_eq!(
        cfg.sections.sections().collect::<Vec<_>>(),
        vec![Section::Home, Section::Github, Section::Contact]
    );
}

#[test]
fn mutation_through_deref_does_not_leak_into_clones() {
    let original = SiteConfig::default();
    let mut edited = original.clone();
    edited.github.per_page = 2;

    assert_eq!(original.github.per_page, 6);
    assert_eq!(edited.github.per_page, 2);
}

#[test]
fn theme_toggles_between_two_states() {
    assert_eq!(Theme::Light.toggled(), Theme::Dark);
    assert_eq!(Theme::Dark.toggled().toggled(), Theme::Dark);
    assert_eq!(Theme::Dark.class(), "dark");
    assert!(!Theme::Light.is_dark());
}
