use folio_domain::sections::{Section, SectionSet};

#[test]
fn section_ids_round_trip() {
    for section in Section::ALL {
        assert_eq!(Section::from_id(section.id()), Some(section));
    }
    assert_eq!(Section::from_id("blog"), None);
    assert_eq!(Section::Github.to_string(), "github");
}

#[test]
fn section_set_keeps_page_order() {
    let set: SectionSet = [Section::Contact, Section::Home, Section::Skills].into_iter().collect();
    assert_eq!(
        set.sections().collect::<Vec<_>>(),
        vec![Section::Home, Section::Skills, Section::Contact]
    );
    assert!(set.shows(Section::Skills));
    assert!(!set.shows(Section::Github));
}

#[test]
fn section_set_parses_wildcards_and_ignores_unknown_ids() {
    assert_eq!(SectionSet::from("*"), SectionSet::ALL);
    assert_eq!(SectionSet::from("all"), SectionSet::ALL);
    assert_eq!(SectionSet::from("blog"), SectionSet::empty());

    let set: SectionSet = serde_json::from_str(r#"["about", "blog"]"#).expect("section list");
    assert_eq!(set, SectionSet::ABOUT);
}

#[test]
fn section_set_serializes_as_ids() {
    let json = serde_json::to_string(&(SectionSet::HOME | SectionSet::FOOTER)).expect("serialize");
    assert_eq!(json, r#"["home","footer"]"#);
}
