use crate::components::{Glyph, Icon, SectionHeading, StatGrid};
use crate::hooks::use_reveal;
use dioxus::prelude::*;
use folio_domain::content::AchievementKind;
use folio_domain::profile::{ACHIEVEMENT_STATS, ACHIEVEMENTS};
use folio_domain::sections::Section;

const INTRO: &str = "Highlights of my academic and competitive achievements, \
                     showcasing dedication to excellence and innovation.";

/// Card accent for each kind of achievement.
const fn accent(kind: AchievementKind) -> (&'static str, Glyph) {
    match kind {
        AchievementKind::Competition => ("card achievement accent-competition", Glyph::Trophy),
        AchievementKind::Project => ("card achievement accent-project", Glyph::Code),
        AchievementKind::Academic => ("card achievement accent-academic", Glyph::Book),
        AchievementKind::Other => ("card achievement accent-other", Glyph::Award),
    }
}

#[component]
pub fn Achievements() -> Element {
    let reveal = use_reveal(Section::Achievements);
    let stats_index = ACHIEVEMENTS.len() + 1;

    rsx! {
        section { id: Section::Achievements.id(), class: "section",
            div {
                class: "container",
                style: reveal.container_css(),
                onmounted: move |event| reveal.mount(event),
                div { style: reveal.item_css(0),
                    SectionHeading { title: "Achievements & Activities", subtitle: INTRO }
                }
                div { class: "grid two",
                    for (index, achievement) in ACHIEVEMENTS.iter().enumerate() {
                        {
                            let (class, glyph) = accent(achievement.kind);
                            rsx! {
                                article { key: "{achievement.id}", class, style: reveal.item_css(index + 1),
                                    div { class: "achievement-head",
                                        div { class: "achievement-icon", Icon { glyph } }
                                        div { class: "achievement-meta",
                                            span { Icon { glyph: Glyph::Calendar } {achievement.year} }
                                            span { class: "kind-badge", {achievement.kind.label()} }
                                        }
                                    }
                                    h3 { {achievement.title} }
                                    p { class: "muted", {achievement.description} }
                                    div { class: "verified",
                                        span { class: "pulse-dot" }
                                        "Verified Achievement"
                                    }
                                }
                            }
                        }
                    }
                }
                StatGrid { stats: ACHIEVEMENT_STATS, style: reveal.child_css(stats_index, &folio_reveal::RISE) }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_kind_has_its_own_accent() {
        let kinds = [
            AchievementKind::Competition,
            AchievementKind::Project,
            AchievementKind::Academic,
            AchievementKind::Other,
        ];
        let classes: Vec<_> = kinds.into_iter().map(|kind| accent(kind).0).collect();

        for (i, class) in classes.iter().enumerate() {
            assert!(class.starts_with("card achievement accent-"));
            assert!(!classes[i + 1..].contains(class), "{class} reused");
        }
        assert_eq!(accent(AchievementKind::Competition).1, Glyph::Trophy);
    }
}
