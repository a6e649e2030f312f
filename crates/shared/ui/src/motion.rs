//! Entrance choreography per page section.

use folio_domain::sections::Section;
use folio_reveal::{AnimationVariant, FADE, HERO_RISE, RISE, SLIDE_IN};
use std::time::Duration;

/// How the children of one section enter: the per-child stagger and the
/// variant each child animates with.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectionMotion {
    pub stagger: Duration,
    pub item: AnimationVariant,
}

impl SectionMotion {
    const fn new(stagger_ms: u64, item: AnimationVariant) -> Self {
        Self { stagger: Duration::from_millis(stagger_ms), item }
    }
}

#[must_use]
pub const fn motion_for(section: Section) -> SectionMotion {
    match section {
        Section::Home => SectionMotion::new(300, HERO_RISE),
        Section::About => SectionMotion::new(300, RISE),
        Section::Education | Section::Achievements => SectionMotion::new(200, SLIDE_IN),
        Section::Projects | Section::Contact => SectionMotion::new(200, RISE),
        Section::Skills | Section::Github => SectionMotion::new(100, RISE),
        Section::Footer => SectionMotion::new(0, FADE),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hero_children_rise_slowly_with_wide_stagger() {
        let motion = motion_for(Section::Home);
        assert_eq!(motion.stagger, Duration::from_millis(300));
        assert_eq!(motion.item, HERO_RISE);
    }

    #[test]
    fn timeline_sections_slide_in() {
        for section in [Section::Education, Section::Achievements] {
            let motion = motion_for(section);
            assert_eq!(motion.item, SLIDE_IN, "{section}");
            assert_eq!(motion.stagger, Duration::from_millis(200), "{section}");
        }
    }

    #[test]
    fn dense_grids_use_short_stagger() {
        assert_eq!(motion_for(Section::Skills).stagger, Duration::from_millis(100));
        assert_eq!(motion_for(Section::Github).stagger, Duration::from_millis(100));
        assert_eq!(motion_for(Section::Projects).item, RISE);
    }
}
