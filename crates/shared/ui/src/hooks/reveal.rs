use super::in_view::{InView, use_in_view};
use crate::motion::{SectionMotion, motion_for};
use dioxus::prelude::*;
use folio_domain::sections::Section;
use folio_reveal::{AnimationVariant, FADE, RenderedStyle, RevealController};

/// Scroll reveal for one section: the observed container plus the section's
/// stagger and child variant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Reveal {
    in_view: InView,
    motion: SectionMotion,
}

impl Reveal {
    pub fn mount(self, event: MountedEvent) {
        self.in_view.mount(event);
    }

    #[must_use]
    pub fn is_revealed(&self) -> bool {
        self.in_view.visibility().is_revealed()
    }

    fn controller(&self) -> RevealController {
        RevealController::new(FADE, self.motion.stagger).synced(self.in_view.visibility())
    }

    #[must_use]
    pub fn container_css(&self) -> String {
        self.controller().container_style().to_css()
    }

    /// Style of child `index` using the section's item variant.
    #[must_use]
    pub fn item_css(&self, index: usize) -> String {
        self.child_css(index, &self.motion.item)
    }

    /// Item style for a child that can arrive after the section revealed,
    /// e.g. fetched content. `mounted` is the child's own mounted flag.
    #[must_use]
    pub fn entering_item_css(&self, index: usize, mounted: bool) -> String {
        self.controller().entering_child_style(index, &self.motion.item, mounted).to_css()
    }

    #[must_use]
    pub fn child_css(&self, index: usize, variant: &AnimationVariant) -> String {
        self.controller().child_style(index, variant).to_css()
    }

    /// Style for an element that carries its own timing, such as a skill bar.
    #[must_use]
    pub fn own_timing_css(&self, variant: &AnimationVariant) -> String {
        let style = if self.is_revealed() {
            RenderedStyle::animated(variant.visible, variant.timing)
        } else {
            RenderedStyle::still(variant.hidden)
        };
        style.to_css()
    }
}

pub fn use_reveal(section: Section) -> Reveal {
    Reveal { in_view: use_in_view(section.id()), motion: motion_for(section) }
}
