use crate::variant::{AnimationVariant, Style, Timing};
use crate::visibility::Visibility;
use std::fmt::Write;
use std::time::Duration;

/// Drives one section container and its children through hidden -> visible.
///
/// Child `i` starts `delay_children + i * stagger + child delay` after the
/// container is revealed. While hidden every child renders its hidden style.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevealController {
    container: AnimationVariant,
    stagger: Duration,
    delay_children: Duration,
    visibility: Visibility,
}

impl RevealController {
    #[must_use]
    pub const fn new(container: AnimationVariant, stagger: Duration) -> Self {
        Self { container, stagger, delay_children: Duration::ZERO, visibility: Visibility::Hidden }
    }

    /// Extra delay before the first child starts.
    #[must_use]
    pub const fn with_delay_children(mut self, delay: Duration) -> Self {
        self.delay_children = delay;
        self
    }

    /// Follows the observer's latch. A revealed controller never goes back.
    pub fn sync(&mut self, visibility: Visibility) {
        if visibility.is_revealed() {
            self.visibility = Visibility::Revealed;
        }
    }

    /// Copy of the controller with `visibility` applied.
    #[must_use]
    pub fn synced(mut self, visibility: Visibility) -> Self {
        self.sync(visibility);
        self
    }

    #[must_use]
    pub const fn visibility(&self) -> Visibility {
        self.visibility
    }

    #[must_use]
    pub const fn stagger(&self) -> Duration {
        self.stagger
    }

    #[must_use]
    pub fn container_style(&self) -> RenderedStyle {
        if self.visibility.is_revealed() {
            RenderedStyle::animated(self.container.visible, self.container.timing)
        } else {
            RenderedStyle::still(self.container.hidden)
        }
    }

    /// Time after the container reveal at which child `index` starts, or
    /// `None` while the container is still hidden.
    #[must_use]
    pub fn child_start(&self, index: usize, variant: &AnimationVariant) -> Option<Duration> {
        if !self.visibility.is_revealed() {
            return None;
        }
        let step = u32::try_from(index).unwrap_or(u32::MAX);
        Some(
            self.delay_children
                .saturating_add(self.stagger.saturating_mul(step))
                .saturating_add(variant.timing.delay),
        )
    }

    #[must_use]
    pub fn child_style(&self, index: usize, variant: &AnimationVariant) -> RenderedStyle {
        match self.child_start(index, variant) {
            Some(start) => RenderedStyle::animated(variant.visible, variant.timing.delayed(start)),
            None => RenderedStyle::still(variant.hidden),
        }
    }

    /// Style of a child that may be inserted after the container revealed.
    ///
    /// CSS does not transition an element on insertion, so a child renders
    /// its hidden style until `mounted` and only then switches to
    /// [`RevealController::child_style`].
    #[must_use]
    pub fn entering_child_style(
        &self,
        index: usize,
        variant: &AnimationVariant,
        mounted: bool,
    ) -> RenderedStyle {
        if mounted { self.child_style(index, variant) } else { RenderedStyle::still(variant.hidden) }
    }
}

/// A resolved style ready to be written into a `style` attribute.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderedStyle {
    pub style: Style,
    pub timing: Option<Timing>,
}

impl RenderedStyle {
    #[must_use]
    pub const fn still(style: Style) -> Self {
        Self { style, timing: None }
    }

    #[must_use]
    pub const fn animated(style: Style, timing: Timing) -> Self {
        Self { style, timing: Some(timing) }
    }

    /// Inline CSS declarations, e.g.
    /// `opacity: 1; transform: translate(0px, 0px); transition: all 600ms ease-out 200ms`.
    #[must_use]
    pub fn to_css(&self) -> String {
        let Style { opacity, x, y, width } = self.style;
        let mut css = format!("opacity: {opacity}; transform: translate({x}px, {y}px)");

        if let Some(width) = width {
            let _ = write!(css, "; width: {width}%");
        }

        if let Some(timing) = self.timing {
            let _ = write!(
                css,
                "; transition: all {}ms {} {}ms",
                timing.duration.as_millis(),
                timing.easing.css(),
                timing.delay.as_millis()
            );
        }

        css
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::variant::{FADE, RISE, SLIDE_IN, skill_bar};

    const STAGGER: Duration = Duration::from_millis(200);

    #[test]
    fn hidden_controller_renders_hidden_styles_everywhere() {
        let controller = RevealController::new(FADE, STAGGER);

        assert_eq!(controller.container_style(), RenderedStyle::still(FADE.hidden));
        for index in 0..4 {
            assert_eq!(controller.child_style(index, &RISE), RenderedStyle::still(RISE.hidden));
            assert_eq!(controller.child_start(index, &RISE), None);
        }
    }

    #[test]
    fn revealed_children_are_staggered() {
        let controller = RevealController::new(FADE, STAGGER)
            .with_delay_children(Duration::from_millis(50))
            .synced(Visibility::Revealed);

        assert_eq!(controller.child_start(0, &SLIDE_IN), Some(Duration::from_millis(50)));
        assert_eq!(controller.child_start(2, &SLIDE_IN), Some(Duration::from_millis(450)));
        assert_eq!(controller.child_start(1, &skill_bar(70, 4)), Some(Duration::from_millis(650)));
    }

    #[test]
    fn late_children_start_hidden_until_mounted() {
        let controller = RevealController::new(FADE, Duration::from_millis(100))
            .synced(Visibility::Revealed);

        let inserted = controller.entering_child_style(3, &RISE, false);
        assert_eq!(inserted, RenderedStyle::still(RISE.hidden));

        let mounted = controller.entering_child_style(3, &RISE, true);
        assert_eq!(mounted, controller.child_style(3, &RISE));
        assert!(mounted.timing.is_some());
    }

    #[test]
    fn sync_never_hides_again() {
        let mut controller = RevealController::new(FADE, STAGGER);
        controller.sync(Visibility::Revealed);
        controller.sync(Visibility::Hidden);
        assert_eq!(controller.visibility(), Visibility::Revealed);
    }

    #[test]
    fn css_for_hidden_and_revealed_items() {
        let hidden = RenderedStyle::still(RISE.hidden);
        assert_eq!(hidden.to_css(), "opacity: 0; transform: translate(0px, 50px)");

        let controller = RevealController::new(FADE, STAGGER).synced(Visibility::Revealed);
        assert_eq!(
            controller.child_style(1, &RISE).to_css(),
            "opacity: 1; transform: translate(0px, 0px); transition: all 600ms ease-out 200ms"
        );
        assert_eq!(
            controller.child_style(0, &skill_bar(85, 0)).to_css(),
            "opacity: 1; transform: translate(0px, 0px); width: 85%; \
             transition: all 1500ms ease-out 0ms"
        );
    }
}
