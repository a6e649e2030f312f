//! Declarative entrance animations.
//!
//! A variant is a pair of styles plus the transition used to move from the
//! hidden one to the visible one. All presets are `const`.

use std::time::Duration;
use strum_macros::IntoStaticStr;

/// The animatable subset of an element's style.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Style {
    pub opacity: f32,
    /// Horizontal offset in pixels.
    pub x: f32,
    /// Vertical offset in pixels.
    pub y: f32,
    /// Width as a percentage of the parent, for progress bars.
    pub width: Option<f32>,
}

impl Style {
    pub const VISIBLE: Self = Self { opacity: 1.0, x: 0.0, y: 0.0, width: None };
    pub const TRANSPARENT: Self = Self { opacity: 0.0, x: 0.0, y: 0.0, width: None };

    #[must_use]
    pub const fn offset(mut self, x: f32, y: f32) -> Self {
        self.x = x;
        self.y = y;
        self
    }

    #[must_use]
    pub const fn with_width(mut self, percent: f32) -> Self {
        self.width = Some(percent);
        self
    }
}

/// CSS timing function.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, IntoStaticStr)]
pub enum Easing {
    #[strum(serialize = "linear")]
    Linear,
    #[strum(serialize = "ease")]
    Ease,
    #[default]
    #[strum(serialize = "ease-out")]
    EaseOut,
    #[strum(serialize = "ease-in-out")]
    EaseInOut,
}

impl Easing {
    #[must_use]
    pub fn css(self) -> &'static str {
        self.into()
    }
}

/// Duration, delay and easing of the hidden-to-visible transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timing {
    pub duration: Duration,
    pub delay: Duration,
    pub easing: Easing,
}

impl Timing {
    #[must_use]
    pub const fn new(duration: Duration) -> Self {
        Self { duration, delay: Duration::ZERO, easing: Easing::EaseOut }
    }

    #[must_use]
    pub const fn delayed(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    #[must_use]
    pub const fn eased(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }
}

/// Named hidden/visible style pair.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationVariant {
    pub name: &'static str,
    pub hidden: Style,
    pub visible: Style,
    pub timing: Timing,
}

/// Section containers: plain fade.
pub const FADE: AnimationVariant = AnimationVariant {
    name: "fade",
    hidden: Style::TRANSPARENT,
    visible: Style::VISIBLE,
    timing: Timing::new(Duration::from_millis(300)),
};

/// Items rising 50px into place.
pub const RISE: AnimationVariant = AnimationVariant {
    name: "rise",
    hidden: Style::TRANSPARENT.offset(0.0, 50.0),
    visible: Style::VISIBLE,
    timing: Timing::new(Duration::from_millis(600)),
};

/// Slower rise for the hero block.
pub const HERO_RISE: AnimationVariant = AnimationVariant {
    name: "hero-rise",
    timing: Timing::new(Duration::from_millis(800)),
    ..RISE
};

/// Items sliding in from 50px to the left.
pub const SLIDE_IN: AnimationVariant = AnimationVariant {
    name: "slide-in",
    hidden: Style::TRANSPARENT.offset(-50.0, 0.0),
    visible: Style::VISIBLE,
    timing: Timing::new(Duration::from_millis(600)),
};

const SKILL_BAR_DURATION: Duration = Duration::from_millis(1_500);
const SKILL_BAR_STEP: Duration = Duration::from_millis(100);

/// Progress bar growing from zero to `level` percent, delayed by its position.
#[must_use]
pub fn skill_bar(level: u8, index: usize) -> AnimationVariant {
    let step = u32::try_from(index).unwrap_or(u32::MAX);
    AnimationVariant {
        name: "skill-bar",
        hidden: Style::VISIBLE.with_width(0.0),
        visible: Style::VISIBLE.with_width(f32::from(level.min(100))),
        timing: Timing::new(SKILL_BAR_DURATION)
            .delayed(SKILL_BAR_STEP.saturating_mul(step))
            .eased(Easing::EaseOut),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn easing_names_are_css_keywords() {
        assert_eq!(Easing::EaseOut.css(), "ease-out");
        assert_eq!(Easing::EaseInOut.css(), "ease-in-out");
        assert_eq!(Easing::Linear.css(), "linear");
    }

    #[test]
    fn hero_rise_only_changes_timing() {
        assert_eq!(HERO_RISE.hidden, RISE.hidden);
        assert_eq!(HERO_RISE.visible, RISE.visible);
        assert_eq!(HERO_RISE.timing.duration, Duration::from_millis(800));
    }

    #[test]
    fn skill_bar_delay_follows_index_and_clamps_level() {
        let bar = skill_bar(85, 3);
        assert_eq!(bar.visible.width, Some(85.0));
        assert_eq!(bar.hidden.width, Some(0.0));
        assert_eq!(bar.timing.delay, Duration::from_millis(300));
        assert_eq!(bar.timing.duration, Duration::from_millis(1_500));

        assert_eq!(skill_bar(250, 0).visible.width, Some(100.0));
    }
}
