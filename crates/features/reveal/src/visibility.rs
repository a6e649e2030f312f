//! The hidden-to-revealed latch owned by every observed element.

/// Whether an element has been seen in the viewport.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Visibility {
    #[default]
    Hidden,
    Revealed,
}

impl Visibility {
    #[must_use]
    pub const fn is_revealed(self) -> bool {
        matches!(self, Self::Revealed)
    }
}

/// Outcome of feeding one intersection entry to a latch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// The latch flipped from hidden to revealed on this entry.
    Revealed,
    Unchanged,
}

/// A single intersection report for an observed element.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IntersectionEntry {
    pub is_intersecting: bool,
    /// Visible fraction of the element's bounding box, `0.0..=1.0`.
    pub ratio: f64,
}

impl IntersectionEntry {
    /// Stand-in report used when a host cannot observe the element.
    pub const FULLY_VISIBLE: Self = Self::new(true, 1.0);

    #[must_use]
    pub const fn new(is_intersecting: bool, ratio: f64) -> Self {
        Self { is_intersecting, ratio }
    }

    /// True when any non-zero part of the element is on screen.
    #[must_use]
    pub fn intersects(&self) -> bool {
        self.is_intersecting && self.ratio > 0.0
    }
}

/// Monotonic visibility state: starts hidden, reveals at most once.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct VisibilityLatch {
    state: Visibility,
}

impl VisibilityLatch {
    #[must_use]
    pub const fn new() -> Self {
        Self { state: Visibility::Hidden }
    }

    #[must_use]
    pub const fn visibility(&self) -> Visibility {
        self.state
    }

    /// Applies an entry. Only the first intersecting entry produces
    /// [`Transition::Revealed`]; leaving the viewport never hides again.
    pub fn observe(&mut self, entry: IntersectionEntry) -> Transition {
        if self.state.is_revealed() || !entry.intersects() {
            return Transition::Unchanged;
        }
        self.state = Visibility::Revealed;
        Transition::Revealed
    }

    /// Reveals unconditionally. Used when no intersection primitive is available.
    pub fn reveal(&mut self) -> Transition {
        if self.state.is_revealed() {
            return Transition::Unchanged;
        }
        self.state = Visibility::Revealed;
        Transition::Revealed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_hidden() {
        assert_eq!(VisibilityLatch::new().visibility(), Visibility::Hidden);
        assert_eq!(VisibilityLatch::default(), VisibilityLatch::new());
    }

    #[test]
    fn zero_ratio_does_not_count_as_intersecting() {
        assert!(!IntersectionEntry::new(true, 0.0).intersects());
        assert!(!IntersectionEntry::new(false, 0.4).intersects());
        assert!(IntersectionEntry::new(true, 0.01).intersects());
    }

    #[test]
    fn reveals_once_and_stays_revealed() {
        let mut latch = VisibilityLatch::new();

        assert_eq!(latch.observe(IntersectionEntry::new(false, 0.0)), Transition::Unchanged);
        assert_eq!(latch.observe(IntersectionEntry::new(true, 0.2)), Transition::Revealed);
        assert_eq!(latch.observe(IntersectionEntry::new(false, 0.0)), Transition::Unchanged);
        assert_eq!(latch.observe(IntersectionEntry::new(true, 1.0)), Transition::Unchanged);
        assert_eq!(latch.visibility(), Visibility::Revealed);
    }

    #[test]
    fn forced_reveal_is_idempotent() {
        let mut latch = VisibilityLatch::new();
        assert_eq!(latch.reveal(), Transition::Revealed);
        assert_eq!(latch.reveal(), Transition::Unchanged);
        assert_eq!(latch.observe(IntersectionEntry::new(true, 1.0)), Transition::Unchanged);
    }
}
