use folio_reveal::{
    FADE, IntersectionEntry, RISE, RenderedStyle, RevealController, SLIDE_IN, Transition,
    Visibility, VisibilityLatch,
};
use proptest::prelude::*;
use std::time::Duration;

fn entry() -> impl Strategy<Value = IntersectionEntry> {
    (any::<bool>(), 0.0f64..=1.0).prop_map(|(hit, ratio)| IntersectionEntry::new(hit, ratio))
}

proptest! {
    #[test]
    fn latch_reveals_at_most_once(entries in prop::collection::vec(entry(), 0..64)) {
        let mut latch = VisibilityLatch::new();
        let mut revealed_at = None;

        for (step, entry) in entries.iter().enumerate() {
            if latch.observe(*entry) == Transition::Revealed {
                prop_assert!(revealed_at.is_none(), "second reveal at step {step}");
                revealed_at = Some(step);
            }
            if revealed_at.is_some() {
                prop_assert_eq!(latch.visibility(), Visibility::Revealed);
            }
        }

        let first_hit = entries.iter().position(IntersectionEntry::intersects);
        prop_assert_eq!(revealed_at, first_hit);
    }

    #[test]
    fn hidden_controller_keeps_every_child_hidden(
        stagger_ms in 0u64..1_000,
        index in 0usize..32,
    ) {
        let controller = RevealController::new(FADE, Duration::from_millis(stagger_ms));
        for variant in [&RISE, &SLIDE_IN] {
            prop_assert_eq!(controller.child_style(index, variant), RenderedStyle::still(variant.hidden));
        }
    }

    #[test]
    fn child_starts_are_at_least_index_times_stagger(
        stagger_ms in 0u64..1_000,
        delay_ms in 0u64..500,
        count in 1usize..24,
    ) {
        let stagger = Duration::from_millis(stagger_ms);
        let controller = RevealController::new(FADE, stagger)
            .with_delay_children(Duration::from_millis(delay_ms))
            .synced(Visibility::Revealed);

        let mut previous = None;
        for index in 0..count {
            let start = controller.child_start(index, &RISE).expect("revealed controller");
            let floor = stagger * u32::try_from(index).expect("small index");
            prop_assert!(start >= floor);
            if let Some(previous) = previous {
                prop_assert!(start >= previous);
            }
            previous = Some(start);
        }
    }
}
