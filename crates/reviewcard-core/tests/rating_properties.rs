//! Property-based tests for the half-star rating model
//!
//! Uses proptest to check the click and fill rules over the whole domain.

use proptest::prelude::*;
use reviewcard_core::{
    fill_state_of, on_star_click, slot_fills, CardState, FillState, Rating, StarSlot,
};

// ============================================================================
// Strategy Generators
// ============================================================================

fn rating_strategy() -> impl Strategy<Value = Rating> {
    (0u8..=10).prop_map(|half_steps| Rating::from_half_steps(half_steps).unwrap())
}

fn slot_strategy() -> impl Strategy<Value = StarSlot> {
    (1u8..=5).prop_map(|number| StarSlot::new(number).unwrap())
}

/// Reference fill rule on plain numbers
fn expected_fill(rating: f32, slot: f32) -> FillState {
    if rating >= slot {
        FillState::Full
    } else if rating >= slot - 0.5 {
        FillState::Half
    } else {
        FillState::Empty
    }
}

// ============================================================================
// Exhaustive checks (the domain is 11 x 5)
// ============================================================================

#[test]
fn fill_rule_matches_for_every_pair() {
    for rating in Rating::all() {
        for slot in StarSlot::ALL {
            assert_eq!(
                fill_state_of(rating, slot),
                expected_fill(rating.value(), f32::from(slot.number())),
                "rating {} slot {}",
                rating,
                slot.number()
            );
        }
    }
}

#[test]
fn control_and_preview_agree() {
    // The control draws slot by slot, the preview draws the whole row
    for rating in Rating::all() {
        let row = slot_fills(rating);
        for (i, slot) in StarSlot::ALL.iter().enumerate() {
            assert_eq!(row[i], fill_state_of(rating, *slot));
        }
    }
}

#[test]
fn click_rule_for_every_pair() {
    for rating in Rating::all() {
        for slot in StarSlot::ALL {
            let s = f32::from(slot.number());
            let next = on_star_click(rating, slot).value();
            if rating.value() == s {
                assert_eq!(next, s - 0.5);
            } else {
                assert_eq!(next, s);
            }
        }
    }
}

#[test]
fn double_click_from_full_slot_round_trips() {
    let start = Rating::from_half_steps(8).unwrap();
    let half = on_star_click(start, StarSlot::FOUR);
    assert_eq!(half.value(), 3.5);
    assert_eq!(on_star_click(half, StarSlot::FOUR), start);
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    /// Any sequence of clicks keeps the rating on the grid and above zero
    #[test]
    fn clicks_stay_in_domain(
        start in rating_strategy(),
        clicks in prop::collection::vec(slot_strategy(), 1..50)
    ) {
        let state = clicks
            .iter()
            .fold(CardState::default().with_rating(start), |state, slot| state.click_star(*slot));
        let value = state.rating().value();
        prop_assert!((0.5..=5.0).contains(&value));
        prop_assert_eq!(Rating::new(value), Ok(state.rating()));
    }

    /// Clicking the same slot twice lands on the half star, unless the rating
    /// already sat on that slot's full value
    #[test]
    fn double_click_is_half_star(start in rating_strategy(), slot in slot_strategy()) {
        prop_assume!(start.half_steps() != slot.number() * 2);
        let full = on_star_click(start, slot);
        prop_assert_eq!(full.value(), f32::from(slot.number()));
        let half = on_star_click(full, slot);
        prop_assert_eq!(half.value(), f32::from(slot.number()) - 0.5);
        prop_assert_eq!(fill_state_of(half, slot), FillState::Half);
    }

    /// After a click the clicked slot is never drawn empty
    #[test]
    fn clicked_slot_is_not_empty(start in rating_strategy(), slot in slot_strategy()) {
        let next = on_star_click(start, slot);
        prop_assert_ne!(fill_state_of(next, slot), FillState::Empty);
    }

    /// Fill states never increase from left to right
    #[test]
    fn fills_are_monotonic(rating in rating_strategy()) {
        let rank = |fill: FillState| match fill {
            FillState::Full => 2,
            FillState::Half => 1,
            FillState::Empty => 0,
        };
        let row = slot_fills(rating);
        for pair in row.windows(2) {
            prop_assert!(rank(pair[0]) >= rank(pair[1]));
        }
        prop_assert!(row.iter().filter(|f| **f == FillState::Half).count() <= 1);
    }
}
