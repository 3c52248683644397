//! Half-star rating model.
//!
//! A [`Rating`] lives on a 0.5 grid between 0 and 5. It is stored as a count
//! of half steps so equality checks in the click rule are exact.
//!
//! Two things read a rating:
//! - the click rule ([`on_star_click`]) that turns a click on one of the five
//!   [`StarSlot`]s into the next rating
//! - the fill rule ([`fill_state_of`] / [`slot_fills`]) that decides how each
//!   slot is drawn; the editor control and the card preview both use it

use std::fmt;

use crate::error::{CardError, CardResult};

/// Number of star slots on a card.
pub const SLOT_COUNT: usize = 5;

const MAX_HALF_STEPS: u8 = (SLOT_COUNT as u8) * 2;

/// Rating in [0, 5] at 0.5 granularity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Rating(u8);

impl Rating {
    /// No stars.
    pub const ZERO: Rating = Rating(0);
    /// Five full stars.
    pub const MAX: Rating = Rating(MAX_HALF_STEPS);

    /// Validate a numeric rating.
    pub fn new(value: f32) -> CardResult<Self> {
        let doubled = value * 2.0;
        if !value.is_finite() || doubled.fract() != 0.0 {
            return Err(CardError::InvalidRating(value));
        }
        if doubled < 0.0 || doubled > f32::from(MAX_HALF_STEPS) {
            return Err(CardError::InvalidRating(value));
        }
        Ok(Rating(doubled as u8))
    }

    /// Build from a count of half stars (0..=10).
    pub fn from_half_steps(half_steps: u8) -> Option<Self> {
        (half_steps <= MAX_HALF_STEPS).then_some(Rating(half_steps))
    }

    pub fn half_steps(self) -> u8 {
        self.0
    }

    pub fn value(self) -> f32 {
        f32::from(self.0) / 2.0
    }

    /// Every valid rating, ascending.
    pub fn all() -> impl Iterator<Item = Rating> {
        (0..=MAX_HALF_STEPS).map(Rating)
    }
}

impl Default for Rating {
    fn default() -> Self {
        Rating::MAX
    }
}

impl TryFrom<f32> for Rating {
    type Error = CardError;

    fn try_from(value: f32) -> CardResult<Self> {
        Rating::new(value)
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}

/// One of the five star positions, numbered 1..=5.
///
/// Slot `s` covers the rating interval (s-1, s].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct StarSlot(u8);

impl StarSlot {
    pub const ONE: StarSlot = StarSlot(1);
    pub const TWO: StarSlot = StarSlot(2);
    pub const THREE: StarSlot = StarSlot(3);
    pub const FOUR: StarSlot = StarSlot(4);
    pub const FIVE: StarSlot = StarSlot(5);

    /// All slots, left to right.
    pub const ALL: [StarSlot; SLOT_COUNT] = [
        StarSlot::ONE,
        StarSlot::TWO,
        StarSlot::THREE,
        StarSlot::FOUR,
        StarSlot::FIVE,
    ];

    /// Slot from its 1-based number.
    pub fn new(number: u8) -> Option<Self> {
        (1..=SLOT_COUNT as u8).contains(&number).then_some(StarSlot(number))
    }

    pub fn number(self) -> u8 {
        self.0
    }

    fn full_half_steps(self) -> u8 {
        self.0 * 2
    }
}

/// How a slot is drawn for a given rating.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FillState {
    Full,
    Half,
    Empty,
}

impl FillState {
    /// Stable lowercase name, used for CSS classes and markup ids.
    pub fn as_str(self) -> &'static str {
        match self {
            FillState::Full => "full",
            FillState::Half => "half",
            FillState::Empty => "empty",
        }
    }
}

/// Rating after clicking `slot`.
///
/// Clicking a fully filled slot that holds the exact rating demotes it to a
/// half star; any other click fills the slot completely. The result is always
/// between 0.5 and 5, so clicks alone never reach 0.
pub fn on_star_click(rating: Rating, slot: StarSlot) -> Rating {
    let full = slot.full_half_steps();
    if rating.0 == full {
        Rating(full - 1)
    } else {
        Rating(full)
    }
}

/// Fill state of `slot` for `rating`.
pub fn fill_state_of(rating: Rating, slot: StarSlot) -> FillState {
    let full = slot.full_half_steps();
    if rating.0 >= full {
        FillState::Full
    } else if rating.0 + 1 >= full {
        FillState::Half
    } else {
        FillState::Empty
    }
}

/// Fill states of all five slots, left to right.
pub fn slot_fills(rating: Rating) -> [FillState; SLOT_COUNT] {
    StarSlot::ALL.map(|slot| fill_state_of(rating, slot))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn r(value: f32) -> Rating {
        Rating::new(value).unwrap()
    }

    #[test]
    fn test_rating_validation() {
        assert_eq!(r(0.0), Rating::ZERO);
        assert_eq!(r(5.0), Rating::MAX);
        assert_eq!(r(3.5).half_steps(), 7);
        assert_eq!(Rating::new(5.5), Err(CardError::InvalidRating(5.5)));
        assert_eq!(Rating::new(-0.5), Err(CardError::InvalidRating(-0.5)));
        assert_eq!(Rating::new(2.25), Err(CardError::InvalidRating(2.25)));
        assert!(Rating::new(f32::NAN).is_err());
        assert!(Rating::new(f32::INFINITY).is_err());
    }

    #[test]
    fn test_rating_default_is_five() {
        assert_eq!(Rating::default().value(), 5.0);
    }

    #[test]
    fn test_rating_display() {
        assert_eq!(r(4.5).to_string(), "4.5");
        assert_eq!(r(5.0).to_string(), "5");
    }

    #[test]
    fn test_half_steps_bounds() {
        assert_eq!(Rating::from_half_steps(10), Some(Rating::MAX));
        assert_eq!(Rating::from_half_steps(11), None);
        assert_eq!(Rating::all().count(), 11);
    }

    #[test]
    fn test_slot_numbers() {
        assert_eq!(StarSlot::new(0), None);
        assert_eq!(StarSlot::new(6), None);
        assert_eq!(StarSlot::new(3), Some(StarSlot::THREE));
        let numbers: Vec<u8> = StarSlot::ALL.iter().map(|s| s.number()).collect();
        assert_eq!(numbers, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_click_fills_slot() {
        assert_eq!(on_star_click(r(5.0), StarSlot::THREE), r(3.0));
        assert_eq!(on_star_click(r(0.0), StarSlot::FIVE), r(5.0));
        assert_eq!(on_star_click(r(2.5), StarSlot::THREE), r(3.0));
    }

    #[test]
    fn test_second_click_demotes_to_half() {
        assert_eq!(on_star_click(r(4.0), StarSlot::FOUR), r(3.5));
        // Half-filled slot goes back to full
        assert_eq!(on_star_click(r(3.5), StarSlot::FOUR), r(4.0));
    }

    #[test]
    fn test_slot_one_never_reaches_zero() {
        let once = on_star_click(r(1.0), StarSlot::ONE);
        assert_eq!(once, r(0.5));
        assert_eq!(on_star_click(once, StarSlot::ONE), r(1.0));
    }

    #[test]
    fn test_fill_rule_boundaries() {
        assert_eq!(fill_state_of(r(3.0), StarSlot::THREE), FillState::Full);
        assert_eq!(fill_state_of(r(2.5), StarSlot::THREE), FillState::Half);
        assert_eq!(fill_state_of(r(2.0), StarSlot::THREE), FillState::Empty);
        assert_eq!(fill_state_of(r(0.5), StarSlot::ONE), FillState::Half);
        assert_eq!(fill_state_of(r(0.0), StarSlot::ONE), FillState::Empty);
    }

    #[test]
    fn test_slot_fills_row() {
        use FillState::*;
        assert_eq!(slot_fills(r(3.5)), [Full, Full, Full, Half, Empty]);
        assert_eq!(slot_fills(r(0.0)), [Empty; 5]);
        assert_eq!(slot_fills(r(5.0)), [Full; 5]);
    }
}
