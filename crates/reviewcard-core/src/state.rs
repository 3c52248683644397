//! Card editing state.
//!
//! One value holds everything the card shows. Updates consume the state and
//! return the next one, so a UI signal only ever swaps whole values.

use crate::rating::{on_star_click, Rating, StarSlot};
use crate::types::CardImage;

/// Title shown on a fresh card.
pub const DEFAULT_TITLE: &str = "Jogo";

/// Everything the card renders from.
#[derive(Debug, Clone, PartialEq)]
pub struct CardState {
    title: String,
    rating: Rating,
    comment: String,
    background_image: Option<CardImage>,
    profile_image: Option<CardImage>,
}

impl Default for CardState {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            rating: Rating::default(),
            comment: String::new(),
            background_image: None,
            profile_image: None,
        }
    }
}

impl CardState {
    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn rating(&self) -> Rating {
        self.rating
    }

    pub fn comment(&self) -> &str {
        &self.comment
    }

    /// Poster image, also used for the blurred backdrop.
    pub fn background_image(&self) -> Option<&CardImage> {
        self.background_image.as_ref()
    }

    pub fn profile_image(&self) -> Option<&CardImage> {
        self.profile_image.as_ref()
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_rating(mut self, rating: Rating) -> Self {
        self.rating = rating;
        self
    }

    /// Apply a click on one of the star slots.
    pub fn click_star(mut self, slot: StarSlot) -> Self {
        self.rating = on_star_click(self.rating, slot);
        self
    }

    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = comment.into();
        self
    }

    /// Replace the poster image. Passing `None` brings the placeholder back.
    pub fn with_background_image(mut self, image: Option<CardImage>) -> Self {
        self.background_image = image;
        self
    }

    /// Replace the profile picture. Passing `None` brings the placeholder back.
    pub fn with_profile_image(mut self, image: Option<CardImage>) -> Self {
        self.profile_image = image;
        self
    }
}
