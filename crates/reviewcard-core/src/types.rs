//! Core types for the review card composer.

mod card_image;

pub use card_image::CardImage;
