//! Image handling components
//!
//! Upload images into the card's poster and profile slots.

pub mod image_upload;

pub use image_upload::ImageUpload;
