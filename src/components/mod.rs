//! UI Components for the review card window.

mod card_preview;
mod editor_panel;
pub mod images;
mod star_rating;

pub use card_preview::CardPreview;
pub use editor_panel::EditorPanel;
pub use images::ImageUpload;
pub use star_rating::StarRating;
