//! Review Card Core Library
//!
//! Rating model, card markup and image export for the review card composer.
//!
//! ## Overview
//!
//! A review card is a 405x720 poster-style image: a backdrop built from the
//! poster, a framed poster, a round profile picture, the game title, a five
//! star rating with half-star steps and a fixed logo. The desktop app edits a
//! [`CardState`], renders it to a [`CardRegion`] and hands that region to a
//! [`CardExporter`] when the user asks for a download.
//!
//! ## Quick Start
//!
//! ```ignore
//! use reviewcard_core::{CardExporter, CardRegion, CardState, DirectorySink, ExportSettings, StarSlot};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let state = CardState::default()
//!         .with_title("Elden Ring")
//!         .click_star(StarSlot::FIVE)
//!         .click_star(StarSlot::FIVE);
//!
//!     let region = CardRegion::render(&state);
//!     let exporter = CardExporter::new(ExportSettings::default(), DirectorySink::new("."));
//!     let receipt = exporter.export(Some(&region), state.title()).await?;
//!     println!("saved {}", receipt.location.display());
//!     Ok(())
//! }
//! ```

pub mod card;
pub mod error;
pub mod export;
pub mod logging;
pub mod rating;
pub mod state;
pub mod types;
pub mod upload;

// Re-exports
pub use card::{CardRegion, CARD_HEIGHT, CARD_WIDTH};
pub use error::{CardError, CardResult};
pub use export::{
    export_filename, slug, CardExporter, DirectorySink, DownloadSink, ExportFormat,
    ExportReceipt, ExportSettings, ExportedImage, BACKDROP, PIXEL_RATIO,
};
pub use rating::{fill_state_of, on_star_click, slot_fills, FillState, Rating, StarSlot};
pub use state::CardState;
pub use types::CardImage;
pub use upload::{encode_data_uri, load_image};
