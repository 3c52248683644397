//! Shared state for the review card window.
//!
//! The App component provides three contexts:
//! - the card being edited (`Signal<CardState>`)
//! - the card region currently mounted by the preview
//! - the exporter that turns a region into a downloaded file
//!
//! ## Usage
//!
//! ```ignore
//! let mut card = use_card_state();
//! let next = card.read().clone().with_title("Hades");
//! card.set(next);
//! ```

use std::sync::Arc;

use dioxus::prelude::*;
use reviewcard_core::{CardExporter, CardRegion, CardState, DirectorySink};

pub use crate::{get_config, AppConfig};

/// Exporter shared by every component that can start a download.
pub type SharedExporter = Arc<CardExporter<DirectorySink>>;

/// Build the exporter described by the launch configuration.
pub fn build_exporter(config: AppConfig) -> SharedExporter {
    Arc::new(CardExporter::new(
        config.export,
        DirectorySink::new(config.output_dir),
    ))
}

/// Hook to access the card being edited.
pub fn use_card_state() -> Signal<CardState> {
    use_context::<Signal<CardState>>()
}

/// Hook to access the mounted card region.
///
/// `None` until the preview has rendered, and again after it unmounts.
pub fn use_card_region() -> Signal<Option<CardRegion>> {
    use_context::<Signal<Option<CardRegion>>>()
}

/// Hook to access the exporter.
pub fn use_exporter() -> SharedExporter {
    use_context::<SharedExporter>()
}
