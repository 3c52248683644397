//! Card Preview
//!
//! Shows the rendered card and publishes it as the region the exporter
//! rasterizes. The region is withdrawn when the preview unmounts.

use dioxus::prelude::*;
use reviewcard_core::CardRegion;

use crate::context::{use_card_region, use_card_state};

#[component]
pub fn CardPreview() -> Element {
    let card = use_card_state();
    let mut region = use_card_region();

    let rendered = use_memo(move || CardRegion::render(&card.read()));

    // Keep the published region in step with what is on screen
    use_effect(move || {
        region.set(Some(rendered()));
    });

    use_drop(move || {
        if let Ok(mut slot) = region.try_write() {
            *slot = None;
        }
    });

    let markup = rendered.read().markup().to_string();

    rsx! {
        div {
            class: "card-frame",
            dangerous_inner_html: "{markup}",
        }
    }
}
