//! Star Rating Control
//!
//! Five clickable stars with half-star steps. Clicking a full star that
//! holds the current rating turns it into a half star.

use dioxus::prelude::*;
use reviewcard_core::card::star_icon_svg;
use reviewcard_core::{fill_state_of, FillState, Rating, StarSlot};

/// CSS class for a star button in the given fill state
fn star_class(fill: FillState) -> String {
    format!("star-button star-button--{}", fill.as_str())
}

/// Editable star rating
///
/// # Examples
///
/// ```rust,ignore
/// rsx! {
///     StarRating {
///         rating: card.read().rating(),
///         on_select: move |slot| {
///             let next = card.read().clone().click_star(slot);
///             card.set(next);
///         },
///     }
/// }
/// ```
#[component]
pub fn StarRating(
    /// Current rating
    rating: Rating,
    /// Called with the clicked slot
    on_select: EventHandler<StarSlot>,
    /// Icon size in pixels
    #[props(default = 32)]
    size: u32,
) -> Element {
    let stars: Vec<(StarSlot, FillState, String)> = StarSlot::ALL
        .iter()
        .map(|slot| {
            let fill = fill_state_of(rating, *slot);
            let icon = star_icon_svg(fill, size, &format!("star-control-{}", slot.number()));
            (*slot, fill, icon)
        })
        .collect();

    rsx! {
        div { class: "star-rating",
            for (slot, fill, icon) in stars {
                button {
                    key: "{slot.number()}",
                    class: "{star_class(fill)}",
                    title: "{slot.number()}",
                    onclick: move |_| on_select.call(slot),
                    span { dangerous_inner_html: "{icon}" }
                }
            }
        }
    }
}
