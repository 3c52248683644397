//! Editor Panel
//!
//! Title, rating and image inputs plus the download button.

use dioxus::prelude::*;
use rfd::{AsyncMessageDialog, MessageButtons, MessageLevel};

use crate::components::{ImageUpload, StarRating};
use crate::context::{use_card_region, use_card_state, use_exporter};

#[component]
pub fn EditorPanel() -> Element {
    let mut card = use_card_state();
    let region = use_card_region();
    let exporter = use_exporter();
    let mut exporting = use_signal(|| false);

    let snapshot = card.read().clone();
    let title = snapshot.title().to_string();
    let rating = snapshot.rating();
    let has_poster = snapshot.background_image().is_some();
    let has_profile = snapshot.profile_image().is_some();

    let handle_download = move |_| {
        // The button is disabled meanwhile; this guards double clicks
        if exporting() {
            return;
        }
        exporting.set(true);

        let exporter = exporter.clone();
        let mounted = region.read().clone();
        let title = card.read().title().to_string();

        spawn(async move {
            if let Err(e) = exporter.export(mounted.as_ref(), &title).await {
                if let Some(message) = e.user_message() {
                    AsyncMessageDialog::new()
                        .set_level(MessageLevel::Warning)
                        .set_title("Review Card")
                        .set_description(message)
                        .set_buttons(MessageButtons::Ok)
                        .show()
                        .await;
                }
            }
            exporting.set(false);
        });
    };

    rsx! {
        aside { class: "editor",
            h1 { class: "editor__title", "Review Card" }

            div { class: "field",
                label { class: "field__label", "Title" }
                input {
                    class: "field__input",
                    r#type: "text",
                    value: "{title}",
                    placeholder: "Type the title...",
                    oninput: move |evt| {
                        let next = card.read().clone().with_title(evt.value());
                        card.set(next);
                    },
                }
            }

            div { class: "field",
                label { class: "field__label", "Rating (0.5 - 5)" }
                StarRating {
                    rating: rating,
                    on_select: move |slot| {
                        let next = card.read().clone().click_star(slot);
                        card.set(next);
                    },
                }
                p { class: "field__hint", "Tip: click a star again for a half star." }
            }

            ImageUpload {
                label: "Background image (poster)".to_string(),
                loaded: has_poster,
                on_load: move |image| {
                    let next = card.read().clone().with_background_image(Some(image));
                    card.set(next);
                },
            }

            ImageUpload {
                label: "Profile picture".to_string(),
                loaded: has_profile,
                on_load: move |image| {
                    let next = card.read().clone().with_profile_image(Some(image));
                    card.set(next);
                },
            }

            button {
                class: "download-btn",
                disabled: exporting(),
                onclick: handle_download,
                if exporting() { "Generating..." } else { "Download card" }
            }
        }
    }
}
