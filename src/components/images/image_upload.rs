//! Image Upload Component
//!
//! File picker that turns the chosen file into a data URI image.

use dioxus::prelude::*;
use reviewcard_core::upload::IMAGE_EXTENSIONS;
use reviewcard_core::{load_image, CardImage};
use rfd::FileDialog;

/// Upload button for one image slot of the card
///
/// Failed loads are only logged: the slot keeps its previous image (or the
/// placeholder) and the user can simply pick another file.
///
/// # Examples
///
/// ```rust,ignore
/// rsx! {
///     ImageUpload {
///         label: "Poster".to_string(),
///         loaded: card.read().background_image().is_some(),
///         on_load: move |image| {
///             let next = card.read().clone().with_background_image(Some(image));
///             card.set(next);
///         },
///     }
/// }
/// ```
#[component]
pub fn ImageUpload(
    /// Field label shown above the button
    label: String,
    /// Whether the slot already holds an image
    #[props(default = false)]
    loaded: bool,
    /// Callback with the encoded image on successful load
    on_load: EventHandler<CardImage>,
) -> Element {
    let mut loading = use_signal(|| false);

    let handle_upload = move |_| {
        loading.set(true);

        spawn(async move {
            // Open file picker (blocking, but in spawn so UI stays responsive)
            let file_path = tokio::task::spawn_blocking(move || {
                FileDialog::new()
                    .add_filter("images", IMAGE_EXTENSIONS)
                    .set_title("Select Image")
                    .pick_file()
            })
            .await;

            match file_path {
                Ok(Some(path)) => match load_image(&path).await {
                    Ok(image) => {
                        tracing::info!("Loaded image {:?}", path);
                        on_load.call(image);
                    }
                    Err(e) => {
                        tracing::warn!("Keeping placeholder, {}", e);
                    }
                },
                Ok(None) => {
                    // User cancelled
                }
                Err(e) => {
                    tracing::warn!("File picker error: {:?}", e);
                }
            }
            loading.set(false);
        });
    };

    rsx! {
        div { class: "field",
            label { class: "field__label", "{label}" }
            div { class: "image-upload",
                button {
                    class: "image-upload-btn",
                    onclick: handle_upload,
                    disabled: loading(),
                    if loading() { "Loading..." } else { "Upload" }
                }
                if loaded {
                    span { class: "image-upload__status", "Image loaded" }
                }
            }
        }
    }
}
