use dioxus::prelude::*;
use reviewcard_core::{CardRegion, CardState};

use crate::components::{CardPreview, EditorPanel};
use crate::context::{build_exporter, get_config};
use crate::theme::GLOBAL_STYLES;

/// Root application component.
///
/// Provides global styles, the card state, the mounted region and the
/// exporter, then lays out the editor next to the live preview.
#[component]
pub fn App() -> Element {
    let card: Signal<CardState> = use_signal(CardState::default);
    let region: Signal<Option<CardRegion>> = use_signal(|| None);

    use_context_provider(|| card);
    use_context_provider(|| region);
    use_context_provider(|| build_exporter(get_config()));

    rsx! {
        style { {GLOBAL_STYLES} }
        main { class: "composer",
            EditorPanel {}

            section { class: "preview-pane",
                p { class: "preview-pane__label", "Preview" }
                CardPreview {}
            }
        }
    }
}
