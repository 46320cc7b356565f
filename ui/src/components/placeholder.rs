use dioxus::prelude::*;

/// Stand-in panel for dashboard pages that are not built yet.
#[component]
pub fn PlaceholderPanel(
    #[props(into)] title: String,
    #[props(into)] note: String,
) -> Element {
    rsx! {
        section { class: "panel panel--placeholder",
            h2 { class: "panel__title", "{title}" }
            p { class: "panel__note", "{note}" }
        }
    }
}
