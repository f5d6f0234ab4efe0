use dioxus::prelude::*;

/// Loading spinner shown while a page request is outstanding
#[component]
pub fn LoadingIndicator(#[props(into, default = "Loading...".to_string())] label: String) -> Element {
    rsx! {
        div { class: "flex justify-center items-center py-12",
            div { class: "animate-spin rounded-full h-12 w-12 border-b-2 border-blue-500" }
            p { class: "ml-4 text-gray-300", "{label}" }
        }
    }
}
