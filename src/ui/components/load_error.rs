use crate::api::ApiError;
use dioxus::prelude::*;

/// Error display for a failed page request, with a retry button
#[component]
pub fn LoadError(error: ApiError, on_retry: EventHandler<()>) -> Element {
    let hint = match &error {
        ApiError::Server(401) | ApiError::Server(403) => {
            "Check that RANKVIEW_API_TOKEN holds a valid token."
        }
        ApiError::Network(_) => "Check your connection and the configured API URL.",
        _ => "",
    };

    rsx! {
        div { class: "bg-red-900 border border-red-700 text-red-100 px-4 py-3 rounded mb-4",
            p { "{error}" }
            if !hint.is_empty() {
                p { class: "text-sm mt-2", "{hint}" }
            }
            button {
                class: "mt-3 px-4 py-2 bg-red-700 hover:bg-red-600 rounded",
                onclick: move |_| on_retry.call(()),
                "Retry"
            }
        }
    }
}
