use crate::api::recommendations::DATE_PARAM;
use crate::api::DateWindow;
use crate::pages::{with_filter, ListPage};
use crate::query::QueryParams;
use dioxus::prelude::*;

pub const LANGUAGE_PARAM: &str = "language";
pub const SEARCH_PARAM: &str = "search";

const LANGUAGES: [(&str, &str); 4] = [
    ("", "All languages"),
    ("en", "English"),
    ("fr", "French"),
    ("de", "German"),
];

/// Filters for the recommendations page, written into the query string
#[component]
pub fn SearchFilter(query: QueryParams) -> Element {
    let current_search = search_value(&query);
    let mut search_text = use_signal(|| current_search.clone());
    // The component stays mounted across navigations, so the input follows the route
    use_effect(use_reactive!(|(current_search,)| search_text.set(current_search)));
    let current_date = query.get(DATE_PARAM).unwrap_or_default().to_string();
    let current_language = query.get(LANGUAGE_PARAM).unwrap_or_default().to_string();

    let apply = {
        let query = query.clone();
        move |key: &'static str, value: String| {
            navigator().push(ListPage::Recommendations.route(with_filter(&query, key, &value)));
        }
    };

    rsx! {
        div { class: "flex flex-wrap gap-3 mb-6",
            input {
                class: "flex-1 p-2 border border-gray-600 bg-gray-800 rounded text-white",
                placeholder: "Search videos...",
                value: "{search_text}",
                oninput: move |event: FormEvent| search_text.set(event.value()),
                onkeydown: {
                    let apply = apply.clone();
                    move |event: KeyboardEvent| {
                        if event.key() == Key::Enter {
                            apply(SEARCH_PARAM, search_text.read().clone());
                        }
                    }
                },
            }
            select {
                class: "p-2 bg-gray-800 border border-gray-600 rounded text-white",
                value: "{current_date}",
                onchange: {
                    let apply = apply.clone();
                    move |event: FormEvent| apply(DATE_PARAM, event.value())
                },
                option { value: "", "Any time" }
                for window in DateWindow::ALL {
                    option { value: window.as_str(), {window.as_str()} }
                }
            }
            select {
                class: "p-2 bg-gray-800 border border-gray-600 rounded text-white",
                value: "{current_language}",
                onchange: move |event: FormEvent| apply(LANGUAGE_PARAM, event.value()),
                for (code, name) in LANGUAGES {
                    option { value: code, "{name}" }
                }
            }
        }
    }
}

/// Text the search box shows for `query`
fn search_value(query: &QueryParams) -> String {
    query.get(SEARCH_PARAM).unwrap_or_default().to_string()
}
