use crate::query::QueryParams;
use crate::ui::Route;
use dioxus::prelude::*;

/// Layout component with the page links above the routed content
#[component]
pub fn Navbar() -> Element {
    rsx! {
        nav { class: "bg-gray-800 text-white px-6 py-4 flex space-x-6",
            Link {
                to: Route::VideoRecommendation {
                    query: QueryParams::default(),
                },
                class: "hover:text-blue-300 transition-colors",
                "Recommendations"
            }
            Link {
                to: Route::VideoRatings {
                    query: QueryParams::default(),
                },
                class: "hover:text-blue-300 transition-colors",
                "My ratings"
            }
        }
        Outlet::<Route> {}
    }
}
