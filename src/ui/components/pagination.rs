use crate::bounds::PageBounds;
use dioxus::prelude::*;

/// First/previous/next/last controls for an offset-paginated list
#[component]
pub fn Pagination(
    offset: u64,
    count: u64,
    limit: u64,
    on_offset_change: EventHandler<u64>,
) -> Element {
    let bounds = PageBounds::new(offset, count, limit);
    let summary = match bounds.shown_range() {
        Some((first, last)) => format!("{}-{} of {}", first, last, count),
        None => format!("No results on this page ({} total)", count),
    };
    let page_label = format!(
        "Page {} of {}",
        bounds.current_page(),
        bounds.total_pages().max(1)
    );
    let button_class = "px-3 py-1 rounded bg-gray-700 hover:bg-gray-600 text-white";

    rsx! {
        div { class: "flex items-center justify-center gap-3 py-6",
            button {
                class: button_class,
                disabled: !bounds.has_previous(),
                onclick: move |_| on_offset_change.call(0),
                "«"
            }
            button {
                class: button_class,
                disabled: !bounds.has_previous(),
                onclick: move |_| on_offset_change.call(bounds.previous_offset()),
                "‹ Previous"
            }
            span { class: "text-gray-300 text-sm", "{page_label}" }
            button {
                class: button_class,
                disabled: !bounds.has_next(),
                onclick: move |_| on_offset_change.call(bounds.next_offset()),
                "Next ›"
            }
            button {
                class: button_class,
                disabled: !bounds.has_next(),
                onclick: move |_| on_offset_change.call(bounds.last_offset()),
                "»"
            }
            span { class: "text-gray-500 text-sm", "{summary}" }
        }
    }
}
