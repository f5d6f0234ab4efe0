use dioxus::prelude::*;

/// Maximum width of a [`ContentBox`]
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum ContentWidth {
    Medium,
    #[default]
    Large,
}

impl ContentWidth {
    fn class(&self) -> &'static str {
        match self {
            ContentWidth::Medium => "max-w-3xl",
            ContentWidth::Large => "max-w-6xl",
        }
    }
}

/// Centered column that wraps page content
#[component]
pub fn ContentBox(#[props(default)] max_width: ContentWidth, children: Element) -> Element {
    let width = max_width.class();

    rsx! {
        div { class: "container mx-auto p-6 {width} flex flex-col", {children} }
    }
}
