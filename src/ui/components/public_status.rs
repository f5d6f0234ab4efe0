use dioxus::prelude::*;

/// Request to make the rating of `video_id` public or private
#[derive(Debug, Clone, PartialEq)]
pub struct VisibilityChange {
    pub video_id: String,
    pub is_public: bool,
}

/// Public/private status of one rating, click to flip it
#[component]
pub fn PublicStatusToggle(
    video_id: String,
    is_public: bool,
    on_change: EventHandler<VisibilityChange>,
) -> Element {
    let (label, class) = if is_public {
        ("Public", "bg-green-700 hover:bg-green-600")
    } else {
        ("Private", "bg-gray-600 hover:bg-gray-500")
    };

    rsx! {
        button {
            class: "px-3 py-1 text-sm rounded text-white {class}",
            title: if is_public { "Visible to everyone. Click to make private." } else { "Only visible to you. Click to make public." },
            onclick: move |_| {
                on_change
                    .call(VisibilityChange {
                        video_id: video_id.clone(),
                        is_public: !is_public,
                    });
            },
            "{label}"
        }
    }
}
