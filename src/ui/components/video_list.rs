use crate::api::{RatingIndex, Video};
use dioxus::prelude::*;

use super::public_status::{PublicStatusToggle, VisibilityChange};

/// Per-video control rendered next to each list entry
#[derive(Clone, PartialEq)]
pub enum VideoSetting {
    /// Public/private switch backed by the current page's ratings
    PublicStatus {
        index: RatingIndex,
        on_change: EventHandler<VisibilityChange>,
    },
}

/// Format duration from seconds to M:SS, or H:MM:SS past an hour
pub fn format_duration(total_seconds: u64) -> String {
    let hours = total_seconds / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let seconds = total_seconds % 60;
    if hours > 0 {
        format!("{}:{:02}:{:02}", hours, minutes, seconds)
    } else {
        format!("{}:{:02}", minutes, seconds)
    }
}

/// Short view count such as 950, 12.3K or 4.1M
pub fn format_views(views: u64) -> String {
    match views {
        0..=999 => views.to_string(),
        1_000..=999_999 => format!("{:.1}K", views as f64 / 1_000.0),
        _ => format!("{:.1}M", views as f64 / 1_000_000.0),
    }
}

/// List of videos, optionally with per-video settings
#[component]
pub fn VideoList(videos: Vec<Video>, #[props(default)] settings: Vec<VideoSetting>) -> Element {
    if videos.is_empty() {
        return rsx! {
            div { class: "text-center py-12 text-gray-400", "No videos found." }
        };
    }

    rsx! {
        div { class: "flex flex-col space-y-4",
            for video in videos {
                VideoCard {
                    key: "{video.video_id}",
                    video: video.clone(),
                    settings: settings.clone(),
                }
            }
        }
    }
}

#[component]
fn VideoCard(video: Video, settings: Vec<VideoSetting>) -> Element {
    let thumbnail = video.thumbnail_url();
    let watch_url = video.watch_url();

    let meta: Vec<String> = [
        video.uploader.clone(),
        video.views.map(|v| format!("{} views", format_views(v))),
        video.publication_date.clone(),
        video.duration.map(format_duration),
    ]
    .into_iter()
    .flatten()
    .collect();

    let score = video.tournesol_score.map(|score| match video.rating_n_contributors {
        Some(n) => format!("Score {:.0} from {} contributors", score, n),
        None => format!("Score {:.0}", score),
    });

    rsx! {
        div { class: "bg-gray-800 rounded-lg p-4 flex gap-4",
            img {
                class: "video-thumbnail",
                src: "{thumbnail}",
                alt: "Thumbnail for {video.name}",
            }
            div { class: "flex-1 min-w-0",
                a {
                    href: "{watch_url}",
                    class: "text-lg font-semibold text-white hover:text-blue-300",
                    "{video.name}"
                }
                div { class: "text-sm text-gray-400 mt-1 space-x-3",
                    for item in meta {
                        span { "{item}" }
                    }
                }
                if let Some(score) = score {
                    div { class: "text-sm text-yellow-400 mt-1", "{score}" }
                }
            }
            div { class: "flex flex-col items-end gap-2",
                for setting in settings.iter() {
                    {setting_control(setting, &video.video_id)}
                }
            }
        }
    }
}

fn setting_control(setting: &VideoSetting, video_id: &str) -> Element {
    match setting {
        VideoSetting::PublicStatus { index, on_change } => match index.get(video_id) {
            Some(rating) => rsx! {
                PublicStatusToggle {
                    video_id: video_id.to_string(),
                    is_public: rating.is_public,
                    on_change: *on_change,
                }
            },
            None => rsx! {},
        },
    }
}
