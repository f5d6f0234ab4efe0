use crate::api::ContributorRating;
use crate::api_context::use_content_api;
use crate::bounds::PAGE_LIMIT;
use crate::loader::{LoadSequence, ViewState};
use crate::pages::{
    apply_visibility, change_visibility, load_ratings, rating_index, shows_pagination, videos_of,
    ListPage,
};
use crate::query::QueryParams;
use dioxus::prelude::*;
use tracing::debug;

use super::content_box::{ContentBox, ContentWidth};
use super::load_error::LoadError;
use super::loading::LoadingIndicator;
use super::pagination::Pagination;
use super::public_status::VisibilityChange;
use super::video_list::{VideoList, VideoSetting};

/// The signed-in contributor's ratings, one page at a time
#[component]
pub fn VideoRatings(query: QueryParams) -> Element {
    let api = use_content_api();
    let mut view = use_signal(ViewState::<ContributorRating>::default);
    let mut retry = use_signal(|| 0_u32);
    let sequence = use_hook(LoadSequence::new);
    let index = use_memo(move || rating_index(&view.read()));
    let offset = query.offset();

    use_drop({
        let sequence = sequence.clone();
        move || sequence.cancel()
    });

    // Load a page on mount, whenever the offset changes, and on retry
    use_effect({
        let api = api.clone();
        let sequence = sequence.clone();
        use_reactive!(|(offset,)| {
            let attempt = retry();
            debug!(offset, attempt, "Loading ratings page");
            let api = api.clone();
            let sequence = sequence.clone();
            spawn(async move {
                load_ratings(&*api, &sequence, offset, move |state| view.set(state)).await;
            });
        })
    });

    let on_visibility_change = move |change: VisibilityChange| {
        let api = api.clone();
        spawn(async move {
            if let Ok(updated) =
                change_visibility(&*api, &change.video_id, change.is_public).await
            {
                view.with_mut(|state| apply_visibility(state, updated));
            }
        });
    };

    let on_offset_change = {
        let query = query.clone();
        move |new_offset: u64| {
            navigator().push(ListPage::Ratings.offset_route(&query, new_offset));
        }
    };

    let state = view();
    let body = match &state {
        ViewState::Idle | ViewState::Loading => rsx! {
            LoadingIndicator { label: "Loading your ratings..." }
        },
        ViewState::Failed(error) => rsx! {
            LoadError {
                error: error.clone(),
                on_retry: move |_| *retry.write() += 1,
            }
        },
        ViewState::Loaded(page) => rsx! {
            VideoList {
                videos: videos_of(page),
                settings: vec![VideoSetting::PublicStatus {
                    index: index(),
                    on_change: EventHandler::new(on_visibility_change),
                }],
            }
            if shows_pagination(&state) {
                Pagination {
                    offset,
                    count: page.count,
                    limit: PAGE_LIMIT,
                    on_offset_change,
                }
            }
        },
    };

    rsx! {
        ContentBox { max_width: ContentWidth::Medium,
            h1 { class: "text-3xl font-bold text-white mb-6", "My ratings" }
            {body}
        }
    }
}
