use crate::api::Video;
use crate::api_context::use_content_api;
use crate::bounds::PAGE_LIMIT;
use crate::loader::{LoadSequence, ViewState};
use crate::pages::{load_recommendations, shows_pagination, ListPage};
use crate::query::QueryParams;
use dioxus::prelude::*;
use tracing::debug;

use super::content_box::ContentBox;
use super::load_error::LoadError;
use super::loading::LoadingIndicator;
use super::pagination::Pagination;
use super::search_filter::SearchFilter;
use super::video_list::VideoList;

/// Recommended videos filtered by the query string
#[component]
pub fn VideoRecommendation(query: QueryParams) -> Element {
    let api = use_content_api();
    let mut view = use_signal(ViewState::<Video>::default);
    let mut retry = use_signal(|| 0_u32);
    let sequence = use_hook(LoadSequence::new);
    let offset = query.offset();

    use_drop({
        let sequence = sequence.clone();
        move || sequence.cancel()
    });

    // The whole query string is the filter, so any change to it reloads
    use_effect({
        let sequence = sequence.clone();
        let query = query.clone();
        use_reactive!(|(query,)| {
            let attempt = retry();
            debug!(%query, attempt, "Loading recommendations page");
            let api = api.clone();
            let sequence = sequence.clone();
            spawn(async move {
                load_recommendations(&*api, &sequence, &query, move |state| view.set(state))
                    .await;
            });
        })
    });

    let on_offset_change = {
        let query = query.clone();
        move |new_offset: u64| {
            navigator().push(ListPage::Recommendations.offset_route(&query, new_offset));
        }
    };

    let state = view();
    let body = match &state {
        ViewState::Idle | ViewState::Loading => rsx! {
            LoadingIndicator { label: "Loading recommendations..." }
        },
        ViewState::Failed(error) => rsx! {
            LoadError {
                error: error.clone(),
                on_retry: move |_| *retry.write() += 1,
            }
        },
        ViewState::Loaded(page) => rsx! {
            VideoList { videos: page.results.clone() }
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
        ContentBox {
            SearchFilter { query: query.clone() }
            {body}
        }
    }
}
