//! Data side of the two list pages, kept apart from rendering so it can run
//! without a window.

use crate::api::{ApiError, ContentApi, ContributorRating, Paginated, RatingIndex, Video};
use crate::bounds::PAGE_LIMIT;
use crate::loader::{load_page, LoadOutcome, LoadSequence, ViewState};
use crate::query::{QueryParams, OFFSET_PARAM};
use crate::ui::Route;
use tracing::{info, warn};

/// The list pages that paginate through the query string
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListPage {
    Ratings,
    Recommendations,
}

impl ListPage {
    /// Route of this page carrying `query`
    pub fn route(&self, query: QueryParams) -> Route {
        match self {
            ListPage::Ratings => Route::VideoRatings { query },
            ListPage::Recommendations => Route::VideoRecommendation { query },
        }
    }

    /// Route to navigate to when the pagination control picks `offset`
    pub fn offset_route(&self, query: &QueryParams, offset: u64) -> Route {
        self.route(query.with_offset(offset))
    }
}

/// Fetch one page of the contributor's ratings, public and private alike
pub async fn load_ratings(
    api: &dyn ContentApi,
    sequence: &LoadSequence,
    offset: u64,
    apply: impl FnMut(ViewState<ContributorRating>),
) -> LoadOutcome {
    load_page(
        sequence,
        PAGE_LIMIT,
        api.get_my_contributor_ratings(None, PAGE_LIMIT, offset),
        apply,
    )
    .await
}

/// Fetch one page of recommendations filtered by the whole query string
pub async fn load_recommendations(
    api: &dyn ContentApi,
    sequence: &LoadSequence,
    query: &QueryParams,
    apply: impl FnMut(ViewState<Video>),
) -> LoadOutcome {
    load_page(
        sequence,
        PAGE_LIMIT,
        api.get_recommended_videos(query),
        apply,
    )
    .await
}

/// Query after a filter change: `key` set to `value` (removed when empty) and
/// the offset reset so results start from the first page
pub fn with_filter(query: &QueryParams, key: &str, value: &str) -> QueryParams {
    let reset = query.without(OFFSET_PARAM);
    if value.trim().is_empty() {
        reset.without(key)
    } else {
        reset.with_param(key, value.trim())
    }
}

/// Pagination controls appear only for a loaded page with a non-zero total
pub fn shows_pagination<T>(state: &ViewState<T>) -> bool {
    state.count() > 0
}

pub fn videos_of(ratings: &Paginated<ContributorRating>) -> Vec<Video> {
    ratings.results.iter().map(|r| r.video.clone()).collect()
}

pub fn rating_index(state: &ViewState<ContributorRating>) -> RatingIndex {
    state
        .page()
        .map(|page| RatingIndex::from_results(&page.results))
        .unwrap_or_default()
}

/// Ask the API to make a rating public or private
pub async fn change_visibility(
    api: &dyn ContentApi,
    video_id: &str,
    is_public: bool,
) -> Result<ContributorRating, ApiError> {
    match api.set_rating_visibility(video_id, is_public).await {
        Ok(updated) => {
            info!(video_id, is_public, "Rating visibility updated");
            Ok(updated)
        }
        Err(e) => {
            warn!("Failed to update visibility of {}: {}", video_id, e);
            Err(e)
        }
    }
}

/// Replace the rating of `updated.video` in a loaded page
pub fn apply_visibility(state: &mut ViewState<ContributorRating>, updated: ContributorRating) {
    state.update_loaded(|page| {
        if let Some(slot) = page
            .results
            .iter_mut()
            .find(|r| r.video.video_id == updated.video.video_id)
        {
            *slot = updated;
        }
    });
}
