// Test support utilities for both unit and integration tests

use crate::api::{ApiError, ContentApi, ContributorRating, Paginated, Video};
use crate::query::QueryParams;
use std::collections::VecDeque;
use std::sync::Mutex;

/// A request seen by [`MockContentApi`]
#[derive(Debug, Clone, PartialEq)]
pub enum RecordedRequest {
    Ratings {
        is_public: Option<bool>,
        limit: u64,
        offset: u64,
    },
    Recommendations {
        query: String,
    },
    SetVisibility {
        video_id: String,
        is_public: bool,
    },
}

/// Mock API for testing
///
/// Serves queued responses in order and records every request.
/// An empty list queue answers with an empty page.
#[derive(Default)]
pub struct MockContentApi {
    requests: Mutex<Vec<RecordedRequest>>,
    ratings: Mutex<VecDeque<Result<Paginated<ContributorRating>, ApiError>>>,
    recommendations: Mutex<VecDeque<Result<Paginated<Video>, ApiError>>>,
    visibility: Mutex<VecDeque<Result<ContributorRating, ApiError>>>,
}

impl MockContentApi {
    /// Create a new mock API instance
    #[allow(unused)] // Used in tests
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_ratings(&self, response: Result<Paginated<ContributorRating>, ApiError>) {
        self.ratings.lock().unwrap().push_back(response);
    }

    pub fn push_recommendations(&self, response: Result<Paginated<Video>, ApiError>) {
        self.recommendations.lock().unwrap().push_back(response);
    }

    pub fn push_visibility(&self, response: Result<ContributorRating, ApiError>) {
        self.visibility.lock().unwrap().push_back(response);
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }

    fn record(&self, request: RecordedRequest) {
        self.requests.lock().unwrap().push(request);
    }
}

#[async_trait::async_trait]
impl ContentApi for MockContentApi {
    async fn get_my_contributor_ratings(
        &self,
        is_public: Option<bool>,
        limit: u64,
        offset: u64,
    ) -> Result<Paginated<ContributorRating>, ApiError> {
        self.record(RecordedRequest::Ratings {
            is_public,
            limit,
            offset,
        });
        self.ratings
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Ok(Paginated::default()))
    }

    async fn get_recommended_videos(
        &self,
        query: &QueryParams,
    ) -> Result<Paginated<Video>, ApiError> {
        self.record(RecordedRequest::Recommendations {
            query: query.to_string(),
        });
        self.recommendations
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Ok(Paginated::default()))
    }

    async fn set_rating_visibility(
        &self,
        video_id: &str,
        is_public: bool,
    ) -> Result<ContributorRating, ApiError> {
        self.record(RecordedRequest::SetVisibility {
            video_id: video_id.to_string(),
            is_public,
        });
        self.visibility
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or(Err(ApiError::Server(404)))
    }
}

/// Minimal video with the given id
pub fn video(video_id: &str) -> Video {
    Video {
        video_id: video_id.to_string(),
        name: format!("Video {}", video_id),
        description: None,
        publication_date: None,
        views: None,
        uploader: None,
        language: None,
        duration: None,
        rating_n_contributors: None,
        tournesol_score: None,
    }
}

pub fn rating(video_id: &str, is_public: bool) -> ContributorRating {
    ContributorRating {
        video: video(video_id),
        is_public,
        criteria_scores: Vec::new(),
    }
}

/// Page of `len` videos named `v{first}..` with the given total count
pub fn video_page(count: u64, first: usize, len: usize) -> Paginated<Video> {
    Paginated {
        count,
        next: None,
        previous: None,
        results: (first..first + len).map(|i| video(&format!("v{}", i))).collect(),
    }
}

pub fn rating_page(count: u64, first: usize, len: usize) -> Paginated<ContributorRating> {
    Paginated {
        count,
        next: None,
        previous: None,
        results: (first..first + len)
            .map(|i| rating(&format!("v{}", i), i % 2 == 0))
            .collect(),
    }
}
