pub mod client;
pub mod models;
pub mod recommendations;

pub use client::{ApiClient, ApiError};
pub use models::{ContributorRating, CriteriaScore, Paginated, RatingIndex, Video};
pub use recommendations::DateWindow;

use crate::query::QueryParams;
use async_trait::async_trait;

/// Remote endpoints consumed by the list pages
#[async_trait]
pub trait ContentApi: Send + Sync {
    async fn get_my_contributor_ratings(
        &self,
        is_public: Option<bool>,
        limit: u64,
        offset: u64,
    ) -> Result<Paginated<ContributorRating>, ApiError>;

    async fn get_recommended_videos(
        &self,
        query: &QueryParams,
    ) -> Result<Paginated<Video>, ApiError>;

    async fn set_rating_visibility(
        &self,
        video_id: &str,
        is_public: bool,
    ) -> Result<ContributorRating, ApiError>;
}

#[async_trait]
impl ContentApi for ApiClient {
    async fn get_my_contributor_ratings(
        &self,
        is_public: Option<bool>,
        limit: u64,
        offset: u64,
    ) -> Result<Paginated<ContributorRating>, ApiError> {
        ApiClient::get_my_contributor_ratings(self, is_public, limit, offset).await
    }

    async fn get_recommended_videos(
        &self,
        query: &QueryParams,
    ) -> Result<Paginated<Video>, ApiError> {
        ApiClient::get_recommended_videos(self, query).await
    }

    async fn set_rating_visibility(
        &self,
        video_id: &str,
        is_public: bool,
    ) -> Result<ContributorRating, ApiError> {
        ApiClient::set_rating_visibility(self, video_id, is_public).await
    }
}
