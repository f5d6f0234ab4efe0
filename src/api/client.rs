use crate::api::models::{ContributorRating, Paginated, Video};
use crate::api::recommendations::recommendation_query;
use crate::query::QueryParams;
use reqwest::{Client, Error as ReqwestError, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;
use tracing::{debug, warn};

const DEFAULT_USER_AGENT: &str = "rankview/0.1 +https://github.com/hideselfview/rankview";

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Network(String),
    #[error("Server responded with status {0}")]
    Server(u16),
    #[error("Could not decode response: {0}")]
    Decode(String),
    #[error("Invalid API URL: {0}")]
    InvalidUrl(String),
}

impl From<ReqwestError> for ApiError {
    fn from(e: ReqwestError) -> Self {
        if let Some(status) = e.status() {
            ApiError::Server(status.as_u16())
        } else if e.is_decode() {
            ApiError::Decode(e.to_string())
        } else if e.is_builder() {
            ApiError::InvalidUrl(e.to_string())
        } else {
            ApiError::Network(e.to_string())
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(e: serde_json::Error) -> Self {
        ApiError::Decode(e.to_string())
    }
}

#[derive(Debug, Serialize)]
struct VisibilityUpdate {
    is_public: bool,
}

#[derive(Clone, Debug)]
pub struct ApiClient {
    client: Client,
    base_url: String,
    token: Option<String>,
    user_agent: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>, token: Option<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            client: Client::new(),
            base_url,
            token,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// List the signed-in contributor's ratings. `is_public = None` lists all of them.
    pub async fn get_my_contributor_ratings(
        &self,
        is_public: Option<bool>,
        limit: u64,
        offset: u64,
    ) -> Result<Paginated<ContributorRating>, ApiError> {
        let url = format!("{}/users/me/contributor_ratings/", self.base_url);

        let mut params = vec![
            ("limit", limit.to_string()),
            ("offset", offset.to_string()),
        ];
        if let Some(is_public) = is_public {
            params.push(("is_public", is_public.to_string()));
        }

        debug!(limit, offset, ?is_public, "Fetching contributor ratings");
        let response = self.request(self.client.get(&url).query(&params)).await?;
        decode(response).await
    }

    /// List recommended videos for the page's query string
    pub async fn get_recommended_videos(
        &self,
        query: &QueryParams,
    ) -> Result<Paginated<Video>, ApiError> {
        let forwarded = recommendation_query(query, chrono::Utc::now());
        let url = if forwarded.is_empty() {
            format!("{}/video/", self.base_url)
        } else {
            format!("{}/video/?{}", self.base_url, forwarded)
        };

        debug!(%url, "Fetching recommended videos");
        let response = self.request(self.client.get(&url)).await?;
        decode(response).await
    }

    /// Make one of the contributor's ratings public or private
    pub async fn set_rating_visibility(
        &self,
        video_id: &str,
        is_public: bool,
    ) -> Result<ContributorRating, ApiError> {
        let url = format!(
            "{}/users/me/contributor_ratings/{}/",
            self.base_url,
            urlencoding::encode(video_id)
        );

        debug!(video_id, is_public, "Updating rating visibility");
        let response = self
            .request(self.client.patch(&url).json(&VisibilityUpdate { is_public }))
            .await?;
        decode(response).await
    }

    async fn request(&self, builder: RequestBuilder) -> Result<Response, ApiError> {
        let mut builder = builder.header("User-Agent", &self.user_agent);
        if let Some(token) = &self.token {
            builder = builder.bearer_auth(token);
        }

        let response = builder.send().await?;
        let status = response.status();
        if status.is_success() {
            Ok(response)
        } else {
            if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
                warn!("API rejected credentials ({status})");
            } else {
                warn!("API request failed with {status}");
            }
            Err(ApiError::Server(status.as_u16()))
        }
    }
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    let body = response.bytes().await?;
    Ok(serde_json::from_slice(&body)?)
}
