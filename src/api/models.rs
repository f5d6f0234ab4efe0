use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One page of a paginated list endpoint
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Paginated<T> {
    /// Total number of matching items across all pages
    #[serde(default)]
    pub count: u64,
    #[serde(default)]
    pub next: Option<String>,
    #[serde(default)]
    pub previous: Option<String>,
    #[serde(default = "Vec::new")]
    pub results: Vec<T>,
}

impl<T> Default for Paginated<T> {
    fn default() -> Self {
        Self {
            count: 0,
            next: None,
            previous: None,
            results: Vec::new(),
        }
    }
}

impl<T> Paginated<T> {
    /// Drop any results beyond `limit`, returning how many were dropped
    pub fn truncate_to(&mut self, limit: usize) -> usize {
        let extra = self.results.len().saturating_sub(limit);
        self.results.truncate(limit);
        extra
    }
}

/// A video as returned by the recommendation and rating endpoints
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Video {
    pub video_id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub publication_date: Option<String>,
    #[serde(default)]
    pub views: Option<u64>,
    #[serde(default)]
    pub uploader: Option<String>,
    #[serde(default)]
    pub language: Option<String>,
    /// Duration in seconds
    #[serde(default)]
    pub duration: Option<u64>,
    #[serde(default)]
    pub rating_n_contributors: Option<u64>,
    #[serde(default)]
    pub tournesol_score: Option<f64>,
}

impl Video {
    pub fn thumbnail_url(&self) -> String {
        format!("https://i.ytimg.com/vi/{}/mqdefault.jpg", self.video_id)
    }

    pub fn watch_url(&self) -> String {
        format!("https://www.youtube.com/watch?v={}", self.video_id)
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct CriteriaScore {
    pub criteria: String,
    pub score: f64,
    #[serde(default)]
    pub uncertainty: f64,
}

/// The signed-in contributor's rating of one video
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ContributorRating {
    pub video: Video,
    #[serde(default)]
    pub is_public: bool,
    #[serde(default)]
    pub criteria_scores: Vec<CriteriaScore>,
}

/// Lookup from video id to the rating record on the current page
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RatingIndex {
    by_video: HashMap<String, ContributorRating>,
}

impl RatingIndex {
    pub fn from_results(ratings: &[ContributorRating]) -> Self {
        let by_video = ratings
            .iter()
            .map(|rating| (rating.video.video_id.clone(), rating.clone()))
            .collect();
        Self { by_video }
    }

    pub fn get(&self, video_id: &str) -> Option<&ContributorRating> {
        self.by_video.get(video_id)
    }

    pub fn len(&self) -> usize {
        self.by_video.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_video.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paginated_tolerates_missing_fields() {
        let page: Paginated<Video> = serde_json::from_str(r#"{"count": 3}"#).unwrap();
        assert_eq!(page.count, 3);
        assert!(page.results.is_empty());
    }

    #[test]
    fn test_rating_decodes_with_nested_video() {
        let json = r#"{
            "video": {"video_id": "dQw4w9WgXcQ", "name": "A talk", "views": 12},
            "is_public": true,
            "criteria_scores": [{"criteria": "reliability", "score": 7.5, "uncertainty": 1.0}]
        }"#;
        let rating: ContributorRating = serde_json::from_str(json).unwrap();

        assert_eq!(rating.video.video_id, "dQw4w9WgXcQ");
        assert_eq!(rating.video.views, Some(12));
        assert!(rating.is_public);
        assert_eq!(rating.criteria_scores.len(), 1);
    }

    #[test]
    fn test_truncate_to_limit() {
        let mut page = Paginated {
            count: 45,
            next: None,
            previous: None,
            results: (0..25).collect::<Vec<u32>>(),
        };

        assert_eq!(page.truncate_to(20), 5);
        assert_eq!(page.results.len(), 20);
        assert_eq!(page.count, 45);
    }

    #[test]
    fn test_rating_index_lookup() {
        let rating = |id: &str, is_public: bool| ContributorRating {
            video: serde_json::from_value(serde_json::json!({ "video_id": id })).unwrap(),
            is_public,
            criteria_scores: Vec::new(),
        };
        let index = RatingIndex::from_results(&[rating("a", true), rating("b", false)]);

        assert_eq!(index.len(), 2);
        assert!(index.get("a").unwrap().is_public);
        assert!(!index.get("b").unwrap().is_public);
        assert!(index.get("c").is_none());
    }
}
