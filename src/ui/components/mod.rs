pub mod app;
pub mod content_box;
pub mod load_error;
pub mod loading;
pub mod navbar;
pub mod pagination;
pub mod public_status;
pub mod search_filter;
pub mod video_list;
pub mod video_ratings;
pub mod video_recommendation;

pub use app::App;
pub use content_box::{ContentBox, ContentWidth};
pub use load_error::LoadError;
pub use loading::LoadingIndicator;
pub use navbar::Navbar;
pub use pagination::Pagination;
pub use public_status::{PublicStatusToggle, VisibilityChange};
pub use search_filter::SearchFilter;
pub use video_list::{VideoList, VideoSetting};
pub use video_ratings::VideoRatings;
pub use video_recommendation::VideoRecommendation;
