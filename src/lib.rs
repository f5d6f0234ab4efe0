// Library exports for integration tests and reusable components

pub mod api;
pub mod api_context;
pub mod bounds;
pub mod config;
pub mod loader;
pub mod pages;
pub mod query;
pub mod ui;

// Re-export the API handle at crate root for easier access
pub use api_context::ApiHandle;

// Test support (only available with test-utils feature)
#[cfg(feature = "test-utils")]
pub mod test_support;
