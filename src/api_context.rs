use crate::api::{ApiClient, ContentApi};
use crate::config::Config;
use dioxus::prelude::*;
use std::ops::Deref;
use std::sync::Arc;

/// Shared handle to the remote API, installed as a root context
#[derive(Clone)]
pub struct ApiHandle {
    inner: Arc<dyn ContentApi>,
}

impl PartialEq for ApiHandle {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl ApiHandle {
    pub fn new(api: Arc<dyn ContentApi>) -> Self {
        Self { inner: api }
    }

    /// Build the HTTP client described by `config`
    pub fn from_config(config: &Config) -> Self {
        let mut client = ApiClient::new(config.api_url.clone(), config.api_token.clone());
        if let Some(user_agent) = &config.user_agent {
            client = client.with_user_agent(user_agent.clone());
        }
        Self::new(Arc::new(client))
    }
}

impl Deref for ApiHandle {
    type Target = dyn ContentApi;

    fn deref(&self) -> &Self::Target {
        self.inner.as_ref()
    }
}

/// Hook to access the API handle from any component
pub fn use_content_api() -> ApiHandle {
    use_context::<ApiHandle>()
}
