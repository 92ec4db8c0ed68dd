//! Remote endpoints used by the wizard and the gallery
//!
//! The [`RemoteApi`] trait keeps the screens independent of the HTTP client
//! so that tests can drive them with in-memory implementations.

pub mod http;

use async_trait::async_trait;

use crate::form::SubmitPayload;
use crate::gallery::PostRecord;
use crate::Result;

pub use http::HttpApi;

/// Trait for the registration and posts endpoints
#[async_trait]
pub trait RemoteApi: Send + Sync {
    /// Post a registration; the response body is arbitrary JSON
    async fn submit(&self, payload: &SubmitPayload) -> Result<serde_json::Value>;

    /// Fetch the post list in server order
    async fn fetch_posts(&self) -> Result<Vec<PostRecord>>;

    /// Backend identifier for logging
    fn name(&self) -> &'static str;
}
