//! reqwest-backed implementation of [`RemoteApi`]

use async_trait::async_trait;
use tracing::{debug, warn};

use super::RemoteApi;
use crate::config::ClientConfig;
use crate::form::SubmitPayload;
use crate::gallery::{PostRecord, PostsEnvelope};
use crate::{EnrollError, Result};

/// HTTP client for the codebuddy review endpoints
pub struct HttpApi {
    client: reqwest::Client,
    submit_url: String,
    posts_url: String,
}

impl HttpApi {
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let mut builder = reqwest::Client::builder();
        // No timeout unless one is configured
        if let Some(seconds) = config.timeout_seconds {
            builder = builder.timeout(std::time::Duration::from_secs(seconds));
        }
        let client = builder.build()?;

        Ok(Self {
            client,
            submit_url: join_url(&config.base_url, &config.submit_path),
            posts_url: join_url(&config.base_url, &config.posts_path),
        })
    }

    pub fn submit_url(&self) -> &str {
        &self.submit_url
    }

    pub fn posts_url(&self) -> &str {
        &self.posts_url
    }

    /// Turn a non-2xx status into [`EnrollError::Api`]
    async fn check_status(response: reqwest::Response) -> Result<reqwest::Response> {
        if response.status().is_success() {
            return Ok(response);
        }
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        warn!("Remote API error: {} - {}", status, body);
        Err(EnrollError::Api {
            status: status.as_u16(),
            body,
        })
    }
}

#[async_trait]
impl RemoteApi for HttpApi {
    /// Any status with a JSON body counts as a response; the body is only logged.
    async fn submit(&self, payload: &SubmitPayload) -> Result<serde_json::Value> {
        debug!("[{}] POST {}", self.name(), self.submit_url);
        let response = self
            .client
            .post(&self.submit_url)
            .json(payload)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        match serde_json::from_str::<serde_json::Value>(&body) {
            Ok(value) => {
                if !status.is_success() {
                    warn!("Submit answered {} with {}", status, value);
                }
                Ok(value)
            }
            Err(_) if !status.is_success() => {
                warn!("Remote API error: {} - {}", status, body);
                Err(EnrollError::Api {
                    status: status.as_u16(),
                    body,
                })
            }
            Err(e) => Err(e.into()),
        }
    }

    async fn fetch_posts(&self) -> Result<Vec<PostRecord>> {
        debug!("[{}] GET {}", self.name(), self.posts_url);
        let response = self.client.get(&self.posts_url).send().await?;
        let response = Self::check_status(response).await?;
        let envelope: PostsEnvelope = response.json().await?;
        Ok(envelope.data)
    }

    fn name(&self) -> &'static str {
        "http"
    }
}

/// Join a base URL and a path with exactly one slash between them
fn join_url(base: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}
