#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use enroll::api::RemoteApi;
use enroll::form::{CountryCode, RegistrationRecord, SubmitPayload};
use enroll::gallery::{PostId, PostRecord};
use enroll::{EnrollError, Result};

/// In-memory stand-in for the review endpoints
pub struct MockApi {
    submit_response: std::result::Result<serde_json::Value, String>,
    posts: std::result::Result<Vec<PostRecord>, String>,
    pub submitted: Mutex<Vec<SubmitPayload>>,
    pub fetches: AtomicUsize,
}

impl MockApi {
    pub fn new(posts: Vec<PostRecord>) -> Self {
        Self {
            submit_response: Ok(serde_json::json!({ "result": "ok" })),
            posts: Ok(posts),
            submitted: Mutex::new(Vec::new()),
            fetches: AtomicUsize::new(0),
        }
    }

    /// Every call fails with a 500
    pub fn failing() -> Self {
        Self {
            submit_response: Err("boom".to_string()),
            posts: Err("boom".to_string()),
            submitted: Mutex::new(Vec::new()),
            fetches: AtomicUsize::new(0),
        }
    }

    pub fn submissions(&self) -> Vec<SubmitPayload> {
        self.submitted.lock().unwrap().clone()
    }

    pub fn fetch_count(&self) -> usize {
        self.fetches.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl RemoteApi for MockApi {
    async fn submit(&self, payload: &SubmitPayload) -> Result<serde_json::Value> {
        self.submitted.lock().unwrap().push(payload.clone());
        self.submit_response.clone().map_err(|body| EnrollError::Api { status: 500, body })
    }

    async fn fetch_posts(&self) -> Result<Vec<PostRecord>> {
        self.fetches.fetch_add(1, Ordering::SeqCst);
        self.posts.clone().map_err(|body| EnrollError::Api { status: 500, body })
    }

    fn name(&self) -> &'static str {
        "mock"
    }
}

pub fn valid_record() -> RegistrationRecord {
    RegistrationRecord {
        email_id: "jane.doe@example.com".to_string(),
        password: "AAbb12!@".to_string(),
        first_name: "Jane".to_string(),
        last_name: "Doe".to_string(),
        address: "221B Baker Street".to_string(),
        country_code: Some(CountryCode::India),
        phone_number: "9876543210".to_string(),
        accept_terms_and_condition: true,
    }
}

pub fn post(id: u64, first: &str, last: &str) -> PostRecord {
    PostRecord {
        id: PostId::Number(id),
        image: format!("https://img.example/{}.png", id),
        avatar: format!("https://avatar.example/{}.png", id),
        first_name: first.to_string(),
        last_name: last.to_string(),
        writeup: format!("Writeup number {}", id),
    }
}
