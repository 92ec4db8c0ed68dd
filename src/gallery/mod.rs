//! Post gallery screen state
//!
//! The gallery issues a single GET when it is loaded. A failure is logged and
//! leaves the list empty; there is no retry, pagination or caching.

pub mod post;

use tracing::{error, info};

use crate::api::RemoteApi;
use crate::Result;

pub use post::{PostId, PostRecord, PostsEnvelope};

/// Where the gallery is in its single fetch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadStatus {
    #[default]
    Idle,
    Loading,
    Loaded,
    Failed,
}

#[derive(Debug, Clone, Default)]
pub struct Gallery {
    posts: Vec<PostRecord>,
    status: LoadStatus,
}

impl Gallery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn posts(&self) -> &[PostRecord] {
        &self.posts
    }

    pub fn status(&self) -> LoadStatus {
        self.status
    }

    pub fn is_loading(&self) -> bool {
        self.status == LoadStatus::Loading
    }

    /// Mark a fetch as started
    pub fn begin_load(&mut self) {
        self.status = LoadStatus::Loading;
    }

    /// Store the outcome of a fetch
    pub fn apply(&mut self, result: Result<Vec<PostRecord>>) {
        match result {
            Ok(posts) => {
                info!("Loaded {} posts", posts.len());
                self.posts = posts;
                self.status = LoadStatus::Loaded;
            }
            Err(e) => {
                error!("Error fetching posts: {}", e);
                self.posts.clear();
                self.status = LoadStatus::Failed;
            }
        }
    }

    /// Fetch posts from the remote and store them
    pub async fn load(&mut self, api: &dyn RemoteApi) {
        self.begin_load();
        let result = api.fetch_posts().await;
        self.apply(result);
    }
}
