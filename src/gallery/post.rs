use std::fmt;

use serde::{Deserialize, Serialize};

/// Post identifier; the endpoint may send either a number or a string
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PostId {
    Number(u64),
    Text(String),
}

impl fmt::Display for PostId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PostId::Number(n) => write!(f, "{}", n),
            PostId::Text(s) => write!(f, "{}", s),
        }
    }
}

/// A single post as returned by the posts endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostRecord {
    pub id: PostId,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub avatar: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub writeup: String,
}

impl PostRecord {
    pub fn author(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }
}

/// Response body of the posts endpoint
#[derive(Debug, Clone, Deserialize)]
pub struct PostsEnvelope {
    pub data: Vec<PostRecord>,
}
