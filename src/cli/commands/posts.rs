use std::sync::Arc;

use async_trait::async_trait;

use super::CommandHandler;
use crate::api::RemoteApi;
use crate::gallery::{Gallery, PostRecord};
use crate::Result;

/// Handler for the `posts` command
pub struct PostsCommand {
    pub plain: bool,
    api: Arc<dyn RemoteApi>,
}

impl PostsCommand {
    pub fn new(plain: bool, api: Arc<dyn RemoteApi>) -> Self {
        Self { plain, api }
    }
}

#[async_trait(?Send)]
impl CommandHandler for PostsCommand {
    async fn execute(&self) -> Result<()> {
        if self.plain || !cfg!(feature = "tui") {
            let mut gallery = Gallery::new();
            gallery.load(self.api.as_ref()).await;
            print!("{}", format_posts(gallery.posts()));
            return Ok(());
        }
        run_interactive(self.api.clone()).await
    }

    fn name(&self) -> &'static str {
        "posts"
    }
}

#[cfg(feature = "tui")]
async fn run_interactive(api: Arc<dyn RemoteApi>) -> Result<()> {
    crate::cli::tui::run_gallery(api).await
}

#[cfg(not(feature = "tui"))]
async fn run_interactive(_api: Arc<dyn RemoteApi>) -> Result<()> {
    Ok(())
}

/// Plain-text rendering of the gallery, one block per post in fetched order
pub fn format_posts(posts: &[PostRecord]) -> String {
    let mut out = String::new();
    for post in posts {
        out.push_str(&format!("#{}  {}\n", post.id, post.author()));
        if !post.writeup.is_empty() {
            out.push_str(&format!("    {}\n", post.writeup));
        }
        out.push_str(&format!("    image:  {}\n", post.image));
        out.push_str(&format!("    avatar: {}\n\n", post.avatar));
    }
    out
}
