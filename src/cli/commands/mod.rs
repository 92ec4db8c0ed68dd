pub mod posts;
pub mod register;

use async_trait::async_trait;

use crate::Result;

/// Common trait for all command handlers
#[async_trait(?Send)]
pub trait CommandHandler {
    /// Execute the command
    async fn execute(&self) -> Result<()>;

    /// Get command name for logging
    fn name(&self) -> &'static str;
}
