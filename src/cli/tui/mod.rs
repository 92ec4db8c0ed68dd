/// Terminal User Interface for the wizard and the gallery
pub mod app;
pub mod events;
pub mod screens;
pub mod state;
pub mod theme;

use std::sync::Arc;

use crate::api::RemoteApi;
use crate::Result;

use state::{GalleryScreen, ScreenState, WizardScreen};

/// Run the interactive registration wizard
pub async fn run_register(api: Arc<dyn RemoteApi>) -> Result<()> {
    let app = app::App::new(ScreenState::Wizard(WizardScreen::default()), api);
    app.run().await
}

/// Run the posts gallery on its own
pub async fn run_gallery(api: Arc<dyn RemoteApi>) -> Result<()> {
    let app = app::App::new(ScreenState::Gallery(GalleryScreen::default()), api);
    app.run().await
}
