use ratatui::crossterm::event::KeyEvent;

use crate::form::SubmitOutcome;
use crate::gallery::PostRecord;

/// All possible events in the application
#[derive(Debug)]
pub enum AppEvent {
    // Input events
    Key(KeyEvent),
    Resize(u16, u16),

    // Async task events
    SubmitFinished(SubmitOutcome),
    PostsFetched(crate::Result<Vec<PostRecord>>),

    // UI events
    Tick,
}
