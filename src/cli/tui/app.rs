use std::sync::Arc;
use std::time::{Duration, Instant};

use ratatui::{
    crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    DefaultTerminal, Frame,
};
use tokio::sync::mpsc::{UnboundedReceiver, UnboundedSender};
use tokio::time;
use tracing::{debug, info};

use super::events::AppEvent;
use super::state::*;
use super::theme::Theme;
use crate::api::RemoteApi;
use crate::form::{submit_payload, SubmitOutcome};
use crate::Result;

/// Main application struct
pub struct App {
    /// Current screen
    state: ScreenState,
    /// Whether the app should quit
    should_quit: bool,
    /// Theme for styling
    theme: Theme,
    /// Remote endpoints
    api: Arc<dyn RemoteApi>,
    /// Event sender for background tasks
    event_tx: Option<UnboundedSender<AppEvent>>,
    /// Last time Ctrl+C was pressed
    last_ctrl_c: Option<Instant>,
}

impl App {
    /// Create a new app instance
    pub fn new(state: ScreenState, api: Arc<dyn RemoteApi>) -> Self {
        Self {
            state,
            should_quit: false,
            theme: Theme::default(),
            api,
            event_tx: None,
            last_ctrl_c: None,
        }
    }

    pub fn state(&self) -> &ScreenState {
        &self.state
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Attach the channel background tasks report to
    pub fn attach(&mut self, event_tx: UnboundedSender<AppEvent>) {
        self.event_tx = Some(event_tx);
        // The gallery fetches as soon as it is shown
        if let ScreenState::Gallery(_) = self.state {
            self.perform(Action::LoadPosts);
        }
    }

    /// Run the application
    pub async fn run(mut self) -> Result<()> {
        // Initialize terminal
        let mut terminal = ratatui::init();
        terminal.clear()?;

        let (event_tx, mut event_rx) = tokio::sync::mpsc::unbounded_channel();
        spawn_input_reader(event_tx.clone());
        self.attach(event_tx);

        info!("Starting {} screen", self.state.name());
        let result = self.main_loop(&mut terminal, &mut event_rx).await;

        // Cleanup
        ratatui::restore();
        result
    }

    /// Main event loop
    async fn main_loop(
        &mut self,
        terminal: &mut DefaultTerminal,
        event_rx: &mut UnboundedReceiver<AppEvent>,
    ) -> Result<()> {
        loop {
            terminal.draw(|frame| self.render(frame))?;

            // Handle events with timeout so notices can expire
            let event = match time::timeout(Duration::from_millis(50), event_rx.recv()).await {
                Ok(Some(event)) => event,
                Ok(None) => break, // Channel closed
                Err(_) => AppEvent::Tick,
            };
            if let Some(transition) = self.handle_event(event) {
                self.transition_state(transition);
            }

            if self.should_quit {
                break;
            }
        }

        Ok(())
    }

    /// Render the current screen
    fn render(&self, frame: &mut Frame) {
        match &self.state {
            ScreenState::Wizard(state) => super::screens::wizard::render(frame, state, &self.theme),
            ScreenState::Gallery(state) => {
                super::screens::gallery::render(frame, state, &self.theme)
            }
        }
    }

    /// Handle an event
    pub fn handle_event(&mut self, event: AppEvent) -> Option<StateTransition> {
        // Handle global keys first
        if let AppEvent::Key(key) = &event {
            match key.code {
                KeyCode::Esc => return Some(StateTransition::Quit),
                KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    // Exit on double Ctrl+C within a second
                    let now = Instant::now();
                    if let Some(last) = self.last_ctrl_c {
                        if now.duration_since(last) < Duration::from_secs(1) {
                            return Some(StateTransition::Quit);
                        }
                    }
                    self.last_ctrl_c = Some(now);
                    return None;
                }
                _ => {}
            }
        }

        match &mut self.state {
            ScreenState::Wizard(state) => {
                let action = Self::handle_wizard_event(state, event)?;
                self.apply_action(action)
            }
            ScreenState::Gallery(state) => {
                let action = Self::handle_gallery_event(state, event)?;
                self.apply_action(action)
            }
        }
    }

    fn handle_wizard_event(state: &mut WizardScreen, event: AppEvent) -> Option<Action> {
        match event {
            AppEvent::Key(key) => state.handle_key(key),
            AppEvent::SubmitFinished(outcome) => {
                state.submitting = false;
                match outcome {
                    SubmitOutcome::Submitted(_) => Some(Action::OpenGallery),
                    // Failures are only logged; the form stays as it was
                    _ => None,
                }
            }
            AppEvent::Tick => {
                state.tick(Instant::now());
                None
            }
            _ => None,
        }
    }

    fn handle_gallery_event(state: &mut GalleryScreen, event: AppEvent) -> Option<Action> {
        match event {
            AppEvent::Key(key) => state.handle_key(key),
            AppEvent::PostsFetched(result) => {
                state.gallery.apply(result);
                None
            }
            _ => None,
        }
    }

    /// Turn an action into side effects or a transition
    fn apply_action(&mut self, action: Action) -> Option<StateTransition> {
        match action {
            Action::Quit => Some(StateTransition::Quit),
            Action::OpenGallery => Some(StateTransition::OpenGallery),
            other => {
                self.perform(other);
                None
            }
        }
    }

    /// Spawn the network call behind an action
    fn perform(&mut self, action: Action) {
        let Some(tx) = self.event_tx.clone() else {
            debug!("No event channel attached, dropping {:?}", action);
            return;
        };
        let api = self.api.clone();

        match action {
            Action::Submit(payload) => {
                tokio::spawn(async move {
                    let outcome = submit_payload(api.as_ref(), &payload).await;
                    let _ = tx.send(AppEvent::SubmitFinished(outcome));
                });
            }
            Action::LoadPosts => {
                if let ScreenState::Gallery(state) = &mut self.state {
                    state.gallery.begin_load();
                }
                tokio::spawn(async move {
                    let result = api.fetch_posts().await;
                    let _ = tx.send(AppEvent::PostsFetched(result));
                });
            }
            Action::Quit | Action::OpenGallery => {}
        }
    }

    /// Move to a new screen
    pub fn transition_state(&mut self, transition: StateTransition) {
        match transition {
            StateTransition::OpenGallery => {
                info!("Registration complete, opening posts");
                self.state = ScreenState::Gallery(GalleryScreen::default());
                self.perform(Action::LoadPosts);
            }
            StateTransition::Quit => {
                self.should_quit = true;
            }
        }
    }
}

/// Forward terminal input to the event channel until the app hangs up
fn spawn_input_reader(input_tx: UnboundedSender<AppEvent>) {
    std::thread::spawn(move || {
        while !input_tx.is_closed() {
            match event::poll(Duration::from_millis(100)) {
                Ok(true) => {}
                Ok(false) => continue,
                Err(_) => break,
            }
            let sent = match event::read() {
                Ok(Event::Key(key)) if key.kind == KeyEventKind::Press => {
                    input_tx.send(AppEvent::Key(key))
                }
                Ok(Event::Resize(width, height)) => input_tx.send(AppEvent::Resize(width, height)),
                Ok(_) => Ok(()),
                Err(_) => break,
            };
            if sent.is_err() {
                break;
            }
        }
    });
}
