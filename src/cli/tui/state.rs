use std::time::{Duration, Instant};

use ratatui::crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};
use tui_input::backend::crossterm::EventHandler;
use tui_input::Input;

use crate::form::{
    CountryCode, Field, FieldErrors, FormWizard, NextOutcome, SaveOutcome, Step, SubmitPayload,
};
use crate::gallery::{Gallery, LoadStatus};

/// How long the "saved" notice stays on screen
pub const NOTICE_TTL: Duration = Duration::from_secs(6);

/// Top-level screen state
#[derive(Debug)]
pub enum ScreenState {
    Wizard(WizardScreen),
    Gallery(GalleryScreen),
}

impl ScreenState {
    pub fn name(&self) -> &'static str {
        match self {
            ScreenState::Wizard(_) => "Registration",
            ScreenState::Gallery(_) => "Posts",
        }
    }
}

/// Side effects requested by key handling
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Submit(SubmitPayload),
    LoadPosts,
    OpenGallery,
    Quit,
}

/// Screen transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StateTransition {
    OpenGallery,
    Quit,
}

/// Transient confirmation shown after "Save"
#[derive(Debug, Clone)]
pub struct Notice {
    pub message: String,
    pub shown_at: Instant,
}

/// State for the registration wizard screen
#[derive(Debug)]
pub struct WizardScreen {
    pub wizard: FormWizard,
    /// Index of the focused field within the current step
    pub focus: usize,
    /// Editor for the focused text field
    pub editor: Input,
    pub notice: Option<Notice>,
    /// A submission is in flight
    pub submitting: bool,
}

impl Default for WizardScreen {
    fn default() -> Self {
        Self::new(FormWizard::new())
    }
}

impl WizardScreen {
    pub fn new(wizard: FormWizard) -> Self {
        let mut screen = Self {
            wizard,
            focus: 0,
            editor: Input::default(),
            notice: None,
            submitting: false,
        };
        screen.sync_editor();
        screen
    }

    pub fn focused_field(&self) -> Field {
        let fields = self.wizard.step().fields();
        fields[self.focus.min(fields.len() - 1)]
    }

    /// Load the focused field's value into the editor
    fn sync_editor(&mut self) {
        let field = self.focused_field();
        self.editor = if field.is_text() {
            Input::new(self.wizard.record().text(field).to_string())
        } else {
            Input::default()
        };
    }

    fn focus_field(&mut self, index: usize) {
        self.focus = index;
        self.sync_editor();
    }

    pub fn focus_next(&mut self) {
        let len = self.wizard.step().fields().len();
        self.focus_field((self.focus + 1) % len);
    }

    pub fn focus_prev(&mut self) {
        let len = self.wizard.step().fields().len();
        self.focus_field((self.focus + len - 1) % len);
    }

    /// Move focus to the first field with an error
    fn focus_first_error(&mut self, errors: &FieldErrors) {
        let fields = self.wizard.step().fields();
        if let Some(index) = fields.iter().position(|f| errors.contains_key(f)) {
            self.focus_field(index);
        }
    }

    fn after_step_change(&mut self) {
        self.notice = None;
        self.focus_field(0);
    }

    pub fn select_step(&mut self, index: usize) {
        self.wizard.select_step(index);
        self.after_step_change();
    }

    pub fn back(&mut self) {
        self.wizard.back();
        self.after_step_change();
    }

    fn begin_submit(&mut self, payload: SubmitPayload) -> Option<Action> {
        self.submitting = true;
        Some(Action::Submit(payload))
    }

    /// "Save and Next"
    pub fn next(&mut self) -> Option<Action> {
        match self.wizard.next() {
            NextOutcome::Advanced(_) => {
                self.after_step_change();
                None
            }
            NextOutcome::Invalid(errors) => {
                self.focus_first_error(&errors);
                None
            }
            NextOutcome::ReadyToSubmit(payload) => self.begin_submit(payload),
        }
    }

    /// "Save"
    pub fn save(&mut self) -> Option<Action> {
        match self.wizard.save() {
            SaveOutcome::Saved(step) => {
                self.notice = Some(Notice {
                    message: format!("{} saved successfully!", step.title()),
                    shown_at: Instant::now(),
                });
                None
            }
            SaveOutcome::Invalid(errors) => {
                self.focus_first_error(&errors);
                None
            }
            SaveOutcome::ReadyToSubmit(payload) => self.begin_submit(payload),
        }
    }

    /// Drop the notice once it has been visible long enough
    pub fn tick(&mut self, now: Instant) {
        if let Some(notice) = &self.notice {
            if now.duration_since(notice.shown_at) >= NOTICE_TTL {
                self.notice = None;
            }
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> Option<Action> {
        if self.submitting {
            return None;
        }

        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Tab | KeyCode::Down => {
                self.focus_next();
                return None;
            }
            KeyCode::BackTab | KeyCode::Up => {
                self.focus_prev();
                return None;
            }
            KeyCode::Enter => return self.next(),
            KeyCode::Char('s') if ctrl => return self.save(),
            KeyCode::Char('b') if ctrl => {
                self.back();
                return None;
            }
            KeyCode::F(n @ 1..=3) => {
                self.select_step(usize::from(n) - 1);
                return None;
            }
            _ => {}
        }

        match self.focused_field() {
            Field::CountryCode => {
                let current = self.wizard.record().country_code;
                match key.code {
                    KeyCode::Right | KeyCode::Char(' ') => {
                        self.wizard.set_country_code(CountryCode::cycle(current, true));
                    }
                    KeyCode::Left => {
                        self.wizard.set_country_code(CountryCode::cycle(current, false));
                    }
                    _ => {}
                }
            }
            Field::AcceptTermsAndCondition => {
                if key.code == KeyCode::Char(' ') {
                    let accepted = self.wizard.record().accept_terms_and_condition;
                    self.wizard.set_accept_terms(!accepted);
                }
            }
            field => {
                if ctrl {
                    return None;
                }
                self.editor.handle_event(&Event::Key(key));
                self.wizard.set_text(field, self.editor.value());
            }
        }
        None
    }

    pub fn step(&self) -> Step {
        self.wizard.step()
    }
}

/// State for the posts gallery screen
#[derive(Debug, Default)]
pub struct GalleryScreen {
    pub gallery: Gallery,
    /// First rendered line of the post list
    pub scroll: u16,
}

impl GalleryScreen {
    pub fn handle_key(&mut self, key: KeyEvent) -> Option<Action> {
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') => return Some(Action::Quit),
            KeyCode::Up | KeyCode::Char('k') => self.scroll = self.scroll.saturating_sub(1),
            KeyCode::Down | KeyCode::Char('j') => self.scroll = self.scroll.saturating_add(1),
            KeyCode::PageUp => self.scroll = self.scroll.saturating_sub(10),
            KeyCode::PageDown => self.scroll = self.scroll.saturating_add(10),
            KeyCode::Home => self.scroll = 0,
            KeyCode::Char('r') if !self.gallery.is_loading() => return Some(Action::LoadPosts),
            _ => {}
        }
        None
    }

    pub fn status(&self) -> LoadStatus {
        self.gallery.status()
    }
}
