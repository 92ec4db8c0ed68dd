mod common;

use common::valid_record;
use enroll::cli::tui::state::{Action, GalleryScreen, WizardScreen, NOTICE_TTL};
use enroll::form::{CountryCode, Field, FormWizard, Step};
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn ctrl(c: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
}

fn type_text(screen: &mut WizardScreen, text: &str) {
    for c in text.chars() {
        screen.handle_key(key(KeyCode::Char(c)));
    }
}

#[test]
fn test_typing_updates_focused_field() {
    let mut screen = WizardScreen::default();
    assert_eq!(screen.focused_field(), Field::EmailId);

    type_text(&mut screen, "jane@example.com");
    screen.handle_key(key(KeyCode::Tab));
    type_text(&mut screen, "AAbb12!@");
    screen.handle_key(key(KeyCode::Backspace));

    let record = screen.wizard.record();
    assert_eq!(record.email_id, "jane@example.com");
    assert_eq!(record.password, "AAbb12!");
}

#[test]
fn test_focus_wraps_within_step() {
    let mut screen = WizardScreen::default();
    screen.handle_key(key(KeyCode::Up));
    assert_eq!(screen.focused_field(), Field::Password);
    screen.handle_key(key(KeyCode::Down));
    assert_eq!(screen.focused_field(), Field::EmailId);
}

#[test]
fn test_enter_on_invalid_step_focuses_first_error() {
    let mut screen = WizardScreen::default();
    type_text(&mut screen, "jane@example.com");

    assert_eq!(screen.handle_key(key(KeyCode::Enter)), None);
    assert_eq!(screen.step(), Step::Account);
    assert_eq!(screen.focused_field(), Field::Password);
    assert_eq!(screen.wizard.error(Field::Password), Some("Password is required"));
}

#[test]
fn test_enter_advances_and_resets_focus() {
    let mut screen = WizardScreen::new(FormWizard::with_record(valid_record()));
    screen.handle_key(key(KeyCode::Tab));

    assert_eq!(screen.handle_key(key(KeyCode::Enter)), None);
    assert_eq!(screen.step(), Step::Personal);
    assert_eq!(screen.focused_field(), Field::FirstName);
    assert_eq!(screen.editor.value(), "Jane");
}

#[test]
fn test_enter_on_last_step_requests_submit_once() {
    let mut screen = WizardScreen::new(FormWizard::with_record(valid_record()));
    screen.handle_key(key(KeyCode::F(3)));
    assert_eq!(screen.step(), Step::Contact);

    match screen.handle_key(key(KeyCode::Enter)) {
        Some(Action::Submit(payload)) => assert_eq!(payload.phone_number, "9876543210"),
        other => panic!("Expected submit action, got {:?}", other),
    }
    assert!(screen.submitting);

    // In-flight submission swallows further input
    assert_eq!(screen.handle_key(key(KeyCode::Enter)), None);
    assert_eq!(screen.handle_key(ctrl('s')), None);
}

#[test]
fn test_ctrl_s_shows_saved_notice_without_moving() {
    let mut screen = WizardScreen::new(FormWizard::with_record(valid_record()));

    assert_eq!(screen.handle_key(ctrl('s')), None);
    assert_eq!(screen.step(), Step::Account);
    let notice = screen.notice.clone().unwrap();
    assert_eq!(notice.message, "Account Information saved successfully!");

    screen.tick(notice.shown_at + NOTICE_TTL);
    assert!(screen.notice.is_none());
}

#[test]
fn test_ctrl_b_goes_back_and_is_noop_at_start() {
    let mut screen = WizardScreen::default();
    screen.handle_key(ctrl('b'));
    assert_eq!(screen.step(), Step::Account);

    screen.handle_key(key(KeyCode::F(2)));
    assert_eq!(screen.step(), Step::Personal);
    screen.handle_key(ctrl('b'));
    assert_eq!(screen.step(), Step::Account);
}

#[test]
fn test_country_selector_and_terms_checkbox() {
    let mut screen = WizardScreen::default();
    screen.handle_key(key(KeyCode::F(3)));
    assert_eq!(screen.focused_field(), Field::CountryCode);

    screen.handle_key(key(KeyCode::Right));
    assert_eq!(screen.wizard.record().country_code, Some(CountryCode::India));
    screen.handle_key(key(KeyCode::Char(' ')));
    assert_eq!(screen.wizard.record().country_code, Some(CountryCode::America));
    screen.handle_key(key(KeyCode::Left));
    assert_eq!(screen.wizard.record().country_code, Some(CountryCode::India));

    screen.handle_key(key(KeyCode::BackTab));
    assert_eq!(screen.focused_field(), Field::AcceptTermsAndCondition);
    screen.handle_key(key(KeyCode::Char(' ')));
    assert!(screen.wizard.record().accept_terms_and_condition);

    // Letters do nothing on non-text fields
    screen.handle_key(key(KeyCode::Char('x')));
    assert!(screen.wizard.record().accept_terms_and_condition);
}

#[test]
fn test_gallery_keys() {
    let mut screen = GalleryScreen::default();
    screen.handle_key(key(KeyCode::Up));
    assert_eq!(screen.scroll, 0);
    screen.handle_key(key(KeyCode::Down));
    screen.handle_key(key(KeyCode::Down));
    assert_eq!(screen.scroll, 2);

    assert_eq!(screen.handle_key(key(KeyCode::Char('r'))), Some(Action::LoadPosts));
    screen.gallery.begin_load();
    assert_eq!(screen.handle_key(key(KeyCode::Char('r'))), None);

    assert_eq!(screen.handle_key(key(KeyCode::Char('q'))), Some(Action::Quit));
}
