mod common;

use common::{valid_record, MockApi};
use enroll::form::{
    Field, FormWizard, NextOutcome, RegistrationRecord, SaveOutcome, Step, SubmitOutcome,
    SubmitPayload,
};
use pretty_assertions::assert_eq;

#[test]
fn test_back_at_first_step_is_noop() {
    let mut wizard = FormWizard::new();
    wizard.back();
    assert_eq!(wizard.step(), Step::Account);
    assert_eq!(wizard.step_index(), 0);
}

#[test]
fn test_next_does_not_advance_on_invalid_step() {
    let mut wizard = FormWizard::new();
    wizard.set_text(Field::EmailId, "not-an-email");

    match wizard.next() {
        NextOutcome::Invalid(errors) => {
            assert_eq!(errors.get(&Field::EmailId), Some(&"Invalid email address"));
            assert_eq!(errors.get(&Field::Password), Some(&"Password is required"));
        }
        other => panic!("Expected invalid outcome, got {:?}", other),
    }
    assert_eq!(wizard.step(), Step::Account);
    assert_eq!(wizard.error(Field::EmailId), Some("Invalid email address"));
}

#[test]
fn test_next_validates_only_current_step() {
    let mut wizard = FormWizard::new();
    wizard.set_text(Field::EmailId, "jane@example.com");
    wizard.set_text(Field::Password, "AAbb12!@");

    // Later steps are still empty, but only the account step is checked
    assert_eq!(wizard.next(), NextOutcome::Advanced(Step::Personal));
    assert!(wizard.errors().is_empty());
}

#[test]
fn test_full_walk_reaches_submit_instead_of_advancing() {
    let mut wizard = FormWizard::with_record(valid_record());

    assert_eq!(wizard.next(), NextOutcome::Advanced(Step::Personal));
    assert_eq!(wizard.next(), NextOutcome::Advanced(Step::Contact));

    let expected = SubmitPayload::from(&valid_record());
    assert_eq!(wizard.next(), NextOutcome::ReadyToSubmit(expected));
    assert_eq!(wizard.step(), Step::Contact);
}

#[test]
fn test_each_step_blocks_on_its_own_fields() {
    let mut record = valid_record();
    record.address = "short".to_string();
    let mut wizard = FormWizard::with_record(record);

    assert_eq!(wizard.next(), NextOutcome::Advanced(Step::Personal));
    match wizard.next() {
        NextOutcome::Invalid(errors) => {
            assert_eq!(errors.len(), 1);
            assert_eq!(errors.get(&Field::Address), Some(&"Minimum 10 characters"));
        }
        other => panic!("Expected invalid outcome, got {:?}", other),
    }
    assert_eq!(wizard.step(), Step::Personal);

    wizard.set_text(Field::Address, "221B Baker Street");
    assert_eq!(wizard.next(), NextOutcome::Advanced(Step::Contact));
    assert!(wizard.error(Field::Address).is_none());

    wizard.set_accept_terms(false);
    match wizard.next() {
        NextOutcome::Invalid(errors) => {
            assert_eq!(
                errors.get(&Field::AcceptTermsAndCondition),
                Some(&"You must accept the terms and conditions")
            );
        }
        other => panic!("Expected invalid outcome, got {:?}", other),
    }
}

#[test]
fn test_save_keeps_step_and_reports_saved() {
    let mut wizard = FormWizard::with_record(valid_record());
    assert_eq!(wizard.save(), SaveOutcome::Saved(Step::Account));
    assert_eq!(wizard.step(), Step::Account);

    wizard.select_step(2);
    assert!(matches!(wizard.save(), SaveOutcome::ReadyToSubmit(_)));
}

#[test]
fn test_select_step_jumps_without_validation() {
    let mut wizard = FormWizard::new();
    wizard.select_step(2);
    assert_eq!(wizard.step(), Step::Contact);
    assert!(wizard.errors().is_empty());

    wizard.select_step(7);
    assert_eq!(wizard.step(), Step::Contact);

    wizard.back();
    wizard.back();
    wizard.back();
    assert_eq!(wizard.step(), Step::Account);
}

#[test]
fn test_setters_do_not_clear_errors() {
    let mut wizard = FormWizard::new();
    let _ = wizard.next();
    wizard.set_text(Field::EmailId, "jane@example.com");
    assert_eq!(wizard.error(Field::EmailId), Some("Email is required"));
}

#[tokio::test]
async fn test_submit_posts_payload_on_final_step() {
    let api = MockApi::new(vec![]);
    let mut wizard = FormWizard::with_record(valid_record());
    wizard.select_step(2);

    let outcome = wizard.submit(&api).await;
    assert_eq!(
        outcome,
        SubmitOutcome::Submitted(serde_json::json!({ "result": "ok" }))
    );
    assert_eq!(api.submissions(), vec![SubmitPayload::from(&valid_record())]);
}

#[tokio::test]
async fn test_submit_refused_before_final_step() {
    let api = MockApi::new(vec![]);
    let mut wizard = FormWizard::with_record(valid_record());

    assert_eq!(wizard.submit(&api).await, SubmitOutcome::NotFinalStep);
    assert!(api.submissions().is_empty());
}

#[tokio::test]
async fn test_submit_with_invalid_contact_step_makes_no_call() {
    let api = MockApi::new(vec![]);
    let mut wizard = FormWizard::new();
    wizard.select_step(2);

    assert!(matches!(wizard.submit(&api).await, SubmitOutcome::Invalid(_)));
    assert!(api.submissions().is_empty());
}

#[tokio::test]
async fn test_failed_submit_keeps_wizard_state() {
    let api = MockApi::failing();
    let mut wizard = FormWizard::with_record(valid_record());
    wizard.select_step(2);

    assert_eq!(wizard.submit(&api).await, SubmitOutcome::Failed);
    assert_eq!(wizard.step(), Step::Contact);
    assert_eq!(wizard.record(), &valid_record());
    assert!(wizard.errors().is_empty());
    assert_eq!(api.submissions().len(), 1);
}

#[test]
fn test_empty_record_has_no_country_code() {
    let wizard = FormWizard::new();
    assert_eq!(wizard.record(), &RegistrationRecord::default());
    assert!(wizard.record().country_code.is_none());
}
