//! Multi-step registration form
pub mod record;
pub mod rules;
pub mod wizard;

pub use record::{CountryCode, Field, FieldValue, RegistrationRecord, SubmitPayload};
pub use rules::{rule_for, Constraint, FieldRule};
pub use wizard::{
    submit_payload, FieldErrors, FormWizard, NextOutcome, SaveOutcome, Step, SubmitOutcome,
};
