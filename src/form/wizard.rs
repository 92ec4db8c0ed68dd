use std::collections::BTreeMap;

use tracing::{debug, error, info};

use super::record::{CountryCode, Field, RegistrationRecord, SubmitPayload};
use super::rules::rule_for;
use crate::api::RemoteApi;

/// One page of the registration wizard
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Step {
    Account,
    Personal,
    Contact,
}

impl Step {
    pub const ALL: [Step; 3] = [Step::Account, Step::Personal, Step::Contact];
    pub const LAST: Step = Step::Contact;

    pub fn index(&self) -> usize {
        match self {
            Step::Account => 0,
            Step::Personal => 1,
            Step::Contact => 2,
        }
    }

    pub fn from_index(index: usize) -> Option<Step> {
        Self::ALL.get(index).copied()
    }

    pub fn title(&self) -> &'static str {
        match self {
            Step::Account => "Account Information",
            Step::Personal => "Personal Information",
            Step::Contact => "Contact Information",
        }
    }

    /// Fields rendered and validated on this step, in display order
    pub fn fields(&self) -> &'static [Field] {
        match self {
            Step::Account => &[Field::EmailId, Field::Password],
            Step::Personal => &[Field::FirstName, Field::LastName, Field::Address],
            Step::Contact => &[
                Field::CountryCode,
                Field::PhoneNumber,
                Field::AcceptTermsAndCondition,
            ],
        }
    }

    pub fn is_last(&self) -> bool {
        *self == Self::LAST
    }
}

/// Per-field validation messages, ordered by field
pub type FieldErrors = BTreeMap<Field, &'static str>;

/// Result of "Save and Next"
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NextOutcome {
    /// Current step was valid and the wizard moved on
    Advanced(Step),
    /// Current step has errors; the step is unchanged
    Invalid(FieldErrors),
    /// Final step was valid; the payload should be submitted
    ReadyToSubmit(SubmitPayload),
}

/// Result of "Save"
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveOutcome {
    Saved(Step),
    Invalid(FieldErrors),
    ReadyToSubmit(SubmitPayload),
}

/// Result of a submission attempt
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// Remote accepted the record; carries the response body
    Submitted(serde_json::Value),
    /// Network or remote failure, already logged
    Failed,
    Invalid(FieldErrors),
    NotFinalStep,
}

/// Multi-step registration form state machine
#[derive(Debug, Clone)]
pub struct FormWizard {
    step: Step,
    record: RegistrationRecord,
    errors: FieldErrors,
}

impl Default for FormWizard {
    fn default() -> Self {
        Self::new()
    }
}

impl FormWizard {
    /// Fresh wizard with an empty record on the first step
    pub fn new() -> Self {
        Self::with_record(RegistrationRecord::default())
    }

    pub fn with_record(record: RegistrationRecord) -> Self {
        Self {
            step: Step::Account,
            record,
            errors: FieldErrors::new(),
        }
    }

    pub fn step(&self) -> Step {
        self.step
    }

    pub fn step_index(&self) -> usize {
        self.step.index()
    }

    pub fn record(&self) -> &RegistrationRecord {
        &self.record
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn error(&self, field: Field) -> Option<&'static str> {
        self.errors.get(&field).copied()
    }

    pub fn set_text(&mut self, field: Field, value: impl Into<String>) {
        if !self.record.set_text(field, value.into()) {
            debug!("Ignoring text input for non-text field {}", field.key());
        }
    }

    pub fn set_country_code(&mut self, code: Option<CountryCode>) {
        self.record.country_code = code;
    }

    pub fn set_accept_terms(&mut self, accepted: bool) {
        self.record.accept_terms_and_condition = accepted;
    }

    /// Jump to a step from the tab strip; no validation happens here
    pub fn select_step(&mut self, index: usize) {
        if let Some(step) = Step::from_index(index) {
            self.step = step;
        }
    }

    /// Go to the previous step; no-op on the first one
    pub fn back(&mut self) {
        if let Some(prev) = self.step.index().checked_sub(1).and_then(Step::from_index) {
            self.step = prev;
        }
    }

    /// Validate the fields of a step without touching stored errors
    pub fn validate_step(&self, step: Step) -> FieldErrors {
        step.fields()
            .iter()
            .filter_map(|field| {
                rule_for(*field)
                    .check(self.record.value(*field))
                    .map(|msg| (*field, msg))
            })
            .collect()
    }

    /// Validate the current step and store the outcome for display
    fn validate_current(&mut self) -> Result<(), FieldErrors> {
        let found = self.validate_step(self.step);
        for field in self.step.fields() {
            self.errors.remove(field);
        }
        if found.is_empty() {
            Ok(())
        } else {
            self.errors.extend(found.iter().map(|(f, m)| (*f, *m)));
            debug!(
                "Step '{}' failed validation on {} field(s)",
                self.step.title(),
                found.len()
            );
            Err(found)
        }
    }

    /// "Save and Next"
    pub fn next(&mut self) -> NextOutcome {
        if let Err(errors) = self.validate_current() {
            return NextOutcome::Invalid(errors);
        }
        if self.step.is_last() {
            return NextOutcome::ReadyToSubmit(self.payload());
        }
        if let Some(step) = Step::from_index(self.step.index() + 1) {
            self.step = step;
        }
        NextOutcome::Advanced(self.step)
    }

    /// "Save": validate without moving, submit-ready on the final step
    pub fn save(&mut self) -> SaveOutcome {
        if let Err(errors) = self.validate_current() {
            return SaveOutcome::Invalid(errors);
        }
        if self.step.is_last() {
            SaveOutcome::ReadyToSubmit(self.payload())
        } else {
            SaveOutcome::Saved(self.step)
        }
    }

    pub fn payload(&self) -> SubmitPayload {
        SubmitPayload::from(&self.record)
    }

    /// Validate the final step and post the record.
    ///
    /// Failures are logged and reported as [`SubmitOutcome::Failed`]; the
    /// wizard keeps its step and record.
    pub async fn submit(&mut self, api: &dyn RemoteApi) -> SubmitOutcome {
        if !self.step.is_last() {
            return SubmitOutcome::NotFinalStep;
        }
        if let Err(errors) = self.validate_current() {
            return SubmitOutcome::Invalid(errors);
        }
        submit_payload(api, &self.payload()).await
    }
}

/// Post a payload and log the response, swallowing failures into
/// [`SubmitOutcome::Failed`]
pub async fn submit_payload(api: &dyn RemoteApi, payload: &SubmitPayload) -> SubmitOutcome {
    match api.submit(payload).await {
        Ok(response) => {
            info!("Registration submitted: {}", response);
            SubmitOutcome::Submitted(response)
        }
        Err(e) => {
            error!("There was an error submitting the form: {}", e);
            SubmitOutcome::Failed
        }
    }
}
