use std::path::PathBuf;
use std::sync::Arc;

use async_trait::async_trait;
use tracing::info;

use super::CommandHandler;
use crate::api::RemoteApi;
use crate::form::{
    submit_payload, FieldErrors, FormWizard, NextOutcome, RegistrationRecord, Step, SubmitOutcome,
};
use crate::{EnrollError, Result};

/// Handler for the `register` command
pub struct RegisterCommand {
    pub record: Option<PathBuf>,
    api: Arc<dyn RemoteApi>,
}

impl RegisterCommand {
    pub fn new(record: Option<PathBuf>, api: Arc<dyn RemoteApi>) -> Self {
        Self { record, api }
    }
}

#[async_trait(?Send)]
impl CommandHandler for RegisterCommand {
    async fn execute(&self) -> Result<()> {
        match &self.record {
            Some(path) => {
                let content = tokio::fs::read_to_string(path).await.map_err(|e| {
                    EnrollError::Cli(format!("Failed to read record {}: {}", path.display(), e))
                })?;
                let record: RegistrationRecord = serde_json::from_str(&content)?;

                // Failed submissions are logged by the wizard and not reported here
                if let SubmitOutcome::Submitted(response) =
                    register_headless(record, self.api.as_ref()).await?
                {
                    println!("{}", serde_json::to_string_pretty(&response)?);
                }
                Ok(())
            }
            None => run_interactive(self.api.clone()).await,
        }
    }

    fn name(&self) -> &'static str {
        "register"
    }
}

#[cfg(feature = "tui")]
async fn run_interactive(api: Arc<dyn RemoteApi>) -> Result<()> {
    crate::cli::tui::run_register(api).await
}

#[cfg(not(feature = "tui"))]
async fn run_interactive(_api: Arc<dyn RemoteApi>) -> Result<()> {
    Err(EnrollError::Cli(
        "interactive registration requires the `tui` feature; pass --record <file.json>"
            .to_string(),
    ))
}

/// Walk a complete record through every wizard step and submit it.
///
/// Returns a validation error naming the first step that does not pass.
pub async fn register_headless(
    record: RegistrationRecord,
    api: &dyn RemoteApi,
) -> Result<SubmitOutcome> {
    let mut wizard = FormWizard::with_record(record);
    let payload = loop {
        let step = wizard.step();
        match wizard.next() {
            NextOutcome::Advanced(next) => {
                info!("Step '{}' saved, moving to '{}'", step.title(), next.title());
            }
            NextOutcome::Invalid(errors) => {
                return Err(EnrollError::Validation(format_errors(step, &errors)));
            }
            NextOutcome::ReadyToSubmit(payload) => break payload,
        }
    };

    Ok(submit_payload(api, &payload).await)
}

/// Render field errors one per line, in field order
pub fn format_errors(step: Step, errors: &FieldErrors) -> String {
    let mut out = format!("{} has invalid fields:", step.title());
    for (field, message) in errors {
        out.push_str(&format!("\n  {}: {}", field.key(), message));
    }
    out
}
