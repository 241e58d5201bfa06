use std::sync::Arc;

use tracing::{info, warn};

use super::domain::ApplicationValues;
use super::state::{ApplicationForm, Submission};
use super::validation::{FieldErrors, ValidationReport};
use crate::config::FormConfig;

/// Receives accepted submissions. This is the only observable effect of a submit.
pub trait AcknowledgementSink: Send + Sync {
    fn acknowledge(&self, submission: &Submission) -> Result<(), AcknowledgementError>;
}

#[derive(Debug, thiserror::Error)]
pub enum AcknowledgementError {
    #[error("acknowledgement unavailable: {0}")]
    Unavailable(String),
    #[error("unable to encode acknowledgement: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Writes each accepted submission to the tracing pipeline.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingAcknowledgementSink;

impl AcknowledgementSink for TracingAcknowledgementSink {
    fn acknowledge(&self, submission: &Submission) -> Result<(), AcknowledgementError> {
        let acknowledgement = submission.acknowledgement()?;
        info!(
            position = submission.values.position.map(|position| position.as_str()),
            skills = submission.values.additional_skills.len(),
            interview_at = %submission.interview_at,
            %acknowledgement,
            "application submitted"
        );
        Ok(())
    }
}

/// Service pairing the rule table with an acknowledgement sink.
pub struct ApplicationFormService<A> {
    sink: Arc<A>,
    config: FormConfig,
}

impl<A> ApplicationFormService<A>
where
    A: AcknowledgementSink + 'static,
{
    pub fn new(sink: Arc<A>, config: FormConfig) -> Self {
        Self { sink, config }
    }

    pub fn config(&self) -> &FormConfig {
        &self.config
    }

    pub fn validate(&self, values: &ApplicationValues) -> ValidationReport {
        ValidationReport::for_values(values)
    }

    /// Submits the form. Invalid forms are left holding their errors and nothing reaches the
    /// sink.
    pub fn submit(&self, form: &mut ApplicationForm) -> Result<Submission, SubmitError> {
        let submission = form.submit().map_err(SubmitError::Invalid)?;

        if let Err(err) = self.sink.acknowledge(&submission) {
            warn!(error = %err, "submission acknowledgement failed");
            return Err(err.into());
        }

        Ok(submission)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum SubmitError {
    #[error("application has {} invalid field(s)", .0.len())]
    Invalid(FieldErrors),
    #[error(transparent)]
    Acknowledgement(#[from] AcknowledgementError),
}
