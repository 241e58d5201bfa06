use std::collections::BTreeSet;
use std::sync::{Arc, Mutex};

use axum::response::Response;
use serde_json::Value;

use crate::config::FormConfig;
use crate::form::domain::{ApplicationValues, Position, Skill};
use crate::form::service::{AcknowledgementError, AcknowledgementSink, ApplicationFormService};
use crate::form::state::Submission;
use crate::form::application_form_router;

/// The fully valid developer record used throughout the suite.
pub(super) fn developer_values() -> ApplicationValues {
    ApplicationValues {
        full_name: "Jane Doe".to_string(),
        email: "jane@x.com".to_string(),
        phone_number: "5551234567".to_string(),
        position: Some(Position::Developer),
        relevant_experience: "3".to_string(),
        portfolio_url: String::new(),
        management_experience: String::new(),
        additional_skills: BTreeSet::from([Skill::JavaScript]),
        interview_time: "2025-10-01T09:30".to_string(),
    }
}

pub(super) fn designer_values() -> ApplicationValues {
    ApplicationValues {
        position: Some(Position::Designer),
        portfolio_url: "https://jane.design/work".to_string(),
        additional_skills: BTreeSet::from([Skill::Css]),
        ..developer_values()
    }
}

pub(super) fn manager_values() -> ApplicationValues {
    ApplicationValues {
        position: Some(Position::Manager),
        relevant_experience: String::new(),
        management_experience: "Led a team of six engineers".to_string(),
        additional_skills: BTreeSet::from([Skill::Python]),
        ..developer_values()
    }
}

pub(super) const DEVELOPER_FORM_BODY: &str = "fullName=Jane+Doe&email=jane%40x.com\
&phoneNumber=5551234567&position=Developer&relevantExperience=3\
&additionalSkills=JavaScript&interviewTime=2025-10-01T09%3A30";

#[derive(Default, Clone)]
pub(super) struct MemoryAcknowledgements {
    submissions: Arc<Mutex<Vec<Submission>>>,
}

impl MemoryAcknowledgements {
    pub(super) fn submissions(&self) -> Vec<Submission> {
        self.submissions
            .lock()
            .expect("acknowledgement mutex poisoned")
            .clone()
    }
}

impl AcknowledgementSink for MemoryAcknowledgements {
    fn acknowledge(&self, submission: &Submission) -> Result<(), AcknowledgementError> {
        self.submissions
            .lock()
            .expect("acknowledgement mutex poisoned")
            .push(submission.clone());
        Ok(())
    }
}

pub(super) struct UnavailableAcknowledgements;

impl AcknowledgementSink for UnavailableAcknowledgements {
    fn acknowledge(&self, _submission: &Submission) -> Result<(), AcknowledgementError> {
        Err(AcknowledgementError::Unavailable("display offline".to_string()))
    }
}

pub(super) fn build_service() -> (
    ApplicationFormService<MemoryAcknowledgements>,
    Arc<MemoryAcknowledgements>,
) {
    let sink = Arc::new(MemoryAcknowledgements::default());
    let service = ApplicationFormService::new(sink.clone(), FormConfig::default());
    (service, sink)
}

pub(super) fn router_with_service(
    service: ApplicationFormService<MemoryAcknowledgements>,
) -> axum::Router {
    application_form_router(Arc::new(service))
}

pub(super) async fn read_body(response: Response) -> String {
    let body = axum::body::to_bytes(response.into_body(), 256 * 1024)
        .await
        .expect("read body");
    String::from_utf8(body.to_vec()).expect("utf-8 body")
}

pub(super) async fn read_json_body(response: Response) -> Value {
    serde_json::from_str(&read_body(response).await).expect("json payload")
}
