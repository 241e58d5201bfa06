use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde_json::json;
use tracing::{debug, error};

use super::domain::ApplicationValues;
use super::input::decode_form;
use super::render::{render_acknowledgement, render_form, render_page, VALIDATE_ACTION};
use super::service::{AcknowledgementSink, ApplicationFormService, SubmitError};
use super::state::ApplicationForm;

/// Routes hosting the form page, live validation and the JSON intake endpoint.
pub fn application_form_router<A>(service: Arc<ApplicationFormService<A>>) -> Router
where
    A: AcknowledgementSink + 'static,
{
    Router::new()
        .route("/", get(form_page::<A>).post(submit_form_handler::<A>))
        .route(VALIDATE_ACTION, post(validate_handler::<A>))
        .route("/api/v1/applications", post(submit_json_handler::<A>))
        .with_state(service)
}

pub(crate) async fn form_page<A>(State(service): State<Arc<ApplicationFormService<A>>>) -> Response
where
    A: AcknowledgementSink + 'static,
{
    let form = ApplicationForm::new();
    let page = render_page(&service.config().title, &render_form(&form));
    (StatusCode::OK, Html(page)).into_response()
}

pub(crate) async fn submit_form_handler<A>(
    State(service): State<Arc<ApplicationFormService<A>>>,
    body: Bytes,
) -> Response
where
    A: AcknowledgementSink + 'static,
{
    let title = &service.config().title;
    let mut form = ApplicationForm::from_values(decode_form(&body));

    match service.submit(&mut form) {
        Ok(submission) => match render_acknowledgement(&submission) {
            Ok(body) => (StatusCode::OK, Html(render_page(title, &body))).into_response(),
            Err(err) => {
                error!(error = %err, "unable to render acknowledgement");
                internal_error(err.to_string())
            }
        },
        Err(SubmitError::Invalid(errors)) => {
            debug!(error_count = errors.len(), "form submission suppressed");
            let page = render_page(title, &render_form(&form));
            (StatusCode::UNPROCESSABLE_ENTITY, Html(page)).into_response()
        }
        Err(other) => internal_error(other.to_string()),
    }
}

pub(crate) async fn validate_handler<A>(
    State(service): State<Arc<ApplicationFormService<A>>>,
    body: Bytes,
) -> Response
where
    A: AcknowledgementSink + 'static,
{
    let report = service.validate(&decode_form(&body));
    (StatusCode::OK, Json(report)).into_response()
}

pub(crate) async fn submit_json_handler<A>(
    State(service): State<Arc<ApplicationFormService<A>>>,
    Json(values): Json<ApplicationValues>,
) -> Response
where
    A: AcknowledgementSink + 'static,
{
    let mut form = ApplicationForm::from_values(values);

    match service.submit(&mut form) {
        Ok(submission) => match submission.acknowledgement() {
            Ok(acknowledgement) => {
                let payload = json!({
                    "values": submission.values,
                    "interviewAt": submission.interview_at,
                    "acknowledgement": acknowledgement,
                });
                (StatusCode::ACCEPTED, Json(payload)).into_response()
            }
            Err(err) => internal_error(err.to_string()),
        },
        Err(SubmitError::Invalid(errors)) => {
            let payload = json!({ "errors": errors });
            (StatusCode::UNPROCESSABLE_ENTITY, Json(payload)).into_response()
        }
        Err(other) => internal_error(other.to_string()),
    }
}

fn internal_error(message: String) -> Response {
    let payload = json!({ "error": message });
    (StatusCode::INTERNAL_SERVER_ERROR, Json(payload)).into_response()
}
