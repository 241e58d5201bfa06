//! The application form: one value record, a declarative rule table evaluated on every change,
//! conditional field visibility driven by `position`, and submit handling.

pub mod domain;
pub mod input;
pub mod render;
pub mod router;
pub mod service;
pub mod state;
pub mod validation;
pub mod visibility;

#[cfg(test)]
mod tests;

pub use domain::{ApplicationValues, FieldName, Position, Skill};
pub use input::decode_form;
pub use router::application_form_router;
pub use service::{
    AcknowledgementError, AcknowledgementSink, ApplicationFormService, SubmitError,
    TracingAcknowledgementSink,
};
pub use state::{ApplicationForm, FieldChange, Submission};
pub use validation::{validate, FieldErrors, ValidationReport};
pub use visibility::{is_visible, visible_fields};
