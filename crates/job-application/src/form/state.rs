use chrono::NaiveDateTime;
use serde::Serialize;

use super::domain::{ApplicationValues, FieldName, Skill};
use super::validation::{parse_date_time, validate, FieldErrors};
use super::visibility::is_visible;

/// One input event against the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldChange {
    /// Change-handler semantics: replaces text, re-selects the position, or toggles the named
    /// skill when `field` is `additionalSkills`.
    Input { field: FieldName, value: String },
    /// Sets a skill checkbox explicitly.
    Skill { skill: Skill, selected: bool },
}

impl FieldChange {
    pub fn input(field: FieldName, value: impl Into<String>) -> Self {
        FieldChange::Input {
            field,
            value: value.into(),
        }
    }
}

/// Values accepted by a successful submit.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Submission {
    pub values: ApplicationValues,
    pub interview_at: NaiveDateTime,
}

impl Submission {
    /// User-facing echo of the collected values.
    pub fn acknowledgement(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(&self.values)
    }
}

/// Form state: the value record and the error map derived from it.
///
/// A fresh form carries no errors; the first change validates every field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ApplicationForm {
    values: ApplicationValues,
    errors: FieldErrors,
}

impl ApplicationForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wraps an existing record without validating it.
    pub fn from_values(values: ApplicationValues) -> Self {
        Self {
            values,
            errors: FieldErrors::default(),
        }
    }

    pub fn values(&self) -> &ApplicationValues {
        &self.values
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn error(&self, field: FieldName) -> Option<&str> {
        self.errors.get(field)
    }

    pub fn is_visible(&self, field: FieldName) -> bool {
        is_visible(field, &self.values)
    }

    pub fn change(&mut self, change: FieldChange) {
        match change {
            FieldChange::Input { field, value } => self.values.apply_input(field, &value),
            FieldChange::Skill { skill, selected } => self.values.set_skill(skill, selected),
        }
        self.errors = validate(&self.values);
    }

    /// Validates everything; on failure the errors stay on the form for inline display.
    pub fn submit(&mut self) -> Result<Submission, FieldErrors> {
        self.errors = validate(&self.values);
        match parse_date_time(&self.values.interview_time) {
            Some(interview_at) if self.errors.is_empty() => Ok(Submission {
                values: self.values.clone(),
                interview_at,
            }),
            _ => Err(self.errors.clone()),
        }
    }

    pub fn into_values(self) -> ApplicationValues {
        self.values
    }
}
