mod rules;
mod syntax;

use std::collections::BTreeMap;

use serde::Serialize;
use tracing::debug;

use super::domain::{ApplicationValues, FieldName};
use super::visibility::visible_fields;

pub(crate) use rules::rule_for;
pub(crate) use syntax::parse_date_time;

/// Per-field error messages. A field with no entry is valid.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<FieldName, String>);

impl FieldErrors {
    pub fn get(&self, field: FieldName) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    pub fn contains(&self, field: FieldName) -> bool {
        self.0.contains_key(&field)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn fields(&self) -> impl Iterator<Item = FieldName> + '_ {
        self.0.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (FieldName, &str)> + '_ {
        self.0
            .iter()
            .map(|(field, message)| (*field, message.as_str()))
    }
}

/// Runs the whole rule table. Every field is re-checked because conditional rules depend on
/// the current `position`.
pub fn validate(values: &ApplicationValues) -> FieldErrors {
    let errors: BTreeMap<FieldName, String> = FieldName::ALL
        .into_iter()
        .filter_map(|field| {
            rule_for(field)
                .evaluate(values)
                .map(|message| (field, message.to_string()))
        })
        .collect();

    debug!(
        error_count = errors.len(),
        position = values.position.map(|position| position.as_str()),
        "application values validated"
    );

    FieldErrors(errors)
}

/// Validation outcome plus the fields a client should currently show.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationReport {
    pub valid: bool,
    pub errors: FieldErrors,
    pub visible_fields: Vec<FieldName>,
}

impl ValidationReport {
    pub fn for_values(values: &ApplicationValues) -> Self {
        let errors = validate(values);
        Self {
            valid: errors.is_empty(),
            errors,
            visible_fields: visible_fields(values),
        }
    }
}
