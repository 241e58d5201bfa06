use super::domain::{ApplicationValues, FieldName};
use super::validation::rule_for;

/// A field is shown exactly when its validation rule is active, so hidden inputs can never
/// block a submission.
pub fn is_visible(field: FieldName, values: &ApplicationValues) -> bool {
    rule_for(field).condition.holds(values)
}

pub fn visible_fields(values: &ApplicationValues) -> Vec<FieldName> {
    FieldName::ALL
        .into_iter()
        .filter(|field| is_visible(*field, values))
        .collect()
}
