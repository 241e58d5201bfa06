use url::form_urlencoded;

use super::domain::{ApplicationValues, FieldName, Skill};

/// Decodes an `application/x-www-form-urlencoded` body. Each checked box arrives as its own
/// `additionalSkills` pair; unknown keys and skills are dropped.
pub fn decode_form(body: &[u8]) -> ApplicationValues {
    let mut values = ApplicationValues::default();
    for (key, value) in form_urlencoded::parse(body) {
        match FieldName::parse(&key) {
            Some(FieldName::AdditionalSkills) => {
                if let Some(skill) = Skill::parse(&value) {
                    values.set_skill(skill, true);
                }
            }
            Some(field) => values.apply_input(field, &value),
            None => {}
        }
    }
    values
}
