use super::common::*;
use crate::form::domain::{ApplicationValues, FieldName, Position};
use crate::form::validation::{validate, ValidationReport};

#[test]
fn empty_record_reports_each_required_message() {
    let errors = validate(&ApplicationValues::default());

    assert_eq!(errors.get(FieldName::FullName), Some("Full Name is required"));
    assert_eq!(errors.get(FieldName::Email), Some("Email is required"));
    assert_eq!(
        errors.get(FieldName::PhoneNumber),
        Some("Phone Number is required")
    );
    assert_eq!(errors.get(FieldName::Position), Some("Position is required"));
    assert_eq!(
        errors.get(FieldName::AdditionalSkills),
        Some("At least one skill must be selected")
    );
    assert_eq!(
        errors.get(FieldName::InterviewTime),
        Some("Preferred Interview Time is required")
    );
    assert_eq!(errors.len(), 6, "conditional fields stay quiet without a position");
}

#[test]
fn whitespace_only_text_counts_as_empty() {
    let values = ApplicationValues {
        full_name: "   ".to_string(),
        ..developer_values()
    };
    assert_eq!(
        validate(&values).get(FieldName::FullName),
        Some("Full Name is required")
    );
}

#[test]
fn email_syntax_is_checked_after_presence() {
    let mut values = developer_values();
    values.email = "not-an-email".to_string();
    assert_eq!(
        validate(&values).get(FieldName::Email),
        Some("Invalid email address")
    );

    values.email = " a@b.com ".to_string();
    assert_eq!(
        validate(&values).get(FieldName::Email),
        Some("Invalid email address")
    );

    values.email = "a@b.com".to_string();
    assert!(!validate(&values).contains(FieldName::Email));
}

#[test]
fn phone_number_must_be_digits() {
    let mut values = developer_values();
    values.phone_number = "abc123".to_string();
    assert_eq!(
        validate(&values).get(FieldName::PhoneNumber),
        Some("Must be a number")
    );

    values.phone_number = " 5551234567 ".to_string();
    assert_eq!(
        validate(&values).get(FieldName::PhoneNumber),
        Some("Must be a number")
    );

    values.phone_number = "5551234567".to_string();
    assert!(!validate(&values).contains(FieldName::PhoneNumber));
}

#[test]
fn designer_requires_experience_and_portfolio() {
    let values = ApplicationValues {
        position: Some(Position::Designer),
        relevant_experience: String::new(),
        portfolio_url: String::new(),
        ..developer_values()
    };
    let errors = validate(&values);

    assert_eq!(
        errors.get(FieldName::RelevantExperience),
        Some("Relevant Experience is required")
    );
    assert_eq!(
        errors.get(FieldName::PortfolioUrl),
        Some("Portfolio URL is required")
    );
    assert!(!errors.contains(FieldName::ManagementExperience));
}

#[test]
fn designer_portfolio_must_be_a_url() {
    let values = ApplicationValues {
        portfolio_url: "jane dot design".to_string(),
        ..designer_values()
    };
    assert_eq!(
        validate(&values).get(FieldName::PortfolioUrl),
        Some("Invalid URL")
    );
    assert!(validate(&designer_values()).is_empty());
}

#[test]
fn manager_requires_management_experience_only() {
    let values = ApplicationValues {
        position: Some(Position::Manager),
        relevant_experience: String::new(),
        portfolio_url: String::new(),
        management_experience: String::new(),
        ..developer_values()
    };
    let errors = validate(&values);

    assert_eq!(
        errors.fields().collect::<Vec<_>>(),
        vec![FieldName::ManagementExperience]
    );
    assert_eq!(
        errors.get(FieldName::ManagementExperience),
        Some("Management Experience is required")
    );
    assert!(validate(&manager_values()).is_empty());
}

#[test]
fn relevant_experience_is_coerced_from_text() {
    let cases = [
        ("three", Some("Must be a number")),
        ("0", Some("Must be greater than 0")),
        ("-2", Some("Must be greater than 0")),
        (" 4 ", None),
        ("0.5", None),
    ];

    for (raw, expected) in cases {
        let values = ApplicationValues {
            relevant_experience: raw.to_string(),
            ..developer_values()
        };
        assert_eq!(
            validate(&values).get(FieldName::RelevantExperience),
            expected,
            "relevantExperience = {raw:?}"
        );
    }
}

#[test]
fn empty_skills_always_error() {
    for base in [developer_values(), designer_values(), manager_values()] {
        let values = ApplicationValues {
            additional_skills: Default::default(),
            ..base
        };
        let errors = validate(&values);
        assert_eq!(errors.len(), 1);
        assert_eq!(
            errors.get(FieldName::AdditionalSkills),
            Some("At least one skill must be selected")
        );
    }
}

#[test]
fn interview_time_must_parse() {
    let values = ApplicationValues {
        interview_time: "sometime next week".to_string(),
        ..developer_values()
    };
    assert_eq!(
        validate(&values).get(FieldName::InterviewTime),
        Some("Preferred Interview Time must be a valid date and time")
    );
}

#[test]
fn fully_valid_developer_has_no_errors() {
    assert!(validate(&developer_values()).is_empty());
}

#[test]
fn report_lists_visible_fields_for_position() {
    let report = ValidationReport::for_values(&designer_values());
    assert!(report.valid);
    assert!(report.visible_fields.contains(&FieldName::RelevantExperience));
    assert!(report.visible_fields.contains(&FieldName::PortfolioUrl));
    assert!(!report.visible_fields.contains(&FieldName::ManagementExperience));

    let encoded = serde_json::to_value(&report).expect("report serializes");
    assert_eq!(encoded["valid"], serde_json::json!(true));
    assert!(encoded["visibleFields"]
        .as_array()
        .expect("visible fields array")
        .contains(&serde_json::json!("portfolioUrl")));
}
