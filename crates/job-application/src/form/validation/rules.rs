use super::super::domain::{ApplicationValues, FieldName, Position};
use super::syntax;

/// When a field's checks apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Condition {
    Always,
    PositionIn(&'static [Position]),
}

impl Condition {
    pub(crate) fn holds(self, values: &ApplicationValues) -> bool {
        match self {
            Condition::Always => true,
            Condition::PositionIn(positions) => values
                .position
                .is_some_and(|position| positions.contains(&position)),
        }
    }
}

/// A single check and the message reported when it fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Check {
    Required(&'static str),
    Email(&'static str),
    Digits(&'static str),
    Number(&'static str),
    /// Strictly greater than zero, so fractional years such as 0.5 pass.
    Positive(&'static str),
    Url(&'static str),
    DateTime(&'static str),
    MinSelected(usize, &'static str),
}

impl Check {
    /// Returns the failure message, or `None` when the value passes.
    ///
    /// Syntax checks only look at text fields and assume `Required` already ran.
    fn failure(self, values: &ApplicationValues, field: FieldName) -> Option<&'static str> {
        let text = values.text(field);
        let passed = match self {
            Check::Required(_) => match field {
                FieldName::Position => values.position.is_some(),
                FieldName::AdditionalSkills => !values.additional_skills.is_empty(),
                _ => text.is_some_and(|raw| !syntax::is_blank(raw)),
            },
            Check::Email(_) => text.map_or(true, syntax::is_email),
            Check::Digits(_) => text.map_or(true, syntax::is_digits),
            Check::Number(_) => text.map_or(true, |raw| syntax::parse_number(raw).is_some()),
            Check::Positive(_) => text
                .and_then(syntax::parse_number)
                .map_or(true, |value| value > 0.0),
            Check::Url(_) => text.map_or(true, syntax::is_url),
            Check::DateTime(_) => text.map_or(true, |raw| syntax::parse_date_time(raw).is_some()),
            Check::MinSelected(minimum, _) => values.additional_skills.len() >= minimum,
        };

        if passed {
            None
        } else {
            Some(self.message())
        }
    }

    const fn message(self) -> &'static str {
        match self {
            Check::Required(message)
            | Check::Email(message)
            | Check::Digits(message)
            | Check::Number(message)
            | Check::Positive(message)
            | Check::Url(message)
            | Check::DateTime(message)
            | Check::MinSelected(_, message) => message,
        }
    }
}

/// Ordered checks for one field, gated by a condition on the current values.
#[derive(Debug, Clone, Copy)]
pub(crate) struct FieldRule {
    pub field: FieldName,
    pub condition: Condition,
    pub checks: &'static [Check],
}

impl FieldRule {
    /// First failing check wins; inactive rules never fail.
    pub(crate) fn evaluate(&self, values: &ApplicationValues) -> Option<&'static str> {
        if !self.condition.holds(values) {
            return None;
        }
        self.checks
            .iter()
            .find_map(|check| check.failure(values, self.field))
    }
}

const EXPERIENCED_ROLES: &[Position] = &[Position::Developer, Position::Designer];
const PORTFOLIO_ROLES: &[Position] = &[Position::Designer];
const MANAGEMENT_ROLES: &[Position] = &[Position::Manager];

pub(crate) static RULES: [FieldRule; 9] = [
    FieldRule {
        field: FieldName::FullName,
        condition: Condition::Always,
        checks: &[Check::Required("Full Name is required")],
    },
    FieldRule {
        field: FieldName::Email,
        condition: Condition::Always,
        checks: &[
            Check::Required("Email is required"),
            Check::Email("Invalid email address"),
        ],
    },
    FieldRule {
        field: FieldName::PhoneNumber,
        condition: Condition::Always,
        checks: &[
            Check::Required("Phone Number is required"),
            Check::Digits("Must be a number"),
        ],
    },
    FieldRule {
        field: FieldName::Position,
        condition: Condition::Always,
        checks: &[Check::Required("Position is required")],
    },
    FieldRule {
        field: FieldName::RelevantExperience,
        condition: Condition::PositionIn(EXPERIENCED_ROLES),
        checks: &[
            Check::Required("Relevant Experience is required"),
            Check::Number("Must be a number"),
            Check::Positive("Must be greater than 0"),
        ],
    },
    FieldRule {
        field: FieldName::PortfolioUrl,
        condition: Condition::PositionIn(PORTFOLIO_ROLES),
        checks: &[
            Check::Required("Portfolio URL is required"),
            Check::Url("Invalid URL"),
        ],
    },
    FieldRule {
        field: FieldName::ManagementExperience,
        condition: Condition::PositionIn(MANAGEMENT_ROLES),
        checks: &[Check::Required("Management Experience is required")],
    },
    FieldRule {
        field: FieldName::AdditionalSkills,
        condition: Condition::Always,
        checks: &[Check::MinSelected(1, "At least one skill must be selected")],
    },
    FieldRule {
        field: FieldName::InterviewTime,
        condition: Condition::Always,
        checks: &[
            Check::Required("Preferred Interview Time is required"),
            Check::DateTime("Preferred Interview Time must be a valid date and time"),
        ],
    },
];

pub(crate) fn rule_for(field: FieldName) -> &'static FieldRule {
    // RULES is declared in FieldName order.
    &RULES[field as usize]
}
