use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Named inputs of the application form, in render order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FieldName {
    FullName,
    Email,
    PhoneNumber,
    Position,
    RelevantExperience,
    PortfolioUrl,
    ManagementExperience,
    AdditionalSkills,
    InterviewTime,
}

impl FieldName {
    pub const ALL: [FieldName; 9] = [
        FieldName::FullName,
        FieldName::Email,
        FieldName::PhoneNumber,
        FieldName::Position,
        FieldName::RelevantExperience,
        FieldName::PortfolioUrl,
        FieldName::ManagementExperience,
        FieldName::AdditionalSkills,
        FieldName::InterviewTime,
    ];

    /// The `name` attribute used by the rendered input.
    pub const fn as_str(self) -> &'static str {
        match self {
            FieldName::FullName => "fullName",
            FieldName::Email => "email",
            FieldName::PhoneNumber => "phoneNumber",
            FieldName::Position => "position",
            FieldName::RelevantExperience => "relevantExperience",
            FieldName::PortfolioUrl => "portfolioUrl",
            FieldName::ManagementExperience => "managementExperience",
            FieldName::AdditionalSkills => "additionalSkills",
            FieldName::InterviewTime => "interviewTime",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            FieldName::FullName => "Full Name",
            FieldName::Email => "Email",
            FieldName::PhoneNumber => "Phone Number",
            FieldName::Position => "Applying for Position",
            FieldName::RelevantExperience => "Relevant Experience (years)",
            FieldName::PortfolioUrl => "Portfolio URL",
            FieldName::ManagementExperience => "Management Experience",
            FieldName::AdditionalSkills => "Additional Skills",
            FieldName::InterviewTime => "Preferred Interview Time",
        }
    }

    pub fn parse(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|field| field.as_str() == name)
    }
}

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Role the applicant is applying for. An unset select is `None` on [`ApplicationValues`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Position {
    Developer,
    Designer,
    Manager,
}

impl Position {
    pub const ALL: [Position; 3] = [Position::Developer, Position::Designer, Position::Manager];

    pub const fn as_str(self) -> &'static str {
        match self {
            Position::Developer => "Developer",
            Position::Designer => "Designer",
            Position::Manager => "Manager",
        }
    }

    /// Parses select option text. Blank or unrecognised text means no position was chosen.
    pub fn parse(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        Self::ALL.into_iter().find(|position| position.as_str() == raw)
    }
}

/// Skills offered as checkboxes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Skill {
    JavaScript,
    #[serde(rename = "CSS")]
    Css,
    Python,
}

impl Skill {
    pub const ALL: [Skill; 3] = [Skill::JavaScript, Skill::Css, Skill::Python];

    pub const fn as_str(self) -> &'static str {
        match self {
            Skill::JavaScript => "JavaScript",
            Skill::Css => "CSS",
            Skill::Python => "Python",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        Self::ALL.into_iter().find(|skill| skill.as_str() == raw)
    }
}

/// The single value record owned by one form instance.
///
/// Text inputs are kept exactly as typed; `relevant_experience` and `interview_time` are only
/// coerced when the rule table runs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ApplicationValues {
    pub full_name: String,
    pub email: String,
    pub phone_number: String,
    #[serde(
        serialize_with = "serialize_position",
        deserialize_with = "deserialize_position"
    )]
    pub position: Option<Position>,
    #[serde(deserialize_with = "deserialize_number_text")]
    pub relevant_experience: String,
    pub portfolio_url: String,
    pub management_experience: String,
    #[serde(deserialize_with = "deserialize_skills")]
    pub additional_skills: BTreeSet<Skill>,
    pub interview_time: String,
}

impl ApplicationValues {
    /// Raw text behind a text-like field. `None` for the position select and skill checkboxes.
    pub fn text(&self, field: FieldName) -> Option<&str> {
        match field {
            FieldName::FullName => Some(&self.full_name),
            FieldName::Email => Some(&self.email),
            FieldName::PhoneNumber => Some(&self.phone_number),
            FieldName::RelevantExperience => Some(&self.relevant_experience),
            FieldName::PortfolioUrl => Some(&self.portfolio_url),
            FieldName::ManagementExperience => Some(&self.management_experience),
            FieldName::InterviewTime => Some(&self.interview_time),
            FieldName::Position | FieldName::AdditionalSkills => None,
        }
    }

    /// Applies one input event the way a browser change handler would: text replaces the
    /// value, the select re-parses its option and a skill name toggles that checkbox.
    pub fn apply_input(&mut self, field: FieldName, value: &str) {
        match field {
            FieldName::FullName => self.full_name = value.to_string(),
            FieldName::Email => self.email = value.to_string(),
            FieldName::PhoneNumber => self.phone_number = value.to_string(),
            FieldName::Position => self.position = Position::parse(value),
            FieldName::RelevantExperience => self.relevant_experience = value.to_string(),
            FieldName::PortfolioUrl => self.portfolio_url = value.to_string(),
            FieldName::ManagementExperience => self.management_experience = value.to_string(),
            FieldName::AdditionalSkills => {
                if let Some(skill) = Skill::parse(value) {
                    let selected = self.additional_skills.contains(&skill);
                    self.set_skill(skill, !selected);
                }
            }
            FieldName::InterviewTime => self.interview_time = value.to_string(),
        }
    }

    pub fn set_skill(&mut self, skill: Skill, selected: bool) {
        if selected {
            self.additional_skills.insert(skill);
        } else {
            self.additional_skills.remove(&skill);
        }
    }
}

fn serialize_position<S>(position: &Option<Position>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(position.map(Position::as_str).unwrap_or(""))
}

fn deserialize_position<'de, D>(deserializer: D) -> Result<Option<Position>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.as_deref().and_then(Position::parse))
}

fn deserialize_number_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum NumberOrText {
        Number(serde_json::Number),
        Text(String),
    }

    let raw = Option::<NumberOrText>::deserialize(deserializer)?;
    Ok(match raw {
        Some(NumberOrText::Number(number)) => number.to_string(),
        Some(NumberOrText::Text(text)) => text,
        None => String::new(),
    })
}

fn deserialize_skills<'de, D>(deserializer: D) -> Result<BTreeSet<Skill>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<Vec<String>>::deserialize(deserializer)?;
    Ok(raw
        .unwrap_or_default()
        .iter()
        .filter_map(|name| Skill::parse(name))
        .collect())
}
