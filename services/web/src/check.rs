use clap::Args;
use job_application::error::AppError;
use job_application::form::{visible_fields, ApplicationForm, ApplicationValues, Submission};
use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Args, Debug)]
pub(crate) struct CheckArgs {
    /// JSON application record to validate (reads stdin when omitted)
    pub(crate) path: Option<PathBuf>,
}

pub(crate) fn run_check(args: CheckArgs) -> Result<ExitCode, AppError> {
    let values = match args.path {
        Some(path) => read_values(BufReader::new(File::open(path)?))?,
        None => read_values(io::stdin().lock())?,
    };

    let mut form = ApplicationForm::from_values(values);
    let outcome = form.submit();
    println!("{}", render_check_report(&form, outcome.as_ref().ok())?);

    Ok(if outcome.is_ok() {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(2)
    })
}

pub(crate) fn read_values<R: Read>(reader: R) -> Result<ApplicationValues, AppError> {
    Ok(serde_json::from_reader(reader)?)
}

fn render_check_report(
    form: &ApplicationForm,
    submission: Option<&Submission>,
) -> Result<String, AppError> {
    let mut lines = Vec::new();
    let position = form
        .values()
        .position
        .map(|position| position.as_str())
        .unwrap_or("unset");

    match submission {
        Some(submission) => {
            lines.push(format!("Application check: valid (position {position})"));
            lines.push(format!("Interview at: {}", submission.interview_at));
        }
        None => {
            lines.push(format!(
                "Application check: invalid ({} field error(s), position {position})",
                form.errors().len()
            ));
            for (field, message) in form.errors().iter() {
                lines.push(format!("- {field}: {message}"));
            }
        }
    }

    let shown = visible_fields(form.values())
        .into_iter()
        .map(|field| field.as_str())
        .collect::<Vec<_>>()
        .join(", ");
    lines.push(format!("Visible fields: {shown}"));

    if let Some(submission) = submission {
        lines.push("Acknowledgement:".to_string());
        lines.push(submission.acknowledgement()?);
    }

    Ok(lines.join("\n"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    const VALID_RECORD: &str = r#"{
        "fullName": "Jane Doe",
        "email": "jane@x.com",
        "phoneNumber": "5551234567",
        "position": "Developer",
        "relevantExperience": 3,
        "additionalSkills": ["JavaScript"],
        "interviewTime": "2025-10-01T09:30"
    }"#;

    #[test]
    fn valid_record_reports_acknowledgement() {
        let values = read_values(Cursor::new(VALID_RECORD)).expect("record decodes");
        let mut form = ApplicationForm::from_values(values);
        let submission = form.submit().expect("record is valid");

        let report = render_check_report(&form, Some(&submission)).expect("report renders");
        assert!(report.starts_with("Application check: valid (position Developer)"));
        assert!(report.contains("Interview at: 2025-10-01 09:30:00"));
        assert!(report.contains("Visible fields: fullName, email, phoneNumber, position, relevantExperience, additionalSkills, interviewTime"));
        assert!(report.contains("\"relevantExperience\": \"3\""));
    }

    #[test]
    fn invalid_record_lists_field_errors() {
        let values = read_values(Cursor::new(r#"{ "position": "Manager", "email": "nope" }"#))
            .expect("record decodes");
        let mut form = ApplicationForm::from_values(values);
        assert!(form.submit().is_err());

        let report = render_check_report(&form, None).expect("report renders");
        assert!(report.contains("Application check: invalid (6 field error(s), position Manager)"));
        assert!(report.contains("- email: Invalid email address"));
        assert!(report.contains("- managementExperience: Management Experience is required"));
        assert!(!report.contains("Acknowledgement:"));
    }

    #[test]
    fn malformed_json_is_a_decode_error() {
        let err = read_values(Cursor::new("{ not json")).expect_err("malformed input");
        assert!(matches!(err, AppError::Decode(_)));
    }
}
