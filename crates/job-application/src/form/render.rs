use super::domain::{FieldName, Position, Skill};
use super::state::{ApplicationForm, Submission};

pub const FORM_ACTION: &str = "/";
pub const VALIDATE_ACTION: &str = "/validate";

/// Re-validates on every input event and applies the returned errors and visibility. Only the
/// latest request's report is applied.
const LIVE_VALIDATION_SCRIPT: &str = r#"(() => {
  const form = document.querySelector('form[data-validate-url]');
  if (!form) return;
  let latest = 0;
  form.addEventListener('input', async () => {
    const ticket = ++latest;
    const response = await fetch(form.dataset.validateUrl, {
      method: 'POST',
      headers: { 'Content-Type': 'application/x-www-form-urlencoded' },
      body: new URLSearchParams(new FormData(form)),
    });
    if (!response.ok || ticket !== latest) return;
    const report = await response.json();
    if (ticket !== latest) return;
    form.querySelectorAll('[data-field]').forEach((container) => {
      container.hidden = !report.visibleFields.includes(container.dataset.field);
    });
    form.querySelectorAll('[data-error-for]').forEach((slot) => {
      const message = report.errors[slot.dataset.errorFor];
      slot.textContent = message || '';
      slot.hidden = !message;
    });
  });
})();"#;

/// Page chrome around a rendered body.
pub fn render_page(title: &str, body: &str) -> String {
    let title = escape_html(title);
    let mut html = String::with_capacity(body.len() + 512);
    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n");
    html.push_str(&format!("<title>{title}</title>\n</head>\n<body>\n"));
    html.push_str("<div class=\"App\">\n");
    html.push_str(&format!(
        "<header class=\"App-header\">\n<h1>{title}</h1>\n</header>\n"
    ));
    html.push_str(&format!("<main>\n{body}</main>\n"));
    html.push_str("</div>\n</body>\n</html>\n");
    html
}

pub fn render_form(form: &ApplicationForm) -> String {
    let values = form.values();
    let mut html = String::new();
    html.push_str(&format!(
        "<form method=\"post\" action=\"{FORM_ACTION}\" data-validate-url=\"{VALIDATE_ACTION}\" novalidate>\n"
    ));

    for field in FieldName::ALL {
        let hidden = if form.is_visible(field) { "" } else { " hidden" };
        html.push_str(&format!(
            "<div data-field=\"{}\"{hidden}>\n",
            field.as_str()
        ));

        match field {
            FieldName::Position => {
                push_label(&mut html, field);
                push_position_select(&mut html, values.position);
            }
            FieldName::AdditionalSkills => {
                html.push_str(&format!("<label>{}:</label>\n<div>\n", field.label()));
                for skill in Skill::ALL {
                    let checked = if values.additional_skills.contains(&skill) {
                        " checked"
                    } else {
                        ""
                    };
                    html.push_str(&format!(
                        "<label><input type=\"checkbox\" name=\"{}\" value=\"{}\"{checked}> {}</label>\n",
                        field.as_str(),
                        skill.as_str(),
                        skill.as_str()
                    ));
                }
                html.push_str("</div>\n");
            }
            _ => {
                push_label(&mut html, field);
                let raw = values.text(field).unwrap_or_default();
                html.push_str(&format!(
                    "<input type=\"{}\" id=\"{name}\" name=\"{name}\" value=\"{}\">\n",
                    input_type(field),
                    escape_html(raw),
                    name = field.as_str()
                ));
            }
        }

        push_error(&mut html, field, form.error(field));
        html.push_str("</div>\n");
    }

    html.push_str("<button type=\"submit\">Submit</button>\n</form>\n");
    html.push_str(&format!("<script>\n{LIVE_VALIDATION_SCRIPT}\n</script>\n"));
    html
}

pub fn render_acknowledgement(submission: &Submission) -> Result<String, serde_json::Error> {
    let payload = submission.acknowledgement()?;
    let mut html = String::new();
    html.push_str("<section class=\"acknowledgement\">\n");
    html.push_str("<h2>Application received</h2>\n");
    html.push_str(&format!("<pre>{}</pre>\n", escape_html(&payload)));
    html.push_str(&format!(
        "<p><a href=\"{FORM_ACTION}\">Start a new application</a></p>\n"
    ));
    html.push_str("</section>\n");
    Ok(html)
}

fn input_type(field: FieldName) -> &'static str {
    match field {
        FieldName::Email => "email",
        FieldName::InterviewTime => "datetime-local",
        _ => "text",
    }
}

fn push_label(html: &mut String, field: FieldName) {
    html.push_str(&format!(
        "<label for=\"{}\">{}:</label>\n",
        field.as_str(),
        field.label()
    ));
}

fn push_position_select(html: &mut String, selected: Option<Position>) {
    let name = FieldName::Position.as_str();
    html.push_str(&format!("<select id=\"{name}\" name=\"{name}\">\n"));
    let placeholder = if selected.is_none() { " selected" } else { "" };
    html.push_str(&format!(
        "<option value=\"\"{placeholder}>Select Position</option>\n"
    ));
    for position in Position::ALL {
        let marker = if selected == Some(position) {
            " selected"
        } else {
            ""
        };
        html.push_str(&format!(
            "<option value=\"{0}\"{marker}>{0}</option>\n",
            position.as_str()
        ));
    }
    html.push_str("</select>\n");
}

fn push_error(html: &mut String, field: FieldName, message: Option<&str>) {
    match message {
        Some(message) => html.push_str(&format!(
            "<p class=\"field-error\" data-error-for=\"{}\">{}</p>\n",
            field.as_str(),
            escape_html(message)
        )),
        None => html.push_str(&format!(
            "<p class=\"field-error\" data-error-for=\"{}\" hidden></p>\n",
            field.as_str()
        )),
    }
}

fn escape_html(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            other => escaped.push(other),
        }
    }
    escaped
}
