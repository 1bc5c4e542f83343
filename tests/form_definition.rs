use formrow::{DocumentFormat, Form, Validity, parse_form_definition};
use serde_json::{Value, json};

const SIGNUP: &str = r#"{
  "title": "Sign up",
  "fields": [
    {"name": "name", "label": "Name", "required": true, "value": "Ada"},
    {"name": "email", "kind": "email", "label": {"text": "E-mail", "width": 10}, "required": true},
    {"name": "zip", "labelid": "zip_label", "validate": {"type": "pattern", "pattern": "^[0-9]{4}[A-Z]{2}$", "message": "postcode like 1234AB"}},
    {"name": "nick", "required": "true", "validate": {"type": "length", "max": 8}},
    {"name": "secret", "kind": "password", "validate": {"type": "schema", "schema": {"minLength": 6}}}
  ]
}"#;

fn signup_form() -> Form {
    let definition = parse_form_definition(SIGNUP, DocumentFormat::Json).expect("definition");
    Form::from_definition(definition).expect("form builds")
}

#[test]
fn definition_builds_rows_in_order() {
    let form = signup_form();
    let names: Vec<&str> = form.fields().map(|field| field.name()).collect();
    assert_eq!(names, ["name", "email", "zip", "nick", "secret"]);

    let email = form.field("email").expect("email row");
    assert_eq!(email.controller().shell().control.left, 10);
    let zip = form.field("zip").expect("zip row");
    assert_eq!(
        zip.controller().shell().label.text_id.as_deref(),
        Some("zip_label")
    );
    assert!(!form.field("nick").expect("nick row").controller().required);
}

#[test]
fn validation_reports_messages_per_row() {
    let mut form = signup_form();
    form.field_mut("zip")
        .expect("zip row")
        .set_value("12")
        .expect("input attached");
    let report = form.validate().expect("rows attached");
    let invalid: Vec<(&str, Option<&str>)> = report
        .issues
        .iter()
        .map(|issue| (issue.name.as_str(), issue.message.as_deref()))
        .collect();
    assert_eq!(invalid.len(), 3);
    assert_eq!(invalid[0], ("email", Some("This field is required")));
    assert_eq!(invalid[1], ("zip", Some("postcode like 1234AB")));
    assert_eq!(invalid[2].0, "secret");
}

#[test]
fn filled_form_validates_and_collects_values() {
    let mut form = signup_form();
    for (name, value) in [
        ("email", "ada@example.com"),
        ("zip", "1234AB"),
        ("secret", "correct horse"),
    ] {
        form.field_mut(name)
            .expect("known row")
            .set_value(value)
            .expect("input attached");
    }
    assert!(form.validate().expect("rows attached").is_valid());
    let values = form.values().expect("rows attached");
    assert_eq!(
        Value::Object(values),
        json!({
            "name": "Ada",
            "email": "ada@example.com",
            "zip": "1234AB",
            "nick": "",
            "secret": "correct horse"
        })
    );
}

#[test]
fn tapping_a_row_focuses_its_input() {
    let mut form = signup_form();
    form.tap("zip").expect("known row");
    assert_eq!(form.focused_name(), Some("zip"));
    let zip = form.field_mut("zip").expect("zip row");
    assert!(zip.controller().is_focused());
    assert_eq!(
        zip.is_valid().expect("input attached"),
        Validity::invalid("postcode like 1234AB")
    );
}
