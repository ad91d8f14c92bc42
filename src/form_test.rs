use super::*;

fn valid() -> ContactFields {
    ContactFields {
        name: "Ada".to_owned(),
        email: "ada@example.com".to_owned(),
        subject: "Hello".to_owned(),
        message: "Nice portfolio.".to_owned(),
    }
}

// =============================================================
// is_valid_email
// =============================================================

#[test]
fn email_accepts_minimal_address() {
    assert!(is_valid_email("a@b.co"));
}

#[test]
fn email_rejects_missing_suffix() {
    assert!(!is_valid_email("foo@bar"));
}

#[test]
fn email_rejects_whitespace_and_double_at() {
    assert!(!is_valid_email("a b@c.de"));
    assert!(!is_valid_email("a@@b.co"));
    assert!(!is_valid_email("a@b@c.co"));
    assert!(!is_valid_email("bad"));
    assert!(!is_valid_email(""));
}

#[test]
fn email_accepts_subdomains() {
    assert!(is_valid_email("first.last@mail.example.org"));
}

// =============================================================
// validate
// =============================================================

#[test]
fn validate_accepts_complete_form() {
    assert_eq!(validate(&valid()), Ok(()));
}

#[test]
fn validate_rejects_each_empty_field() {
    let blanks: [fn(&mut ContactFields); 4] = [
        |f: &mut ContactFields| f.name.clear(),
        |f: &mut ContactFields| f.email.clear(),
        |f: &mut ContactFields| f.subject.clear(),
        |f: &mut ContactFields| f.message.clear(),
    ];
    for blank in blanks {
        let mut fields = valid();
        blank(&mut fields);
        assert_eq!(validate(&fields), Err(ValidationError::MissingField));
    }
}

#[test]
fn validate_treats_whitespace_as_empty() {
    let fields = ContactFields { subject: "   ".to_owned(), ..valid() };
    assert_eq!(validate(&fields), Err(ValidationError::MissingField));
}

#[test]
fn validate_reports_missing_before_bad_email() {
    let fields = ContactFields { email: "bad".to_owned(), message: String::new(), ..valid() };
    assert_eq!(validate(&fields), Err(ValidationError::MissingField));
}

#[test]
fn validate_rejects_bad_email() {
    let fields = ContactFields { email: "foo@bar".to_owned(), ..valid() };
    assert_eq!(validate(&fields), Err(ValidationError::InvalidEmail));
}

#[test]
fn validation_messages_are_user_facing() {
    assert_eq!(ValidationError::MissingField.to_string(), "Please fill in all fields.");
    assert_eq!(ValidationError::InvalidEmail.to_string(), "Please enter a valid email address.");
}

#[test]
fn contact_fields_deserialize_with_missing_keys() {
    let fields: ContactFields = serde_json::from_str(r#"{"name":"A","email":"a@b.co"}"#).unwrap();
    assert_eq!(fields.name, "A");
    assert!(fields.subject.is_empty());
    assert_eq!(validate(&fields), Err(ValidationError::MissingField));
}
