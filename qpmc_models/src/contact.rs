use nutype::nutype;
use serde_json::Value;

use crate::{
    payload::{string_field, FieldErrors, RawField},
    SubmitterEmail, SubmitterName,
};

/// A validated contact form submission, shared by the general and the
/// partner-brand endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactSubmission {
    pub name: SubmitterName,
    pub email: SubmitterEmail,
    pub message: ContactMessage,
    pub phone: Option<String>,
    pub subject: Option<String>,
}

#[nutype(
    validate(len_char_min = 1, len_char_max = 5000),
    derive(Debug, Clone, PartialEq, Eq, TryFrom, Deref, Serialize, Deserialize)
)]
pub struct ContactMessage(String);

impl ContactSubmission {
    /// Validates an untrusted payload into a typed submission, collecting
    /// every violation instead of stopping at the first.
    ///
    /// Optional fields carrying an empty string are normalized to absent.
    pub fn parse(payload: &Value) -> Result<Self, FieldErrors> {
        let mut errors = FieldErrors::default();

        let name = match string_field(payload, "name") {
            RawField::Text(raw) => SubmitterName::try_from(raw)
                .map_err(|_| errors.push("Name must be between 2 and 100 characters"))
                .ok(),
            _ => {
                errors.push("Name is required");
                None
            }
        };

        let email = match string_field(payload, "email") {
            RawField::Text(raw) => SubmitterEmail::try_from(raw)
                .map_err(|_| errors.push("Email must be a valid email address"))
                .ok(),
            _ => {
                errors.push("Email is required");
                None
            }
        };

        let message = match string_field(payload, "message") {
            RawField::Text(raw) => ContactMessage::try_from(raw)
                .map_err(|_| errors.push("Message must be between 1 and 5000 characters"))
                .ok(),
            _ => {
                errors.push("Message is required");
                None
            }
        };

        let phone = match string_field(payload, "phone") {
            RawField::Text(raw) => (!raw.is_empty()).then(|| raw.to_owned()),
            RawField::Missing => None,
            RawField::NotAString => {
                errors.push("Phone must be a string");
                None
            }
        };

        let subject = match string_field(payload, "subject") {
            RawField::Text(raw) => (!raw.is_empty()).then(|| raw.to_owned()),
            RawField::Missing => None,
            RawField::NotAString => {
                errors.push("Subject must be a string");
                None
            }
        };

        match (name, email, message) {
            (Some(name), Some(email), Some(message)) if errors.is_empty() => Ok(Self {
                name,
                email,
                message,
                phone,
                subject,
            }),
            _ => Err(errors),
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn minimal_valid_submission() {
        let payload = json!({
            "name": "Jo",
            "email": "a@b.com",
            "message": "Hi",
        });

        let submission = ContactSubmission::parse(&payload).unwrap();

        assert_eq!(*submission.name, "Jo");
        assert_eq!(*submission.email, "a@b.com");
        assert_eq!(*submission.message, "Hi");
        assert_eq!(submission.phone, None);
        assert_eq!(submission.subject, None);
    }

    #[test]
    fn full_valid_submission() {
        let payload = json!({
            "name": "Jordan Example",
            "email": "jordan@example.com",
            "message": "I would like to talk about a project.",
            "phone": "+971 50 123 4567",
            "subject": "Project inquiry",
        });

        let submission = ContactSubmission::parse(&payload).unwrap();

        assert_eq!(submission.phone.as_deref(), Some("+971 50 123 4567"));
        assert_eq!(submission.subject.as_deref(), Some("Project inquiry"));
    }

    #[test]
    fn collects_all_violations() {
        let payload = json!({
            "name": "J",
            "email": "bad",
            "message": "",
        });

        let errors = ContactSubmission::parse(&payload).unwrap_err();

        assert_eq!(
            errors.messages(),
            [
                "Name must be between 2 and 100 characters",
                "Email must be a valid email address",
                "Message must be between 1 and 5000 characters",
            ]
        );
    }

    #[test]
    fn missing_required_fields() {
        let errors = ContactSubmission::parse(&json!({})).unwrap_err();

        assert_eq!(
            errors.messages(),
            ["Name is required", "Email is required", "Message is required"]
        );
    }

    #[test]
    fn rejects_wrong_types_as_missing() {
        let payload = json!({
            "name": 42,
            "email": ["a@b.com"],
            "message": {"text": "hi"},
        });

        let errors = ContactSubmission::parse(&payload).unwrap_err();

        assert_eq!(
            errors.messages(),
            ["Name is required", "Email is required", "Message is required"]
        );
    }

    #[test]
    fn optional_fields_must_be_strings() {
        let payload = json!({
            "name": "Jo",
            "email": "a@b.com",
            "message": "Hi",
            "phone": 5551234,
            "subject": true,
        });

        let errors = ContactSubmission::parse(&payload).unwrap_err();

        assert_eq!(
            errors.messages(),
            ["Phone must be a string", "Subject must be a string"]
        );
    }

    #[test]
    fn empty_optional_fields_are_normalized_to_absent() {
        let payload = json!({
            "name": "Jo",
            "email": "a@b.com",
            "message": "Hi",
            "phone": "",
            "subject": "",
        });

        let submission = ContactSubmission::parse(&payload).unwrap();

        assert_eq!(submission.phone, None);
        assert_eq!(submission.subject, None);
    }

    #[test]
    fn null_optional_fields_count_as_absent() {
        let payload = json!({
            "name": "Jo",
            "email": "a@b.com",
            "message": "Hi",
            "phone": null,
            "subject": null,
        });

        let submission = ContactSubmission::parse(&payload).unwrap();

        assert_eq!(submission.phone, None);
        assert_eq!(submission.subject, None);
    }

    #[test]
    fn enforces_length_bounds() {
        let payload = json!({
            "name": "x".repeat(101),
            "email": "a@b.com",
            "message": "y".repeat(5001),
        });

        let errors = ContactSubmission::parse(&payload).unwrap_err();

        assert_eq!(
            errors.messages(),
            [
                "Name must be between 2 and 100 characters",
                "Message must be between 1 and 5000 characters",
            ]
        );
    }

    #[test]
    fn rejects_whitespace_and_missing_dot_in_email() {
        for email in ["a b@c.de", "a@b", "a@b.", "@b.com", "a@.com"] {
            let payload = json!({
                "name": "Jo",
                "email": email,
                "message": "Hi",
            });

            let errors = ContactSubmission::parse(&payload).unwrap_err();
            assert_eq!(errors.messages(), ["Email must be a valid email address"]);
        }
    }
}
