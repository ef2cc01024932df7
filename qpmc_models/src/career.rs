use std::sync::LazyLock;

use nutype::nutype;
use regex::Regex;
use serde_json::Value;

use crate::{
    payload::{string_field, FieldErrors, RawField},
    SubmitterEmail, SubmitterName,
};

/// Applicant phone numbers: digits and basic separators only, at least seven
/// characters.
pub static CAREER_PHONE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9+\-()\s]{7,}$").unwrap());

/// linkedin.com or lnkd.in profile URLs; scheme and `www.` are optional, but
/// a path is required.
pub static LINKEDIN_URL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(https?://)?(www\.)?(linkedin\.com|lnkd\.in)/.+$").unwrap());

/// A validated career application submission. Every field is required.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CareerSubmission {
    pub position: PositionCode,
    pub name: SubmitterName,
    pub email: SubmitterEmail,
    pub phone: CareerPhone,
    pub subject: CareerSubject,
    pub message: CareerMessage,
    pub linkedin: LinkedinUrl,
}

/// The opening an applicant applies for. Unknown codes are accepted and used
/// verbatim as the display name, so the careers page can add openings without
/// a backend change.
#[nutype(derive(Debug, Clone, PartialEq, Eq, From, Deref, Serialize, Deserialize))]
pub struct PositionCode(String);

#[nutype(derive(Debug, Clone, PartialEq, Eq, From, Deref, Serialize, Deserialize))]
pub struct CareerSubject(String);

#[nutype(
    validate(regex = CAREER_PHONE_REGEX),
    derive(Debug, Clone, PartialEq, Eq, TryFrom, Deref, Serialize, Deserialize)
)]
pub struct CareerPhone(String);

#[nutype(
    validate(len_char_min = 10, len_char_max = 5000),
    derive(Debug, Clone, PartialEq, Eq, TryFrom, Deref, Serialize, Deserialize)
)]
pub struct CareerMessage(String);

#[nutype(
    validate(regex = LINKEDIN_URL_REGEX),
    derive(Debug, Clone, PartialEq, Eq, TryFrom, Deref, Serialize, Deserialize)
)]
pub struct LinkedinUrl(String);

impl PositionCode {
    /// Display label for the known openings.
    pub fn display_name(&self) -> &str {
        match self.as_str() {
            "senior-forensic-planner" => "Senior Forensic Planner",
            "project-controls-manager" => "Project Controls Manager",
            "senior-planning-engineer" => "Senior Planning Engineer",
            other => other,
        }
    }
}

impl CareerSubmission {
    /// Validates an untrusted payload into a typed submission, collecting
    /// every violation instead of stopping at the first.
    pub fn parse(payload: &Value) -> Result<Self, FieldErrors> {
        let mut errors = FieldErrors::default();

        let position = match string_field(payload, "position") {
            RawField::Text(raw) => Some(PositionCode::from(raw.to_owned())),
            _ => {
                errors.push("Position is required");
                None
            }
        };

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

        let phone = match string_field(payload, "phone") {
            RawField::Text(raw) => CareerPhone::try_from(raw)
                .map_err(|_| errors.push("Phone must be a valid phone number"))
                .ok(),
            _ => {
                errors.push("Phone is required");
                None
            }
        };

        let subject = match string_field(payload, "subject") {
            RawField::Text(raw) => Some(CareerSubject::from(raw.to_owned())),
            _ => {
                errors.push("Subject is required");
                None
            }
        };

        let message = match string_field(payload, "message") {
            RawField::Text(raw) => CareerMessage::try_from(raw)
                .map_err(|_| errors.push("Message must be between 10 and 5000 characters"))
                .ok(),
            _ => {
                errors.push("Message is required");
                None
            }
        };

        let linkedin = match string_field(payload, "linkedin") {
            RawField::Text(raw) => LinkedinUrl::try_from(raw)
                .map_err(|_| errors.push("LinkedIn must be a valid LinkedIn URL"))
                .ok(),
            _ => {
                errors.push("LinkedIn profile is required");
                None
            }
        };

        match (position, name, email, phone, subject, message, linkedin) {
            (
                Some(position),
                Some(name),
                Some(email),
                Some(phone),
                Some(subject),
                Some(message),
                Some(linkedin),
            ) if errors.is_empty() => Ok(Self {
                position,
                name,
                email,
                phone,
                subject,
                message,
                linkedin,
            }),
            _ => Err(errors),
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn valid_payload() -> Value {
        json!({
            "position": "senior-forensic-planner",
            "name": "Jordan Example",
            "email": "jordan@example.com",
            "phone": "+1 (555) 123-4567",
            "subject": "Application",
            "message": "I have twelve years of scheduling experience.",
            "linkedin": "https://www.linkedin.com/in/jordan-example",
        })
    }

    fn with_field(mut payload: Value, key: &str, value: Value) -> Value {
        payload[key] = value;
        payload
    }

    #[test]
    fn valid_submission() {
        let submission = CareerSubmission::parse(&valid_payload()).unwrap();

        assert_eq!(submission.position.display_name(), "Senior Forensic Planner");
        assert_eq!(*submission.phone, "+1 (555) 123-4567");
        assert_eq!(*submission.linkedin, "https://www.linkedin.com/in/jordan-example");
    }

    #[test]
    fn unknown_position_code_passes_through() {
        let payload = with_field(valid_payload(), "position", json!("lead-estimator"));

        let submission = CareerSubmission::parse(&payload).unwrap();

        assert_eq!(submission.position.display_name(), "lead-estimator");
    }

    #[test]
    fn known_position_codes_resolve_to_labels() {
        for (code, label) in [
            ("senior-forensic-planner", "Senior Forensic Planner"),
            ("project-controls-manager", "Project Controls Manager"),
            ("senior-planning-engineer", "Senior Planning Engineer"),
        ] {
            assert_eq!(PositionCode::from(code.to_owned()).display_name(), label);
        }
    }

    #[test]
    fn rejects_short_phone() {
        let payload = with_field(valid_payload(), "phone", json!("123456"));

        let errors = CareerSubmission::parse(&payload).unwrap_err();

        assert_eq!(errors.messages(), ["Phone must be a valid phone number"]);
    }

    #[test]
    fn rejects_phone_with_letters() {
        let payload = with_field(valid_payload(), "phone", json!("555-CALL-NOW"));

        let errors = CareerSubmission::parse(&payload).unwrap_err();

        assert_eq!(errors.messages(), ["Phone must be a valid phone number"]);
    }

    #[test]
    fn accepts_bare_lnkd_in_profile() {
        let payload = with_field(valid_payload(), "linkedin", json!("lnkd.in/jordan"));

        CareerSubmission::parse(&payload).unwrap();
    }

    #[test]
    fn rejects_non_linkedin_urls() {
        for url in ["https://twitter.com/jordan", "linkedin.com", "https://linkedin.org/in/x"] {
            let payload = with_field(valid_payload(), "linkedin", json!(url));

            let errors = CareerSubmission::parse(&payload).unwrap_err();
            assert_eq!(errors.messages(), ["LinkedIn must be a valid LinkedIn URL"]);
        }
    }

    #[test]
    fn missing_linkedin_reports_profile_required() {
        let mut payload = valid_payload();
        payload.as_object_mut().unwrap().remove("linkedin");

        let errors = CareerSubmission::parse(&payload).unwrap_err();

        assert_eq!(errors.messages(), ["LinkedIn profile is required"]);
    }

    #[test]
    fn empty_subject_is_accepted() {
        let payload = with_field(valid_payload(), "subject", json!(""));

        let submission = CareerSubmission::parse(&payload).unwrap();

        assert_eq!(*submission.subject, "");
    }

    #[test]
    fn short_message_is_rejected() {
        let payload = with_field(valid_payload(), "message", json!("too short"));

        let errors = CareerSubmission::parse(&payload).unwrap_err();

        assert_eq!(errors.messages(), ["Message must be between 10 and 5000 characters"]);
    }

    #[test]
    fn collects_violations_in_field_order() {
        let errors = CareerSubmission::parse(&json!({})).unwrap_err();

        assert_eq!(
            errors.messages(),
            [
                "Position is required",
                "Name is required",
                "Email is required",
                "Phone is required",
                "Subject is required",
                "Message is required",
                "LinkedIn profile is required",
            ]
        );
    }
}
