use chrono::{DateTime, Utc};
use serde::Serialize;

#[cfg_attr(feature = "mock", mockall::automock)]
pub trait TemplateService: Send + Sync + 'static {
    /// Render both renditions of the given template.
    fn render<T: Template + 'static>(&self, template: &T) -> anyhow::Result<EmailBodies>;
}

/// The parallel plaintext and HTML renditions of one notification email.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailBodies {
    pub text: String,
    pub html: String,
}

#[cfg(feature = "mock")]
impl MockTemplateService {
    pub fn with_render<T: Template + Send + PartialEq + std::fmt::Debug + 'static>(
        mut self,
        template: T,
        result: EmailBodies,
    ) -> Self {
        self.expect_render()
            .once()
            .with(mockall::predicate::eq(template))
            .return_once(|_| Ok(result));
        self
    }
}

pub trait Template: Serialize {
    const NAME: &'static str;
    const HTML: &'static str;
    const TEXT: &'static str;
}

macro_rules! templates {
    ($( $ident:ident ( $html:literal, $text:literal ), )* ) => {
        $(
            impl Template for $ident {
                const NAME: &'static str = stringify!($ident);
                const HTML: &'static str = include_str!(concat!("../templates/", $html));
                const TEXT: &'static str = include_str!(concat!("../templates/", $text));
            }
        )*

        pub const TEMPLATES: &[(&str, &str, &str)] = &[
            $( ($ident::NAME, $ident::HTML, $ident::TEXT) ),*
        ];
    };
}

templates! {
    ContactEmailTemplate("contact_email.html", "contact_email.txt"),
    CareerEmailTemplate("career_email.html", "career_email.txt"),
}

/// Data for a contact notification. The branding differences between the two
/// web properties travel in `heading`, `banner`, and `footer`; the field
/// rendering is shared.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactEmailTemplate {
    pub heading: String,
    pub banner: String,
    pub footer: String,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub subject: Option<String>,
    pub message: String,
    pub submitted_at: String,
}

/// Data for a career application notification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CareerEmailTemplate {
    pub position: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub subject: String,
    pub linkedin: String,
    pub message: String,
    pub submitted_at: String,
}

/// Renders a submission timestamp the way the notification bodies show it.
///
/// Pinned to UTC so the rendered bodies do not depend on the server timezone.
pub fn format_submitted_at(timestamp: DateTime<Utc>) -> String {
    timestamp.format("%-m/%-d/%Y, %-I:%M:%S %p UTC").to_string()
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    #[test]
    fn submitted_at_format() {
        let timestamp = Utc.with_ymd_and_hms(2025, 3, 7, 14, 5, 9).unwrap();

        assert_eq!(format_submitted_at(timestamp), "3/7/2025, 2:05:09 PM UTC");
    }
}
