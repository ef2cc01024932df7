use qpmc_core_contact_contracts::{ContactFeatureService, ContactSubmitError};
use qpmc_email_contracts::{DeliveryId, Email, EmailService};
use qpmc_models::{
    contact::ContactSubmission,
    email_address::{EmailAddress, EmailAddressWithName},
};
use qpmc_shared_contracts::time::TimeService;
use qpmc_templates_contracts::{format_submitted_at, ContactEmailTemplate, TemplateService};

#[derive(Debug, Clone)]
pub struct ContactFeatureServiceImpl<Time, Email, Template> {
    time: Time,
    email: Email,
    template: Template,
    config: ContactFeatureConfig,
}

impl<Time, Email, Template> ContactFeatureServiceImpl<Time, Email, Template> {
    pub fn new(time: Time, email: Email, template: Template, config: ContactFeatureConfig) -> Self {
        Self {
            time,
            email,
            template,
            config,
        }
    }
}

/// Brand parameters for one contact endpoint. The general and the partner
/// forms run the same code with different values here.
#[derive(Debug, Clone)]
pub struct ContactFeatureConfig {
    pub recipients: RecipientSource,
    pub heading: String,
    pub banner: String,
    pub footer: String,
    /// Subject used when the submitter does not provide one; the submitter
    /// name is appended.
    pub default_subject_prefix: String,
}

/// Where the destination addresses of a contact endpoint come from.
#[derive(Debug, Clone)]
pub enum RecipientSource {
    /// One fixed, pre-validated destination address.
    Fixed(EmailAddressWithName),
    /// A comma-separated list, re-resolved on every submission so recipient
    /// changes take effect without a restart. May resolve empty.
    CommaSeparated(String),
}

impl RecipientSource {
    fn resolve(&self) -> Result<Vec<EmailAddressWithName>, ContactSubmitError> {
        match self {
            Self::Fixed(recipient) => Ok(vec![recipient.clone()]),
            Self::CommaSeparated(raw) => {
                let recipients = raw
                    .split(',')
                    .map(str::trim)
                    .filter(|entry| !entry.is_empty())
                    .map(|entry| entry.parse().map_err(anyhow::Error::from))
                    .collect::<anyhow::Result<Vec<EmailAddressWithName>>>()?;

                if recipients.is_empty() {
                    return Err(ContactSubmitError::RecipientsUnconfigured);
                }

                Ok(recipients)
            }
        }
    }
}

impl<Time, EmailS, Template> ContactFeatureService
    for ContactFeatureServiceImpl<Time, EmailS, Template>
where
    Time: TimeService,
    EmailS: EmailService,
    Template: TemplateService,
{
    async fn submit(
        &self,
        submission: ContactSubmission,
    ) -> Result<DeliveryId, ContactSubmitError> {
        let recipients = self.config.recipients.resolve()?;

        let reply_to: EmailAddress = submission.email.parse().map_err(anyhow::Error::from)?;

        let subject = submission.subject.clone().unwrap_or_else(|| {
            format!(
                "{} from {}",
                self.config.default_subject_prefix, *submission.name
            )
        });

        let bodies = self.template.render(&ContactEmailTemplate {
            heading: self.config.heading.clone(),
            banner: self.config.banner.clone(),
            footer: self.config.footer.clone(),
            name: submission.name.into_inner(),
            email: submission.email.into_inner(),
            phone: submission.phone,
            subject: submission.subject,
            message: submission.message.into_inner(),
            submitted_at: format_submitted_at(self.time.now()),
        })?;

        self.email
            .send(Email {
                recipients,
                subject,
                text: bodies.text,
                html: bodies.html,
                reply_to: Some(reply_to),
            })
            .await
            .map_err(ContactSubmitError::Send)
    }
}
