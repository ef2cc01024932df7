use qpmc_core_career_contracts::{CareerFeatureService, CareerSubmitError};
use qpmc_email_contracts::{DeliveryId, Email, EmailService};
use qpmc_models::{career::CareerSubmission, email_address::{EmailAddress, EmailAddressWithName}};
use qpmc_shared_contracts::time::TimeService;
use qpmc_templates_contracts::{format_submitted_at, CareerEmailTemplate, TemplateService};

#[derive(Debug, Clone)]
pub struct CareerFeatureServiceImpl<Time, Email, Template> {
    time: Time,
    email: Email,
    template: Template,
    config: CareerFeatureConfig,
}

impl<Time, Email, Template> CareerFeatureServiceImpl<Time, Email, Template> {
    pub fn new(time: Time, email: Email, template: Template, config: CareerFeatureConfig) -> Self {
        Self {
            time,
            email,
            template,
            config,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CareerFeatureConfig {
    /// The hiring inbox applications are relayed to.
    pub recipient: EmailAddressWithName,
}

impl<Time, EmailS, Template> CareerFeatureService for CareerFeatureServiceImpl<Time, EmailS, Template>
where
    Time: TimeService,
    EmailS: EmailService,
    Template: TemplateService,
{
    async fn submit(&self, submission: CareerSubmission) -> Result<DeliveryId, CareerSubmitError> {
        let reply_to: EmailAddress = submission.email.parse().map_err(anyhow::Error::from)?;

        let subject = format!(
            "Career Application: {} - {}",
            submission.position.display_name(),
            *submission.name
        );

        let bodies = self.template.render(&CareerEmailTemplate {
            position: submission.position.display_name().to_owned(),
            name: submission.name.into_inner(),
            email: submission.email.into_inner(),
            phone: submission.phone.into_inner(),
            subject: submission.subject.into_inner(),
            linkedin: submission.linkedin.into_inner(),
            message: submission.message.into_inner(),
            submitted_at: format_submitted_at(self.time.now()),
        })?;

        self.email
            .send(Email {
                recipients: vec![self.config.recipient.clone()],
                subject,
                text: bodies.text,
                html: bodies.html,
                reply_to: Some(reply_to),
            })
            .await
            .map_err(CareerSubmitError::Send)
    }
}
