use anyhow::Context;
use qpmc_api_rest::{RestServer, RestServerConfig};
use qpmc_config::Config;
use qpmc_core_career_impl::{CareerFeatureConfig, CareerFeatureServiceImpl};
use qpmc_core_contact_impl::{ContactFeatureConfig, ContactFeatureServiceImpl, RecipientSource};
use qpmc_email_contracts::EmailService;
use qpmc_shared_impl::time::TimeServiceImpl;
use qpmc_templates_impl::TemplateServiceImpl;
use tracing::{error, info};

use crate::email;

pub async fn serve(config: Config) -> anyhow::Result<()> {
    // Echo the non-secret mail configuration so a misconfigured deployment
    // is visible in the logs immediately.
    info!(
        from = %config.email.from,
        contact_recipient = %config.contact.recipient,
        careers_recipient = %config.careers.recipient,
        motahida_from = %config.motahida.email.from,
        motahida_recipients = %config.motahida.contact.recipients,
        "Loaded mail configuration"
    );

    let quantum_email = email::connect(&config.email).await?;
    let motahida_email = email::connect(&config.motahida.email).await?;

    // Probe both relays at startup; a failure is loud but not fatal, the
    // affected endpoints will report it per request.
    for (brand, service) in [("quantum", &quantum_email), ("motahida", &motahida_email)] {
        match service.ping().await {
            Ok(()) => info!("{brand} smtp relay is ready to take messages"),
            Err(err) => error!("{brand} smtp relay is not reachable: {err:#}"),
        }
    }

    let time = TimeServiceImpl;
    let template = TemplateServiceImpl::new();

    let contact = ContactFeatureServiceImpl::new(
        time,
        quantum_email.clone(),
        template.clone(),
        ContactFeatureConfig {
            recipients: RecipientSource::Fixed(config.contact.recipient.clone()),
            heading: "Contact Form Submission".into(),
            banner: "CONTACT FORM SUBMISSION".into(),
            footer: "Quantum PMC LLC - Contact Form".into(),
            default_subject_prefix: "Contact Form Submission".into(),
        },
    );

    let motahida_contact = ContactFeatureServiceImpl::new(
        time,
        motahida_email,
        template.clone(),
        ContactFeatureConfig {
            recipients: RecipientSource::CommaSeparated(
                config.motahida.contact.recipients.clone(),
            ),
            heading: "Motahida Group Contact Form".into(),
            banner: "MOTAHIDA GROUP CONTACT FORM".into(),
            footer: "Motahida Group - Contact Form".into(),
            default_subject_prefix: "Motahida Group Contact Form Submission".into(),
        },
    );

    let career = CareerFeatureServiceImpl::new(
        time,
        quantum_email,
        template,
        CareerFeatureConfig {
            recipient: config.careers.recipient.clone(),
        },
    );

    let rest_config = RestServerConfig::new(&config.cors.allowed_origins)
        .context("Failed to parse cors.allowed_origins")?;

    let server = RestServer::new(contact, motahida_contact, career, rest_config);

    info!(
        "Starting http server on {}:{}",
        config.http.host, config.http.port
    );
    server.serve(config.http.host, config.http.port).await
}
