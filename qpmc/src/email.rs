use anyhow::Context;
use qpmc_config::EmailConfig;
use qpmc_email_impl::EmailServiceImpl;

/// Initialize the SMTP transport of one brand
pub async fn connect(config: &EmailConfig) -> anyhow::Result<EmailServiceImpl> {
    EmailServiceImpl::new(&config.smtp_url, config.from.clone())
        .await
        .context("Failed to initialize SMTP transport")
}
