use std::future::Future;

use qpmc_models::email_address::{EmailAddress, EmailAddressWithName};

#[cfg_attr(feature = "mock", mockall::automock)]
pub trait EmailService: Send + Sync + 'static {
    /// Sends the email once and returns the Message-ID it was sent under.
    ///
    /// Exactly one attempt is made; retrying is the submitter's business.
    fn send(&self, email: Email) -> impl Future<Output = anyhow::Result<DeliveryId>> + Send;

    fn ping(&self) -> impl Future<Output = anyhow::Result<()>> + Send;
}

/// A fully composed outbound message carrying parallel plaintext and HTML
/// renditions of the same content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Email {
    pub recipients: Vec<EmailAddressWithName>,
    pub subject: String,
    pub text: String,
    pub html: String,
    pub reply_to: Option<EmailAddress>,
}

/// Opaque delivery identifier relayed back to the submitter as confirmation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeliveryId(pub String);

impl std::fmt::Display for DeliveryId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

#[cfg(feature = "mock")]
impl MockEmailService {
    pub fn with_send(mut self, email: Email, result: anyhow::Result<DeliveryId>) -> Self {
        self.expect_send()
            .once()
            .with(mockall::predicate::eq(email))
            .return_once(move |_| Box::pin(std::future::ready(result)));
        self
    }
}
