use std::future::Future;

use qpmc_email_contracts::DeliveryId;
use qpmc_models::contact::ContactSubmission;
use thiserror::Error;

#[cfg_attr(feature = "mock", mockall::automock)]
pub trait ContactFeatureService: Send + Sync + 'static {
    /// Relays a validated contact submission to the configured recipients.
    fn submit(
        &self,
        submission: ContactSubmission,
    ) -> impl Future<Output = Result<DeliveryId, ContactSubmitError>> + Send;
}

#[derive(Debug, Error)]
pub enum ContactSubmitError {
    /// The destination list resolved empty; nothing was sent.
    #[error("No contact recipients are configured.")]
    RecipientsUnconfigured,
    #[error("Failed to send message.")]
    Send(#[source] anyhow::Error),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

#[cfg(feature = "mock")]
impl MockContactFeatureService {
    pub fn with_submit(
        mut self,
        submission: ContactSubmission,
        result: Result<DeliveryId, ContactSubmitError>,
    ) -> Self {
        self.expect_submit()
            .once()
            .with(mockall::predicate::eq(submission))
            .return_once(move |_| Box::pin(std::future::ready(result)));
        self
    }
}
