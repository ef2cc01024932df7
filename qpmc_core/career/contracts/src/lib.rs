use std::future::Future;

use qpmc_email_contracts::DeliveryId;
use qpmc_models::career::CareerSubmission;
use thiserror::Error;

#[cfg_attr(feature = "mock", mockall::automock)]
pub trait CareerFeatureService: Send + Sync + 'static {
    /// Relays a validated career application to the hiring inbox.
    fn submit(
        &self,
        submission: CareerSubmission,
    ) -> impl Future<Output = Result<DeliveryId, CareerSubmitError>> + Send;
}

#[derive(Debug, Error)]
pub enum CareerSubmitError {
    #[error("Failed to send message.")]
    Send(#[source] anyhow::Error),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

#[cfg(feature = "mock")]
impl MockCareerFeatureService {
    pub fn with_submit(
        mut self,
        submission: CareerSubmission,
        result: Result<DeliveryId, CareerSubmitError>,
    ) -> Self {
        self.expect_submit()
            .once()
            .with(mockall::predicate::eq(submission))
            .return_once(move |_| Box::pin(std::future::ready(result)));
        self
    }
}
