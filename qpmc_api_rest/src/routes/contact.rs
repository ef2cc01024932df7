use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    response::Response,
    routing, Json, Router,
};
use qpmc_core_contact_contracts::{ContactFeatureService, ContactSubmitError};
use qpmc_models::contact::ContactSubmission;
use serde_json::Value;

use super::{config_error, invalid_body, send_error, submission_accepted, validation_error};

/// Both contact endpoints run the same handler; the brand differences live
/// entirely in the injected service.
pub fn router(
    contact: Arc<impl ContactFeatureService>,
    motahida_contact: Arc<impl ContactFeatureService>,
) -> Router<()> {
    Router::new()
        .route("/api/contact", routing::post(submit))
        .with_state(contact)
        .merge(
            Router::new()
                .route("/api/motahida-contact", routing::post(submit))
                .with_state(motahida_contact),
        )
}

async fn submit(
    service: State<Arc<impl ContactFeatureService>>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Response {
    let Json(payload) = match payload {
        Ok(payload) => payload,
        Err(rejection) => return invalid_body(rejection),
    };

    let submission = match ContactSubmission::parse(&payload) {
        Ok(submission) => submission,
        Err(errors) => return validation_error(errors),
    };

    match service.submit(submission).await {
        Ok(delivery) => submission_accepted(delivery),
        Err(ContactSubmitError::RecipientsUnconfigured) => {
            config_error("Contact recipients are not configured")
        }
        Err(err) => send_error(err),
    }
}
