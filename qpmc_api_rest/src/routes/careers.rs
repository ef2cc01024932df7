use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    response::Response,
    routing, Json, Router,
};
use qpmc_core_career_contracts::CareerFeatureService;
use qpmc_models::career::CareerSubmission;
use serde_json::Value;

use super::{invalid_body, send_error, submission_accepted, validation_error};

pub fn router(service: Arc<impl CareerFeatureService>) -> Router<()> {
    Router::new()
        .route("/api/careers", routing::post(submit))
        .with_state(service)
}

async fn submit(
    service: State<Arc<impl CareerFeatureService>>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Response {
    let Json(payload) = match payload {
        Ok(payload) => payload,
        Err(rejection) => return invalid_body(rejection),
    };

    let submission = match CareerSubmission::parse(&payload) {
        Ok(submission) => submission,
        Err(errors) => return validation_error(errors),
    };

    match service.submit(submission).await {
        Ok(delivery) => submission_accepted(delivery),
        Err(err) => send_error(err),
    }
}
