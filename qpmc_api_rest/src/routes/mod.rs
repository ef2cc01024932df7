use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use qpmc_email_contracts::DeliveryId;
use qpmc_models::payload::FieldErrors;

use crate::models::{ApiFailure, ApiSubmissionAccepted};

pub mod careers;
pub mod contact;
pub mod health;

pub fn submission_accepted(delivery: DeliveryId) -> Response {
    Json(ApiSubmissionAccepted {
        ok: true,
        message_id: delivery.0,
    })
    .into_response()
}

/// Every collected field violation is returned so the caller can fix the
/// whole form in one round trip.
pub fn validation_error(errors: FieldErrors) -> Response {
    failure(
        StatusCode::BAD_REQUEST,
        "validation_error",
        Some(errors.into_messages()),
    )
}

/// Unreadable bodies (malformed JSON, over the size cap) are rejected before
/// field validation, with a single detail message.
pub fn invalid_body(rejection: JsonRejection) -> Response {
    tracing::debug!("rejecting unreadable request body: {rejection}");
    failure(
        StatusCode::BAD_REQUEST,
        "validation_error",
        Some(vec!["Request body must be a JSON document".into()]),
    )
}

/// The server cannot resolve where to send the message; the client did
/// nothing wrong.
pub fn config_error(detail: impl Into<String>) -> Response {
    failure(
        StatusCode::INTERNAL_SERVER_ERROR,
        "config_error",
        Some(vec![detail.into()]),
    )
}

/// Transport failures are logged with their cause but surfaced uniformly,
/// without disclosing the cause to the caller.
pub fn send_error(err: impl Into<anyhow::Error>) -> Response {
    let err = err.into();
    tracing::error!("failed to relay submission: {err:#}");
    failure(StatusCode::BAD_GATEWAY, "send_error", None)
}

pub fn internal_server_error(err: impl Into<anyhow::Error>) -> Response {
    let err = err.into();
    tracing::error!("internal server error: {err}");
    failure(StatusCode::INTERNAL_SERVER_ERROR, "internal_error", None)
}

fn failure(code: StatusCode, error: &'static str, details: Option<Vec<String>>) -> Response {
    (
        code,
        Json(ApiFailure {
            ok: false,
            error,
            details,
        }),
    )
        .into_response()
}
