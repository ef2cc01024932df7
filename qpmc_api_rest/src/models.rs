use serde::Serialize;

#[derive(Serialize)]
pub struct ApiHealth {
    pub ok: bool,
}

#[derive(Serialize)]
pub struct ApiSubmissionAccepted {
    pub ok: bool,
    #[serde(rename = "messageId")]
    pub message_id: String,
}

#[derive(Serialize)]
pub struct ApiFailure {
    pub ok: bool,
    pub error: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Vec<String>>,
}
