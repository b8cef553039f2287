//! The JSON body used for confirmations and error replies.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

/// A short, human readable message, serialized as `{"message": "..."}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    /// The text shown to the user.
    pub message: String,
}

impl Message {
    /// Create a message from `text`.
    pub fn new(text: &str) -> Self {
        Self {
            message: text.to_owned(),
        }
    }
}

/// Respond with `status` and a JSON [Message] body.
pub(crate) fn message_response(status: StatusCode, text: &str) -> Response {
    (status, Json(Message::new(text))).into_response()
}
