use axum::{http::StatusCode, response::Response};

use crate::message::message_response;

/// Fallback handler for requests that do not match any route.
pub async fn get_404_not_found() -> Response {
    get_404_not_found_response("Route not found")
}

pub fn get_404_not_found_response(message: &str) -> Response {
    message_response(StatusCode::NOT_FOUND, message)
}
