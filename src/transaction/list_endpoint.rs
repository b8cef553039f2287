use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::{AppState, message::message_response};

/// A route handler that responds with every stored transaction as a JSON array.
pub async fn list_transactions_endpoint(State(state): State<AppState>) -> Response {
    match state.store.list() {
        Ok(transactions) => Json(transactions).into_response(),
        Err(error) => {
            tracing::error!("Could not read transactions: {error}");
            message_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Error reading transactions data",
            )
        }
    }
}
