use axum::{
    Json,
    extract::{Path, State},
    response::{IntoResponse, Response},
};

use crate::{AppState, Error, transaction::parse_transaction_id};

/// A route handler that responds with a single transaction, or 404 if there
/// is no transaction with the requested ID.
pub async fn get_transaction_endpoint(
    State(state): State<AppState>,
    Path(transaction_id): Path<String>,
) -> Result<Response, Error> {
    let transaction_id = parse_transaction_id(&transaction_id)?;
    let transaction = state.store.get(transaction_id)?;

    Ok(Json(transaction).into_response())
}

#[cfg(test)]
mod tests {
    use axum::{
        extract::{Path, State},
        http::StatusCode,
        response::IntoResponse,
    };

    use crate::{
        Message,
        test_utils::{assert_status, parse_json, sqlite_state},
        transaction::{Transaction, TransactionType, get_transaction_endpoint},
    };

    #[tokio::test]
    async fn gets_transaction() {
        let state = sqlite_state();
        let want = state
            .store
            .create(Transaction::build(TransactionType::Expense, 12.5, "Shopping", "Socks"))
            .unwrap();

        let response = get_transaction_endpoint(State(state), Path(want.id.to_string()))
            .await
            .into_response();

        assert_status(&response, StatusCode::OK);
        let got: Transaction = parse_json(response).await;
        assert_eq!(got, want);
    }

    #[tokio::test]
    async fn missing_transaction_is_not_found() {
        let response = get_transaction_endpoint(State(sqlite_state()), Path("42".to_owned()))
            .await
            .into_response();

        assert_status(&response, StatusCode::NOT_FOUND);
        let got: Message = parse_json(response).await;
        assert_eq!(got, Message::new("Transaction not found"));
    }

    #[tokio::test]
    async fn malformed_id_is_not_found() {
        let response = get_transaction_endpoint(State(sqlite_state()), Path("abc".to_owned()))
            .await
            .into_response();

        assert_status(&response, StatusCode::NOT_FOUND);
    }
}
