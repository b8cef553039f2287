use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Response,
};

use crate::{AppState, message::message_response, transaction::parse_transaction_id};

/// A route handler for deleting a transaction.
///
/// Deleting is idempotent: the response is 200 whether or not the
/// transaction existed. Only a storage failure produces an error response.
pub async fn delete_transaction_endpoint(
    State(state): State<AppState>,
    Path(transaction_id): Path<String>,
) -> Response {
    let transaction_id = match parse_transaction_id(&transaction_id) {
        Ok(transaction_id) => transaction_id,
        Err(_) => {
            tracing::debug!("Ignoring delete for malformed transaction ID {transaction_id:?}");
            return deleted_response();
        }
    };

    match state.store.delete(transaction_id) {
        Ok(true) => deleted_response(),
        Ok(false) => {
            tracing::debug!("Transaction {transaction_id} was already absent");
            deleted_response()
        }
        Err(error) => {
            tracing::error!("Could not delete transaction {transaction_id}: {error}");
            message_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Could not delete transaction",
            )
        }
    }
}

fn deleted_response() -> Response {
    message_response(StatusCode::OK, "Transaction deleted successfully")
}

#[cfg(test)]
mod tests {
    use std::fs;

    use axum::{
        extract::{Path, State},
        http::StatusCode,
    };

    use crate::{
        Error, Message,
        test_utils::{assert_status, json_file_state, parse_json, sqlite_state},
        transaction::{Transaction, TransactionType, delete_transaction_endpoint},
    };

    #[tokio::test]
    async fn deletes_transaction() {
        let state = sqlite_state();
        let transaction = state
            .store
            .create(Transaction::build(TransactionType::Expense, 1.23, "Other", "Test"))
            .unwrap();

        let response =
            delete_transaction_endpoint(State(state.clone()), Path(transaction.id.to_string()))
                .await;

        assert_status(&response, StatusCode::OK);
        let got: Message = parse_json(response).await;
        assert_eq!(got, Message::new("Transaction deleted successfully"));
        assert_eq!(state.store.get(transaction.id), Err(Error::NotFound));
    }

    #[tokio::test]
    async fn deleting_missing_transaction_succeeds() {
        let (_dir, state) = json_file_state();

        let response = delete_transaction_endpoint(State(state), Path("42".to_owned())).await;

        assert_status(&response, StatusCode::OK);
    }

    #[tokio::test]
    async fn deleting_malformed_id_succeeds() {
        let response =
            delete_transaction_endpoint(State(sqlite_state()), Path("abc".to_owned())).await;

        assert_status(&response, StatusCode::OK);
    }

    #[tokio::test]
    async fn storage_failure_is_internal_error() {
        let (dir, state) = json_file_state();
        fs::write(dir.path().join("transactions.json"), "[").unwrap();

        let response = delete_transaction_endpoint(State(state), Path("42".to_owned())).await;

        assert_status(&response, StatusCode::INTERNAL_SERVER_ERROR);
    }
}
