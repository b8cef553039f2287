use axum::{
    Json,
    extract::{Path, State},
    response::{IntoResponse, Response},
};

use axum_extra::extract::WithRejection;

use crate::{
    AppState, Error,
    transaction::{TransactionPatch, parse_transaction_id},
};

/// A route handler for editing a transaction.
///
/// The fields in the body overwrite the stored ones, the ID is kept.
/// Responds with the updated transaction, or 404 if there is no transaction
/// with the requested ID.
pub async fn edit_transaction_endpoint(
    State(state): State<AppState>,
    Path(transaction_id): Path<String>,
    WithRejection(Json(patch), _): WithRejection<Json<TransactionPatch>, Error>,
) -> Result<Response, Error> {
    let transaction_id = parse_transaction_id(&transaction_id)?;

    let transaction = state.store.replace(transaction_id, patch).inspect_err(|error| {
        tracing::debug!("Could not update transaction {transaction_id}: {error}");
    })?;

    Ok(Json(transaction).into_response())
}

#[cfg(test)]
mod test {
    use axum::{
        extract::{Path, State},
        http::StatusCode,
        response::IntoResponse,
    };
    use time::macros::date;

    use crate::{
        test_utils::{assert_status, json_body, parse_json, sqlite_state},
        transaction::{
            Transaction, TransactionPatch, TransactionType, edit_transaction_endpoint,
        },
    };

    #[tokio::test]
    async fn can_update_transaction() {
        let state = sqlite_state();
        let created = state
            .store
            .create(
                Transaction::build(TransactionType::Expense, 1.23, "Travel", "test")
                    .date(date!(2025 - 10 - 27)),
            )
            .expect("could not create test transaction");
        let want = Transaction {
            id: created.id,
            transaction_type: TransactionType::Income,
            amount: 3.21,
            category: "Travel".to_owned(),
            description: "foo".to_owned(),
            date: date!(2025 - 10 - 27),
        };
        let patch = TransactionPatch {
            transaction_type: Some(want.transaction_type),
            amount: Some(want.amount),
            description: Some(want.description.clone()),
            ..Default::default()
        };

        let response = edit_transaction_endpoint(
            State(state.clone()),
            Path(created.id.to_string()),
            json_body(patch),
        )
        .await
        .into_response();

        assert_status(&response, StatusCode::OK);
        let got: Transaction = parse_json(response).await;
        assert_eq!(got, want);
        assert_eq!(state.store.get(want.id).unwrap(), want);
    }

    #[tokio::test]
    async fn missing_transaction_is_not_found() {
        let response = edit_transaction_endpoint(
            State(sqlite_state()),
            Path("42".to_owned()),
            json_body(TransactionPatch::default()),
        )
        .await
        .into_response();

        assert_status(&response, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn rejects_invalid_amount() {
        let state = sqlite_state();
        let created = state
            .store
            .create(Transaction::build(TransactionType::Expense, 1.0, "Other", "x"))
            .unwrap();

        let response = edit_transaction_endpoint(
            State(state.clone()),
            Path(created.id.to_string()),
            json_body(TransactionPatch {
                amount: Some(0.0),
                ..Default::default()
            }),
        )
        .await
        .into_response();

        assert_status(&response, StatusCode::BAD_REQUEST);
        assert_eq!(state.store.get(created.id).unwrap(), created);
    }
}
