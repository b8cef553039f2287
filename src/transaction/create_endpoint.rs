use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use axum_extra::extract::WithRejection;

use crate::{AppState, Error, transaction::NewTransaction};

/// A route handler for creating a new transaction.
///
/// Responds with 201 and the stored transaction, including its new ID and
/// date.
pub async fn create_transaction_endpoint(
    State(state): State<AppState>,
    WithRejection(Json(new_transaction), _): WithRejection<Json<NewTransaction>, Error>,
) -> Result<Response, Error> {
    let transaction = state.store.create(new_transaction)?;
    tracing::debug!("Created transaction {}", transaction.id);

    Ok((StatusCode::CREATED, Json(transaction)).into_response())
}

#[cfg(test)]
mod tests {
    use axum::{extract::State, http::StatusCode, response::IntoResponse};
    use time::macros::date;

    use crate::{
        test_utils::{assert_status, json_body, json_file_state, parse_json},
        transaction::{Transaction, TransactionType, create_transaction_endpoint, today},
    };

    #[tokio::test]
    async fn creates_transaction() {
        let (_dir, state) = json_file_state();
        let new_transaction =
            Transaction::build(TransactionType::Expense, 12.5, "Food & Dining", "Lunch")
                .date(date!(2025 - 08 - 09));

        let response = create_transaction_endpoint(State(state.clone()), json_body(new_transaction))
            .await
            .into_response();

        assert_status(&response, StatusCode::CREATED);
        let got: Transaction = parse_json(response).await;
        assert_eq!(got.amount, 12.5);
        assert_eq!(got.date, date!(2025 - 08 - 09));
        assert_eq!(state.store.get(got.id).unwrap(), got);
    }

    #[tokio::test]
    async fn defaults_date_to_today() {
        let (_dir, state) = json_file_state();
        let before = today();

        let response = create_transaction_endpoint(
            State(state),
            json_body(Transaction::build(TransactionType::Income, 1.0, "Gift", "Card")),
        )
        .await
        .into_response();

        let got: Transaction = parse_json(response).await;
        assert!(got.date >= before && got.date <= today());
    }

    #[tokio::test]
    async fn rejects_invalid_transaction() {
        let (_dir, state) = json_file_state();

        let response = create_transaction_endpoint(
            State(state.clone()),
            json_body(Transaction::build(TransactionType::Income, -5.0, "Gift", "Card")),
        )
        .await
        .into_response();

        assert_status(&response, StatusCode::BAD_REQUEST);
        assert!(state.store.list().unwrap().is_empty());
    }
}
