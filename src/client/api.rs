//! The client's view of the transactions REST API.

use std::future::Future;

use reqwest::{Response, StatusCode};

use crate::{
    Error, Message,
    database_id::TransactionId,
    endpoints::{self, format_endpoint},
    transaction::{NewTransaction, Transaction, TransactionPatch},
};

/// The remote operations the [Tracker](super::Tracker) needs.
///
/// Implemented over HTTP by [HttpTransactionApi], and by in-memory fakes in tests.
pub trait TransactionApi {
    /// Fetch every transaction.
    fn list(&self) -> impl Future<Output = Result<Vec<Transaction>, Error>> + Send;

    /// Create a transaction, returning the stored record.
    fn create(
        &self,
        transaction: &NewTransaction,
    ) -> impl Future<Output = Result<Transaction, Error>> + Send;

    /// Overwrite the fields of the transaction with `id`, returning the stored record.
    fn replace(
        &self,
        id: TransactionId,
        patch: &TransactionPatch,
    ) -> impl Future<Output = Result<Transaction, Error>> + Send;

    /// Delete the transaction with `id`.
    fn delete(&self, id: TransactionId) -> impl Future<Output = Result<(), Error>> + Send;
}

/// Talks to the transactions API over HTTP.
#[derive(Debug, Clone)]
pub struct HttpTransactionApi {
    client: reqwest::Client,
    base_url: String,
}

impl HttpTransactionApi {
    /// Create a client for the server at `base_url`, e.g. "http://localhost:5000".
    pub fn new(base_url: &str) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    /// Create a client that sends its requests through `client`.
    pub fn with_client(client: reqwest::Client, base_url: &str) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_owned(),
        }
    }

    /// The server address requests are sent to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    fn transaction_url(&self, id: TransactionId) -> String {
        self.url(&format_endpoint(endpoints::TRANSACTION, id))
    }
}

/// Turn a non-success response into the matching [Error].
async fn check_status(response: Response) -> Result<Response, Error> {
    let status = response.status();

    if status.is_success() {
        return Ok(response);
    }

    let message = match response.json::<Message>().await {
        Ok(body) => body.message,
        Err(_) => status.to_string(),
    };

    tracing::debug!("The server responded with {status}: {message}");

    Err(match status {
        StatusCode::NOT_FOUND => Error::NotFound,
        StatusCode::BAD_REQUEST => Error::InvalidTransaction(message),
        _ => Error::StorageUnavailable(message),
    })
}

impl TransactionApi for HttpTransactionApi {
    async fn list(&self) -> Result<Vec<Transaction>, Error> {
        let response = self
            .client
            .get(self.url(endpoints::TRANSACTIONS_API))
            .send()
            .await?;

        Ok(check_status(response).await?.json().await?)
    }

    async fn create(&self, transaction: &NewTransaction) -> Result<Transaction, Error> {
        let response = self
            .client
            .post(self.url(endpoints::TRANSACTIONS_API))
            .json(transaction)
            .send()
            .await?;

        Ok(check_status(response).await?.json().await?)
    }

    async fn replace(
        &self,
        id: TransactionId,
        patch: &TransactionPatch,
    ) -> Result<Transaction, Error> {
        let response = self
            .client
            .put(self.transaction_url(id))
            .json(patch)
            .send()
            .await?;

        Ok(check_status(response).await?.json().await?)
    }

    async fn delete(&self, id: TransactionId) -> Result<(), Error> {
        let response = self.client.delete(self.transaction_url(id)).send().await?;

        check_status(response).await?;
        Ok(())
    }
}
