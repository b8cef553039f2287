//! The application controller that a user interface drives.

use crate::{
    Error,
    client::TransactionApi,
    database_id::TransactionId,
    summary::{Summary, TransactionFilter, category_options, summarize},
    transaction::{NewTransaction, Transaction, TransactionForm, TransactionPatch},
};

/// The screen the user is looking at.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    /// The transaction list and summary.
    #[default]
    Home,
    /// The form for adding a transaction.
    Add,
    /// The form for editing [ClientState::editing].
    Edit,
}

/// Everything the user interface renders from.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct ClientState {
    /// The current page.
    pub page: Page,
    /// The transactions as last seen from the server, newest additions first.
    pub transactions: Vec<Transaction>,
    /// The transaction being edited, if any.
    pub editing: Option<Transaction>,
}

/// Coordinates the API and the local [ClientState].
///
/// Local state only changes after the API call it depends on succeeds.
#[derive(Debug)]
pub struct Tracker<A: TransactionApi> {
    api: A,
    state: ClientState,
}

impl<A: TransactionApi> Tracker<A> {
    /// Create a tracker with an empty transaction list.
    ///
    /// Call [Tracker::refresh] to load the transactions from the server.
    pub fn new(api: A) -> Self {
        Self {
            api,
            state: ClientState::default(),
        }
    }

    /// The current client state.
    pub fn state(&self) -> &ClientState {
        &self.state
    }

    /// The API the tracker talks to.
    pub fn api(&self) -> &A {
        &self.api
    }

    /// Navigate to `page`.
    ///
    /// Leaving the edit page this way drops the transaction being edited.
    pub fn navigate(&mut self, page: Page) {
        if page != Page::Edit {
            self.state.editing = None;
        }
        self.state.page = page;
    }

    /// Replace the local transactions with the server's.
    ///
    /// # Errors
    /// Returns the API error, leaving the current list in place.
    pub async fn refresh(&mut self) -> Result<(), Error> {
        let transactions = self.api.list().await.inspect_err(|error| {
            tracing::error!("Could not load transactions: {error}");
        })?;

        self.state.transactions = transactions;
        Ok(())
    }

    /// Validate and submit the add form.
    ///
    /// On success the new transaction is put at the top of the list and the
    /// user is sent back to the home page.
    ///
    /// # Errors
    /// Returns [Error::Validation] without calling the API if the form is
    /// invalid, otherwise any API error.
    pub async fn add(&mut self, form: &TransactionForm) -> Result<Transaction, Error> {
        let new_transaction: NewTransaction = form.validate().map_err(Error::Validation)?.into();

        let created = self.api.create(&new_transaction).await.inspect_err(|error| {
            tracing::error!("Could not add transaction: {error}");
        })?;

        self.state.transactions.insert(0, created.clone());
        self.navigate(Page::Home);
        Ok(created)
    }

    /// Open the edit page for the transaction with `id`.
    ///
    /// Returns the form pre-filled with the transaction's fields.
    ///
    /// # Errors
    /// Returns [Error::NotFound] if `id` is not in the local list.
    pub fn start_edit(&mut self, id: TransactionId) -> Result<TransactionForm, Error> {
        let transaction = self
            .state
            .transactions
            .iter()
            .find(|transaction| transaction.id == id)
            .ok_or(Error::NotFound)?
            .clone();

        let form = TransactionForm::from_transaction(&transaction);
        self.state.editing = Some(transaction);
        self.state.page = Page::Edit;
        Ok(form)
    }

    /// Validate and submit the edit form for the transaction being edited.
    ///
    /// # Errors
    /// Returns [Error::NotFound] if nothing is being edited,
    /// [Error::Validation] without calling the API if the form is invalid,
    /// otherwise any API error. The edit stays open on error.
    pub async fn save_edit(&mut self, form: &TransactionForm) -> Result<Transaction, Error> {
        let id = self
            .state
            .editing
            .as_ref()
            .map(|transaction| transaction.id)
            .ok_or(Error::NotFound)?;
        let patch: TransactionPatch = form.validate().map_err(Error::Validation)?.into();

        let updated = self.api.replace(id, &patch).await.inspect_err(|error| {
            tracing::error!("Could not update transaction {id}: {error}");
        })?;

        if let Some(existing) = self
            .state
            .transactions
            .iter_mut()
            .find(|transaction| transaction.id == id)
        {
            *existing = updated.clone();
        }
        self.navigate(Page::Home);
        Ok(updated)
    }

    /// Abandon the current edit and go back to the home page.
    pub fn cancel_edit(&mut self) {
        self.navigate(Page::Home);
    }

    /// Delete the transaction with `id` on the server, then locally.
    ///
    /// # Errors
    /// Returns the API error, leaving the list unchanged.
    pub async fn delete(&mut self, id: TransactionId) -> Result<(), Error> {
        self.api.delete(id).await.inspect_err(|error| {
            tracing::error!("Could not delete transaction {id}: {error}");
        })?;

        self.state
            .transactions
            .retain(|transaction| transaction.id != id);
        Ok(())
    }

    /// The totals over every transaction.
    pub fn summary(&self) -> Summary {
        summarize(&self.state.transactions)
    }

    /// The options for the category filter.
    pub fn category_options(&self) -> Vec<String> {
        category_options(&self.state.transactions)
    }

    /// The transactions that pass `filter`.
    pub fn filtered(&self, filter: &TransactionFilter) -> Vec<&Transaction> {
        filter.apply(&self.state.transactions)
    }
}
