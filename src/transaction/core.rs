//! Defines the core data models for transactions.

use std::{fmt::Display, str::FromStr};

use serde::{Deserialize, Serialize};
use time::{Date, OffsetDateTime};

use crate::{Error, database_id::TransactionId};

// ============================================================================
// MODELS
// ============================================================================

/// Whether money was earned or spent.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    /// Money that was earned.
    Income,
    /// Money that was spent.
    #[default]
    Expense,
}

impl TransactionType {
    /// The lowercase name used in JSON and in the database.
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionType::Income => "income",
            TransactionType::Expense => "expense",
        }
    }
}

impl Display for TransactionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TransactionType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "income" => Ok(TransactionType::Income),
            "expense" => Ok(TransactionType::Expense),
            other => Err(Error::InvalidTransaction(format!(
                "\"{other}\" is not a transaction type, expected \"income\" or \"expense\""
            ))),
        }
    }
}

/// An expense or income, i.e. an event where money was either spent or earned.
///
/// To create a new `Transaction`, use [Transaction::build] and pass the
/// resulting [NewTransaction] to a [TransactionStore](crate::stores::TransactionStore).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// The ID of the transaction, assigned by the store.
    pub id: TransactionId,
    /// Whether the money was earned or spent.
    #[serde(rename = "type")]
    pub transaction_type: TransactionType,
    /// The amount of money, always positive. The sign comes from `transaction_type`.
    pub amount: f64,
    /// A preset category for the transaction type or a custom one.
    pub category: String,
    /// A text description of what the transaction was for.
    pub description: String,
    /// When the transaction was recorded.
    pub date: Date,
}

impl Transaction {
    /// Start building a new transaction.
    ///
    /// Shortcut for [NewTransaction] for discoverability.
    pub fn build(
        transaction_type: TransactionType,
        amount: f64,
        category: &str,
        description: &str,
    ) -> NewTransaction {
        NewTransaction {
            transaction_type,
            amount,
            category: category.to_owned(),
            description: description.to_owned(),
            date: None,
        }
    }

    /// Check the model invariants.
    ///
    /// # Errors
    /// Returns an [Error::InvalidTransaction] describing the first broken invariant.
    pub fn validate(&self) -> Result<(), Error> {
        check_fields(self.amount, &self.category, &self.description)
    }
}

/// The fields needed to create a [Transaction].
///
/// The store assigns the ID, and `date` defaults to today when omitted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewTransaction {
    /// Whether the money was earned or spent.
    #[serde(rename = "type")]
    pub transaction_type: TransactionType,
    /// The amount of money, must be positive.
    pub amount: f64,
    /// The category, must not be blank.
    pub category: String,
    /// The description, must not be blank.
    pub description: String,
    /// When the transaction was recorded. Defaults to today (UTC).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<Date>,
}

impl NewTransaction {
    /// Set the date of the transaction.
    pub fn date(mut self, date: Date) -> Self {
        self.date = Some(date);
        self
    }

    /// Check the model invariants.
    ///
    /// # Errors
    /// Returns an [Error::InvalidTransaction] describing the first broken invariant.
    pub fn validate(&self) -> Result<(), Error> {
        check_fields(self.amount, &self.category, &self.description)
    }

    /// Turn the payload into a stored transaction with `id`, defaulting the
    /// date to `today`.
    pub(crate) fn finalize(self, id: TransactionId, today: Date) -> Transaction {
        Transaction {
            id,
            transaction_type: self.transaction_type,
            amount: self.amount,
            category: self.category,
            description: self.description,
            date: self.date.unwrap_or(today),
        }
    }
}

/// The fields to overwrite on an existing [Transaction].
///
/// Fields that are `None` keep their current value. There is no `id` field:
/// any `id` in a request body is ignored and the stored ID is kept.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionPatch {
    /// The new transaction type.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub transaction_type: Option<TransactionType>,
    /// The new amount.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<f64>,
    /// The new category.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// The new description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// The new date.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<Date>,
}

impl TransactionPatch {
    /// Merge the patch onto `existing`, keeping its ID.
    pub fn apply(self, existing: &Transaction) -> Transaction {
        Transaction {
            id: existing.id,
            transaction_type: self.transaction_type.unwrap_or(existing.transaction_type),
            amount: self.amount.unwrap_or(existing.amount),
            category: self.category.unwrap_or_else(|| existing.category.clone()),
            description: self
                .description
                .unwrap_or_else(|| existing.description.clone()),
            date: self.date.unwrap_or(existing.date),
        }
    }
}

impl From<NewTransaction> for TransactionPatch {
    fn from(new_transaction: NewTransaction) -> Self {
        Self {
            transaction_type: Some(new_transaction.transaction_type),
            amount: Some(new_transaction.amount),
            category: Some(new_transaction.category),
            description: Some(new_transaction.description),
            date: new_transaction.date,
        }
    }
}

/// Today's date in UTC, used as the default transaction date.
pub fn today() -> Date {
    OffsetDateTime::now_utc().date()
}

fn check_fields(amount: f64, category: &str, description: &str) -> Result<(), Error> {
    if !amount.is_finite() || amount <= 0.0 {
        return Err(Error::InvalidTransaction(format!(
            "amount must be a positive number, got {amount}"
        )));
    }

    if category.trim().is_empty() {
        return Err(Error::InvalidTransaction(
            "category must not be empty".to_owned(),
        ));
    }

    if description.trim().is_empty() {
        return Err(Error::InvalidTransaction(
            "description must not be empty".to_owned(),
        ));
    }

    Ok(())
}

// ============================================================================
// TESTS
// ============================================================================
