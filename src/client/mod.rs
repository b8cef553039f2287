//! The client side of the finance tracker.
//!
//! A user interface renders from [ClientState] and drives a [Tracker], which
//! talks to the server through a [TransactionApi].

mod api;
mod tracker;

pub use api::{HttpTransactionApi, TransactionApi};
pub use tracker::{ClientState, Page, Tracker};
