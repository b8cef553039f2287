//! Totals, category filter options and filtering for the transaction list.

use std::{collections::BTreeSet, str::FromStr};

use crate::{
    Error,
    transaction::{Transaction, TransactionType},
};

/// The label shown for transactions with an empty category.
pub const UNCATEGORIZED_LABEL: &str = "Uncategorized";

/// The totals shown above the transaction list.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct Summary {
    /// The sum of all income amounts.
    pub total_income: f64,
    /// The sum of all expense amounts.
    pub total_expense: f64,
    /// Income minus expenses.
    pub balance: f64,
}

/// Add up income and expenses over `transactions`.
pub fn summarize(transactions: &[Transaction]) -> Summary {
    let (total_income, total_expense) =
        transactions
            .iter()
            .fold((0.0, 0.0), |(income, expense), transaction| {
                match transaction.transaction_type {
                    TransactionType::Income => (income + transaction.amount, expense),
                    TransactionType::Expense => (income, expense + transaction.amount),
                }
            });

    Summary {
        total_income,
        total_expense,
        balance: total_income - total_expense,
    }
}

/// The label a transaction is grouped under in the category filter.
fn category_label(transaction: &Transaction) -> &str {
    if transaction.category.is_empty() {
        UNCATEGORIZED_LABEL
    } else {
        &transaction.category
    }
}

/// The distinct category labels in `transactions`, sorted alphabetically.
pub fn category_options(transactions: &[Transaction]) -> Vec<String> {
    transactions
        .iter()
        .map(category_label)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(str::to_owned)
        .collect()
}

/// Restricts the list to one transaction type.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum TypeFilter {
    /// Show income and expenses.
    #[default]
    All,
    /// Show only the given type.
    Only(TransactionType),
}

impl FromStr for TypeFilter {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(TypeFilter::All),
            other => other.parse().map(TypeFilter::Only),
        }
    }
}

/// Restricts the list to one category label.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub enum CategoryFilter {
    /// Show every category.
    #[default]
    All,
    /// Show only the given category. [UNCATEGORIZED_LABEL] selects
    /// transactions with an empty category.
    Only(String),
}

impl CategoryFilter {
    /// Build a filter from a select option, where `"all"` means no filter.
    pub fn from_option(option: &str) -> Self {
        match option {
            "all" => CategoryFilter::All,
            category => CategoryFilter::Only(category.to_owned()),
        }
    }
}

/// The filters applied to the transaction list.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct TransactionFilter {
    /// Which transaction types to show.
    pub transaction_type: TypeFilter,
    /// Which category to show.
    pub category: CategoryFilter,
}

impl TransactionFilter {
    /// Whether `transaction` passes both filters.
    pub fn matches(&self, transaction: &Transaction) -> bool {
        let type_matches = match self.transaction_type {
            TypeFilter::All => true,
            TypeFilter::Only(transaction_type) => {
                transaction.transaction_type == transaction_type
            }
        };

        let category_matches = match &self.category {
            CategoryFilter::All => true,
            CategoryFilter::Only(category) => category_label(transaction) == category,
        };

        type_matches && category_matches
    }

    /// The transactions that pass the filter, in their original order.
    pub fn apply<'a>(&self, transactions: &'a [Transaction]) -> Vec<&'a Transaction> {
        transactions
            .iter()
            .filter(|transaction| self.matches(transaction))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use time::macros::date;

    use crate::{
        summary::{
            CategoryFilter, Summary, TransactionFilter, TypeFilter, category_options, summarize,
        },
        transaction::{Transaction, TransactionType},
    };

    fn transaction(
        id: i64,
        transaction_type: TransactionType,
        amount: f64,
        category: &str,
    ) -> Transaction {
        Transaction {
            id,
            transaction_type,
            amount,
            category: category.to_owned(),
            description: format!("transaction #{id}"),
            date: date!(2025 - 01 - 01),
        }
    }

    fn sample() -> Vec<Transaction> {
        vec![
            transaction(1, TransactionType::Income, 1000.0, "Salary"),
            transaction(2, TransactionType::Expense, 250.5, "Food & Dining"),
            transaction(3, TransactionType::Expense, 49.5, ""),
            transaction(4, TransactionType::Income, 20.0, "Food & Dining"),
        ]
    }

    #[test]
    fn summarizes_totals() {
        let got = summarize(&sample());

        assert_eq!(
            got,
            Summary {
                total_income: 1020.0,
                total_expense: 300.0,
                balance: 720.0,
            }
        );
    }

    #[test]
    fn summary_of_nothing_is_zero() {
        assert_eq!(summarize(&[]), Summary::default());
    }

    #[test]
    fn balance_can_be_negative() {
        let got = summarize(&[transaction(1, TransactionType::Expense, 5.0, "Other")]);

        assert_eq!(got.balance, -5.0);
    }

    #[test]
    fn category_options_are_distinct_and_sorted() {
        let got = category_options(&sample());

        assert_eq!(got, vec!["Food & Dining", "Salary", "Uncategorized"]);
    }

    #[test]
    fn parses_type_filter() {
        assert_eq!("all".parse::<TypeFilter>(), Ok(TypeFilter::All));
        assert_eq!(
            "income".parse::<TypeFilter>(),
            Ok(TypeFilter::Only(TransactionType::Income))
        );
        assert_eq!(
            "expense".parse::<TypeFilter>(),
            Ok(TypeFilter::Only(TransactionType::Expense))
        );
        assert!("transfer".parse::<TypeFilter>().is_err());
    }

    #[test]
    fn default_filter_keeps_everything() {
        let transactions = sample();

        let got = TransactionFilter::default().apply(&transactions);

        assert_eq!(got.len(), transactions.len());
    }

    #[test]
    fn filters_by_type_and_category() {
        let transactions = sample();
        let filter = TransactionFilter {
            transaction_type: TypeFilter::Only(TransactionType::Expense),
            category: CategoryFilter::from_option("Food & Dining"),
        };

        let got: Vec<_> = filter.apply(&transactions).iter().map(|t| t.id).collect();

        assert_eq!(got, vec![2]);
    }

    #[test]
    fn uncategorized_matches_empty_category() {
        let transactions = sample();
        let filter = TransactionFilter {
            category: CategoryFilter::from_option("Uncategorized"),
            ..Default::default()
        };

        let got: Vec<_> = filter.apply(&transactions).iter().map(|t| t.id).collect();

        assert_eq!(got, vec![3]);
    }

    #[test]
    fn all_option_clears_category_filter() {
        assert_eq!(CategoryFilter::from_option("all"), CategoryFilter::All);
    }

    #[test]
    fn loosening_a_filter_never_hides_transactions() {
        let transactions = sample();
        let narrow = TransactionFilter {
            transaction_type: TypeFilter::Only(TransactionType::Income),
            category: CategoryFilter::from_option("Salary"),
        };
        let wider = [
            TransactionFilter {
                transaction_type: TypeFilter::All,
                ..narrow.clone()
            },
            TransactionFilter {
                category: CategoryFilter::All,
                ..narrow.clone()
            },
        ];

        let narrow_ids: Vec<_> = narrow.apply(&transactions).iter().map(|t| t.id).collect();

        for filter in wider {
            let wide_ids: Vec<_> = filter.apply(&transactions).iter().map(|t| t.id).collect();
            assert!(
                narrow_ids.iter().all(|id| wide_ids.contains(id)),
                "{filter:?} hid transactions shown by {narrow:?}"
            );
        }
    }
}
