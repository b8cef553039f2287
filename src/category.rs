//! The preset categories offered for each transaction type.
//!
//! A transaction may use any category, presets are only the defaults offered
//! in the category picker. Anything not in the list for the transaction's
//! type is treated as a custom category.

use crate::transaction::TransactionType;

/// The categories offered for expenses.
pub const EXPENSE_CATEGORIES: [&str; 12] = [
    "Food & Dining",
    "Transportation",
    "Shopping",
    "Entertainment",
    "Bills & Utilities",
    "Healthcare",
    "Education",
    "Travel",
    "Home & Garden",
    "Personal Care",
    "Insurance",
    "Other",
];

/// The categories offered for income.
pub const INCOME_CATEGORIES: [&str; 8] = [
    "Salary",
    "Freelance",
    "Business",
    "Investment",
    "Rental",
    "Gift",
    "Bonus",
    "Other",
];

/// The preset categories for `transaction_type`.
pub fn presets_for(transaction_type: TransactionType) -> &'static [&'static str] {
    match transaction_type {
        TransactionType::Expense => &EXPENSE_CATEGORIES,
        TransactionType::Income => &INCOME_CATEGORIES,
    }
}

/// Whether `category` is one of the presets for `transaction_type`.
///
/// The comparison is exact: "travel" is not the preset "Travel".
pub fn is_preset(transaction_type: TransactionType, category: &str) -> bool {
    presets_for(transaction_type).contains(&category)
}
