//! The state machine behind the add and edit transaction forms.
//!
//! The category field is either empty, one of the presets for the selected
//! transaction type, or free-form custom text. Switching the transaction type
//! reclassifies the current category instead of discarding it.

use std::fmt::Display;

use crate::{
    category::is_preset,
    transaction::core::{NewTransaction, Transaction, TransactionPatch, TransactionType},
};

/// The option value in the category picker that switches to custom text entry.
pub const CUSTOM_CATEGORY_OPTION: &str = "custom";

const NO_CATEGORY_LABEL: &str = "No category";

/// The current value of the category field.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub enum CategoryChoice {
    /// Nothing selected yet.
    #[default]
    None,
    /// One of the presets for the current transaction type.
    Preset(String),
    /// Text typed in by the user. May be empty right after switching to
    /// custom entry.
    Custom(String),
}

impl CategoryChoice {
    /// The category that would be submitted, custom text taking precedence.
    pub fn value(&self) -> &str {
        match self {
            CategoryChoice::None => "",
            CategoryChoice::Preset(preset) => preset,
            CategoryChoice::Custom(text) => text,
        }
    }

    /// Whether the custom text input is shown.
    pub fn is_custom(&self) -> bool {
        matches!(self, CategoryChoice::Custom(_))
    }

    /// The value for the preset picker, empty unless a preset is selected.
    pub fn selected_preset(&self) -> &str {
        match self {
            CategoryChoice::Preset(preset) => preset,
            _ => "",
        }
    }

    /// The value for the custom text input, empty unless in custom mode.
    pub fn custom_text(&self) -> &str {
        match self {
            CategoryChoice::Custom(text) => text,
            _ => "",
        }
    }
}

/// A form field that failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error)]
pub enum ValidationError {
    /// The amount is missing, not a number, or not greater than zero.
    #[error("Please enter a valid amount")]
    InvalidAmount,
    /// Neither a preset nor custom text has been given.
    #[error("Please select or enter a category")]
    MissingCategory,
    /// The description is blank.
    #[error("Please enter a description")]
    MissingDescription,
    /// Custom entry is active but the custom text is blank.
    #[error("Please enter a custom category")]
    MissingCustomCategory,
}

/// Every field that failed validation, in form order.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ValidationErrors(Vec<ValidationError>);

impl ValidationErrors {
    /// Whether `error` was reported.
    pub fn contains(&self, error: ValidationError) -> bool {
        self.0.contains(&error)
    }

    /// Iterate over the reported errors.
    pub fn iter(&self) -> impl Iterator<Item = &ValidationError> {
        self.0.iter()
    }

    /// The number of reported errors.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether no errors were reported.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Display for ValidationErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let messages: Vec<String> = self.0.iter().map(ValidationError::to_string).collect();
        f.write_str(&messages.join("; "))
    }
}

/// A validated form, ready to be sent to the API.
#[derive(Debug, Clone, PartialEq)]
pub struct TransactionDraft {
    /// Whether the money was earned or spent.
    pub transaction_type: TransactionType,
    /// The parsed amount.
    pub amount: f64,
    /// The custom text if given, otherwise the preset.
    pub category: String,
    /// The trimmed description.
    pub description: String,
}

impl From<TransactionDraft> for NewTransaction {
    fn from(draft: TransactionDraft) -> Self {
        Transaction::build(
            draft.transaction_type,
            draft.amount,
            &draft.category,
            &draft.description,
        )
    }
}

impl From<TransactionDraft> for TransactionPatch {
    fn from(draft: TransactionDraft) -> Self {
        NewTransaction::from(draft).into()
    }
}

/// The state of the add/edit transaction form.
///
/// Amount and description hold the raw text typed by the user. They are
/// only parsed and trimmed by [TransactionForm::validate].
#[derive(Debug, Default, Clone, PartialEq)]
pub struct TransactionForm {
    transaction_type: TransactionType,
    amount: String,
    category: CategoryChoice,
    description: String,
}

impl TransactionForm {
    /// An empty expense form.
    pub fn new() -> Self {
        Self::default()
    }

    /// A form pre-filled from an existing transaction.
    ///
    /// A category that is not a preset for the transaction's type is loaded
    /// as custom text.
    pub fn from_transaction(transaction: &Transaction) -> Self {
        let category = if is_preset(transaction.transaction_type, &transaction.category) {
            CategoryChoice::Preset(transaction.category.clone())
        } else {
            CategoryChoice::Custom(transaction.category.clone())
        };

        Self {
            transaction_type: transaction.transaction_type,
            amount: transaction.amount.to_string(),
            category,
            description: transaction.description.clone(),
        }
    }

    /// The selected transaction type.
    pub fn transaction_type(&self) -> TransactionType {
        self.transaction_type
    }

    /// The raw amount text.
    pub fn amount(&self) -> &str {
        &self.amount
    }

    /// The category field.
    pub fn category(&self) -> &CategoryChoice {
        &self.category
    }

    /// The raw description text.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Switch between income and expense.
    ///
    /// The current category stays a preset if it is also a preset for the new
    /// type. Otherwise a non-empty category becomes custom text and an empty
    /// one is cleared.
    pub fn change_type(&mut self, transaction_type: TransactionType) {
        let current = self.category.value().to_owned();

        self.category = if is_preset(transaction_type, &current) {
            CategoryChoice::Preset(current)
        } else if !current.is_empty() {
            CategoryChoice::Custom(current)
        } else {
            CategoryChoice::None
        };
        self.transaction_type = transaction_type;
    }

    /// Handle a selection in the category picker.
    ///
    /// `option` is either a preset, [CUSTOM_CATEGORY_OPTION], or the empty
    /// placeholder option.
    pub fn select_category(&mut self, option: &str) {
        self.category = match option {
            CUSTOM_CATEGORY_OPTION => CategoryChoice::Custom(String::new()),
            "" => CategoryChoice::None,
            preset => CategoryChoice::Preset(preset.to_owned()),
        };
    }

    /// Set the custom category text, switching to custom entry.
    pub fn set_custom_category(&mut self, text: &str) {
        self.category = CategoryChoice::Custom(text.to_owned());
    }

    /// Set the raw amount text.
    pub fn set_amount(&mut self, text: &str) {
        self.amount = text.to_owned();
    }

    /// Set the raw description text.
    pub fn set_description(&mut self, text: &str) {
        self.description = text.to_owned();
    }

    /// Clear the form back to an empty expense.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// The category label for the live preview card.
    pub fn preview_category(&self) -> &str {
        match self.category.value() {
            "" => NO_CATEGORY_LABEL,
            category => category,
        }
    }

    /// Check every field and build the payload to submit.
    ///
    /// # Errors
    /// Returns all failing fields together, not just the first one.
    pub fn validate(&self) -> Result<TransactionDraft, ValidationErrors> {
        let mut errors = Vec::new();

        let amount = parse_amount(&self.amount);
        if amount.is_none() {
            errors.push(ValidationError::InvalidAmount);
        }

        if self.category.value().is_empty() {
            errors.push(ValidationError::MissingCategory);
        }

        let description = self.description.trim();
        if description.is_empty() {
            errors.push(ValidationError::MissingDescription);
        }

        if self.category.is_custom() && self.category.custom_text().trim().is_empty() {
            errors.push(ValidationError::MissingCustomCategory);
        }

        match amount {
            Some(amount) if errors.is_empty() => Ok(TransactionDraft {
                transaction_type: self.transaction_type,
                amount,
                category: self.category.value().to_owned(),
                description: description.to_owned(),
            }),
            _ => Err(ValidationErrors(errors)),
        }
    }
}

fn parse_amount(text: &str) -> Option<f64> {
    text.trim()
        .parse::<f64>()
        .ok()
        .filter(|amount| amount.is_finite() && *amount > 0.0)
}
