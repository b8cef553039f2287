//! Money formatting for display.

use std::sync::OnceLock;

use numfmt::{Formatter, Precision};

use crate::transaction::TransactionType;

fn formatter() -> Option<&'static Formatter> {
    static FMT: OnceLock<Option<Formatter>> = OnceLock::new();

    FMT.get_or_init(|| {
        Formatter::currency("$")
            .ok()
            .map(|formatter| formatter.precision(Precision::Decimals(2)))
    })
    .as_ref()
}

/// Format an amount as dollars with exactly two decimal places, e.g. "$1,234.50".
///
/// Negative amounts are prefixed with "-$".
pub fn format_currency(number: f64) -> String {
    let magnitude = (number.abs() * 100.0).round() / 100.0;
    let sign = if number < 0.0 { "-" } else { "" };

    // Zero is rendered as "0" by numfmt.
    if magnitude == 0.0 {
        return "$0.00".to_owned();
    }

    // numfmt switches to exponent notation for small fractions, and amounts
    // under a dollar need no thousands separators.
    let mut formatted = match formatter() {
        Some(formatter) if magnitude >= 1.0 => formatter.fmt_string(magnitude),
        _ => format!("${magnitude:.2}"),
    };

    // numfmt drops trailing zeros, so "12.30" comes out as "12.3" and "12.00" as "12".
    match formatted.find('.') {
        None => formatted.push_str(".00"),
        Some(index) => {
            for _ in formatted.len() - index - 1..2 {
                formatted.push('0');
            }
        }
    }

    format!("{sign}{formatted}")
}

/// Format an amount with the sign implied by its type, e.g. "+$12.50" for
/// income and "-$12.50" for an expense.
pub fn amount_label(transaction_type: TransactionType, amount: f64) -> String {
    let sign = match transaction_type {
        TransactionType::Income => '+',
        TransactionType::Expense => '-',
    };

    format!("{sign}{}", format_currency(amount.abs()))
}

#[cfg(test)]
mod tests {
    use crate::{
        currency::{amount_label, format_currency},
        transaction::TransactionType,
    };

    #[test]
    fn formats_with_two_decimals() {
        assert_eq!(format_currency(12.5), "$12.50");
        assert_eq!(format_currency(12.0), "$12.00");
        assert_eq!(format_currency(0.99), "$0.99");
    }

    #[test]
    fn formats_zero() {
        assert_eq!(format_currency(0.0), "$0.00");
    }

    #[test]
    fn rounds_fractions_of_a_cent() {
        assert_eq!(format_currency(0.001), "$0.00");
        assert_eq!(format_currency(0.004), "$0.00");
        assert_eq!(format_currency(0.006), "$0.01");
        assert_eq!(format_currency(-0.004), "$0.00");
    }

    #[test]
    fn formats_thousands() {
        assert_eq!(format_currency(1234567.0), "$1,234,567.00");
    }

    #[test]
    fn formats_negative() {
        assert_eq!(format_currency(-3.5), "-$3.50");
    }

    #[test]
    fn labels_income_and_expense() {
        assert_eq!(amount_label(TransactionType::Income, 12.5), "+$12.50");
        assert_eq!(amount_label(TransactionType::Expense, 12.5), "-$12.50");
    }
}
