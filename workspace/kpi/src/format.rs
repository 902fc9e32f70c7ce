use rust_decimal::Decimal;
use rusty_money::{Money, iso};

/// Formats an amount in thousands with one decimal and a `K` suffix.
///
/// `250000` becomes `"250.0K"`.
pub fn format_thousands(amount: Decimal) -> String {
    let mut thousands = amount / Decimal::ONE_THOUSAND;
    thousands.rescale(1);
    format!("{}K", thousands)
}

/// Formats a number with at most `decimals` decimals, dropping trailing
/// zeros. `2.8` stays `"2.8"` and `38.0` becomes `"38"`.
pub fn format_number(value: f64, decimals: usize) -> String {
    let text = format!("{:.*}", decimals, value);
    if text.contains('.') {
        text.trim_end_matches('0').trim_end_matches('.').to_string()
    } else {
        text
    }
}

/// Formats a fraction as a percentage with at most one decimal.
pub fn format_percent(fraction: f64) -> String {
    format!("{}%", format_number(fraction * 100.0, 1))
}

/// Formats an amount in Mexican pesos.
pub fn format_currency(amount: Decimal) -> String {
    Money::from_decimal(amount, iso::MXN).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_thousands() {
        assert_eq!(format_thousands(Decimal::from(250_000)), "250.0K");
        assert_eq!(format_thousands(Decimal::from(600_000)), "600.0K");
        assert_eq!(format_thousands(Decimal::from(1_260)), "1.3K");
        assert_eq!(format_thousands(Decimal::from(-1_500)), "-1.5K");
    }

    #[test]
    fn test_format_number_drops_trailing_zeros() {
        assert_eq!(format_number(2.8, 2), "2.8");
        assert_eq!(format_number(38.000000000000014, 2), "38");
        assert_eq!(format_number(7.85, 2), "7.85");
        assert_eq!(format_number(5.0, 0), "5");
    }

    #[test]
    fn test_format_percent() {
        assert_eq!(format_percent(0.92), "92%");
        assert_eq!(format_percent(0.047), "4.7%");
        assert_eq!(format_percent(0.28), "28%");
    }

    #[test]
    fn test_format_currency() {
        let text = format_currency(Decimal::from(750_000));
        assert!(text.contains("750,000"), "unexpected currency text: {text}");
    }
}
