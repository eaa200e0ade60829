//! Exact decimal type used for every monetary field.

use rust_decimal::Decimal;

/// Arbitrary-precision signed decimal; its `Display` form is the canonical text and
/// keeps the scale it was built with (`337.60` stays `337.60`).
pub type ExactDecimal = Decimal;

/// Parses a decimal literal without rounding.
///
/// Literals with more significant digits than `Decimal` can hold are rejected rather
/// than silently rounded.
pub fn parse_exact(text: &str) -> Result<ExactDecimal, rust_decimal::Error> {
    Decimal::from_str_exact(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn keeps_digits_and_scale() {
        let price = parse_exact("337.60").unwrap();
        assert_eq!(price, dec!(337.60));
        assert_eq!(price.to_string(), "337.60");
        assert_eq!(price.scale(), 2);
    }

    #[test]
    fn rejects_non_decimal_text() {
        assert!(parse_exact("abc").is_err());
        assert!(parse_exact("").is_err());
        assert!(parse_exact("1.2.3").is_err());
    }

    #[test]
    fn rejects_literals_that_would_round() {
        assert!(parse_exact("0.12345678901234567890123456789").is_err());
    }
}
