//! Decimal amount formatting
//!
//! Amounts are plain `f64` values. They are rendered in the shortest form that
//! parses back to the same value, always keeping a fractional part so that
//! integral amounts read `200.0` rather than `200`. Magnitudes from `0.001` up
//! to `10^7` are written as plain decimals; anything outside that range uses
//! scientific notation with an upper-case exponent (`1.0E7`, `2.5E-4`).

/// Format an amount for the data file and for report output
///
/// # Examples
/// ```
/// use finpal::models::format_amount;
/// assert_eq!(format_amount(200.0), "200.0");
/// assert_eq!(format_amount(10.5), "10.5");
/// assert_eq!(format_amount(1.0e7), "1.0E7");
/// ```
pub fn format_amount(amount: f64) -> String {
    if amount.is_nan() {
        return "NaN".to_string();
    }
    if amount.is_infinite() {
        let sign = if amount < 0.0 { "-" } else { "" };
        return format!("{}Infinity", sign);
    }

    let magnitude = amount.abs();
    if magnitude == 0.0 || (PLAIN_MIN..PLAIN_MAX).contains(&magnitude) {
        // Debug formatting of f64 is the shortest round-trip form and keeps ".0"
        return format!("{:?}", amount);
    }

    let scientific = format!("{:e}", amount);
    match scientific.split_once('e') {
        Some((mantissa, exponent)) if mantissa.contains('.') => {
            format!("{}E{}", mantissa, exponent)
        }
        Some((mantissa, exponent)) => format!("{}.0E{}", mantissa, exponent),
        None => scientific,
    }
}

const PLAIN_MIN: f64 = 1e-3;
const PLAIN_MAX: f64 = 1e7;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integral_amounts_keep_fraction() {
        assert_eq!(format_amount(0.0), "0.0");
        assert_eq!(format_amount(200.0), "200.0");
        assert_eq!(format_amount(1290.0), "1290.0");
    }

    #[test]
    fn test_fractional_and_negative_amounts() {
        assert_eq!(format_amount(4.3), "4.3");
        assert_eq!(format_amount(12.75), "12.75");
        assert_eq!(format_amount(-400.0), "-400.0");
    }

    #[test]
    fn test_plain_range_boundaries() {
        assert_eq!(format_amount(0.001), "0.001");
        assert_eq!(format_amount(9999999.0), "9999999.0");
        assert_eq!(format_amount(1.0e7), "1.0E7");
        assert_eq!(format_amount(0.0001), "1.0E-4");
    }

    #[test]
    fn test_scientific_amounts() {
        assert_eq!(format_amount(12345678.9), "1.23456789E7");
        assert_eq!(format_amount(1.0e16), "1.0E16");
        assert_eq!(format_amount(-2.5e-4), "-2.5E-4");
        assert_eq!(format_amount(-3.0e9), "-3.0E9");
    }

    #[test]
    fn test_non_finite_amounts() {
        assert_eq!(format_amount(f64::NAN), "NaN");
        assert_eq!(format_amount(f64::INFINITY), "Infinity");
        assert_eq!(format_amount(f64::NEG_INFINITY), "-Infinity");
    }

    #[test]
    fn test_formatted_amount_parses_back() {
        for value in [0.1, 2.15, 630.0, 1234.5678, 1.0e7, 12345678.9, 1.0e16, 2.5e-4] {
            let parsed: f64 = format_amount(value).parse().unwrap();
            assert_eq!(parsed, value);
        }
    }
}
