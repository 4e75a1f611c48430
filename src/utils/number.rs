//! Number to string conversion matching the script runtime's `String(n)`.
//!
//! Integral values print without a fractional part, very large and very
//! small magnitudes switch to exponent form with an explicit sign.

/// Format a number the way script string concatenation (`'' + n`) does.
///
/// # Example
/// ```
/// use jsxmark::utils::number::format_number;
///
/// assert_eq!(format_number(42.0), "42");
/// assert_eq!(format_number(0.5), "0.5");
/// assert_eq!(format_number(1e21), "1e+21");
/// ```
pub fn format_number(n: f64) -> String {
    if n.is_nan() {
        return "NaN".to_string();
    }
    if n.is_infinite() {
        return if n > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if n == 0.0 {
        // Covers -0 as well
        return "0".to_string();
    }

    let abs = n.abs();
    if !(1e-6..1e21).contains(&abs) {
        return format_exponent(n);
    }

    // `Display` for f64 is shortest round-trip and never uses exponents,
    // and prints integral values without a trailing `.0`.
    n.to_string()
}

/// Exponent form: `1e+21`, `-2.5e-7`.
fn format_exponent(n: f64) -> String {
    let formatted = format!("{n:e}");
    match formatted.split_once('e') {
        Some((mantissa, exp)) if !exp.starts_with('-') => format!("{mantissa}e+{exp}"),
        _ => formatted,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integers() {
        assert_eq!(format_number(0.0), "0");
        assert_eq!(format_number(-0.0), "0");
        assert_eq!(format_number(1.0), "1");
        assert_eq!(format_number(-17.0), "-17");
        assert_eq!(format_number(1_000_000.0), "1000000");
    }

    #[test]
    fn test_fractions() {
        assert_eq!(format_number(0.1), "0.1");
        assert_eq!(format_number(3.25), "3.25");
        assert_eq!(format_number(-0.000001), "-0.000001");
    }

    #[test]
    fn test_exponent_forms() {
        assert_eq!(format_number(1e21), "1e+21");
        assert_eq!(format_number(1.5e-7), "1.5e-7");
        assert_eq!(format_number(-2e22), "-2e+22");
    }

    #[test]
    fn test_non_finite() {
        assert_eq!(format_number(f64::NAN), "NaN");
        assert_eq!(format_number(f64::INFINITY), "Infinity");
        assert_eq!(format_number(f64::NEG_INFINITY), "-Infinity");
    }
}
