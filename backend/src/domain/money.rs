//! Currency formatting helpers for US-dollar amounts.

/// Format an amount as `$1,234.56`. Negative amounts render with the sign in
/// front of the currency symbol: `-$1,234.56`.
pub fn format_currency(amount: f64) -> String {
    let negative = amount < 0.0;
    let total_cents = (amount.abs() * 100.0).round() as u64;
    let dollars = total_cents / 100;
    let cents = total_cents % 100;

    let mut grouped = String::new();
    for (i, ch) in dollars.to_string().chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    let dollars_grouped: String = grouped.chars().rev().collect();

    format!(
        "{}${}.{:02}",
        if negative { "-" } else { "" },
        dollars_grouped,
        cents
    )
}

/// Parse a currency string, tolerating a `$` symbol, grouping commas and
/// surrounding whitespace. Input with no parsable number yields 0.0.
pub fn parse_currency(value: &str) -> f64 {
    let cleaned: String = value
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.' || *c == '-')
        .collect();
    cleaned.parse::<f64>().unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_with_grouping_and_two_decimals() {
        assert_eq!(format_currency(0.0), "$0.00");
        assert_eq!(format_currency(7.5), "$7.50");
        assert_eq!(format_currency(1234.56), "$1,234.56");
        assert_eq!(format_currency(1_000_000.0), "$1,000,000.00");
    }

    #[test]
    fn formats_negative_amounts() {
        assert_eq!(format_currency(-1234.5), "-$1,234.50");
    }

    #[test]
    fn rounds_to_the_nearest_cent() {
        assert_eq!(format_currency(19.999), "$20.00");
        assert_eq!(format_currency(0.005), "$0.01");
    }

    #[test]
    fn parses_formatted_values_back() {
        assert_eq!(parse_currency("$1,234.56"), 1234.56);
        assert_eq!(parse_currency("  12.5 "), 12.5);
        assert_eq!(parse_currency("-$3.00"), -3.0);
    }

    #[test]
    fn unparsable_input_yields_zero() {
        assert_eq!(parse_currency(""), 0.0);
        assert_eq!(parse_currency("free"), 0.0);
    }
}
