//! Number formatting for tables: space as thousands separator.

/// Formats with the given number of decimals (0..=3, anything else is 2)
/// and a space every three integer digits, e.g. `1234.567, 2` → `"1 234.57"`.
pub fn format_number_with_decimals(value: f64, decimals: u8) -> String {
    let formatted = match decimals {
        0 => format!("{:.0}", value),
        1 => format!("{:.1}", value),
        2 => format!("{:.2}", value),
        3 => format!("{:.3}", value),
        _ => format!("{:.2}", value),
    };

    let (integer_part, decimal_part) = match formatted.split_once('.') {
        Some((i, d)) => (i, Some(d)),
        None => (formatted.as_str(), None),
    };

    let mut grouped = String::new();
    for (i, c) in integer_part.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 && c != '-' {
            grouped.push(' ');
        }
        grouped.push(c);
    }
    let grouped: String = grouped.chars().rev().collect();

    match decimal_part {
        Some(d) => format!("{}.{}", grouped, d),
        None => grouped,
    }
}

pub fn format_money(value: f64) -> String {
    format_number_with_decimals(value, 2)
}

pub fn format_number_int(value: f64) -> String {
    format_number_with_decimals(value, 0)
}

/// Dong amounts have no minor unit: `1500000` → `"1 500 000 ₫"`.
pub fn format_vnd(value: f64) -> String {
    format!("{} ₫", format_number_int(value))
}

/// Amount with its ISO currency; VND gets the dong sign.
pub fn format_amount(value: f64, currency: &str) -> String {
    if currency.eq_ignore_ascii_case("VND") {
        format_vnd(value)
    } else {
        format!("{} {}", format_money(value), currency)
    }
}

/// `0.035` → `"3.5%"`
pub fn format_percent(rate: f64) -> String {
    let pct = rate * 100.0;
    if (pct - pct.round()).abs() < 1e-9 {
        format!("{:.0}%", pct)
    } else {
        format!("{}%", format_number_with_decimals(pct, 2).trim_end_matches('0'))
    }
}

/// Reads a form number, accepting a decimal comma. Blanks and garbage are zero.
pub fn parse_number(raw: &str) -> f64 {
    raw.trim().replace(',', ".").parse().unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_number() {
        assert_eq!(parse_number("3,5"), 3.5);
        assert_eq!(parse_number(" 12 "), 12.0);
        assert_eq!(parse_number("abc"), 0.0);
    }

    #[test]
    fn test_format_money() {
        assert_eq!(format_money(1234.56), "1 234.56");
        assert_eq!(format_money(1234567.89), "1 234 567.89");
        assert_eq!(format_money(0.0), "0.00");
        assert_eq!(format_money(-1234.56), "-1 234.56");
    }

    #[test]
    fn test_format_number_with_decimals() {
        assert_eq!(format_number_with_decimals(1234.567, 0), "1 235");
        assert_eq!(format_number_with_decimals(1234.567, 1), "1 234.6");
        assert_eq!(format_number_with_decimals(1234.567, 3), "1 234.567");
        assert_eq!(format_number_with_decimals(-123.0, 0), "-123");
    }

    #[test]
    fn test_format_vnd() {
        assert_eq!(format_vnd(1_500_000.0), "1 500 000 ₫");
        assert_eq!(format_amount(1_500_000.0, "vnd"), "1 500 000 ₫");
        assert_eq!(format_amount(12.5, "USD"), "12.50 USD");
    }

    #[test]
    fn test_format_percent() {
        assert_eq!(format_percent(0.05), "5%");
        assert_eq!(format_percent(0.035), "3.5%");
        assert_eq!(format_percent(0.0125), "1.25%");
    }
}
