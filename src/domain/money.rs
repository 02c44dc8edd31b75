use std::fmt;

/// Prices are kept as integer cents so totals never drift.
/// 1 unit = 100 cents, so 3.50 = 350 cents.
pub type Cents = i64;

/// Format cents as a plain decimal string with two places.
/// Example: 350 -> "3.50", -1234 -> "-12.34"
pub fn format_cents(cents: Cents) -> String {
    let sign = if cents < 0 { "-" } else { "" };
    let abs = cents.unsigned_abs();
    format!("{}{}.{:02}", sign, abs / 100, abs % 100)
}

/// Parse a decimal price into cents.
/// Accepts "3.50", "3.5", "3", ".5" and a leading '-'.
/// Digits past the cents must be zeros; "1.799" is rejected rather than rounded.
pub fn parse_cents(input: &str) -> Result<Cents, ParseCentsError> {
    let trimmed = input.trim();
    let (negative, digits) = match trimmed.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, trimmed),
    };

    let (units_str, fraction_str) = digits.split_once('.').unwrap_or((digits, ""));
    if units_str.is_empty() && fraction_str.is_empty() {
        return Err(ParseCentsError::Empty);
    }
    if !all_digits(units_str) || !all_digits(fraction_str) {
        return Err(ParseCentsError::InvalidFormat(input.to_string()));
    }

    let units: i64 = if units_str.is_empty() {
        0
    } else {
        units_str
            .parse()
            .map_err(|_| ParseCentsError::Overflow(input.to_string()))?
    };

    let (cents_digits, sub_cents) = fraction_str.split_at(fraction_str.len().min(2));
    if sub_cents.bytes().any(|b| b != b'0') {
        return Err(ParseCentsError::TooPrecise(input.to_string()));
    }

    let mut fraction = cents_digits.to_string();
    while fraction.len() < 2 {
        fraction.push('0');
    }
    // Two ASCII digits, cannot fail.
    let fraction: i64 = fraction.parse().unwrap_or(0);

    let cents = units
        .checked_mul(100)
        .and_then(|c| c.checked_add(fraction))
        .ok_or_else(|| ParseCentsError::Overflow(input.to_string()))?;

    Ok(if negative { -cents } else { cents })
}

/// Price of a line: unit price times quantity. `None` if it does not fit in `Cents`.
pub fn line_total(unit_price: Cents, quantity: i64) -> Option<Cents> {
    unit_price.checked_mul(quantity)
}

fn all_digits(s: &str) -> bool {
    s.bytes().all(|b| b.is_ascii_digit())
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseCentsError {
    Empty,
    InvalidFormat(String),
    TooPrecise(String),
    Overflow(String),
}

impl fmt::Display for ParseCentsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseCentsError::Empty => write!(f, "empty price"),
            ParseCentsError::InvalidFormat(s) => write!(f, "invalid price format: '{}'", s),
            ParseCentsError::TooPrecise(s) => {
                write!(f, "price has more than two decimal places: '{}'", s)
            }
            ParseCentsError::Overflow(s) => write!(f, "price out of range: '{}'", s),
        }
    }
}

impl std::error::Error for ParseCentsError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_cents() {
        assert_eq!(format_cents(350), "3.50");
        assert_eq!(format_cents(900), "9.00");
        assert_eq!(format_cents(5), "0.05");
        assert_eq!(format_cents(0), "0.00");
        assert_eq!(format_cents(-1234), "-12.34");
    }

    #[test]
    fn test_parse_cents() {
        assert_eq!(parse_cents("3.50"), Ok(350));
        assert_eq!(parse_cents("3.5"), Ok(350));
        assert_eq!(parse_cents("3"), Ok(300));
        assert_eq!(parse_cents("3."), Ok(300));
        assert_eq!(parse_cents(".5"), Ok(50));
        assert_eq!(parse_cents(" 2.00 "), Ok(200));
        assert_eq!(parse_cents("-1.25"), Ok(-125));
        assert_eq!(parse_cents("1.500"), Ok(150));
    }

    #[test]
    fn test_parse_cents_invalid() {
        assert_eq!(parse_cents(""), Err(ParseCentsError::Empty));
        assert_eq!(parse_cents("."), Err(ParseCentsError::Empty));
        assert!(matches!(
            parse_cents("abc"),
            Err(ParseCentsError::InvalidFormat(_))
        ));
        assert!(parse_cents("1.2.3").is_err());
        assert!(parse_cents("1e3").is_err());
        assert!(matches!(
            parse_cents("99999999999999999999"),
            Err(ParseCentsError::Overflow(_))
        ));
    }

    #[test]
    fn test_parse_cents_rejects_sub_cent_digits() {
        assert_eq!(
            parse_cents("1.799"),
            Err(ParseCentsError::TooPrecise("1.799".to_string()))
        );
        assert!(matches!(
            parse_cents("0.001"),
            Err(ParseCentsError::TooPrecise(_))
        ));
    }

    #[test]
    fn test_line_total() {
        assert_eq!(line_total(350, 2), Some(700));
        assert_eq!(line_total(200, 0), Some(0));
        assert_eq!(line_total(125, -2), Some(-250));
        assert_eq!(line_total(100, i64::MAX), None);
    }
}
