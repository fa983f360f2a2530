//! Currency Formatting
//!
//! Vietnamese dong display helpers: dot-grouped thousands and a `₫` suffix.

/// Format an amount of dong, e.g. `250000` as `250.000₫`
pub fn format_price(amount: i64) -> String {
    let digits = amount.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 4);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }
    let sign = if amount < 0 { "-" } else { "" };
    format!("{sign}{grouped}₫")
}

/// Parse a formatted price back to an amount. Accepts `₫`/`đ` and dot grouping.
pub fn parse_price(text: &str) -> Option<i64> {
    let cleaned: String = text
        .chars()
        .filter(|c| !matches!(c, '₫' | 'đ' | '.' | ',') && !c.is_whitespace())
        .collect();
    if cleaned.is_empty() {
        return None;
    }
    cleaned.parse().ok()
}

/// Discount percentage between an old and a discounted price text.
///
/// Only reported when `old > discounted > 0`.
pub fn discount_percent(old_price: &str, price: &str) -> Option<u32> {
    let old = parse_price(old_price)?;
    let now = parse_price(price)?;
    if now <= 0 || old <= now {
        return None;
    }
    let pct = ((old - now) as f64 / old as f64 * 100.0).round();
    Some(pct as u32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_price() {
        assert_eq!(format_price(250000), "250.000₫");
        assert_eq!(format_price(0), "0₫");
        assert_eq!(format_price(999), "999₫");
        assert_eq!(format_price(1000), "1.000₫");
        assert_eq!(format_price(12345678), "12.345.678₫");
        assert_eq!(format_price(-5000), "-5.000₫");
    }

    #[test]
    fn test_parse_price() {
        assert_eq!(parse_price("250.000₫"), Some(250000));
        assert_eq!(parse_price("99.000 đ"), Some(99000));
        assert_eq!(parse_price(""), None);
        assert_eq!(parse_price("abc"), None);
    }

    #[test]
    fn test_discount_percent() {
        assert_eq!(discount_percent("200.000₫", "150.000₫"), Some(25));
        assert_eq!(discount_percent("150.000₫", "150.000₫"), None);
        assert_eq!(discount_percent("100.000₫", "120.000₫"), None);
        assert_eq!(discount_percent("", "120.000₫"), None);
        assert_eq!(discount_percent("100.000₫", "0₫"), None);
    }
}
