//! Shared helper functions for CLI commands

/// Format a monetary amount with thousands separators and two decimals
///
/// Amounts are grouped western-style (1,234,567.89). The currency symbol
/// is prepended by the caller, since it comes from configuration.
pub fn format_currency(amount: f64) -> String {
    let negative = amount < 0.0;
    let rounded = (amount.abs() * 100.0).round() / 100.0;
    let whole = rounded.trunc() as u64;
    let cents = ((rounded - rounded.trunc()) * 100.0).round() as u64;

    let digits = whole.to_string();
    let mut grouped = String::new();
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    format!(
        "{}{}.{:02}",
        if negative { "-" } else { "" },
        grouped,
        cents
    )
}

/// Format manhours with one decimal place
pub fn format_hours(hours: f64) -> String {
    format!("{:.1}", hours)
}

/// Truncate a string to max_len bytes, adding "..." if truncated
///
/// Useful for table columns that need fixed-width output. The cut point
/// backs up to the nearest char boundary so multi-byte text never splits.
pub fn truncate_str(s: &str, max_len: usize) -> String {
    if s.len() <= max_len {
        return s.to_string();
    }

    let mut cut = max_len.saturating_sub(3);
    while !s.is_char_boundary(cut) {
        cut -= 1;
    }
    format!("{}...", &s[..cut])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_currency_grouping() {
        assert_eq!(format_currency(0.0), "0.00");
        assert_eq!(format_currency(950.0), "950.00");
        assert_eq!(format_currency(36000.0), "36,000.00");
        assert_eq!(format_currency(1234567.89), "1,234,567.89");
    }

    #[test]
    fn test_format_currency_negative() {
        assert_eq!(format_currency(-13000.0), "-13,000.00");
    }

    #[test]
    fn test_format_hours() {
        assert_eq!(format_hours(149.4), "149.4");
        assert_eq!(format_hours(30.0), "30.0");
    }

    #[test]
    fn test_truncate_str() {
        assert_eq!(truncate_str("hello", 10), "hello");
        assert_eq!(truncate_str("hello world", 8), "hello...");
        assert_eq!(truncate_str("hi", 2), "hi");
    }

    #[test]
    fn test_truncate_str_multibyte_boundary() {
        // A rupee-heavy scope line: the cut at 69 bytes lands inside a
        // 3-byte ₹ and must back up instead of panicking.
        let scope = format!("a{}", "₹".repeat(30));
        let truncated = truncate_str(&scope, 72);
        assert!(truncated.ends_with("..."));
        assert!(truncated.len() <= 72);

        // Short multi-byte strings pass through untouched.
        assert_eq!(truncate_str("₹₹", 6), "₹₹");

        // Two-byte chars with an odd cut point.
        let accented = "é".repeat(10);
        assert_eq!(truncate_str(&accented, 8), format!("{}...", "é".repeat(2)));
    }
}
