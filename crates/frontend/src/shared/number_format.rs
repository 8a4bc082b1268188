//! Number formatting for table cells and stat cards.

/// Group an integer amount with thousands separators: 1234567 -> "1,234,567".
pub fn format_thousands(n: i64) -> String {
    let s = n.abs().to_string();
    let mut result = String::new();
    for (i, ch) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(ch);
    }
    if n < 0 {
        result.push('-');
    }
    result.chars().rev().collect()
}

/// Rupee amount for table cells, rounded to whole rupees.
pub fn format_money(amount: f64) -> String {
    format!("₹{}", format_thousands(amount.round() as i64))
}

/// Percentage with one decimal: 12.345 -> "12.3%".
pub fn format_percent(value: f64) -> String {
    format!("{:.1}%", value)
}

/// Plain number with up to one decimal; whole values drop the fraction.
pub fn format_quantity(value: f64) -> String {
    if (value - value.round()).abs() < 1e-9 {
        format_thousands(value.round() as i64)
    } else {
        format!("{:.1}", value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_thousands() {
        assert_eq!(format_thousands(0), "0");
        assert_eq!(format_thousands(999), "999");
        assert_eq!(format_thousands(1000), "1,000");
        assert_eq!(format_thousands(1234567), "1,234,567");
        assert_eq!(format_thousands(-45000), "-45,000");
    }

    #[test]
    fn test_format_money() {
        assert_eq!(format_money(25000.0), "₹25,000");
        assert_eq!(format_money(21266.67), "₹21,267");
        assert_eq!(format_money(-1500.0), "₹-1,500");
    }

    #[test]
    fn test_format_percent() {
        assert_eq!(format_percent(94.418), "94.4%");
        assert_eq!(format_percent(0.0), "0.0%");
    }

    #[test]
    fn test_format_quantity() {
        assert_eq!(format_quantity(8.5), "8.5");
        assert_eq!(format_quantity(9.0), "9");
        assert_eq!(format_quantity(1500.0), "1,500");
    }
}
