//! Display formatting shared by course cards and detail pages.

/// US-dollar price with thousands separators, e.g. `$1,299.00`
pub fn format_price(price: f64) -> String {
    let cents = (price * 100.0).round() as u64;
    let dollars = cents / 100;
    let digits = dollars.to_string();

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    format!("${}.{:02}", grouped, cents % 100)
}

/// Compact enrolment count: `980`, `15.4k`
pub fn format_students(students: u32) -> String {
    if students >= 1000 {
        format!("{:.1}k", f64::from(students) / 1000.0)
    } else {
        students.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_price() {
        assert_eq!(format_price(0.0), "$0.00");
        assert_eq!(format_price(89.99), "$89.99");
        assert_eq!(format_price(150.0), "$150.00");
        assert_eq!(format_price(1299.5), "$1,299.50");
        assert_eq!(format_price(1_000_000.0), "$1,000,000.00");
    }

    #[test]
    fn test_format_students() {
        assert_eq!(format_students(0), "0");
        assert_eq!(format_students(999), "999");
        assert_eq!(format_students(1000), "1.0k");
        assert_eq!(format_students(15420), "15.4k");
    }
}
