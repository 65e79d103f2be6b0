//! Number formatting used by the report templates

/// Whole-dollar currency with thousands separators ("$4,570", "-$520")
pub fn currency(value: f64) -> String {
    let rounded = value.round();
    let sign = if rounded < 0.0 { "-" } else { "" };
    format!("{}${}", sign, group_thousands(rounded.abs() as u64))
}

/// A value that is already a percentage ("7645%")
pub fn percent(value: f64) -> String {
    // Integer conversion also drops the sign of a negative zero
    format!("{}%", value.round() as i64)
}

pub fn days(value: f64) -> String {
    format!("{:.0} days", value)
}

pub fn jobs(value: f64) -> String {
    format!("{:.1} jobs", value)
}

fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_currency() {
        assert_eq!(currency(0.0), "$0");
        assert_eq!(currency(999.4), "$999");
        assert_eq!(currency(4_569.5), "$4,570");
        assert_eq!(currency(1_234_567.0), "$1,234,567");
        assert_eq!(currency(-520.0), "-$520");
        assert_eq!(currency(-0.2), "$0");
    }

    #[test]
    fn test_percent_near_zero_has_no_sign() {
        assert_eq!(percent(-0.4), "0%");
        assert_eq!(percent(-0.0), "0%");
        assert_eq!(percent(0.3), "0%");
    }

    #[test]
    fn test_other_units() {
        assert_eq!(percent(7_644.9), "7645%");
        assert_eq!(percent(-120.6), "-121%");
        assert_eq!(days(16.41), "16 days");
        assert_eq!(jobs(12.79), "12.8 jobs");
    }
}
