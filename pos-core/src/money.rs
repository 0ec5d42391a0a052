//! Amounts are carried as integer centavos end to end; only the
//! console surface formats and parses decimal pesos.

/// Format centavos as a peso amount with two decimals (no currency prefix).
pub fn format_php(centavos: i64) -> String {
    let sign = if centavos < 0 { "-" } else { "" };
    let abs = centavos.unsigned_abs();
    format!("{}{}.{:02}", sign, abs / 100, abs % 100)
}

/// Parse a console peso amount ("200", "200.5", "200.00") into centavos.
/// At most two fractional digits are accepted.
pub fn parse_php(input: &str) -> Option<i64> {
    let s = input.trim();
    let (negative, s) = match s.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, s),
    };
    let (whole, frac) = match s.split_once('.') {
        Some((w, f)) => (w, f),
        None => (s, ""),
    };
    if whole.is_empty() || !whole.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    if frac.len() > 2 || !frac.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let whole: i64 = whole.parse().ok()?;
    let centavos = match frac.len() {
        0 => 0,
        1 => frac.parse::<i64>().ok()? * 10,
        _ => frac.parse::<i64>().ok()?,
    };
    let value = whole.checked_mul(100)?.checked_add(centavos)?;
    Some(if negative { -value } else { value })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format() {
        assert_eq!(format_php(17500), "175.00");
        assert_eq!(format_php(2500), "25.00");
        assert_eq!(format_php(5), "0.05");
        assert_eq!(format_php(0), "0.00");
        assert_eq!(format_php(-150), "-1.50");
    }

    #[test]
    fn test_parse() {
        assert_eq!(parse_php("200"), Some(20000));
        assert_eq!(parse_php("200.00"), Some(20000));
        assert_eq!(parse_php("200.5"), Some(20050));
        assert_eq!(parse_php(" 55.75 "), Some(5575));
        assert_eq!(parse_php("-3"), Some(-300));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert_eq!(parse_php(""), None);
        assert_eq!(parse_php("abc"), None);
        assert_eq!(parse_php("12.345"), None);
        assert_eq!(parse_php("1.2.3"), None);
        assert_eq!(parse_php("."), None);
    }
}
