//! Free-form amount parsing for submitted ingredient quantities.

/// Parse a user-typed amount such as `"40"`, `" 12,5 "` or `"7.5"`.
///
/// Returns `None` for absent, blank or unparseable input. A comma decimal
/// separator is accepted. No unit conversion or rounding is applied.
pub fn parse_amount(text: Option<&str>) -> Option<f64> {
    let raw = text?.trim().replace(',', ".");
    if raw.is_empty() {
        return None;
    }
    raw.parse::<f64>().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_integer() {
        assert_eq!(parse_amount(Some("40")), Some(40.0));
    }

    #[test]
    fn test_comma_decimal_separator() {
        assert_eq!(parse_amount(Some("12,5")), Some(12.5));
        assert_eq!(parse_amount(Some(" 7.25 ")), Some(7.25));
    }

    #[test]
    fn test_absent_and_blank() {
        assert_eq!(parse_amount(None), None);
        assert_eq!(parse_amount(Some("")), None);
        assert_eq!(parse_amount(Some("   ")), None);
    }

    #[test]
    fn test_garbage_is_absent() {
        assert_eq!(parse_amount(Some("dużo")), None);
        assert_eq!(parse_amount(Some("40ml")), None);
        assert_eq!(parse_amount(Some("1,000,5")), None);
    }
}
