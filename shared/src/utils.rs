// Parsing helpers for the fixed formats used in the sales tables.

// Week commencing dates are always "dd/mm/yyyy".
pub mod week_date {
    use chrono::{Datelike, NaiveDate, ParseError};

    pub const DATE_FORMAT: &str = "%d/%m/%Y";

    // Number of leading characters that make up the "dd/mm" key.
    const DATE_KEY_LEN: usize = 5;

    pub fn parse_week_date(s: &str) -> Result<NaiveDate, ParseError> {
        NaiveDate::parse_from_str(s, DATE_FORMAT)
    }

    /// The "dd/mm" prefix of a raw date string, used to line up the same
    /// calendar week across different years.
    ///
    /// Shorter strings are returned whole.
    pub fn date_key(raw: &str) -> &str {
        match raw.char_indices().nth(DATE_KEY_LEN) {
            Some((idx, _)) => &raw[..idx],
            None => raw,
        }
    }

    /// Moves a date by whole years. 29 February falls back to 28 February
    /// when the target year is not a leap year.
    ///
    /// Returns `None` only when the target year is outside chrono's range.
    pub fn shift_years(date: NaiveDate, years: i32) -> Option<NaiveDate> {
        let year = date.year().checked_add(years)?;
        date.with_year(year)
            .or_else(|| NaiveDate::from_ymd_opt(year, date.month(), date.day() - 1))
    }

}

// Gross sales and unit counts are plain decimals ("314.31", "26").
pub mod sales_figures {
    use std::num::ParseFloatError;

    /// Parses a metric cell. Blank cells are `None` rather than an error.
    pub fn parse_metric(s: &str) -> Result<Option<f64>, ParseFloatError> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Ok(None);
        }
        trimmed.parse::<f64>().map(Some)
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn test_parse_metric_decimal() {
            assert_eq!(parse_metric("314.31").unwrap(), Some(314.31));
        }

        #[test]
        fn test_parse_metric_integer_with_spaces() {
            assert_eq!(parse_metric(" 26 ").unwrap(), Some(26.0));
        }

        #[test]
        fn test_parse_metric_blank() {
            assert_eq!(parse_metric("").unwrap(), None);
            assert_eq!(parse_metric("   ").unwrap(), None);
        }

        #[test]
        fn test_parse_metric_invalid() {
            assert!(parse_metric("12,5").is_err());
            assert!(parse_metric("n/a").is_err());
        }
    }
}
