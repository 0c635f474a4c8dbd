use chrono::{Local, NaiveDate};

use crate::{CatalogError, CatalogResult};

pub const STATS_DATE_FORMAT: &str = "%Y-%m-%d";

pub fn parse_stats_date(date: &str) -> CatalogResult<NaiveDate> {
    NaiveDate::parse_from_str(date.trim(), STATS_DATE_FORMAT)
        .map_err(|_| CatalogError::InvalidDate(date.to_string()))
}

/// Daily counters roll over on the server's local date.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_parse_stats_date() {
        assert_eq!(
            parse_stats_date("2024-05-01"),
            Ok(NaiveDate::from_ymd_opt(2024, 5, 1).unwrap())
        );
        assert_eq!(
            parse_stats_date("2024/05/01"),
            Err(CatalogError::InvalidDate("2024/05/01".to_string()))
        );
        assert!(parse_stats_date("2024-02-30").is_err());
    }
}
