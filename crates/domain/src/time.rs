//! Time and timestamp helpers.

use chrono::{DateTime, NaiveDate, Utc};

/// UTC timestamp used for `created_at` and `updated_at`.
pub type Timestamp = DateTime<Utc>;

/// Return the current UTC time.
#[must_use]
pub fn now() -> Timestamp {
    Utc::now()
}

/// Parse a calendar date given either as `YYYY-MM-DD` or as an RFC 3339
/// timestamp, in which case the UTC date is kept.
#[must_use]
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    NaiveDate::parse_from_str(value, "%Y-%m-%d").ok().or_else(|| {
        DateTime::parse_from_rfc3339(value)
            .ok()
            .map(|dt| dt.to_utc().date_naive())
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_return_current_utc_time() {
        let before = Utc::now();
        let ts = now();
        let after = Utc::now();
        assert!(ts >= before);
        assert!(ts <= after);
    }

    #[test]
    fn should_parse_plain_date() {
        let date = parse_date("1990-05-17").unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(1990, 5, 17).unwrap());
    }

    #[test]
    fn should_keep_utc_date_of_timestamp() {
        let date = parse_date("1990-05-17T23:30:00-02:00").unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(1990, 5, 18).unwrap());
    }

    #[test]
    fn should_reject_garbage() {
        assert!(parse_date("yesterday").is_none());
        assert!(parse_date("1990-13-01").is_none());
    }
}
