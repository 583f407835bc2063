//! Timestamp normalization for the export's RFC-1123-style chat keys.

use chrono::NaiveDateTime;
use chrono_tz::Tz;
use thiserror::Error;

/// The fixed pattern of the export's timestamp keys after the weekday prefix,
/// always UTC. The weekday token is validated separately: real exports
/// occasionally carry a stale weekday, and chrono's `%a` would reject any that
/// disagree with the calendar date.
const SOURCE_FORMAT: &str = "%d %b %Y %H:%M:%S GMT";

const WEEKDAYS: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

const DEFAULT_DISPLAY_FORMAT: &str = "%d.%m.%Y %H:%M:%S";
const DEFAULT_SORTABLE_FORMAT: &str = "%Y-%m-%d";

/// A chat key that does not match the expected timestamp pattern.
#[derive(Debug, Error)]
#[error("timestamp {input:?} does not match the expected \"Wed, 25 Dec 2024 13:30:45 GMT\" pattern")]
pub struct TimestampFormatError {
    input: String,
    #[source]
    source: Option<chrono::ParseError>,
}

/// Timestamp presentation settings. Injected rather than compiled in so tests
/// (and the config file) can substitute the timezone.
pub struct TimeFormat {
    timezone: Tz,
    display_format: String,
    sortable_format: String,
}

impl TimeFormat {
    pub fn new(timezone: Tz) -> Self {
        Self {
            timezone,
            display_format: DEFAULT_DISPLAY_FORMAT.to_string(),
            sortable_format: DEFAULT_SORTABLE_FORMAT.to_string(),
        }
    }

    fn parse_utc(&self, timestamp: &str) -> Result<NaiveDateTime, TimestampFormatError> {
        let fail = |source| TimestampFormatError {
            input: timestamp.to_string(),
            source,
        };
        let (weekday, rest) = timestamp.split_once(", ").ok_or_else(|| fail(None))?;
        if !WEEKDAYS.contains(&weekday) {
            return Err(fail(None));
        }
        NaiveDateTime::parse_from_str(rest, SOURCE_FORMAT).map_err(|source| fail(Some(source)))
    }

    /// Format a chat key for presentation, converted to the configured timezone.
    pub fn to_display(&self, timestamp: &str) -> Result<String, TimestampFormatError> {
        let utc = self.parse_utc(timestamp)?.and_utc();
        let local = utc.with_timezone(&self.timezone);
        Ok(local.format(&self.display_format).to_string())
    }

    /// Format a chat key as a `YYYY-MM-DD` calendar date for frontmatter, kept
    /// in UTC so it sorts with the source keys.
    pub fn to_sortable_date(&self, timestamp: &str) -> Result<String, TimestampFormatError> {
        let utc = self.parse_utc(timestamp)?;
        Ok(utc.format(&self.sortable_format).to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn yekaterinburg() -> TimeFormat {
        TimeFormat::new(chrono_tz::Asia::Yekaterinburg)
    }

    #[test]
    fn display_applies_utc_plus_five() {
        let formatted = yekaterinburg()
            .to_display("Wed, 25 Dec 2024 13:30:45 GMT")
            .unwrap();
        assert_eq!(formatted, "25.12.2024 18:30:45");
    }

    #[test]
    fn display_conversion_can_roll_the_date_over() {
        let formatted = yekaterinburg()
            .to_display("Tue, 31 Dec 2024 22:00:00 GMT")
            .unwrap();
        assert_eq!(formatted, "01.01.2025 03:00:00");
    }

    #[test]
    fn sortable_date_stays_in_utc() {
        let fmt = yekaterinburg();
        // 22:00 UTC is already Jan 1st in Yekaterinburg; the sortable date must not move.
        assert_eq!(
            fmt.to_sortable_date("Tue, 31 Dec 2024 22:00:00 GMT").unwrap(),
            "2024-12-31"
        );
        assert_eq!(
            fmt.to_sortable_date("Wed, 25 Dec 2024 13:30:45 GMT").unwrap(),
            "2024-12-25"
        );
    }

    #[test]
    fn formatting_is_deterministic() {
        let fmt = yekaterinburg();
        let ts = "Wed, 25 Dec 2024 13:30:45 GMT";
        assert_eq!(fmt.to_display(ts).unwrap(), fmt.to_display(ts).unwrap());
        assert_eq!(
            fmt.to_sortable_date(ts).unwrap(),
            fmt.to_sortable_date(ts).unwrap()
        );
    }

    #[test]
    fn stale_weekday_token_is_tolerated() {
        // 25 Dec 2024 is a Wednesday; keys with a wrong-but-valid weekday
        // still parse, matching the source exporter's leniency.
        let fmt = yekaterinburg();
        assert_eq!(
            fmt.to_display("Mon, 25 Dec 2024 13:30:45 GMT").unwrap(),
            "25.12.2024 18:30:45"
        );
        assert_eq!(
            fmt.to_sortable_date("Mon, 25 Dec 2024 13:30:45 GMT").unwrap(),
            "2024-12-25"
        );
    }

    #[test]
    fn malformed_timestamp_is_an_error() {
        let fmt = yekaterinburg();
        for bad in [
            "2024-12-25T13:30:45Z",
            "not a date",
            "",
            "Wed, 25 Dec 2024",
            "Xyz, 25 Dec 2024 13:30:45 GMT",
            "Wednesday, 25 Dec 2024 13:30:45 GMT",
            "Wed, 25 Dec 2024 13:30:45 UTC",
        ] {
            let err = fmt.to_display(bad).unwrap_err();
            assert!(err.to_string().contains("does not match"), "{bad:?}: {err}");
            assert!(fmt.to_sortable_date(bad).is_err());
        }
    }
}
