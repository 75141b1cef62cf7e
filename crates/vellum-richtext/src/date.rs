//! JST date formatting for article timestamps.
//!
//! Shared by the renderer's embedded article cards and the site's page
//! assembly, so card dates and page dates cannot drift apart.

use chrono::{DateTime, FixedOffset};

const JST_OFFSET_SECS: i32 = 9 * 3600;

/// Format an RFC 3339 timestamp as a JST date string,
/// e.g. `2023年04月01日 09:30`.
///
/// Returns `None` when the timestamp does not parse.
#[must_use]
pub fn format_jst(timestamp: &str) -> Option<String> {
    let parsed = DateTime::parse_from_rfc3339(timestamp).ok()?;
    let jst = FixedOffset::east_opt(JST_OFFSET_SECS)?;
    Some(
        parsed
            .with_timezone(&jst)
            .format("%Y年%m月%d日 %H:%M")
            .to_string(),
    )
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_utc_timestamp_shifts_into_jst() {
        assert_eq!(
            format_jst("2023-04-01T00:30:00Z").as_deref(),
            Some("2023年04月01日 09:30")
        );
    }

    #[test]
    fn test_date_rolls_over_at_jst_midnight() {
        assert_eq!(
            format_jst("2023-12-31T15:00:00Z").as_deref(),
            Some("2024年01月01日 00:00")
        );
    }

    #[test]
    fn test_unparseable_timestamp_is_none() {
        assert_eq!(format_jst("not a date"), None);
    }
}
