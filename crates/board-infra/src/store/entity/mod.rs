//! SeaORM entities for the relational backend.
//!
//! All columns are stored as TEXT, matching the persisted layout; the
//! conversions below map between the TEXT rows and the domain types.

pub mod post;
pub mod user;

use chrono::{DateTime, SecondsFormat, Utc};

/// Render a timestamp the way it is stored: RFC 3339, millisecond
/// precision, `Z` suffix.
pub(crate) fn format_ts(ts: DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Parse a stored timestamp. A malformed value falls back to now rather
/// than poisoning the whole row.
pub(crate) fn parse_ts(s: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(s)
        .map(|t| t.with_timezone(&Utc))
        .unwrap_or_else(|_| {
            tracing::warn!(value = s, "unparseable stored timestamp");
            Utc::now()
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn timestamps_round_trip_through_text() {
        let ts = Utc.with_ymd_and_hms(2024, 2, 29, 15, 0, 0).unwrap();
        let rendered = format_ts(ts);
        assert_eq!(rendered, "2024-02-29T15:00:00.000Z");
        assert_eq!(parse_ts(&rendered), ts);
    }
}
