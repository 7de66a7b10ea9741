use chrono::{DateTime, NaiveDate};

const ISO_DATE: &str = "%Y-%m-%d";
const READABLE_DATE: &str = "%a %b %d %Y";

/// Parses a calendar date from either `YYYY-MM-DD` or an RFC 3339 timestamp.
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    NaiveDate::parse_from_str(raw, ISO_DATE)
        .ok()
        .or_else(|| DateTime::parse_from_rfc3339(raw).ok().map(|dt| dt.date_naive()))
}

/// Renders a date as weekday, month, day and year, e.g. `Sun Jan 15 2023`.
pub fn readable_date(date: NaiveDate) -> String {
    date.format(READABLE_DATE).to_string()
}

/// Serde adapter for dates rendered with [`readable_date`].
pub mod readable {
    use chrono::NaiveDate;
    use serde::Serializer;

    pub fn serialize<S>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&super::readable_date(*date))
    }
}
