use time::{Date, OffsetDateTime};

/// `DD/MM/YYYY`
pub fn format_date(date: Date) -> String {
    format!(
        "{:02}/{:02}/{:04}",
        date.day(),
        u8::from(date.month()),
        date.year()
    )
}

/// Today's date in the local time zone, or UTC when the offset is unknown.
pub fn today() -> String {
    let now = OffsetDateTime::now_local().unwrap_or_else(|_| OffsetDateTime::now_utc());
    format_date(now.date())
}
