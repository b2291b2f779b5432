//! XMLTV time formatting and guide request dates.
//!
//! Output timestamps are always rendered in UTC with a literal `+0000`
//! offset. Guide request dates are computed from the *local* calendar date,
//! so near local midnight "today" for the request and "today" in the output
//! can differ by one day.

use chrono::{DateTime, Days, Local, NaiveDate, Utc};

/// Format an instant for XMLTV.
///
/// - full form: `YYYYMMDDhhmmss +0000`
/// - date-only form: `YYYYMMDD`
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use npo2xml_core::time::format_timestamp;
///
/// let t = Utc.with_ymd_and_hms(2024, 1, 5, 13, 7, 9).unwrap();
/// assert_eq!(format_timestamp(&t, false), "20240105130709 +0000");
/// assert_eq!(format_timestamp(&t, true), "20240105");
/// ```
pub fn format_timestamp(instant: &DateTime<Utc>, date_only: bool) -> String {
    if date_only {
        instant.format("%Y%m%d").to_string()
    } else {
        instant.format("%Y%m%d%H%M%S +0000").to_string()
    }
}

/// Today's date in the process's local timezone.
pub fn local_today() -> NaiveDate {
    Local::now().date_naive()
}

/// The `DD-MM-YYYY` date string the guide API expects for `today + offset`.
pub fn guide_date(today: NaiveDate, offset_days: u32) -> String {
    let date = today
        .checked_add_days(Days::new(u64::from(offset_days)))
        .unwrap_or(today);
    date.format("%d-%m-%Y").to_string()
}
