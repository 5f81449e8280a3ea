//! Clock formatting
//!
//! `chrono` is built without `alloc`, so there is no `strftime`. Each display
//! string is a small `Display` wrapper that writes straight into a label.

use core::fmt;

use chrono::{Datelike, FixedOffset, NaiveDate, NaiveDateTime, TimeZone, Timelike};

const WEEKDAYS: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];
const MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Local time as `HH:MM` (24h) or `II:MM` (12h)
pub struct LocalTime {
    pub time: NaiveDateTime,
    pub is_24h: bool,
}

impl fmt::Display for LocalTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let hour = if self.is_24h {
            self.time.hour()
        } else {
            self.time.hour12().1
        };
        write!(f, "{:02}:{:02}", hour, self.time.minute())
    }
}

/// UTC time as `HH:MM UTC`
pub struct UtcTime(pub NaiveDateTime);

impl fmt::Display for UtcTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02} UTC", self.0.hour(), self.0.minute())
    }
}

/// Date as `Sun 03 Mar`
pub struct DisplayDate(pub NaiveDate);

impl fmt::Display for DisplayDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let date = self.0;
        write!(
            f,
            "{} {:02} {}",
            WEEKDAYS[date.weekday().num_days_from_monday() as usize],
            date.day(),
            MONTHS[date.month0() as usize],
        )
    }
}

/// Convert a local wall-clock time to UTC
pub fn to_utc(local: NaiveDateTime, offset: FixedOffset) -> NaiveDateTime {
    // A fixed offset never has gaps or folds
    offset
        .from_local_datetime(&local)
        .single()
        .map_or(local, |datetime| datetime.naive_utc())
}
