use std::{fmt, str::FromStr};

/// A civil calendar date, as stored in `date` columns.
///
/// Only the `YYYY-MM-DD` form is understood, which is what both HTML date
/// inputs submit and what PostgreSQL emits for `date::text`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Date {
    year: i32,
    month: u32,
    day: u32,
}

impl Date {
    pub const fn new(year: i32, month: u32, day: u32) -> Self {
        Self { year, month, day }
    }

    /// Parses a `YYYY-MM-DD` string.
    ///
    /// Returns `None` for an empty string or anything that is not three
    /// hyphen-separated integers.
    pub fn parse(src: &str) -> Option<Date> {
        let src = src.trim();
        if src.is_empty() {
            return None;
        }

        let mut parts = src.splitn(3, '-');
        let year = parts.next()?.parse().ok()?;
        let month = parts.next()?.parse().ok()?;
        let day = parts.next()?.parse().ok()?;

        Some(Date::new(year, month, day))
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn day(&self) -> u32 {
        self.day
    }

    /// Number of whole years between this date and `today`.
    pub fn age_on(&self, today: Date) -> i32 {
        let mut years = today.year - self.year;
        if (today.month, today.day) < (self.month, self.day) {
            years -= 1;
        }
        years
    }
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

impl FromStr for Date {
    type Err = crate::Error;

    fn from_str(s: &str) -> crate::Result<Date> {
        Date::parse(s).ok_or_else(|| crate::err!("invalid date `{s}`; expected YYYY-MM-DD"))
    }
}
