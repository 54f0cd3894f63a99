//! Calendar date source for note creation.

use chrono::{NaiveDate, Utc};

/// Supplies the current calendar date.
pub trait Clock {
    fn today(&self) -> NaiveDate;
}

/// Wall clock; the date is taken in UTC.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Utc::now().date_naive()
    }
}

/// Clock pinned to one date, for deterministic callers and tests.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::{Clock, FixedClock};
    use chrono::NaiveDate;

    #[test]
    fn fixed_clock_returns_pinned_date() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        assert_eq!(FixedClock(date).today(), date);
    }
}
