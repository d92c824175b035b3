//! Clock implementations.

use peoplehub_domain::time::{self, Date};

use crate::ports::Clock;

/// Reads the host's local calendar date.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> Date {
        time::today()
    }
}

/// Always reports the same date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub Date);

impl Clock for FixedClock {
    fn today(&self) -> Date {
        self.0
    }
}

/// Either of the built-in clocks, picked at startup.
#[derive(Debug, Clone, Copy)]
pub enum AnyClock {
    System(SystemClock),
    Fixed(FixedClock),
}

impl AnyClock {
    /// A fixed clock when `date` is given, the system clock otherwise.
    #[must_use]
    pub fn from_fixed_date(date: Option<Date>) -> Self {
        date.map_or(Self::System(SystemClock), |date| Self::Fixed(FixedClock(date)))
    }
}

impl Clock for AnyClock {
    fn today(&self) -> Date {
        match self {
            Self::System(clock) => clock.today(),
            Self::Fixed(clock) => clock.today(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn should_report_pinned_date_when_fixed() {
        let date = NaiveDate::from_ymd_opt(2023, 2, 7).unwrap();
        assert_eq!(FixedClock(date).today(), date);
        assert_eq!(AnyClock::from_fixed_date(Some(date)).today(), date);
    }

    #[test]
    fn should_follow_host_calendar_when_not_fixed() {
        let before = time::today();
        let today = AnyClock::from_fixed_date(None).today();
        let after = time::today();
        assert!(today >= before);
        assert!(today <= after);
    }
}
