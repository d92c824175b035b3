//! Age strategies — how many days, months, or years someone has lived.

use std::fmt;
use std::str::FromStr;

use crate::error::InvalidParameterError;
use crate::time::{Date, whole_months_between, whole_years_between};

/// Unit in which an age is reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AgeFormat {
    /// Whole calendar days.
    Days,
    /// Whole calendar months.
    Months,
    /// Whole completed years.
    Years,
}

impl AgeFormat {
    /// All supported formats, in their canonical order.
    pub const ALL: [Self; 3] = [Self::Days, Self::Months, Self::Years];

    /// Canonical lowercase name used on the wire.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Days => "days",
            Self::Months => "months",
            Self::Years => "years",
        }
    }

    /// Age of someone born on `birth_date`, as of `today`.
    #[must_use]
    pub fn compute(self, birth_date: Date, today: Date) -> i64 {
        match self {
            Self::Days => (today - birth_date).num_days(),
            Self::Months => whole_months_between(birth_date, today),
            Self::Years => whole_years_between(birth_date, today),
        }
    }
}

impl fmt::Display for AgeFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AgeFormat {
    type Err = InvalidParameterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|format| format.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| InvalidParameterError::UnknownAgeFormat(s.to_string()))
    }
}
