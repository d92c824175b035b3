//! Salary accrual model and output strategies.
//!
//! A salary starts from a fixed base and, for each completed year of service,
//! is multiplied by an annual factor and then increased by a flat bonus. The
//! bonus is added after the multiplication, so the years compound in sequence
//! rather than through a closed-form power.

use std::fmt;
use std::str::FromStr;

use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;

use crate::error::InvalidParameterError;
use crate::time::{Date, whole_years_between};

/// Constants driving the accrual model.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SalaryPolicy {
    pub base_salary: Decimal,
    pub annual_multiplier: Decimal,
    pub annual_bonus: Decimal,
    pub minimum_wage: Decimal,
}

impl SalaryPolicy {
    /// Reference values every salary figure is computed against.
    pub const REFERENCE: Self = Self {
        base_salary: dec!(1558.00),
        annual_multiplier: dec!(1.18),
        annual_bonus: dec!(500.00),
        minimum_wage: dec!(1302.00),
    };

    /// Whole completed years between `admission_date` and `today`.
    ///
    /// Admission dates in the future count as zero years.
    #[must_use]
    pub fn years_of_service(admission_date: Date, today: Date) -> u32 {
        u32::try_from(whole_years_between(admission_date, today).max(0)).unwrap_or(u32::MAX)
    }

    /// Salary after `years` completed years of service.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidParameterError::SalaryOutOfRange`] when the compounded
    /// value no longer fits in a [`Decimal`].
    pub fn accrue(&self, years: u32) -> Result<Decimal, InvalidParameterError> {
        (0..years)
            .try_fold(self.base_salary, |salary, _| {
                salary
                    .checked_mul(self.annual_multiplier)?
                    .checked_add(self.annual_bonus)
            })
            .ok_or(InvalidParameterError::SalaryOutOfRange { years })
    }

    /// Salary of someone admitted on `admission_date`, as of `today`.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidParameterError::SalaryOutOfRange`] for admissions so
    /// far in the past that the salary overflows.
    pub fn current_salary(
        &self,
        admission_date: Date,
        today: Date,
    ) -> Result<Decimal, InvalidParameterError> {
        self.accrue(Self::years_of_service(admission_date, today))
    }
}

impl Default for SalaryPolicy {
    fn default() -> Self {
        Self::REFERENCE
    }
}

/// How a computed salary is reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SalaryFormat {
    /// Absolute amount, rounded up to the cent.
    Full,
    /// Multiples of the minimum wage, rounded up to two decimals.
    Min,
}

impl SalaryFormat {
    /// All supported formats, in their canonical order.
    pub const ALL: [Self; 2] = [Self::Full, Self::Min];

    /// Canonical lowercase name used on the wire.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Full => "full",
            Self::Min => "min",
        }
    }

    /// Render `salary` in this format.
    #[must_use]
    pub fn apply(self, salary: Decimal, minimum_wage: Decimal) -> Decimal {
        let value = match self {
            Self::Full => salary,
            Self::Min => salary / minimum_wage,
        };
        value.round_dp_with_strategy(2, RoundingStrategy::ToPositiveInfinity)
    }
}

impl fmt::Display for SalaryFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SalaryFormat {
    type Err = InvalidParameterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|format| format.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| InvalidParameterError::UnknownSalaryFormat(s.to_string()))
    }
}
