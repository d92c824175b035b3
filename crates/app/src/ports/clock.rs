//! Clock port — where "today" comes from.

use peoplehub_domain::time::Date;

/// Supplies the reference date for age and salary computations.
pub trait Clock {
    /// The current calendar date.
    fn today(&self) -> Date;
}
