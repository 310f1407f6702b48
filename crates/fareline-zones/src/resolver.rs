//! Whole-hour UTC offset resolution.

use chrono::{DateTime, Offset, TimeDelta, TimeZone, Utc};
use fareline_types::{FarelineError, Result};

use crate::TimezoneTable;

/// Reference instant at which zone offsets are evaluated.
///
/// Offsets are always taken at this instant, never at a ticket's travel
/// date, so a flight booked across a daylight saving change resolves with
/// today's rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Clock {
    /// The system clock, read on every resolution.
    #[default]
    Now,
    /// A pinned instant.
    Fixed(DateTime<Utc>),
}

impl Clock {
    /// Returns the instant offsets are evaluated at.
    #[must_use]
    pub fn instant(&self) -> DateTime<Utc> {
        match self {
            Self::Now => Utc::now(),
            Self::Fixed(instant) => *instant,
        }
    }
}

/// Resolves airport/city codes to UTC offsets in whole hours.
#[derive(Debug, Clone, Copy)]
pub struct OffsetResolver<'a> {
    table: &'a TimezoneTable,
    clock: Clock,
}

impl OffsetResolver<'static> {
    /// Creates a resolver over the global table using the system clock.
    #[must_use]
    pub fn current() -> Self {
        Self::new(TimezoneTable::global(), Clock::Now)
    }
}

impl<'a> OffsetResolver<'a> {
    /// Creates a resolver over `table` evaluated at `clock`.
    #[must_use]
    pub const fn new(table: &'a TimezoneTable, clock: Clock) -> Self {
        Self { table, clock }
    }

    /// Returns the same resolver evaluated at a different clock.
    #[must_use]
    pub const fn with_clock(self, clock: Clock) -> Self {
        Self { clock, ..self }
    }

    /// Returns the table this resolver reads from.
    #[must_use]
    pub const fn table(&self) -> &'a TimezoneTable {
        self.table
    }

    /// Returns the clock offsets are evaluated at.
    #[must_use]
    pub const fn clock(&self) -> Clock {
        self.clock
    }

    /// Resolves the UTC offset of `code` in whole hours.
    ///
    /// Lookup is case-insensitive. Fractional offsets are truncated toward
    /// zero (`+05:30` resolves to `5`).
    ///
    /// # Errors
    ///
    /// Returns [`FarelineError::UnknownLocation`] if the code is not in
    /// the table.
    pub fn resolve(&self, code: &str) -> Result<i32> {
        self.resolve_at(code, self.clock.instant())
    }

    /// Returns `resolve(origin) - resolve(destination)` in whole hours.
    ///
    /// Both offsets are taken at the same instant.
    ///
    /// # Errors
    ///
    /// Returns [`FarelineError::UnknownLocation`] if either code is not in
    /// the table.
    pub fn correction(&self, origin: &str, destination: &str) -> Result<i32> {
        let instant = self.clock.instant();
        let correction = self.resolve_at(origin, instant)? - self.resolve_at(destination, instant)?;
        tracing::trace!(origin, destination, correction, "timezone correction");
        Ok(correction)
    }

    /// Returns [`correction`](Self::correction) as a time delta.
    ///
    /// # Errors
    ///
    /// Returns [`FarelineError::UnknownLocation`] if either code is not in
    /// the table.
    pub fn correction_delta(&self, origin: &str, destination: &str) -> Result<TimeDelta> {
        self.correction(origin, destination)
            .map(|hours| TimeDelta::hours(i64::from(hours)))
    }

    fn resolve_at(&self, code: &str, instant: DateTime<Utc>) -> Result<i32> {
        let tz = self
            .table
            .get(code)
            .ok_or_else(|| FarelineError::UnknownLocation(code.to_string()))?;
        let seconds = tz
            .offset_from_utc_datetime(&instant.naive_utc())
            .fix()
            .local_minus_utc();
        Ok(seconds / 3600)
    }
}
