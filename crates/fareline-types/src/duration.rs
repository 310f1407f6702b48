//! Signed flight durations with hour and minute resolution.

use chrono::TimeDelta;
use serde::ser::{Serialize, SerializeStruct, Serializer};

/// A signed, timezone-corrected flight duration.
///
/// Durations are totally ordered by their signed length. Hours and minutes
/// are both truncated toward zero, so a duration of minus ninety minutes
/// reports `-1` hours and `-30` minutes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FlightDuration(TimeDelta);

impl FlightDuration {
    /// The zero-length duration.
    pub const ZERO: Self = Self(TimeDelta::zero());

    /// Wraps a chrono time delta.
    #[must_use]
    pub const fn new(delta: TimeDelta) -> Self {
        Self(delta)
    }

    /// Creates a duration from whole hours and minutes.
    #[must_use]
    pub fn from_hours_minutes(hours: i64, minutes: i64) -> Self {
        Self(TimeDelta::hours(hours) + TimeDelta::minutes(minutes))
    }

    /// Returns the underlying time delta.
    #[must_use]
    pub const fn as_delta(&self) -> TimeDelta {
        self.0
    }

    /// Returns the whole hours, truncated toward zero.
    #[must_use]
    pub const fn hours(&self) -> i64 {
        self.0.num_hours()
    }

    /// Returns the minute remainder after [`hours`](Self::hours).
    #[must_use]
    pub const fn minutes(&self) -> i64 {
        self.0.num_minutes() % 60
    }

    /// Returns the total length in minutes, truncated toward zero.
    #[must_use]
    pub const fn total_minutes(&self) -> i64 {
        self.0.num_minutes()
    }

    /// Returns true if the duration is negative.
    #[must_use]
    pub fn is_negative(&self) -> bool {
        self.0 < TimeDelta::zero()
    }
}

impl From<TimeDelta> for FlightDuration {
    fn from(delta: TimeDelta) -> Self {
        Self(delta)
    }
}

impl From<FlightDuration> for TimeDelta {
    fn from(duration: FlightDuration) -> Self {
        duration.0
    }
}

impl std::ops::Add<TimeDelta> for FlightDuration {
    type Output = Self;

    fn add(self, rhs: TimeDelta) -> Self::Output {
        Self(self.0 + rhs)
    }
}

impl std::fmt::Display for FlightDuration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_negative() && self.hours() == 0 {
            // `-0h` carries the sign when only the minutes are negative
            write!(f, "-0h {}m", self.minutes().abs())
        } else {
            write!(f, "{}h {}m", self.hours(), self.minutes().abs())
        }
    }
}

impl Serialize for FlightDuration {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("FlightDuration", 3)?;
        state.serialize_field("hours", &self.hours())?;
        state.serialize_field("minutes", &self.minutes())?;
        state.serialize_field("total_minutes", &self.total_minutes())?;
        state.end()
    }
}
