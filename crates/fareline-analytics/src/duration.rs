//! Timezone-corrected flight durations.

use fareline_types::{FlightDuration, Result, Ticket};
use fareline_zones::OffsetResolver;

/// Computes flight durations corrected for the origin/destination
/// timezone difference.
///
/// Ticket times are local wall-clock times. The raw `arrival - departure`
/// interval is corrected by `offset(origin) - offset(destination)` whole
/// hours, so half-hour zones contribute only their whole-hour part.
#[derive(Debug, Clone, Copy)]
pub struct DurationCalculator<'a> {
    resolver: OffsetResolver<'a>,
}

impl DurationCalculator<'static> {
    /// Creates a calculator over the global table using the system clock.
    #[must_use]
    pub fn current() -> Self {
        Self::new(OffsetResolver::current())
    }
}

impl<'a> DurationCalculator<'a> {
    /// Creates a calculator using the given offset resolver.
    #[must_use]
    pub const fn new(resolver: OffsetResolver<'a>) -> Self {
        Self { resolver }
    }

    /// Returns the offset resolver.
    #[must_use]
    pub const fn resolver(&self) -> &OffsetResolver<'a> {
        &self.resolver
    }

    /// Returns the corrected flight duration of a ticket.
    ///
    /// Negative durations (arrival before departure) are returned as-is.
    ///
    /// # Errors
    ///
    /// Returns [`MalformedTicket`](fareline_types::FarelineError::MalformedTicket)
    /// if a date or time field does not parse, and
    /// [`UnknownLocation`](fareline_types::FarelineError::UnknownLocation) if
    /// either airport is missing from the timezone table.
    pub fn duration(&self, ticket: &Ticket) -> Result<FlightDuration> {
        let departure = ticket.departure()?;
        let arrival = ticket.arrival()?;
        let correction = self
            .resolver
            .correction_delta(&ticket.origin, &ticket.destination)?;

        let duration = FlightDuration::new(arrival - departure) + correction;
        tracing::trace!(
            carrier = %ticket.carrier,
            origin = %ticket.origin,
            destination = %ticket.destination,
            %duration,
            "flight duration"
        );
        Ok(duration)
    }
}
