//! Per-carrier minimal flight durations on a route.

use std::collections::BTreeMap;

use fareline_types::{FlightDuration, Result, Route, Ticket};

use crate::DurationCalculator;
use crate::filter::with_route;

/// Minimal corrected flight duration per carrier code.
pub type CarrierDurationMap = BTreeMap<String, FlightDuration>;

/// Selects, for each carrier, the shortest corrected flight on a route.
#[derive(Debug, Clone, Copy)]
pub struct CarrierMinimumAggregator<'a> {
    calculator: DurationCalculator<'a>,
}

impl CarrierMinimumAggregator<'static> {
    /// Creates an aggregator over the global table using the system clock.
    #[must_use]
    pub fn current() -> Self {
        Self::new(DurationCalculator::current())
    }
}

impl<'a> CarrierMinimumAggregator<'a> {
    /// Creates an aggregator using the given duration calculator.
    #[must_use]
    pub const fn new(calculator: DurationCalculator<'a>) -> Self {
        Self { calculator }
    }

    /// Returns the minimal corrected duration of every carrier flying
    /// `origin` to `destination`.
    ///
    /// Carriers without a matching ticket are absent from the map, and a
    /// route nobody flies yields an empty map. When two tickets of a
    /// carrier tie, the first one encountered wins. Tickets off the route
    /// are never parsed.
    ///
    /// # Errors
    ///
    /// Fails on the first matching ticket whose duration cannot be
    /// computed; no partial map is returned.
    pub fn minimal_durations_by_carrier(
        &self,
        tickets: &[Ticket],
        origin: &str,
        destination: &str,
    ) -> Result<CarrierDurationMap> {
        let mut groups: BTreeMap<&str, CarrierGroup<'_>> = BTreeMap::new();
        for ticket in with_route(tickets, origin, destination) {
            groups
                .entry(ticket.carrier.as_str())
                .and_modify(|group| group.rest.push(ticket))
                .or_insert_with(|| CarrierGroup::new(ticket));
        }

        let mut minimums = CarrierDurationMap::new();
        for (carrier, group) in groups {
            let fastest = group.fastest(&self.calculator)?;
            tracing::debug!(carrier, tickets = group.len(), %fastest, "carrier minimum");
            minimums.insert(carrier.to_string(), fastest);
        }

        tracing::debug!(origin, destination, carriers = minimums.len(), "route aggregated");
        Ok(minimums)
    }

    /// Same as [`minimal_durations_by_carrier`](Self::minimal_durations_by_carrier)
    /// keyed by a [`Route`].
    ///
    /// # Errors
    ///
    /// See [`minimal_durations_by_carrier`](Self::minimal_durations_by_carrier).
    pub fn minimal_durations_on(
        &self,
        tickets: &[Ticket],
        route: &Route,
    ) -> Result<CarrierDurationMap> {
        self.minimal_durations_by_carrier(tickets, &route.origin, &route.destination)
    }
}

/// The tickets of one carrier; a group always holds at least one ticket.
#[derive(Debug)]
struct CarrierGroup<'t> {
    first: &'t Ticket,
    rest: Vec<&'t Ticket>,
}

impl<'t> CarrierGroup<'t> {
    const fn new(first: &'t Ticket) -> Self {
        Self {
            first,
            rest: Vec::new(),
        }
    }

    fn len(&self) -> usize {
        1 + self.rest.len()
    }

    /// Returns the shortest duration in the group, keeping the earliest
    /// ticket on ties.
    fn fastest(&self, calculator: &DurationCalculator<'_>) -> Result<FlightDuration> {
        let mut fastest = calculator.duration(self.first)?;
        for ticket in &self.rest {
            let duration = calculator.duration(ticket)?;
            if duration < fastest {
                fastest = duration;
            }
        }
        Ok(fastest)
    }
}
