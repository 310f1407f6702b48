//! Durations command implementation.
//!
//! Prints the minimal timezone-corrected flight time of each carrier on a
//! route.

use anyhow::{Context, Result};
use fareline_lib::prelude::*;
use serde::Serialize;

use super::load_tickets;
use crate::Settings;
use crate::display::{self, Format};

#[derive(Serialize)]
struct DurationsOutput<'a> {
    route: &'a Route,
    carriers: &'a CarrierDurationMap,
}

/// Show the minimal flight time of each carrier flying `route`.
pub(crate) fn durations(settings: &Settings, source: &Source, route: &Route) -> Result<()> {
    let tickets = load_tickets(source)?;
    let durations = carrier_minimums(settings, &tickets, route)?;

    match settings.format() {
        Format::Text => display::print_durations(route, &durations),
        Format::Json => display::print_json(&DurationsOutput {
            route,
            carriers: &durations,
        })?,
    }
    Ok(())
}

/// Computes per-carrier minimal durations with the configured resolver.
pub(crate) fn carrier_minimums(
    settings: &Settings,
    tickets: &TicketSet,
    route: &Route,
) -> Result<CarrierDurationMap> {
    let aggregator = CarrierMinimumAggregator::new(DurationCalculator::new(settings.resolver()));
    aggregator
        .minimal_durations_on(tickets.as_slice(), route)
        .with_context(|| format!("Cannot compute flight times on {route}"))
}
