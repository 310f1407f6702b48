//! Report command implementation.
//!
//! Runs the full analysis: carrier flight times on a route, then price
//! statistics over every ticket in the feed.

use anyhow::{Context, Result};
use fareline_lib::prelude::*;
use serde::Serialize;

use super::durations::carrier_minimums;
use super::load_tickets;
use crate::Settings;
use crate::display::{self, Format};

#[derive(Serialize)]
struct ReportOutput<'a> {
    tickets: usize,
    route: &'a Route,
    carriers: &'a CarrierDurationMap,
    prices: PriceSummary,
    spread: String,
}

/// Show carrier flight times on `route` and price statistics for the feed.
pub(crate) fn report(settings: &Settings, source: &Source, route: &Route) -> Result<()> {
    let tickets = load_tickets(source)?;
    let durations = carrier_minimums(settings, &tickets, route)?;
    let prices = PriceSummary::compute(&tickets).context("Cannot compute prices")?;

    match settings.format() {
        Format::Text => {
            display::print_durations(route, &durations);
            display::print_prices(&prices);
        }
        Format::Json => display::print_json(&ReportOutput {
            tickets: tickets.len(),
            route,
            carriers: &durations,
            spread: prices.spread().to_string(),
            prices,
        })?,
    }
    Ok(())
}
