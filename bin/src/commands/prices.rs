//! Prices command implementation.

use anyhow::{Context, Result};
use fareline_lib::prelude::*;
use serde::Serialize;

use super::load_tickets;
use crate::Settings;
use crate::display::{self, Format};

#[derive(Serialize)]
struct PricesOutput<'a> {
    route: Option<&'a Route>,
    #[serde(flatten)]
    summary: PriceSummary,
    spread: String,
}

/// Show mean and median price over all tickets, or over one route.
pub(crate) fn prices(settings: &Settings, source: &Source, route: Option<&Route>) -> Result<()> {
    let tickets = load_tickets(source)?;

    let summary = match route {
        Some(route) => PriceSummary::compute(fareline_lib::on_route(&tickets, route))
            .with_context(|| format!("Cannot compute prices on {route}"))?,
        None => PriceSummary::compute(&tickets).context("Cannot compute prices")?,
    };

    match settings.format() {
        Format::Text => display::print_prices(&summary),
        Format::Json => display::print_json(&PricesOutput {
            route,
            spread: summary.spread().to_string(),
            summary,
        })?,
    }
    Ok(())
}
