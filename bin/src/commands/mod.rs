//! CLI command implementations.

pub(crate) mod durations;
pub(crate) mod prices;
pub(crate) mod report;
pub(crate) mod zones;

use anyhow::{Context, Result};
use fareline_lib::prelude::*;

/// Reads the full ticket set from a source.
pub(crate) fn load_tickets(source: &Source) -> Result<TicketSet> {
    let tickets = source
        .read()
        .with_context(|| format!("Cannot read tickets from {}", source.describe()))?;
    tracing::info!("Successfully parsed {} tickets.", tickets.len());
    Ok(tickets)
}
