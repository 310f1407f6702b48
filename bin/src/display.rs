//! Display utilities and output formatting for the fareline CLI.

use anyhow::Result;
use clap::ValueEnum;
use fareline_lib::prelude::*;
use serde::Serialize;

/// Output format for command results.
#[derive(Clone, Copy, ValueEnum)]
pub(crate) enum Format {
    Text,
    Json,
}

/// Prints a value as pretty JSON on stdout.
pub(crate) fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Prints the minimal flight time of each carrier.
pub(crate) fn print_durations(route: &Route, durations: &CarrierDurationMap) {
    if durations.is_empty() {
        println!("No carriers fly {route}.");
        return;
    }

    for (carrier, duration) in durations {
        println!(
            "Carrier: {carrier}, minimal flight time: {} hours {} min",
            duration.hours(),
            duration.minutes()
        );
    }
}

/// Prints mean, median and their difference.
pub(crate) fn print_prices(summary: &PriceSummary) {
    println!("Average price: {}", summary.mean);
    println!("Median price: {}", summary.median);
    println!("Average price - median price: {}", summary.spread());
}
