//! Zones command implementation.
//!
//! This module lists the timezone table with each code's resolved offset.

use anyhow::Result;
use serde::Serialize;

use crate::Settings;
use crate::display::{self, Format};

#[derive(Serialize)]
struct ZoneRow<'a> {
    code: &'a str,
    zone: &'a str,
    offset_hours: i32,
}

/// List every code in the timezone table with its whole-hour UTC offset.
pub(crate) fn list_zones(settings: &Settings) -> Result<()> {
    let resolver = settings.resolver();
    let rows = resolver
        .table()
        .entries()
        .into_iter()
        .map(|(code, tz)| -> Result<ZoneRow<'_>> {
            Ok(ZoneRow {
                code,
                zone: tz.name(),
                offset_hours: resolver.resolve(code)?,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    match settings.format() {
        Format::Text => {
            if rows.is_empty() {
                println!("No zones found.");
                return Ok(());
            }

            println!("{:<6} {:<24} {:>6}", "CODE", "ZONE", "OFFSET");
            println!("{}", "-".repeat(38));
            for row in &rows {
                println!("{:<6} {:<24} {:>+6}", row.code, row.zone, row.offset_hours);
            }
            println!("\nTotal: {} zones", rows.len());
        }
        Format::Json => display::print_json(&rows)?,
    }
    Ok(())
}
