//! Benchmark utilities for fareline.
//!
//! Generates synthetic ticket feeds of arbitrary size so the analytics can be
//! measured without fixture files.

use chrono::{DateTime, TimeZone, Utc};
use fareline_lib::{Clock, OffsetResolver, TimezoneTable};

/// Carriers cycled through by the generated feed.
pub const CARRIERS: [&str; 5] = ["TK", "S7", "SU", "BA", "LH"];

/// Routes cycled through by the generated feed.
pub const ROUTES: [(&str, &str); 4] = [
    ("VVO", "TLV"),
    ("LRN", "TLV"),
    ("VVO", "UFA"),
    ("JFK", "NRT"),
];

/// Builds a feed document with `count` tickets.
///
/// Departure and arrival times, carriers and prices vary with the ticket
/// index; every ticket is well formed and flies a route in [`ROUTES`].
#[must_use]
pub fn synthetic_feed(count: usize) -> String {
    let tickets: Vec<String> = (0..count).map(synthetic_ticket).collect();
    format!("{{\"tickets\": [{}]}}", tickets.join(","))
}

fn synthetic_ticket(index: usize) -> String {
    let (origin, destination) = ROUTES[index % ROUTES.len()];
    let carrier = CARRIERS[index % CARRIERS.len()];
    let departure_hour = index % 12;
    let arrival_hour = departure_hour + 1 + index % 11;
    let minutes = (index * 7) % 60;
    let price = 5_000 + (index * 37) % 30_000;

    format!(
        r#"{{"origin":"{origin}","origin_name":"","destination":"{destination}","destination_name":"","departure_date":"12.05.18","departure_time":"{departure_hour:02}:{minutes:02}","arrival_date":"12.05.18","arrival_time":"{arrival_hour:02}:{minutes:02}","carrier":"{carrier}","stops":{},"price":{price}}}"#,
        index % 4
    )
}

/// Instant the benchmarks pin zone offsets to.
#[must_use]
pub fn pinned_instant() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 7, 15, 12, 0, 0)
        .single()
        .unwrap_or(DateTime::UNIX_EPOCH)
}

/// Resolver over the embedded table at [`pinned_instant`].
#[must_use]
pub fn pinned_resolver() -> OffsetResolver<'static> {
    OffsetResolver::new(TimezoneTable::global(), Clock::Fixed(pinned_instant()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use fareline_lib::prelude::*;

    #[test]
    fn test_synthetic_feed_parses() {
        let tickets = Source::inline(synthetic_feed(100)).read().unwrap();
        assert_eq!(tickets.len(), 100);
        assert_eq!(tickets.as_slice()[0].carrier, "TK");
        assert_eq!(tickets.as_slice()[1].origin, "LRN");
    }

    #[test]
    fn test_synthetic_feed_is_analyzable() {
        let tickets = Source::inline(synthetic_feed(40)).read().unwrap();
        let aggregator = CarrierMinimumAggregator::new(DurationCalculator::new(pinned_resolver()));
        let durations = aggregator
            .minimal_durations_by_carrier(tickets.as_slice(), "VVO", "TLV")
            .unwrap();
        assert!(!durations.is_empty());
        assert!(PriceSummary::compute(&tickets).is_ok());
    }
}
