//! Flight ticket analytics: timezone-corrected durations and price
//! statistics.
//!
//! This is a facade crate that re-exports functionality from the fareline
//! workspace crates for convenient access.
//!
//! # Quick Start
//!
//! ```
//! use fareline_lib::prelude::*;
//!
//! fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
//!     let feed = r#"{"tickets": [{
//!         "origin": "VVO", "origin_name": "Владивосток",
//!         "destination": "TLV", "destination_name": "Тель-Авив",
//!         "departure_date": "12.05.18", "departure_time": "16:20",
//!         "arrival_date": "12.05.18", "arrival_time": "22:10",
//!         "carrier": "TK", "stops": 3, "price": 12400
//!     }]}"#;
//!     let tickets = Source::inline(feed).read()?;
//!
//!     let durations = CarrierMinimumAggregator::current()
//!         .minimal_durations_by_carrier(tickets.as_slice(), "VVO", "TLV")?;
//!     for (carrier, duration) in &durations {
//!         println!("{carrier}: {duration}");
//!     }
//!
//!     println!("median price: {}", median(&tickets)?);
//!     Ok(())
//! }
//! ```

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/fareline/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Re-export core types
pub use fareline_types::*;

// Re-export timezone resolution
pub use fareline_zones::{Clock, OffsetResolver, TimezoneTable, ZoneTableError};

// Re-export ingestion
#[cfg(feature = "source")]
pub use fareline_source::{
    InlineText, NamedResource, Source, SourceError, TicketSource, parse_feed,
};

// Re-export analytics
#[cfg(feature = "analytics")]
pub use fareline_analytics::{
    CarrierDurationMap, CarrierMinimumAggregator, DurationCalculator, PriceSummary, mean,
    median, on_route, with_route,
};

/// Prelude module for convenient imports.
///
/// ```
/// use fareline_lib::prelude::*;
/// ```
pub mod prelude {
    pub use fareline_types::{
        FarelineError, FlightDuration, Result, Route, Ticket, TicketField, TicketSet,
    };

    pub use fareline_zones::{Clock, OffsetResolver, TimezoneTable};

    #[cfg(feature = "source")]
    pub use fareline_source::{Source, SourceError, TicketSource};

    #[cfg(feature = "analytics")]
    pub use fareline_analytics::{
        CarrierDurationMap, CarrierMinimumAggregator, DurationCalculator, PriceSummary, mean,
        median, with_route,
    };
}
