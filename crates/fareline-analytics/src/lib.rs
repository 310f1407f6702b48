//! Flight duration and ticket price analytics for fareline.
//!
//! This crate provides the analytics over a ticket set:
//!
//! - [`with_route`] - Exact origin/destination ticket filtering
//! - [`DurationCalculator`] - Timezone-corrected flight duration of one ticket
//! - [`CarrierMinimumAggregator`] - Shortest flight per carrier on a route
//! - [`mean`] / [`median`] - Exact-decimal price statistics

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/fareline/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod carrier;
mod duration;
mod filter;
mod stats;

#[cfg(test)]
mod fixtures;

pub use carrier::{CarrierDurationMap, CarrierMinimumAggregator};
pub use duration::DurationCalculator;
pub use filter::{on_route, with_route};
pub use stats::{PriceSummary, mean, median};
