//! Core types for the fareline flight ticket analytics toolkit.
//!
//! This crate provides the data model shared by every fareline crate:
//!
//! - [`Ticket`] - A single flight ticket as supplied by the feed
//! - [`TicketSet`] - An ordered ticket collection (the feed document)
//! - [`Route`] - Origin/destination filter key
//! - [`FlightDuration`] - Signed, timezone-corrected flight duration
//! - [`FarelineError`] - Error taxonomy for the analytics

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/fareline/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod duration;
mod error;
mod route;
mod ticket;

pub use duration::FlightDuration;
pub use error::{FarelineError, Result, TicketField};
pub use route::Route;
pub use ticket::{DATE_FORMAT, TIME_FORMAT, Ticket, TicketSet};
