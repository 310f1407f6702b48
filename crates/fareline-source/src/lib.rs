//! Ticket feed ingestion for fareline.
//!
//! Tickets arrive as a JSON document of the form `{"tickets": [...]}`,
//! either as inline text or as a named resource file:
//!
//! - [`TicketSource`] - Ingestion strategy trait
//! - [`InlineText`] - Feed supplied as a string
//! - [`NamedResource`] - Feed read from a file under a resource root
//! - [`Source`] - Tagged variant over both strategies
//!
//! # Example
//!
//! ```
//! use fareline_source::{Source, TicketSource};
//!
//! let source = Source::inline(r#"{"tickets": []}"#);
//! let tickets = source.read().unwrap();
//! assert!(tickets.is_empty());
//! ```

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/fareline/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod error;
mod feed;
mod source;

pub use error::SourceError;
pub use feed::parse_feed;
pub use source::{InlineText, NamedResource, Source, TicketSource};
