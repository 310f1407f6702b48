//! Ticket fixtures shared by the unit tests.

use chrono::{TimeZone, Utc};
use fareline_types::Ticket;
use fareline_zones::{Clock, OffsetResolver};

/// Builds a ticket departing and arriving on 12.05.18.
pub(crate) fn ticket(
    origin: &str,
    destination: &str,
    departure_time: &str,
    arrival_time: &str,
    carrier: &str,
    price: &str,
) -> Ticket {
    Ticket {
        origin: origin.to_string(),
        origin_name: String::new(),
        destination: destination.to_string(),
        destination_name: String::new(),
        departure_date: "12.05.18".to_string(),
        departure_time: departure_time.to_string(),
        arrival_date: "12.05.18".to_string(),
        arrival_time: arrival_time.to_string(),
        carrier: carrier.to_string(),
        stops: 1,
        price: price.to_string(),
    }
}

pub(crate) fn vvo_tlv_tk() -> Ticket {
    ticket("VVO", "TLV", "16:20", "22:10", "TK", "12400")
}

pub(crate) fn vvo_tlv_s7() -> Ticket {
    ticket("VVO", "TLV", "17:20", "23:50", "S7", "13100")
}

pub(crate) fn vvo_ufa() -> Ticket {
    ticket("VVO", "UFA", "15:15", "17:45", "TK", "33400")
}

pub(crate) fn lrn_tlv() -> Ticket {
    ticket("LRN", "TLV", "12:50", "14:30", "SU", "7000")
}

/// The four-ticket feed used throughout the tests.
pub(crate) fn sample() -> Vec<Ticket> {
    vec![vvo_tlv_tk(), vvo_tlv_s7(), vvo_ufa(), lrn_tlv()]
}

/// Resolver pinned to July, when Israel is on UTC+3.
pub(crate) fn summer_resolver() -> OffsetResolver<'static> {
    OffsetResolver::current().with_clock(Clock::Fixed(
        Utc.with_ymd_and_hms(2024, 7, 15, 12, 0, 0).unwrap(),
    ))
}

/// Resolver pinned to January, when Israel is on UTC+2.
pub(crate) fn winter_resolver() -> OffsetResolver<'static> {
    OffsetResolver::current().with_clock(Clock::Fixed(
        Utc.with_ymd_and_hms(2024, 1, 15, 12, 0, 0).unwrap(),
    ))
}
