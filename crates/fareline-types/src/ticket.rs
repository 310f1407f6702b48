//! Flight ticket records as supplied by the ticket feed.

use std::str::FromStr;

use bigdecimal::BigDecimal;
use chrono::{Datelike, NaiveDate, NaiveDateTime, NaiveTime};
use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};

use crate::{FarelineError, Result, TicketField};

/// Date format used by the feed (`dd.MM.yy`).
pub const DATE_FORMAT: &str = "%d.%m.%y";

/// Time format used by the feed (`H:mm`).
pub const TIME_FORMAT: &str = "%H:%M";

/// A single flight ticket.
///
/// Date, time and price fields are kept exactly as the feed supplied them
/// and parsed on access, so a ticket round-trips through serialization
/// unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Ticket {
    /// IATA code of the origin airport.
    pub origin: String,
    /// Display name of the origin city.
    pub origin_name: String,
    /// IATA code of the destination airport.
    pub destination: String,
    /// Display name of the destination city.
    pub destination_name: String,
    /// Departure date in `dd.MM.yy` format.
    pub departure_date: String,
    /// Local departure time in `H:mm` format.
    pub departure_time: String,
    /// Arrival date in `dd.MM.yy` format.
    pub arrival_date: String,
    /// Local arrival time in `H:mm` format.
    pub arrival_time: String,
    /// IATA code of the operating carrier.
    pub carrier: String,
    /// Number of stops.
    pub stops: u32,
    /// Ticket price as an exact decimal numeral.
    #[serde(deserialize_with = "price_text")]
    pub price: String,
}

impl Ticket {
    /// Returns the local departure timestamp.
    ///
    /// # Errors
    ///
    /// Returns [`FarelineError::MalformedTicket`] if the departure date or
    /// time does not parse.
    pub fn departure(&self) -> Result<NaiveDateTime> {
        let date = parse_date(TicketField::DepartureDate, &self.departure_date)?;
        let time = parse_time(TicketField::DepartureTime, &self.departure_time)?;
        Ok(date.and_time(time))
    }

    /// Returns the local arrival timestamp.
    ///
    /// # Errors
    ///
    /// Returns [`FarelineError::MalformedTicket`] if the arrival date or
    /// time does not parse.
    pub fn arrival(&self) -> Result<NaiveDateTime> {
        let date = parse_date(TicketField::ArrivalDate, &self.arrival_date)?;
        let time = parse_time(TicketField::ArrivalTime, &self.arrival_time)?;
        Ok(date.and_time(time))
    }

    /// Returns the price as an exact, unbounded decimal.
    ///
    /// Both plain (`12400.50`) and exponent (`1.24e4`) numerals are
    /// accepted. The scale is kept as written, so `1.24e4` has scale `-2`.
    ///
    /// # Errors
    ///
    /// Returns [`FarelineError::MalformedTicket`] if the price is not a
    /// decimal numeral, including one with surrounding whitespace.
    pub fn price_value(&self) -> Result<BigDecimal> {
        let malformed = || FarelineError::malformed(TicketField::Price, &self.price);
        if !is_decimal_numeral(&self.price) {
            return Err(malformed());
        }
        BigDecimal::from_str(&self.price).map_err(|_| malformed())
    }

    /// Returns true if the ticket flies exactly from `origin` to `destination`.
    ///
    /// The comparison is case-sensitive and does not trim whitespace.
    #[must_use]
    pub fn flies(&self, origin: &str, destination: &str) -> bool {
        self.origin == origin && self.destination == destination
    }
}

/// Parses a `dd.MM.yy` date.
///
/// Every field is exactly two digits. chrono maps high two-digit years into
/// the 1900s; the feed's years all belong to 2000-2099.
fn parse_date(field: TicketField, raw: &str) -> Result<NaiveDate> {
    if !is_date_shape(raw) {
        return Err(FarelineError::malformed(field, raw));
    }
    let date = NaiveDate::parse_from_str(raw, DATE_FORMAT)
        .map_err(|_| FarelineError::malformed(field, raw))?;
    if date.year() >= 2000 {
        return Ok(date);
    }
    date.with_year(date.year() + 100)
        .ok_or_else(|| FarelineError::malformed(field, raw))
}

/// Parses an `H:mm` wall-clock time: one or two hour digits, two minute
/// digits.
fn parse_time(field: TicketField, raw: &str) -> Result<NaiveTime> {
    if !is_time_shape(raw) {
        return Err(FarelineError::malformed(field, raw));
    }
    NaiveTime::parse_from_str(raw, TIME_FORMAT).map_err(|_| FarelineError::malformed(field, raw))
}

fn all_digits(raw: &str) -> bool {
    raw.bytes().all(|b| b.is_ascii_digit())
}

/// `dd.dd.dd`
fn is_date_shape(raw: &str) -> bool {
    let mut parts = raw.split('.');
    let fields: Vec<&str> = parts.by_ref().take(3).collect();
    parts.next().is_none()
        && fields.len() == 3
        && fields.iter().all(|part| part.len() == 2 && all_digits(part))
}

/// `d:dd` or `dd:dd`
fn is_time_shape(raw: &str) -> bool {
    raw.split_once(':').is_some_and(|(hour, minute)| {
        (1..=2).contains(&hour.len())
            && minute.len() == 2
            && all_digits(hour)
            && all_digits(minute)
    })
}

/// Optional sign, digits with at most one decimal point, optional exponent.
fn is_decimal_numeral(raw: &str) -> bool {
    let body = raw.strip_prefix(['+', '-']).unwrap_or(raw);
    let (mantissa, exponent) = match body.split_once(['e', 'E']) {
        Some((mantissa, exponent)) => (mantissa, Some(exponent)),
        None => (body, None),
    };
    let (integer, fraction) = mantissa.split_once('.').unwrap_or((mantissa, ""));
    let mantissa_ok =
        !(integer.is_empty() && fraction.is_empty()) && all_digits(integer) && all_digits(fraction);
    let exponent_ok = exponent.is_none_or(|exponent| {
        let digits = exponent.strip_prefix(['+', '-']).unwrap_or(exponent);
        !digits.is_empty() && all_digits(digits)
    });
    mantissa_ok && exponent_ok
}

/// Accepts the price as either a JSON string or a JSON number.
///
/// Numbers keep their literal text (serde_json `arbitrary_precision`), so
/// no binary floating point conversion happens.
fn price_text<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::String(text) => Ok(text),
        serde_json::Value::Number(number) => Ok(number.to_string()),
        other => Err(de::Error::custom(format!(
            "expected a decimal price, found {other}"
        ))),
    }
}

/// An ordered collection of tickets.
///
/// This is also the shape of the feed document: `{"tickets": [...]}`. A
/// missing or `null` list decodes as an empty set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TicketSet {
    #[serde(default, deserialize_with = "tickets_or_empty")]
    tickets: Vec<Ticket>,
}

impl TicketSet {
    /// Creates a ticket set preserving the given order.
    #[must_use]
    pub const fn new(tickets: Vec<Ticket>) -> Self {
        Self { tickets }
    }

    /// Returns the tickets as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[Ticket] {
        &self.tickets
    }

    /// Returns an iterator over the tickets in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, Ticket> {
        self.tickets.iter()
    }

    /// Returns the number of tickets.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tickets.len()
    }

    /// Returns true if the set holds no tickets.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tickets.is_empty()
    }

    /// Consumes the set, returning the tickets.
    #[must_use]
    pub fn into_vec(self) -> Vec<Ticket> {
        self.tickets
    }
}

impl From<Vec<Ticket>> for TicketSet {
    fn from(tickets: Vec<Ticket>) -> Self {
        Self::new(tickets)
    }
}

impl FromIterator<Ticket> for TicketSet {
    fn from_iter<I: IntoIterator<Item = Ticket>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl IntoIterator for TicketSet {
    type Item = Ticket;
    type IntoIter = std::vec::IntoIter<Ticket>;

    fn into_iter(self) -> Self::IntoIter {
        self.tickets.into_iter()
    }
}

impl<'a> IntoIterator for &'a TicketSet {
    type Item = &'a Ticket;
    type IntoIter = std::slice::Iter<'a, Ticket>;

    fn into_iter(self) -> Self::IntoIter {
        self.tickets.iter()
    }
}

fn tickets_or_empty<'de, D>(deserializer: D) -> std::result::Result<Vec<Ticket>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<Ticket>>::deserialize(deserializer)?.unwrap_or_default())
}
