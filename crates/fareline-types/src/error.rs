//! Error types for fareline.

use thiserror::Error;

/// Result type alias for fareline operations.
pub type Result<T> = std::result::Result<T, FarelineError>;

/// Errors that can occur while computing ticket analytics.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FarelineError {
    /// Airport or city code is absent from the timezone table.
    #[error("City code not recognized: {0}")]
    UnknownLocation(String),

    /// A ticket field could not be parsed.
    #[error("Malformed ticket: cannot parse {field} from '{value}'")]
    MalformedTicket {
        /// Name of the offending field.
        field: TicketField,
        /// The raw field value.
        value: String,
    },

    /// Statistics were requested over zero tickets.
    #[error("Tickets list is empty")]
    EmptyInput,
}

impl FarelineError {
    /// Creates a [`FarelineError::MalformedTicket`] for the given field.
    pub fn malformed(field: TicketField, value: impl Into<String>) -> Self {
        Self::MalformedTicket {
            field,
            value: value.into(),
        }
    }
}

/// Ticket fields that are parsed on demand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TicketField {
    /// `departure_date` (`dd.MM.yy`).
    DepartureDate,
    /// `departure_time` (`H:mm`).
    DepartureTime,
    /// `arrival_date` (`dd.MM.yy`).
    ArrivalDate,
    /// `arrival_time` (`H:mm`).
    ArrivalTime,
    /// `price` (decimal numeral).
    Price,
}

impl TicketField {
    /// Returns the field name as it appears in the ticket feed.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::DepartureDate => "departure_date",
            Self::DepartureTime => "departure_time",
            Self::ArrivalDate => "arrival_date",
            Self::ArrivalTime => "arrival_time",
            Self::Price => "price",
        }
    }
}

impl std::fmt::Display for TicketField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
