//! Origin/destination route keys.

use serde::{Deserialize, Serialize};

use crate::Ticket;

/// An (origin, destination) code pair used as an exact-match filter key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Route {
    /// Origin airport code.
    pub origin: String,
    /// Destination airport code.
    pub destination: String,
}

impl Route {
    /// Creates a route from origin and destination codes.
    #[must_use]
    pub fn new(origin: impl Into<String>, destination: impl Into<String>) -> Self {
        Self {
            origin: origin.into(),
            destination: destination.into(),
        }
    }

    /// Returns true if the ticket flies exactly this route (case-sensitive).
    #[must_use]
    pub fn matches(&self, ticket: &Ticket) -> bool {
        ticket.flies(&self.origin, &self.destination)
    }
}

impl std::fmt::Display for Route {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", self.origin, self.destination)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(Route::new("VVO", "TLV").to_string(), "VVO-TLV");
    }

    #[test]
    fn test_matches_exact_codes() {
        let ticket: crate::Ticket = serde_json::from_str(
            r#"{"origin": "VVO", "origin_name": "", "destination": "TLV",
                "destination_name": "", "departure_date": "12.05.18",
                "departure_time": "16:20", "arrival_date": "12.05.18",
                "arrival_time": "22:10", "carrier": "TK", "stops": 3, "price": 12400}"#,
        )
        .unwrap();

        assert!(Route::new("VVO", "TLV").matches(&ticket));
        assert!(!Route::new("TLV", "VVO").matches(&ticket));
        assert!(!Route::new("vvo", "tlv").matches(&ticket));
    }
}
