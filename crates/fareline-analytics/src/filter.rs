//! Route filtering over ticket sequences.

use fareline_types::{Route, Ticket};

/// Returns the tickets flying exactly from `origin` to `destination`.
///
/// Matching is case-sensitive with no whitespace trimming. Input order is
/// preserved and the input is left untouched; no match (or no input) yields
/// an empty vector.
pub fn with_route<'t, I>(tickets: I, origin: &str, destination: &str) -> Vec<&'t Ticket>
where
    I: IntoIterator<Item = &'t Ticket>,
{
    tickets
        .into_iter()
        .filter(|ticket| ticket.flies(origin, destination))
        .collect()
}

/// Returns the tickets flying `route`.
///
/// Same matching rules as [`with_route`].
pub fn on_route<'t, I>(tickets: I, route: &Route) -> Vec<&'t Ticket>
where
    I: IntoIterator<Item = &'t Ticket>,
{
    tickets
        .into_iter()
        .filter(|ticket| route.matches(ticket))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{lrn_tlv, sample, vvo_tlv_s7, vvo_tlv_tk};

    #[test]
    fn test_returns_matching_tickets() {
        let tickets = sample();
        let result = with_route(&tickets, "VVO", "TLV");

        assert_eq!(result, vec![&vvo_tlv_tk(), &vvo_tlv_s7()]);
    }

    #[test]
    fn test_preserves_input_order() {
        let tickets = vec![vvo_tlv_s7(), lrn_tlv(), vvo_tlv_tk()];
        let carriers: Vec<_> = with_route(&tickets, "VVO", "TLV")
            .into_iter()
            .map(|t| t.carrier.as_str())
            .collect();

        assert_eq!(carriers, ["S7", "TK"]);
    }

    #[test]
    fn test_no_destination_match() {
        let tickets = sample();
        assert!(with_route(&tickets, "VVO", "JFK").is_empty());
    }

    #[test]
    fn test_no_origin_match() {
        let tickets = sample();
        assert!(with_route(&tickets, "JFK", "TLV").is_empty());
    }

    #[test]
    fn test_empty_input() {
        let tickets: Vec<Ticket> = Vec::new();
        assert!(with_route(&tickets, "VVO", "TLV").is_empty());
    }

    #[test]
    fn test_case_sensitive() {
        let tickets = sample();
        assert!(with_route(&tickets, "vvo", "tlv").is_empty());
    }

    #[test]
    fn test_on_route() {
        let tickets = sample();
        let result = on_route(&tickets, &Route::new("LRN", "TLV"));
        assert_eq!(result, vec![&lrn_tlv()]);

        assert_eq!(
            on_route(&tickets, &Route::new("VVO", "TLV")),
            with_route(&tickets, "VVO", "TLV")
        );
        assert!(on_route(&tickets, &Route::new("TLV", "VVO")).is_empty());
    }
}
