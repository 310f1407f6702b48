//! Feed document decoding.

use fareline_types::TicketSet;

use crate::SourceError;

/// Decodes a `{"tickets": [...]}` feed document.
///
/// A leading UTF-8 byte order mark is ignored, and a missing or `null`
/// ticket list decodes as an empty set. `origin` names the feed in error
/// messages.
///
/// # Errors
///
/// Returns [`SourceError::Json`] if the document is not a valid feed.
pub fn parse_feed(text: &str, origin: &str) -> Result<TicketSet, SourceError> {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);
    let tickets: TicketSet = serde_json::from_str(text).map_err(|source| SourceError::Json {
        origin: origin.to_string(),
        source,
    })?;
    tracing::debug!(origin, tickets = tickets.len(), "ticket feed decoded");
    Ok(tickets)
}
