//! Airport timezone table and UTC offset resolution for fareline.
//!
//! This crate maps airport/city codes to IANA timezones and resolves their
//! UTC offsets in whole hours.
//!
//! # Example
//!
//! ```
//! use fareline_zones::{Clock, OffsetResolver, TimezoneTable};
//!
//! let table = TimezoneTable::global();
//! let resolver = OffsetResolver::new(table, Clock::Now);
//!
//! // Vladivostok has no daylight saving time
//! assert_eq!(resolver.resolve("VVO").unwrap(), 10);
//! ```

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/fareline/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod resolver;

pub use resolver::{Clock, OffsetResolver};

use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::sync::OnceLock;

use chrono_tz::Tz;
use thiserror::Error;

/// The default code-to-zone JSON embedded at compile time.
const ZONES_JSON: &str = include_str!("../data/zones.json");

/// Global timezone table instance.
static TABLE: OnceLock<TimezoneTable> = OnceLock::new();

/// Errors that can occur while building a timezone table.
#[derive(Error, Debug)]
pub enum ZoneTableError {
    /// The table document is not a JSON object of strings.
    #[error("Invalid timezone table: {0}")]
    Json(#[from] serde_json::Error),

    /// A code maps to a zone id unknown to the tz database.
    #[error("Unknown timezone '{zone}' for code {code}")]
    InvalidZone {
        /// The airport/city code.
        code: String,
        /// The unrecognized zone id.
        zone: String,
    },

    /// Two codes in the document are equal after uppercasing.
    #[error("Duplicate code {code} in timezone table")]
    DuplicateCode {
        /// The uppercased code.
        code: String,
    },
}

/// Immutable mapping from airport/city code to timezone.
///
/// Codes are stored uppercase and looked up case-insensitively.
#[derive(Debug, Clone)]
pub struct TimezoneTable {
    zones: HashMap<String, Tz>,
}

impl TimezoneTable {
    /// Returns the global timezone table.
    ///
    /// The table is built from the embedded JSON on first access.
    #[must_use]
    pub fn global() -> &'static Self {
        TABLE.get_or_init(|| Self::from_json(ZONES_JSON).expect("Invalid zones.json"))
    }

    /// Builds a table from a JSON object of `code -> zone id` entries.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is invalid, names an unknown zone, or
    /// holds two codes differing only in case.
    pub fn from_json(json: &str) -> Result<Self, ZoneTableError> {
        let raw: HashMap<String, String> = serde_json::from_str(json)?;
        let mut zones = HashMap::with_capacity(raw.len());
        for (code, zone) in raw {
            let Ok(tz) = zone.parse::<Tz>() else {
                return Err(ZoneTableError::InvalidZone { code, zone });
            };
            match zones.entry(code.to_uppercase()) {
                Entry::Occupied(entry) => {
                    return Err(ZoneTableError::DuplicateCode {
                        code: entry.key().clone(),
                    });
                }
                Entry::Vacant(entry) => {
                    entry.insert(tz);
                }
            }
        }
        tracing::debug!(entries = zones.len(), "timezone table loaded");
        Ok(Self { zones })
    }

    /// Looks up the timezone for a code (case-insensitive).
    #[must_use]
    pub fn get(&self, code: &str) -> Option<Tz> {
        self.zones.get(&code.to_uppercase()).copied()
    }

    /// Returns true if the table knows the code (case-insensitive).
    #[must_use]
    pub fn contains(&self, code: &str) -> bool {
        self.get(code).is_some()
    }

    /// Returns all `(code, zone)` entries sorted by code.
    pub fn entries(&self) -> Vec<(&str, Tz)> {
        let mut entries: Vec<_> = self
            .zones
            .iter()
            .map(|(code, tz)| (code.as_str(), *tz))
            .collect();
        entries.sort_by_key(|(code, _)| *code);
        entries
    }

    /// Returns the number of codes in the table.
    #[must_use]
    pub fn len(&self) -> usize {
        self.zones.len()
    }

    /// Returns true if the table is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.zones.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_loads() {
        let table = TimezoneTable::global();
        assert!(!table.is_empty());
    }

    #[test]
    fn test_original_codes_present() {
        let table = TimezoneTable::global();
        assert_eq!(table.get("TLV"), Some(Tz::Asia__Jerusalem));
        assert_eq!(table.get("VVO"), Some(Tz::Asia__Vladivostok));
        assert_eq!(table.get("JFK"), Some(Tz::America__New_York));
        assert_eq!(table.get("NRT"), Some(Tz::Asia__Tokyo));
    }

    #[test]
    fn test_get_case_insensitive() {
        let table = TimezoneTable::global();
        assert!(table.get("tlv").is_some());
        assert!(table.get("Tlv").is_some());
        assert!(table.contains("vvo"));
    }

    #[test]
    fn test_unknown_code() {
        assert!(TimezoneTable::global().get("XXX").is_none());
    }

    #[test]
    fn test_from_json_normalizes_codes() {
        let table = TimezoneTable::from_json(r#"{"tlv": "Asia/Jerusalem"}"#).unwrap();
        assert_eq!(table.entries(), vec![("TLV", Tz::Asia__Jerusalem)]);
    }

    #[test]
    fn test_from_json_invalid_zone() {
        let err = TimezoneTable::from_json(r#"{"XXX": "Mars/Olympus_Mons"}"#).unwrap_err();
        assert!(matches!(err, ZoneTableError::InvalidZone { ref code, .. } if code == "XXX"));
    }

    #[test]
    fn test_from_json_rejects_codes_equal_ignoring_case() {
        let json = r#"{"tlv": "Asia/Jerusalem", "TLV": "Europe/London"}"#;
        let err = TimezoneTable::from_json(json).unwrap_err();
        assert!(matches!(err, ZoneTableError::DuplicateCode { ref code } if code == "TLV"));

        // same zone under both spellings is still ambiguous input
        let json = r#"{"vvo": "Asia/Vladivostok", "VVO": "Asia/Vladivostok"}"#;
        assert!(matches!(
            TimezoneTable::from_json(json),
            Err(ZoneTableError::DuplicateCode { .. })
        ));
    }

    #[test]
    fn test_from_json_rejects_non_object() {
        assert!(matches!(
            TimezoneTable::from_json("[]"),
            Err(ZoneTableError::Json(_))
        ));
    }

    #[test]
    fn test_entries_sorted() {
        let table = TimezoneTable::global();
        let codes: Vec<_> = table.entries().into_iter().map(|(code, _)| code).collect();
        let mut sorted = codes.clone();
        sorted.sort_unstable();
        assert_eq!(codes, sorted);
    }
}
