//! Ingestion strategies.

use std::path::{Path, PathBuf};

use fareline_types::TicketSet;

use crate::{SourceError, parse_feed};

/// A supplier of tickets.
pub trait TicketSource {
    /// Reads and decodes the full ticket set.
    ///
    /// # Errors
    ///
    /// Returns an error if the feed cannot be read or decoded.
    fn read(&self) -> Result<TicketSet, SourceError>;

    /// Returns a short human-readable description of the source.
    fn describe(&self) -> String;
}

/// A feed supplied as in-memory JSON text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InlineText {
    text: String,
}

impl InlineText {
    /// Wraps feed text.
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

impl TicketSource for InlineText {
    fn read(&self) -> Result<TicketSet, SourceError> {
        if self.text.trim().is_empty() {
            return Err(SourceError::EmptyInput);
        }
        parse_feed(&self.text, &self.describe())
    }

    fn describe(&self) -> String {
        "inline text".to_string()
    }
}

/// A feed read from a file resolved against a resource root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamedResource {
    name: PathBuf,
    root: PathBuf,
}

impl NamedResource {
    /// Creates a resource resolved against the current directory.
    #[must_use]
    pub fn new(name: impl Into<PathBuf>) -> Self {
        Self::with_root(name, ".")
    }

    /// Creates a resource resolved against `root`.
    ///
    /// An absolute `name` ignores the root.
    #[must_use]
    pub fn with_root(name: impl Into<PathBuf>, root: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            root: root.into(),
        }
    }

    /// Returns the resource name as given.
    #[must_use]
    pub fn name(&self) -> &Path {
        &self.name
    }

    /// Returns the resolved file path.
    #[must_use]
    pub fn path(&self) -> PathBuf {
        self.root.join(&self.name)
    }
}

impl TicketSource for NamedResource {
    fn read(&self) -> Result<TicketSet, SourceError> {
        let path = self.path();
        tracing::debug!(path = %path.display(), "reading ticket resource");
        let text = std::fs::read_to_string(&path).map_err(|source| {
            if source.kind() == std::io::ErrorKind::NotFound {
                SourceError::ResourceNotFound { path: path.clone() }
            } else {
                SourceError::Io {
                    path: path.clone(),
                    source,
                }
            }
        })?;
        parse_feed(&text, &self.describe())
    }

    fn describe(&self) -> String {
        format!("resource {}", self.name.display())
    }
}

/// The available ingestion strategies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    /// Feed supplied as text.
    InlineText(InlineText),
    /// Feed read from a resource file.
    NamedResource(NamedResource),
}

impl Source {
    /// Creates an inline-text source.
    #[must_use]
    pub fn inline(text: impl Into<String>) -> Self {
        Self::InlineText(InlineText::new(text))
    }

    /// Creates a named-resource source resolved against `root`.
    #[must_use]
    pub fn resource(name: impl Into<PathBuf>, root: impl Into<PathBuf>) -> Self {
        Self::NamedResource(NamedResource::with_root(name, root))
    }
}

impl TicketSource for Source {
    fn read(&self) -> Result<TicketSet, SourceError> {
        match self {
            Self::InlineText(source) => source.read(),
            Self::NamedResource(source) => source.read(),
        }
    }

    fn describe(&self) -> String {
        match self {
            Self::InlineText(source) => source.describe(),
            Self::NamedResource(source) => source.describe(),
        }
    }
}

impl From<InlineText> for Source {
    fn from(source: InlineText) -> Self {
        Self::InlineText(source)
    }
}

impl From<NamedResource> for Source {
    fn from(source: NamedResource) -> Self {
        Self::NamedResource(source)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    const FEED: &str = r#"{"tickets": [{
        "origin": "LRN", "origin_name": "Ларнака",
        "destination": "TLV", "destination_name": "Тель-Авив",
        "departure_date": "12.05.18", "departure_time": "12:50",
        "arrival_date": "12.05.18", "arrival_time": "14:30",
        "carrier": "SU", "stops": 1, "price": "7000"
    }]}"#;

    #[test]
    fn test_inline_text() {
        let tickets = Source::inline(FEED).read().unwrap();
        assert_eq!(tickets.len(), 1);
        assert_eq!(tickets.as_slice()[0].carrier, "SU");
    }

    #[test]
    fn test_inline_text_empty() {
        assert!(matches!(
            InlineText::new("").read(),
            Err(SourceError::EmptyInput)
        ));
        assert!(matches!(
            InlineText::new("  \n").read(),
            Err(SourceError::EmptyInput)
        ));
    }

    #[test]
    fn test_inline_text_invalid_json() {
        let err = Source::inline("invalid-json").read().unwrap_err();
        assert!(matches!(err, SourceError::Json { .. }));
        assert!(err.to_string().contains("inline text"));
    }

    #[test]
    fn test_named_resource() {
        let temp_dir = TempDir::new().unwrap();
        fs::create_dir(temp_dir.path().join("ticket")).unwrap();
        fs::write(temp_dir.path().join("ticket/tickets.json"), FEED).unwrap();

        let source = Source::resource("ticket/tickets.json", temp_dir.path());
        let tickets = source.read().unwrap();
        assert_eq!(tickets.len(), 1);
        assert_eq!(source.describe(), "resource ticket/tickets.json");
    }

    #[test]
    fn test_named_resource_absolute_name() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("tickets.json");
        fs::write(&path, FEED).unwrap();

        let tickets = NamedResource::with_root(&path, "/nonexistent").read().unwrap();
        assert_eq!(tickets.len(), 1);
    }

    #[test]
    fn test_named_resource_missing() {
        let temp_dir = TempDir::new().unwrap();
        let source = NamedResource::with_root("invalid/path.json", temp_dir.path());

        let err = source.read().unwrap_err();
        assert!(matches!(err, SourceError::ResourceNotFound { ref path } if path == &source.path()));
        assert!(err.to_string().contains("Cannot find resource file"));
    }

    #[test]
    fn test_named_resource_invalid_json() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("broken.json"), "{").unwrap();

        let err = NamedResource::with_root("broken.json", temp_dir.path())
            .read()
            .unwrap_err();
        assert!(matches!(err, SourceError::Json { .. }));
    }

    #[test]
    fn test_source_from_strategies() {
        let source: Source = InlineText::new(FEED).into();
        assert_eq!(source.describe(), "inline text");

        let source: Source = NamedResource::new("tickets.json").into();
        assert_eq!(source.describe(), "resource tickets.json");
    }
}
