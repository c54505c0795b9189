//! Normalized media records returned by catalog sources.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Media kinds a source can provide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaType {
    /// Feature films.
    Movie,
    /// Television series.
    Series,
}

impl fmt::Display for MediaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Movie => f.write_str("movie"),
            Self::Series => f.write_str("series"),
        }
    }
}

/// Self-description a source exposes for registration and display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SourceInfo {
    /// Display name, also stamped into every record's `dataSource`.
    pub name: &'static str,
    /// Human-readable description.
    pub description: &'static str,
    /// Base URL of the remote service.
    pub url: &'static str,
    /// Media kinds this source returns.
    pub types: &'static [MediaType],
}

impl SourceInfo {
    /// Returns `true` if the source provides the given media kind.
    #[must_use]
    pub fn has_type(&self, media_type: MediaType) -> bool {
        self.types.contains(&media_type)
    }

    /// Returns `true` if the source provides any of the given media kinds.
    #[must_use]
    pub fn has_type_overlap(&self, media_types: &[MediaType]) -> bool {
        media_types.iter().any(|t| self.has_type(*t))
    }
}

/// A movie record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MovieRecord {
    /// Catalog discriminator (`movie`).
    #[serde(rename = "type")]
    pub media_type: String,
    /// Display title.
    pub title: String,
    /// English title (the catalog only exposes one title).
    pub english_title: String,
    /// Release year as text.
    pub year: String,
    /// Name of the source that produced the record.
    pub data_source: String,
    /// Source-specific identifier.
    pub id: String,
}

/// A series record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeriesRecord {
    /// Catalog discriminator (`show`).
    #[serde(rename = "type")]
    pub media_type: String,
    /// Display title.
    pub title: String,
    /// English title (the catalog only exposes one title).
    pub english_title: String,
    /// Release year as text.
    pub year: String,
    /// Name of the source that produced the record.
    pub data_source: String,
    /// Source-specific identifier.
    pub id: String,
}

/// Either kind of record.
///
/// Serializes as the inner record; the `type` field tells them apart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum MediaRecord {
    /// A movie.
    Movie(MovieRecord),
    /// A series.
    Series(SeriesRecord),
}

impl MediaRecord {
    /// Returns the media kind of this record.
    #[must_use]
    pub const fn kind(&self) -> MediaType {
        match self {
            Self::Movie(_) => MediaType::Movie,
            Self::Series(_) => MediaType::Series,
        }
    }

    /// Returns the display title.
    #[must_use]
    pub fn title(&self) -> &str {
        match self {
            Self::Movie(m) => &m.title,
            Self::Series(s) => &s.title,
        }
    }

    /// Returns the release year.
    #[must_use]
    pub fn year(&self) -> &str {
        match self {
            Self::Movie(m) => &m.year,
            Self::Series(s) => &s.year,
        }
    }

    /// Returns the source-specific identifier.
    #[must_use]
    pub fn id(&self) -> &str {
        match self {
            Self::Movie(m) => &m.id,
            Self::Series(s) => &s.id,
        }
    }

    /// Returns the name of the source that produced the record.
    #[must_use]
    pub fn data_source(&self) -> &str {
        match self {
            Self::Movie(m) => &m.data_source,
            Self::Series(s) => &s.data_source,
        }
    }
}
