//! JustWatch API response types and search parameters.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::locale::Locale;

/// Error string the service uses for an empty match.
pub(crate) const NOT_FOUND_ERROR: &str = "Movie not found!";

// --- Discriminator ---

/// Catalog entry discriminator (`object_type`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ObjectType {
    /// A movie.
    Movie,
    /// A series.
    Show,
    /// Any other entry kind (seasons, episodes, ...).
    #[serde(other)]
    Other,
}

impl ObjectType {
    /// Returns the discriminator as used in URLs and records.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Movie => "movie",
            Self::Show => "show",
            Self::Other => "other",
        }
    }
}

impl fmt::Display for ObjectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// --- Popular Search ---

/// Response from `content/titles/{locale}/popular`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct JustWatchSearchResponse {
    /// Current page number.
    #[serde(default)]
    pub page: u32,
    /// Page size.
    #[serde(default)]
    pub page_size: u32,
    /// Total number of pages.
    #[serde(default)]
    pub total_pages: u32,
    /// Total number of results.
    #[serde(default)]
    pub total_results: u32,
    /// Matching entries in relevance order.
    #[serde(default)]
    pub items: Vec<JustWatchEntry>,
}

/// A search entry keyed by its `object_type`.
///
/// Only movies and shows are decoded in full; any other kind is kept as a
/// bare [`JustWatchEntry::Other`] without reading its fields.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "object_type", rename_all = "lowercase")]
pub enum JustWatchEntry {
    /// A movie.
    Movie(JustWatchItem),
    /// A series.
    Show(JustWatchItem),
    /// Seasons, episodes, and anything else.
    #[serde(other)]
    Other,
}

impl JustWatchEntry {
    /// Returns the entry discriminator.
    #[must_use]
    pub const fn object_type(&self) -> ObjectType {
        match self {
            Self::Movie(_) => ObjectType::Movie,
            Self::Show(_) => ObjectType::Show,
            Self::Other => ObjectType::Other,
        }
    }

    /// Returns the decoded item for movies and shows.
    #[must_use]
    pub const fn item(&self) -> Option<&JustWatchItem> {
        match self {
            Self::Movie(item) | Self::Show(item) => Some(item),
            Self::Other => None,
        }
    }
}

/// Fields of a movie or show entry in a search response.
#[derive(Debug, Clone, Deserialize)]
pub struct JustWatchItem {
    /// Entity ID with type tag (e.g. `tm12345`, `ts2077`).
    pub jw_entity_id: String,
    /// Numeric catalog ID.
    #[serde(default)]
    pub id: Option<u64>,
    /// Display title.
    pub title: String,
    /// Website path.
    #[serde(default)]
    pub full_path: Option<String>,
    /// Website paths by page kind.
    #[serde(default)]
    pub full_paths: Option<JustWatchFullPaths>,
    /// Poster image path template.
    #[serde(default)]
    pub poster: Option<String>,
    /// Poster blur hash.
    #[serde(default)]
    pub poster_blur_hash: Option<String>,
    /// Original release year.
    pub original_release_year: u32,
    /// Streaming offers (not consumed).
    #[serde(default)]
    pub offers: Vec<JustWatchOffer>,
    /// Provider scores (not consumed).
    #[serde(default)]
    pub scoring: Vec<JustWatchScoring>,
}

/// Website paths of an entry.
#[derive(Debug, Clone, Deserialize)]
pub struct JustWatchFullPaths {
    /// Detail page path.
    #[serde(rename = "MOVIE_DETAIL_OVERVIEW", default)]
    pub movie_detail_overview: Option<String>,
}

/// A streaming/purchase offer.
#[derive(Debug, Clone, Deserialize)]
pub struct JustWatchOffer {
    /// Monetization kind (`flatrate`, `rent`, `buy`, ...).
    #[serde(default)]
    pub monetization_type: Option<String>,
    /// Provider ID.
    #[serde(default)]
    pub provider_id: Option<u32>,
    /// Provider short name.
    #[serde(default)]
    pub package_short_name: Option<String>,
    /// Retail price.
    #[serde(default)]
    pub retail_price: Option<f64>,
    /// Currency code.
    #[serde(default)]
    pub currency: Option<String>,
    /// Presentation kind (`sd`, `hd`, `4k`).
    #[serde(default)]
    pub presentation_type: Option<String>,
    /// Country code.
    #[serde(default)]
    pub country: Option<String>,
    /// Offer URLs.
    #[serde(default)]
    pub urls: Option<JustWatchOfferUrls>,
}

/// Offer URLs per platform.
#[derive(Debug, Clone, Deserialize)]
pub struct JustWatchOfferUrls {
    /// Web URL.
    #[serde(default)]
    pub standard_web: Option<String>,
}

/// A provider score.
#[derive(Debug, Clone, Deserialize)]
pub struct JustWatchScoring {
    /// Score provider (e.g. `imdb:score`).
    #[serde(default)]
    pub provider_type: Option<String>,
    /// Score value; the service sends `null` for unrated titles.
    #[serde(default)]
    pub value: Option<f64>,
}

// --- Title Details ---

/// Response from `content/titles/{type}/{id}/locale/{locale}`.
#[derive(Debug, Clone, Deserialize)]
pub struct JustWatchTitleDetails {
    /// Numeric catalog ID.
    pub id: u64,
    /// Display title.
    pub title: String,
    /// Original release year.
    pub original_release_year: u32,
    /// Entry discriminator, when echoed.
    #[serde(default)]
    pub object_type: Option<ObjectType>,
    /// Short description.
    #[serde(default)]
    pub short_description: Option<String>,
    /// Runtime in minutes.
    #[serde(default)]
    pub runtime: Option<u32>,
}

// --- Error Envelope ---

/// Error envelope the service returns with a success status.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct JustWatchErrorEnvelope {
    /// `"False"` when the request failed.
    #[serde(rename = "Response")]
    pub response: String,
    /// Error message.
    #[serde(rename = "Error", default)]
    pub error: Option<String>,
}

impl JustWatchErrorEnvelope {
    /// Returns `true` if this envelope reports a failure.
    pub(crate) fn is_failure(&self) -> bool {
        self.response == "False"
    }

    /// Returns `true` if this envelope is the empty-match sentinel.
    pub(crate) fn is_not_found(&self) -> bool {
        self.is_failure() && self.error.as_deref() == Some(NOT_FOUND_ERROR)
    }
}

// --- Search Parameters ---

/// Parameters for the popular-titles search endpoint.
#[derive(Debug, Clone)]
pub struct SearchTitlesParams {
    /// Free-text title query.
    pub query: String,
    /// Catalog locale (default: `en_AU`).
    pub locale: Locale,
}

impl SearchTitlesParams {
    /// Creates new search params with the given query.
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            locale: Locale::default(),
        }
    }

    /// Sets the catalog locale.
    #[must_use]
    pub fn locale(mut self, locale: Locale) -> Self {
        self.locale = locale;
        self
    }

    /// Encodes the `body` query parameter as JSON.
    pub(crate) fn body(&self) -> String {
        serde_json::json!({ "query": self.query }).to_string()
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::indexing_slicing)]

    use super::*;

    #[test]
    fn test_entry_minimal_movie() {
        // Arrange
        let json = r#"{"jw_entity_id":"tm1","title":"Sample","original_release_year":2020,"object_type":"movie"}"#;

        // Act
        let entry: JustWatchEntry = serde_json::from_str(json).unwrap();

        // Assert
        assert_eq!(entry.object_type(), ObjectType::Movie);
        let item = entry.item().unwrap();
        assert_eq!(item.jw_entity_id, "tm1");
        assert!(item.id.is_none());
        assert!(item.offers.is_empty());
    }

    #[test]
    fn test_entry_unknown_object_type_skips_fields() {
        // Arrange
        let json = r#"{"jw_entity_id":"tse1","object_type":"show_season","original_release_year":null}"#;

        // Act
        let entry: JustWatchEntry = serde_json::from_str(json).unwrap();

        // Assert
        assert_eq!(entry.object_type(), ObjectType::Other);
        assert!(entry.item().is_none());
    }

    #[test]
    fn test_entry_movie_missing_title_is_an_error() {
        // Arrange
        let json = r#"{"jw_entity_id":"tm1","original_release_year":2020,"object_type":"movie"}"#;

        // Act
        let result = serde_json::from_str::<JustWatchEntry>(json);

        // Assert
        assert!(result.unwrap_err().to_string().contains("title"));
    }

    #[test]
    fn test_entry_year_type_mismatch_is_an_error() {
        // Arrange
        let json = r#"{"jw_entity_id":"tm1","title":"Sample","original_release_year":"2020","object_type":"movie"}"#;

        // Act
        let result = serde_json::from_str::<JustWatchEntry>(json);

        // Assert
        assert!(result.is_err());
    }

    #[test]
    fn test_scoring_accepts_null_value() {
        // Arrange
        let json = r#"{"provider_type":"imdb:score","value":null}"#;

        // Act
        let scoring: JustWatchScoring = serde_json::from_str(json).unwrap();

        // Assert
        assert_eq!(scoring.provider_type.as_deref(), Some("imdb:score"));
        assert!(scoring.value.is_none());
    }

    #[test]
    fn test_parse_search_fixture() {
        // Arrange
        let json = include_str!("../../../../fixtures/justwatch/popular_search.json");

        // Act
        let response: JustWatchSearchResponse = serde_json::from_str(json).unwrap();

        // Assert
        assert_eq!(response.page, 1);
        assert_eq!(response.items.len(), 3);
        assert_eq!(response.items[0].object_type(), ObjectType::Movie);
        assert_eq!(response.items[1].object_type(), ObjectType::Show);
        assert_eq!(response.items[2].object_type(), ObjectType::Other);
        assert!(!response.items[0].item().unwrap().offers.is_empty());
    }

    #[test]
    fn test_parse_search_without_items() {
        // Arrange
        let json = r#"{"page":1,"page_size":30,"total_pages":0,"total_results":0}"#;

        // Act
        let response: JustWatchSearchResponse = serde_json::from_str(json).unwrap();

        // Assert
        assert!(response.items.is_empty());
    }

    #[test]
    fn test_parse_details_fixture() {
        // Arrange
        let json = include_str!("../../../../fixtures/justwatch/title_details_movie.json");

        // Act
        let details: JustWatchTitleDetails = serde_json::from_str(json).unwrap();

        // Assert
        assert_eq!(details.id, 12345);
        assert_eq!(details.title, "Sample Movie");
        assert_eq!(details.object_type, Some(ObjectType::Movie));
    }

    #[test]
    fn test_error_envelope_not_found() {
        // Arrange
        let json = r#"{"Response":"False","Error":"Movie not found!"}"#;

        // Act
        let envelope: JustWatchErrorEnvelope = serde_json::from_str(json).unwrap();

        // Assert
        assert!(envelope.is_failure());
        assert!(envelope.is_not_found());
    }

    #[test]
    fn test_error_envelope_other_error() {
        // Arrange
        let json = r#"{"Response":"False","Error":"Too many results."}"#;

        // Act
        let envelope: JustWatchErrorEnvelope = serde_json::from_str(json).unwrap();

        // Assert
        assert!(envelope.is_failure());
        assert!(!envelope.is_not_found());
    }

    #[test]
    fn test_search_body_is_valid_json() {
        // Arrange
        let params = SearchTitlesParams::new(r#"The "Quoted" Film"#);

        // Act
        let body = params.body();
        let value: serde_json::Value = serde_json::from_str(&body).unwrap();

        // Assert
        assert_eq!(value["query"], r#"The "Quoted" Film"#);
    }

    #[test]
    fn test_search_params_default_locale() {
        // Arrange & Act
        let params = SearchTitlesParams::new("x");

        // Assert
        assert_eq!(params.locale.as_str(), "en_AU");
    }
}
