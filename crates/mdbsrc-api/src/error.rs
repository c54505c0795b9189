//! Error types for catalog source operations.

use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T, E = SourceError> = std::result::Result<T, E>;

/// Errors raised by a catalog source.
///
/// An empty search or an unknown title is not an error: searches return an
/// empty `Vec` and lookups return `None`.
#[derive(Debug, Error)]
#[allow(clippy::module_name_repetitions)]
pub enum SourceError {
    /// The remote service answered with a non-success status or an explicit
    /// error envelope.
    #[error("received error from {source_name} (HTTP {status}): {payload}")]
    Request {
        /// Name of the source that produced the error.
        source_name: String,
        /// HTTP status code of the response.
        status: u16,
        /// Raw response body for diagnostics.
        payload: String,
    },

    /// The identifier does not carry a known type tag.
    #[error("type not found for {source_name} with id of {id}")]
    UnrecognizedId {
        /// Name of the source that rejected the id.
        source_name: String,
        /// The rejected identifier.
        id: String,
    },

    /// The type tag is known but the numeric part is missing, not decimal,
    /// or out of range.
    #[error("malformed {source_name} id {id}: expected decimal digits after the type tag")]
    MalformedId {
        /// Name of the source that rejected the id.
        source_name: String,
        /// The rejected identifier.
        id: String,
    },

    /// The HTTP layer failed to send the request or read the response.
    #[error("request to {source_name} failed: {source}")]
    Transport {
        /// Name of the source being queried.
        source_name: String,
        /// Underlying HTTP error.
        #[source]
        source: reqwest::Error,
    },

    /// The response body does not match the expected schema.
    #[error("failed to decode {context} response from {source_name}: {source}")]
    Decode {
        /// Name of the source being queried.
        source_name: String,
        /// Endpoint the body came from.
        context: String,
        /// Underlying JSON error.
        #[source]
        source: serde_json::Error,
    },

    /// A request URL could not be built from the base URL.
    #[error("failed to build request URL: {0}")]
    Url(#[from] url::ParseError),

    /// The HTTP client could not be constructed.
    #[error("failed to build HTTP client: {0}")]
    Build(#[source] reqwest::Error),
}

impl SourceError {
    /// Returns `true` for errors raised before any network call was made.
    #[must_use]
    pub const fn is_local(&self) -> bool {
        matches!(
            self,
            Self::UnrecognizedId { .. } | Self::MalformedId { .. } | Self::Url(_) | Self::Build(_)
        )
    }
}
