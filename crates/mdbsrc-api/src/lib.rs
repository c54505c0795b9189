//! Catalog source adapters for mdbsrc.
//!
//! Provides the JustWatch API client and the [`JustWatchSource`] adapter that
//! maps its responses into normalized movie and series records.

/// Error types.
pub mod error;
/// JustWatch API client.
pub mod justwatch;
/// Catalog locale tags.
pub mod locale;
/// Normalized media records.
pub mod model;
/// Media source adapters.
pub mod source;

pub use error::SourceError;
pub use locale::{InvalidLocale, Locale};
pub use model::{MediaRecord, MediaType, MovieRecord, SeriesRecord, SourceInfo};
pub use source::{
    JUSTWATCH_INFO, JustWatchSource, LocalMediaSource, MediaSource, parse_external_id,
    record_from_entry,
};
