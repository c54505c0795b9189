//! JustWatch API client module.
//!
//! Handles HTTP requests to the unofficial JustWatch content API
//! and decodes popular-title searches and title details.

mod api;
mod client;
mod types;

/// Name the JustWatch source reports in errors and records.
pub const SOURCE_NAME: &str = "JustWatch";

#[allow(clippy::module_name_repetitions)]
pub use api::{JustWatchApi, LocalJustWatchApi};
#[allow(clippy::module_name_repetitions)]
pub use client::{DEFAULT_BASE_URL, JustWatchClient, JustWatchClientBuilder};
#[allow(clippy::module_name_repetitions)]
pub use types::{
    JustWatchEntry, JustWatchFullPaths, JustWatchItem, JustWatchOffer, JustWatchOfferUrls,
    JustWatchScoring, JustWatchSearchResponse, JustWatchTitleDetails, ObjectType,
    SearchTitlesParams,
};
