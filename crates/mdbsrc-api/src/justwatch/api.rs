//! `JustWatchApi` trait definition.
#![allow(clippy::future_not_send)]

use super::types::{JustWatchSearchResponse, JustWatchTitleDetails, ObjectType, SearchTitlesParams};
use crate::error::Result;
use crate::locale::Locale;

/// JustWatch API trait.
///
/// Abstracts API operations for mock substitution in tests.
/// Uses `trait_variant::make` to generate a `Send`-bound async trait.
#[allow(clippy::module_name_repetitions)]
#[trait_variant::make(JustWatchApi: Send)]
pub trait LocalJustWatchApi {
    /// Searches popular titles in the given locale.
    ///
    /// The "not found" envelope yields an empty response.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request fails, the status is not
    /// success, the body carries an error envelope, or JSON decoding fails.
    async fn search_titles(&self, params: &SearchTitlesParams) -> Result<JustWatchSearchResponse>;

    /// Fetches a single title by type and numeric ID.
    ///
    /// Returns `None` when the service reports no such title.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request fails, the status is not
    /// success, the body carries an error envelope, or JSON decoding fails.
    async fn title_details(
        &self,
        object_type: ObjectType,
        id: u64,
        locale: &Locale,
    ) -> Result<Option<JustWatchTitleDetails>>;
}
