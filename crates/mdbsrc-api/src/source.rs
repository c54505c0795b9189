//! Media source adapters.
//!
//! A source turns a free-text title query or a source-specific id into
//! normalized [`MediaRecord`]s. [`JustWatchSource`] is the JustWatch
//! implementation, layered on any [`JustWatchApi`].
#![allow(clippy::future_not_send)]

use tracing::instrument;

use crate::error::{Result, SourceError};
use crate::justwatch::{
    JustWatchApi, JustWatchClient, JustWatchEntry, ObjectType, SOURCE_NAME, SearchTitlesParams,
};
use crate::locale::Locale;
use crate::model::{MediaRecord, MediaType, MovieRecord, SeriesRecord, SourceInfo};

/// Self-description of the JustWatch source.
pub const JUSTWATCH_INFO: SourceInfo = SourceInfo {
    name: SOURCE_NAME,
    description: "Unofficial API for JustWatch, find where Series and Movies are streaming.",
    url: "https://apis.justwatch.com/",
    types: &[MediaType::Movie, MediaType::Series],
};

/// Id prefix tagging a series.
const SERIES_PREFIX: &str = "ts";

/// Id prefix tagging a movie.
const MOVIE_PREFIX: &str = "tm";

/// Media source trait consumed by an aggregating orchestrator.
///
/// Uses `trait_variant::make` to generate a `Send`-bound async trait.
#[allow(clippy::module_name_repetitions)]
#[trait_variant::make(MediaSource: Send)]
pub trait LocalMediaSource {
    /// Returns the source's self-description.
    fn info(&self) -> &SourceInfo;

    /// Searches the source by title.
    ///
    /// Returns an empty `Vec` when nothing matches.
    ///
    /// # Errors
    ///
    /// Returns an error if the remote request fails or reports an error.
    async fn search_by_title(&self, query: &str) -> Result<Vec<MediaRecord>>;

    /// Looks up a single record by source-specific id.
    ///
    /// Returns `None` when the source has no such title.
    ///
    /// # Errors
    ///
    /// Returns an error if the id is not recognized (before any request is
    /// made) or the remote request fails or reports an error.
    async fn get_by_id(&self, id: &str) -> Result<Option<MediaRecord>>;
}

/// JustWatch catalog source.
///
/// The locale is fixed at construction; build another source to query a
/// different region, or use [`JustWatchApi`] directly with per-call locales.
#[derive(Debug, Clone)]
#[allow(clippy::module_name_repetitions)]
pub struct JustWatchSource<A = JustWatchClient> {
    /// Underlying API.
    api: A,
    /// Catalog locale used for every request.
    locale: Locale,
}

impl<A> JustWatchSource<A> {
    /// Creates a source over the given API with a fixed locale.
    #[must_use]
    pub const fn new(api: A, locale: Locale) -> Self {
        Self { api, locale }
    }

    /// Returns the configured locale.
    #[must_use]
    pub const fn locale(&self) -> &Locale {
        &self.locale
    }

    /// Returns the underlying API.
    #[must_use]
    pub const fn api(&self) -> &A {
        &self.api
    }
}

impl JustWatchSource<JustWatchClient> {
    /// Creates a source backed by a default `JustWatchClient`.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to build.
    pub fn with_locale(locale: Locale) -> Result<Self> {
        Ok(Self::new(JustWatchClient::builder().build()?, locale))
    }
}

/// Splits an id such as `tm12345` into its type tag and numeric part.
///
/// # Errors
///
/// Returns `SourceError::UnrecognizedId` if the id does not start with `ts`
/// or `tm` followed by a digit (so `tse42` is a different tag), and
/// `SourceError::MalformedId` if the tag is known but the remainder is empty,
/// not decimal, or does not fit in a `u64`.
pub fn parse_external_id(id: &str) -> Result<(ObjectType, u64)> {
    let unrecognized = || SourceError::UnrecognizedId {
        source_name: String::from(SOURCE_NAME),
        id: String::from(id),
    };
    let malformed = || SourceError::MalformedId {
        source_name: String::from(SOURCE_NAME),
        id: String::from(id),
    };

    let (object_type, rest) = if let Some(rest) = id.strip_prefix(SERIES_PREFIX) {
        (ObjectType::Show, rest)
    } else if let Some(rest) = id.strip_prefix(MOVIE_PREFIX) {
        (ObjectType::Movie, rest)
    } else {
        return Err(unrecognized());
    };

    match rest.bytes().next() {
        None => return Err(malformed()),
        Some(b) if !b.is_ascii_digit() => return Err(unrecognized()),
        Some(_) => {}
    }
    if !rest.bytes().all(|b| b.is_ascii_digit()) {
        return Err(malformed());
    }
    let numeric = rest.parse::<u64>().map_err(|_| malformed())?;

    Ok((object_type, numeric))
}

/// Builds a record for a movie or show; other entry kinds yield `None`.
fn build_record(object_type: ObjectType, title: &str, year: u32, id: String) -> Option<MediaRecord> {
    let media_type = String::from(object_type.as_str());
    let data_source = String::from(SOURCE_NAME);
    match object_type {
        ObjectType::Movie => Some(MediaRecord::Movie(MovieRecord {
            media_type,
            title: String::from(title),
            english_title: String::from(title),
            year: year.to_string(),
            data_source,
            id,
        })),
        ObjectType::Show => Some(MediaRecord::Series(SeriesRecord {
            media_type,
            title: String::from(title),
            english_title: String::from(title),
            year: year.to_string(),
            data_source,
            id,
        })),
        ObjectType::Other => None,
    }
}

/// Converts a search entry into a record keyed by its entity id.
///
/// Returns `None` for entries that are neither movies nor shows.
#[must_use]
pub fn record_from_entry(entry: &JustWatchEntry) -> Option<MediaRecord> {
    let item = entry.item()?;
    build_record(
        entry.object_type(),
        &item.title,
        item.original_release_year,
        item.jw_entity_id.clone(),
    )
}

/// Maps search entries to records, preserving order and dropping entries
/// that are neither movies nor shows.
fn map_search_items(items: &[JustWatchEntry]) -> Vec<MediaRecord> {
    let records: Vec<MediaRecord> = items
        .iter()
        .enumerate()
        .filter_map(|(position, entry)| {
            let record = record_from_entry(entry);
            if record.is_none() {
                tracing::debug!(position, "Skipping unsupported catalog entry");
            }
            record
        })
        .collect();

    tracing::debug!(
        total = items.len(),
        kept = records.len(),
        "Search results mapped"
    );
    records
}

impl<A> MediaSource for JustWatchSource<A>
where
    A: JustWatchApi + Sync,
{
    fn info(&self) -> &SourceInfo {
        &JUSTWATCH_INFO
    }

    #[instrument(skip_all, fields(locale = %self.locale))]
    async fn search_by_title(&self, query: &str) -> Result<Vec<MediaRecord>> {
        let params = SearchTitlesParams::new(query).locale(self.locale.clone());
        let response = self.api.search_titles(&params).await?;
        Ok(map_search_items(&response.items))
    }

    #[instrument(skip_all, fields(locale = %self.locale, id = %id))]
    async fn get_by_id(&self, id: &str) -> Result<Option<MediaRecord>> {
        let (object_type, numeric) = parse_external_id(id)?;

        let Some(details) = self
            .api
            .title_details(object_type, numeric, &self.locale)
            .await?
        else {
            tracing::debug!("No title for id");
            return Ok(None);
        };

        Ok(build_record(
            object_type,
            &details.title,
            details.original_release_year,
            details.id.to_string(),
        ))
    }
}
