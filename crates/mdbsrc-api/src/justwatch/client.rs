//! `JustWatchClient` - JustWatch API client implementation.

use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::instrument;
use url::Url;

use super::SOURCE_NAME;
use super::api::JustWatchApi;
use super::types::{
    JustWatchErrorEnvelope, JustWatchSearchResponse, JustWatchTitleDetails, ObjectType,
    SearchTitlesParams,
};
use crate::error::{Result, SourceError};
use crate::locale::Locale;

/// Default base URL for the JustWatch content API.
pub const DEFAULT_BASE_URL: &str = "https://apis.justwatch.com/";

/// JustWatch API client.
#[derive(Debug, Clone)]
#[allow(clippy::module_name_repetitions)]
pub struct JustWatchClient {
    /// HTTP client.
    http_client: Client,
    /// Base URL for API requests.
    base_url: Url,
}

/// Builder for `JustWatchClient`.
#[derive(Debug, Default)]
#[allow(clippy::module_name_repetitions)]
pub struct JustWatchClientBuilder {
    base_url: Option<Url>,
    user_agent: Option<String>,
}

impl JustWatchClientBuilder {
    /// Creates a new builder.
    const fn new() -> Self {
        Self {
            base_url: None,
            user_agent: None,
        }
    }

    /// Overrides the base URL (for wiremock in tests).
    #[must_use]
    pub fn base_url(mut self, url: Url) -> Self {
        self.base_url = Some(url);
        self
    }

    /// Sets a User-Agent header. None is sent by default.
    #[must_use]
    pub fn user_agent(mut self, ua: impl Into<String>) -> Self {
        self.user_agent = Some(ua.into());
        self
    }

    /// Builds the client.
    ///
    /// # Errors
    ///
    /// - The default base URL fails to parse.
    /// - `reqwest::Client` build fails.
    pub fn build(self) -> Result<JustWatchClient> {
        let base_url = match self.base_url {
            Some(url) => url,
            None => Url::parse(DEFAULT_BASE_URL)?,
        };

        let mut http = Client::builder().gzip(true);
        if let Some(ref ua) = self.user_agent {
            http = http.user_agent(ua);
        }
        let http_client = http.build().map_err(SourceError::Build)?;

        Ok(JustWatchClient {
            http_client,
            base_url,
        })
    }
}

/// Wraps a transport failure with the source name.
fn transport(source: reqwest::Error) -> SourceError {
    SourceError::Transport {
        source_name: String::from(SOURCE_NAME),
        source,
    }
}

impl JustWatchClient {
    /// Creates a new builder.
    #[must_use]
    pub const fn builder() -> JustWatchClientBuilder {
        JustWatchClientBuilder::new()
    }

    /// Returns the base URL requests are resolved against.
    #[must_use]
    pub const fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Sends a GET request and decodes the JSON body.
    ///
    /// Returns `Ok(None)` for the "not found" envelope or a `null` body.
    /// Any other error envelope, and any non-success status, becomes
    /// `SourceError::Request` carrying the raw body.
    #[instrument(skip_all)]
    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<Option<T>> {
        let url = self.base_url.join(path)?;

        let request = self
            .http_client
            .get(url)
            .query(query)
            .build()
            .map_err(transport)?;

        tracing::debug!(url = %request.url(), "JustWatch API request");

        let response = self.http_client.execute(request).await.map_err(transport)?;
        let status = response.status();
        let body = response.text().await.map_err(transport)?;

        tracing::debug!(%status, body_len = body.len(), "JustWatch API response");

        if let Ok(envelope) = serde_json::from_str::<JustWatchErrorEnvelope>(&body)
            && envelope.is_failure()
        {
            if envelope.is_not_found() {
                tracing::debug!(path, "JustWatch reported no match");
                return Ok(None);
            }
            return Err(SourceError::Request {
                source_name: String::from(SOURCE_NAME),
                status: status.as_u16(),
                payload: body,
            });
        }

        if !status.is_success() {
            return Err(SourceError::Request {
                source_name: String::from(SOURCE_NAME),
                status: status.as_u16(),
                payload: body,
            });
        }

        serde_json::from_str::<Option<T>>(&body).map_err(|source| SourceError::Decode {
            source_name: String::from(SOURCE_NAME),
            context: String::from(path),
            source,
        })
    }
}

impl JustWatchApi for JustWatchClient {
    #[instrument(skip_all, fields(locale = %params.locale))]
    async fn search_titles(&self, params: &SearchTitlesParams) -> Result<JustWatchSearchResponse> {
        let path = format!("content/titles/{}/popular", params.locale);
        let query = [("body", params.body())];
        let response = self.get_json(&path, &query).await?;
        Ok(response.unwrap_or_default())
    }

    #[instrument(skip_all, fields(object_type = %object_type, id = id, locale = %locale))]
    async fn title_details(
        &self,
        object_type: ObjectType,
        id: u64,
        locale: &Locale,
    ) -> Result<Option<JustWatchTitleDetails>> {
        let path = format!("content/titles/{object_type}/{id}/locale/{locale}");
        self.get_json(&path, &[]).await
    }
}
