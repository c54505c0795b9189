//! Catalog locale tags.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Default catalog region.
const DEFAULT_LOCALE: &str = "en_AU";

/// A catalog locale in `language_REGION` form (e.g. `en_AU`).
///
/// Controls which regional catalog is queried and which currency offers are
/// priced in.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Locale(String);

/// Error returned when a locale tag is malformed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid locale {0:?}: expected language_REGION such as en_AU")]
pub struct InvalidLocale(pub String);

impl Locale {
    /// Returns the tag as used in request URLs.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the two-letter language part.
    #[must_use]
    pub fn language(&self) -> &str {
        self.0.split_once('_').map_or("", |(lang, _)| lang)
    }

    /// Returns the two-letter region part.
    #[must_use]
    pub fn region(&self) -> &str {
        self.0.split_once('_').map_or("", |(_, region)| region)
    }
}

impl Default for Locale {
    fn default() -> Self {
        Self(String::from(DEFAULT_LOCALE))
    }
}

impl FromStr for Locale {
    type Err = InvalidLocale;

    /// Parses `en_AU`; `en-AU` is accepted and normalized.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || InvalidLocale(String::from(s));
        let (lang, region) = s
            .split_once('_')
            .or_else(|| s.split_once('-'))
            .ok_or_else(invalid)?;

        let lang_ok = lang.len() == 2 && lang.bytes().all(|b| b.is_ascii_lowercase());
        let region_ok = region.len() == 2 && region.bytes().all(|b| b.is_ascii_uppercase());
        if !lang_ok || !region_ok {
            return Err(invalid());
        }

        Ok(Self(format!("{lang}_{region}")))
    }
}

impl TryFrom<String> for Locale {
    type Error = InvalidLocale;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Locale> for String {
    fn from(locale: Locale) -> Self {
        locale.0
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
