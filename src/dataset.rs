//! Locale dataset documents.
//!
//! A dataset document is the JSON shape locale packages ship per language:
//!
//! ```json
//! { "locale": "en", "countries": { "AF": "Afghanistan", ... } }
//! ```
//!
//! Parsing lives here so the directory itself never touches a wire format;
//! it only ever sees an already-built [`RawCountryRecord`].

pub mod en;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::record::RawCountryRecord;

#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("malformed locale document: {0}")]
    Parse(#[from] serde_json::Error),
}

/// One parsed locale document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocaleDataset {
    /// Language tag of the document, e.g. `"en"`.
    pub locale: String,
    /// Country table in document order.
    pub countries: RawCountryRecord,
}

impl LocaleDataset {
    pub fn from_json_str(doc: &str) -> Result<Self, DatasetError> {
        let dataset: LocaleDataset = serde_json::from_str(doc)?;
        debug!(
            locale = %dataset.locale,
            countries = dataset.countries.len(),
            "parsed locale dataset"
        );
        Ok(dataset)
    }

    pub fn from_reader<R: std::io::Read>(reader: R) -> Result<Self, DatasetError> {
        let dataset: LocaleDataset = serde_json::from_reader(reader)?;
        debug!(
            locale = %dataset.locale,
            countries = dataset.countries.len(),
            "parsed locale dataset"
        );
        Ok(dataset)
    }

    pub fn into_record(self) -> RawCountryRecord {
        self.countries
    }
}
