//! Read-only query views over a [`RawCountryRecord`].
//!
//! All four operations are pure functions of the injected record and are
//! recomputed on every call; the record is immutable once handed over, so
//! callers that care can memoize the results themselves.

use std::collections::{HashMap, HashSet};

use serde::Serialize;
use thiserror::Error;

use crate::code::{fold_lower, fold_upper};
use crate::label::LabelValue;
use crate::record::RawCountryRecord;

#[derive(Debug, Error)]
pub enum DirectoryError {
    /// A label value was an empty list. That is a precondition violation
    /// of the dataset contract (every value must carry at least one
    /// label), so it propagates instead of degrading to an empty name.
    #[error("country `{code}` has an empty label list")]
    EmptyLabelList { code: String },
}

/// One row of the object-series view: lowercase code plus display name.
///
/// Field order and names line up with what map renderers ingest as series
/// data, so the struct serializes directly into a chart payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CountryEntry {
    pub code: String,
    pub name: String,
}

/// Query facade over one country dataset.
pub struct CountryDirectory {
    record: RawCountryRecord,
}

impl CountryDirectory {
    pub fn new(record: RawCountryRecord) -> Self {
        Self { record }
    }

    /// Directory over the built-in English table.
    pub fn builtin_english() -> Self {
        Self::new(crate::dataset::en::english())
    }

    pub fn record(&self) -> &RawCountryRecord {
        &self.record
    }

    /// Lowercase code → display name.
    ///
    /// Codes that collapse under case folding keep the later entry's
    /// label, matching plain map-overwrite semantics. Lookup map only:
    /// its key order carries no meaning, use [`lowercase_codes`] when
    /// order matters.
    ///
    /// [`lowercase_codes`]: CountryDirectory::lowercase_codes
    pub fn label_map(&self) -> Result<HashMap<String, String>, DirectoryError> {
        let mut map = HashMap::with_capacity(self.record.len());
        for (code, label) in self.record.iter() {
            map.insert(fold_lower(code), self.display_name(code, label)?);
        }
        Ok(map)
    }

    /// One [`CountryEntry`] per record entry, in record order.
    ///
    /// Never sorted: the consuming renderer layers regions in series
    /// order, so re-sorting would change what ends up on top.
    pub fn entries(&self) -> Result<Vec<CountryEntry>, DirectoryError> {
        let mut series = Vec::with_capacity(self.record.len());
        for (code, label) in self.record.iter() {
            series.push(CountryEntry {
                code: fold_lower(code),
                name: self.display_name(code, label)?,
            });
        }
        Ok(series)
    }

    /// Case-folded codes, first-seen order, deduplicated.
    pub fn lowercase_codes(&self) -> Vec<String> {
        let mut seen = HashSet::with_capacity(self.record.len());
        let mut codes = Vec::with_capacity(self.record.len());
        for (code, _) in self.record.iter() {
            let folded = fold_lower(code);
            if seen.insert(folded.clone()) {
                codes.push(folded);
            }
        }
        codes
    }

    /// [`lowercase_codes`](CountryDirectory::lowercase_codes), element-wise
    /// uppercased. Same length, same positions.
    pub fn uppercase_codes(&self) -> Vec<String> {
        self.lowercase_codes()
            .iter()
            .map(|code| fold_upper(code))
            .collect()
    }

    fn display_name(&self, code: &str, label: &LabelValue) -> Result<String, DirectoryError> {
        label
            .first_label()
            .map(str::to_owned)
            .ok_or_else(|| DirectoryError::EmptyLabelList {
                code: code.to_owned(),
            })
    }
}
