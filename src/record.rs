//! The raw code → label dictionary, with its iteration order intact.
//!
//! View order downstream is defined by input iteration order, so the record
//! cannot live in a hash map: entries are kept as an ordered sequence with
//! JSON-object key semantics. Re-inserting an existing key overwrites the
//! value but keeps the key's original position; a new key appends.

use std::fmt;

use serde::de::{Deserializer, MapAccess, Visitor};
use serde::ser::{SerializeMap, Serializer};
use serde::{Deserialize, Serialize};

use crate::label::LabelValue;

/// Ordered mapping from country code (mixed case, as supplied) to its
/// [`LabelValue`].
///
/// The record does not fold or validate codes; it stores exactly what the
/// dataset said, in the order the dataset said it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawCountryRecord {
    entries: Vec<(String, LabelValue)>,
}

impl RawCountryRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a `(code, label)` pair.
    ///
    /// An exactly-equal code (case-sensitive) overwrites in place; anything
    /// else appends. Codes differing only by case therefore coexist here
    /// and only collapse once the directory case-folds them.
    pub fn insert(&mut self, code: impl Into<String>, label: impl Into<LabelValue>) {
        let code = code.into();
        let label = label.into();
        match self.entries.iter_mut().find(|(c, _)| *c == code) {
            Some((_, slot)) => *slot = label,
            None => self.entries.push((code, label)),
        }
    }

    /// Label value for an exact (case-sensitive) code, if present.
    pub fn get(&self, code: &str) -> Option<&LabelValue> {
        self.entries
            .iter()
            .find(|(c, _)| c == code)
            .map(|(_, l)| l)
    }

    /// Entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &LabelValue)> {
        self.entries.iter().map(|(c, l)| (c.as_str(), l))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<C, L> FromIterator<(C, L)> for RawCountryRecord
where
    C: Into<String>,
    L: Into<LabelValue>,
{
    fn from_iter<I: IntoIterator<Item = (C, L)>>(iter: I) -> Self {
        let mut record = Self::new();
        for (code, label) in iter {
            record.insert(code, label);
        }
        record
    }
}

impl<'a> IntoIterator for &'a RawCountryRecord {
    type Item = (&'a str, &'a LabelValue);
    type IntoIter = std::iter::Map<
        std::slice::Iter<'a, (String, LabelValue)>,
        fn(&'a (String, LabelValue)) -> (&'a str, &'a LabelValue),
    >;

    fn into_iter(self) -> Self::IntoIter {
        let split: fn(&'a (String, LabelValue)) -> (&'a str, &'a LabelValue) =
            |(c, l)| (c.as_str(), l);
        self.entries.iter().map(split)
    }
}

impl Serialize for RawCountryRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (code, label) in &self.entries {
            map.serialize_entry(code, label)?;
        }
        map.end()
    }
}

// Deserialized by hand: deriving through a HashMap would shuffle the keys,
// and key order is part of the contract.
impl<'de> Deserialize<'de> for RawCountryRecord {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct RecordVisitor;

        impl<'de> Visitor<'de> for RecordVisitor {
            type Value = RawCountryRecord;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of country codes to label values")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut record = RawCountryRecord {
                    entries: Vec::with_capacity(access.size_hint().unwrap_or(0)),
                };
                while let Some((code, label)) = access.next_entry::<String, LabelValue>()? {
                    record.insert(code, label);
                }
                Ok(record)
            }
        }

        deserializer.deserialize_map(RecordVisitor)
    }
}
