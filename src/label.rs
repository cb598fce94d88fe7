use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// A display-name value as it appears in a locale dataset.
///
/// Dataset sources store either a plain string or a ranked list of
/// alternate labels (`"France"` vs `["France", "Francia"]`). The two
/// shapes are modeled explicitly so the "first element wins" rule in
/// [`first_label`](LabelValue::first_label) is exhaustive rather than
/// relying on runtime type sniffing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LabelValue {
    Single(String),
    Multiple(SmallVec<[String; 3]>),
}

impl LabelValue {
    /// The representative display string for this value.
    ///
    /// A scalar passes through; a list yields its first element. Returns
    /// `None` when the list is empty, which callers are expected to treat
    /// as a data-integrity violation rather than paper over.
    #[inline]
    pub fn first_label(&self) -> Option<&str> {
        match self {
            LabelValue::Single(s) => Some(s),
            LabelValue::Multiple(alts) => alts.first().map(String::as_str),
        }
    }

    /// All labels carried by this value, in rank order.
    pub fn labels(&self) -> &[String] {
        match self {
            LabelValue::Single(s) => std::slice::from_ref(s),
            LabelValue::Multiple(alts) => alts,
        }
    }
}

impl From<&str> for LabelValue {
    fn from(s: &str) -> Self {
        LabelValue::Single(s.to_owned())
    }
}

impl From<String> for LabelValue {
    fn from(s: String) -> Self {
        LabelValue::Single(s)
    }
}

impl From<&[&str]> for LabelValue {
    /// One label becomes the canonical scalar shape, more stay a ranked
    /// list, mirroring how locale datasets spell the two cases.
    fn from(labels: &[&str]) -> Self {
        match labels {
            [only] => LabelValue::Single((*only).to_owned()),
            many => LabelValue::Multiple(many.iter().map(|s| (*s).to_owned()).collect()),
        }
    }
}
