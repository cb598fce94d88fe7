//! Case folding for country codes.
//!
//! Codes are passed through casing only; no format validation happens here.
//! A code that is not a real ISO-3166 assignment folds like any other string
//! and gets filtered (or not) by whoever consumes the views.

/// Lowercase a country code.
///
/// ISO-3166 alpha-2 codes are ASCII, so the common case never walks the
/// Unicode tables.
#[inline]
pub fn fold_lower(code: &str) -> String {
    if code.is_ascii() {
        code.to_ascii_lowercase()
    } else {
        code.to_lowercase()
    }
}

/// Uppercase a country code. Counterpart of [`fold_lower`].
#[inline]
pub fn fold_upper(code: &str) -> String {
    if code.is_ascii() {
        code.to_ascii_uppercase()
    } else {
        code.to_uppercase()
    }
}
