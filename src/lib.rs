pub mod code;
pub mod dataset;
pub mod directory;
pub mod label;
pub mod record;

pub use dataset::{DatasetError, LocaleDataset};
pub use directory::{CountryDirectory, CountryEntry, DirectoryError};
pub use label::LabelValue;
pub use record::RawCountryRecord;

#[cfg(test)]
mod tests {
    include!("tests/unit.rs");
    include!("tests/integration.rs");
    include!("tests/proptest.rs");
}
