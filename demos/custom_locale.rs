//! Drive the directory with a locale document of your own instead of the
//! built-in English table.

use std::error::Error;

use isodex::{CountryDirectory, LocaleDataset};

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let doc = r#"{
        "locale": "es",
        "countries": {
            "US": ["Estados Unidos", "EE. UU."],
            "FR": "Francia",
            "DE": "Alemania",
            "ES": "España"
        }
    }"#;

    let dataset = LocaleDataset::from_json_str(doc)?;
    println!("loaded locale `{}`", dataset.locale);

    let dir = CountryDirectory::new(dataset.into_record());
    println!("codes (lower): {:?}", dir.lowercase_codes());
    println!("codes (upper): {:?}", dir.uppercase_codes());
    for entry in dir.entries()? {
        println!("  {} → {}", entry.code, entry.name);
    }

    Ok(())
}
