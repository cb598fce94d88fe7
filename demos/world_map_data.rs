//! Feed a world-map renderer from the built-in English table: the series
//! rows it draws, and the uppercase include list that decides which
//! polygons are interactive. Exclusions are the consumer's call; here the
//! uninhabited continent is dropped the way map UIs usually do.

use std::error::Error;

use isodex::CountryDirectory;

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let dir = CountryDirectory::builtin_english();

    let include: Vec<String> = dir
        .uppercase_codes()
        .into_iter()
        .filter(|code| code != "AQ")
        .collect();
    println!("include list: {} codes, e.g. {:?}", include.len(), &include[..5]);

    let series = dir.entries()?;
    println!("series data for the renderer:");
    for entry in series.iter().take(5) {
        println!("  {}", serde_json::to_string(entry)?);
    }
    println!("  … {} rows total", series.len());

    let labels = dir.label_map()?;
    println!("tooltip name for `fr`: {}", labels["fr"]);

    Ok(())
}
