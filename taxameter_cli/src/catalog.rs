use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use taxameter_pricing::json::types::JsonTariffCatalog;
use taxameter_pricing::tariff::catalog::TariffCatalog;

/// Built-in rules, unless a JSON catalog file is named.
pub fn load_catalog(path: Option<&Path>) -> anyhow::Result<TariffCatalog> {
    match path {
        Some(path) => {
            let file = File::open(path)?;
            let reader = BufReader::new(file);
            let content: JsonTariffCatalog = serde_json::from_reader(reader)?;

            Ok(content.create_catalog()?)
        }
        None => Ok(TariffCatalog::builtin()),
    }
}
