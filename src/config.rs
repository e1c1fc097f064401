//! Price table sourcing.
//!
//! The table lives outside the application, either as one JSON document or
//! as a secrets-style TOML file whose `[precios]` entries are JSON
//! documents. Whichever the source, the table is validated before it is
//! handed to the calculator; a bad file blocks quoting entirely.

use std::fs;
use std::path::Path;

use serde::Deserialize;
use tracing::{error, info};

use crate::error::ConfigError;
use crate::pricing::models::{CivilWeddingRates, DistanceSurcharge, FullWeddingRates, PriceTable};

/// Environment variable naming the price table file.
pub const PRICING_FILE_ENV: &str = "PRICING_FILE";

/// Load the price table from the file named by `PRICING_FILE`.
///
/// A `.env` file in the working directory is honored. This is the session
/// entry point: call it once at startup and halt on error before showing
/// any form.
pub fn price_table_from_env() -> Result<PriceTable, ConfigError> {
    dotenvy::dotenv().ok();
    let path = std::env::var(PRICING_FILE_ENV).map_err(|_| ConfigError::NotConfigured)?;
    load_price_table(Path::new(&path))
}

/// Load and validate the price table at `path`.
///
/// `.toml` files are read in the secrets layout (a `[precios]` table whose
/// values are JSON documents); anything else is parsed as one JSON document
/// with `boda_completa`, `boda_civil` and `suplemento_distancia` sections.
pub fn load_price_table(path: &Path) -> Result<PriceTable, ConfigError> {
    let raw = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let table = if path.extension().is_some_and(|ext| ext == "toml") {
        parse_secrets_toml(path, &raw)?
    } else {
        serde_json::from_str(&raw).map_err(|e| parse_error(path, "price table", e))?
    };

    if let Err(errors) = table.validate() {
        error!(path = %path.display(), findings = errors.len(), "price table rejected");
        return Err(ConfigError::Invalid {
            path: path.to_path_buf(),
            errors,
        });
    }

    info!(path = %path.display(), "price table loaded");
    Ok(table)
}

/// Secrets layout: each pricing section is a JSON document stored as a
/// string value under `[precios]`, exactly as the hosted secrets store
/// keeps them.
#[derive(Debug, Deserialize)]
struct SecretsFile {
    precios: PreciosSecrets,
}

#[derive(Debug, Deserialize)]
struct PreciosSecrets {
    boda_completa: String,
    boda_civil: String,
    suplemento_distancia: String,
}

fn parse_secrets_toml(path: &Path, raw: &str) -> Result<PriceTable, ConfigError> {
    let secrets: SecretsFile =
        toml::from_str(raw).map_err(|e| parse_error(path, "secrets file", e))?;

    let boda_completa: FullWeddingRates = serde_json::from_str(&secrets.precios.boda_completa)
        .map_err(|e| parse_error(path, "precios.boda_completa", e))?;
    let boda_civil: CivilWeddingRates = serde_json::from_str(&secrets.precios.boda_civil)
        .map_err(|e| parse_error(path, "precios.boda_civil", e))?;
    let suplemento_distancia: DistanceSurcharge =
        serde_json::from_str(&secrets.precios.suplemento_distancia)
            .map_err(|e| parse_error(path, "precios.suplemento_distancia", e))?;

    Ok(PriceTable {
        boda_completa,
        boda_civil,
        suplemento_distancia,
    })
}

fn parse_error(path: &Path, context: &str, e: impl std::fmt::Display) -> ConfigError {
    ConfigError::Parse {
        path: path.to_path_buf(),
        message: format!("{}: {}", context, e),
    }
}
