use serde::Deserialize;

use std::path::Path;

use crate::error::Error;
use crate::usd::Usd;

/// Defines the CSV format for one ledger row: a single purchased line item
/// belonging to some order.
///
/// Quantity and price are parsed to numeric types at load time, so a
/// malformed monetary figure is caught before any aggregation happens. The
/// address fields are read for completeness but carry nothing the order
/// sheets need; [`crate::split_orders`] drops them.
#[derive(Debug, Clone, Deserialize)]
pub struct Record {
    #[serde(rename = "ORDER ID")]
    pub order_id: String,
    #[serde(rename = "Item Number")]
    pub item: String,
    #[serde(rename = "Item Quantity")]
    pub qty: u32,
    #[serde(rename = "Item Price")]
    pub price: Usd,
    #[serde(rename = "ADDRESS")]
    pub address: String,
    #[serde(rename = "CITY")]
    pub city: String,
    #[serde(rename = "STATE")]
    pub state: String,
    #[serde(rename = "POSTAL CODE")]
    pub postal_code: String,
    #[serde(rename = "COUNTRY")]
    pub country: String,
}

const REQUIRED_COLUMNS: [&str; 4] = ["ORDER ID", "Item Number", "Item Quantity", "Item Price"];

/// Reads the whole sales ledger at `path` into memory, preserving row order.
///
/// There is no partial-success mode: either every row parses or the load
/// fails.
///
/// # Errors
///
/// Returns [`Error::Input`] if the file cannot be opened, is missing a
/// required column, or is not valid CSV, and [`Error::Computation`] if a row
/// has a quantity or price that does not parse as a number.
pub fn read_ledger(path: impl AsRef<Path>) -> Result<Vec<Record>, Error> {
    let path = path.as_ref();
    let mut rdr = csv::Reader::from_path(path)
        .map_err(|e| Error::Input(format!("{}: {e}", path.display())))?;
    let headers = rdr
        .headers()
        .map_err(|e| Error::Input(format!("{}: {e}", path.display())))?
        .clone();
    for col in REQUIRED_COLUMNS {
        if !headers.iter().any(|h| h == col) {
            return Err(Error::Input(format!(
                "{}: missing column {col:?}",
                path.display()
            )));
        }
    }
    let mut records = Vec::new();
    for result in rdr.deserialize() {
        match result {
            Ok(record) => records.push(record),
            Err(e) => return Err(classify(path, &e)),
        }
    }
    Ok(records)
}

/// A field-level deserialize failure means a bad quantity or price (the
/// required columns are known to exist by this point); anything else is a
/// malformed ledger.
fn classify(path: &Path, err: &csv::Error) -> Error {
    let line = err.position().map_or(0, csv::Position::line);
    let message = format!("{}, line {line}: {err}", path.display());
    match err.kind() {
        csv::ErrorKind::Deserialize { .. } => Error::Computation(message),
        _ => Error::Input(message),
    }
}
