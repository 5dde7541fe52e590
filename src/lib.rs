#![doc = include_str!("../README.md")]
use log::info;

use std::path::PathBuf;

mod error;
mod ledger;
mod orders;
mod sheet;
mod usd;

pub use error::Error;
pub use ledger::{read_ledger, Record};
pub use orders::{split_orders, Line, Order, GRAND_TOTAL};
pub use sheet::{orders_dir, write_order, write_orders, HEADER};
pub use usd::Usd;

/// Where to read the ledger from and where to put the order sheets.
///
/// Built once by the CLI layer and handed to [`run`]; the pipeline never
/// mutates it.
#[derive(Debug, Clone)]
pub struct Config {
    pub ledger_path: PathBuf,
    pub orders_dir: PathBuf,
}

impl Config {
    /// Creates a config for `ledger_path`, with order sheets going to
    /// `orders_dir` if given, or to an `orders` directory next to the
    /// ledger otherwise.
    #[must_use]
    pub fn new(ledger_path: impl Into<PathBuf>, orders_dir: Option<PathBuf>) -> Self {
        let ledger_path = ledger_path.into();
        let orders_dir = orders_dir.unwrap_or_else(|| sheet::orders_dir(&ledger_path));
        Self {
            ledger_path,
            orders_dir,
        }
    }
}

/// Runs the whole pipeline: loads the ledger, splits it into orders, and
/// writes one sheet per order. Returns the paths written, in order of each
/// order ID's first appearance in the ledger.
///
/// All totals are computed before the first sheet is written, so a bad
/// quantity or price anywhere in the ledger aborts the run with no partial
/// output. A ledger with a header but no rows succeeds and writes nothing.
///
/// # Errors
///
/// Returns the first [`Error`] from any stage; later stages do not run.
pub fn run(config: &Config) -> Result<Vec<PathBuf>, Error> {
    let records = read_ledger(&config.ledger_path)?;
    info!(
        "loaded {} ledger row(s) from {}",
        records.len(),
        config.ledger_path.display()
    );
    let orders = split_orders(records)?;
    info!("split into {} order(s)", orders.len());
    write_orders(&orders, &config.orders_dir)
}
