use log::debug;

use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::error::Error;
use crate::orders::Order;

/// Column headers of every order sheet, in output order.
pub const HEADER: [&str; 4] = ["Item Number", "Item Quantity", "Item Price", "Total Price"];

/// Returns the default directory for order sheets: `orders`, next to the
/// ledger file.
#[must_use]
pub fn orders_dir(ledger_path: &Path) -> PathBuf {
    ledger_path
        .parent()
        .unwrap_or_else(|| Path::new("."))
        .join("orders")
}

/// Writes one sheet per order into `dir`, creating the directory first if it
/// does not already exist. Returns the paths written, in the given order.
///
/// # Errors
///
/// Returns [`Error::Output`] if the directory cannot be created or any sheet
/// cannot be written.
pub fn write_orders(orders: &[Order], dir: &Path) -> Result<Vec<PathBuf>, Error> {
    fs::create_dir_all(dir)
        .map_err(|e| Error::Output(format!("creating {}: {e}", dir.display())))?;
    let mut written = Vec::with_capacity(orders.len());
    for order in orders {
        written.push(write_order(order, dir)?);
    }
    Ok(written)
}

/// Writes a single order's sheet into `dir` as `order_<id>.csv`,
/// overwriting any existing file of that name.
///
/// Money columns are rendered in currency format (`$1,234.50`); the
/// grand-total row comes last.
///
/// # Errors
///
/// Returns [`Error::Output`] if the sheet cannot be written or finalized.
pub fn write_order(order: &Order, dir: &Path) -> Result<PathBuf, Error> {
    let path = dir.join(format!("order_{}.csv", order.id));
    let output_err = |e: &dyn std::fmt::Display| Error::Output(format!("{}: {e}", path.display()));
    let mut wtr = csv::Writer::from_path(&path).map_err(|e| output_err(&e))?;
    wtr.write_record(HEADER).map_err(|e| output_err(&e))?;
    for row in order.rows() {
        wtr.write_record(&row).map_err(|e| output_err(&e))?;
    }
    wtr.flush().map_err(|e| output_err(&e))?;
    debug!(
        "order {}: {} line(s), total {}, written to {}",
        order.id,
        order.lines.len(),
        order.grand_total,
        path.display()
    );
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::orders::{Line, Order};
    use crate::usd::Usd;

    use std::fs;

    fn order_a() -> Order {
        Order {
            id: "A".to_string(),
            lines: vec![
                Line {
                    item: "item1".to_string(),
                    qty: 2,
                    price: Usd::from_cents(500),
                    total: Usd::from_cents(1000),
                },
                Line {
                    item: "item2".to_string(),
                    qty: 1,
                    price: Usd::from_cents(300),
                    total: Usd::from_cents(300),
                },
            ],
            grand_total: Usd::from_cents(1300),
        }
    }

    #[test]
    fn orders_dir_fn_returns_sibling_of_ledger() {
        assert_eq!(
            orders_dir(Path::new("/data/sales.csv")),
            PathBuf::from("/data/orders")
        );
        assert_eq!(orders_dir(Path::new("sales.csv")), PathBuf::from("orders"));
    }

    #[test]
    fn write_order_fn_writes_header_lines_and_grand_total() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_order(&order_a(), dir.path()).unwrap();
        assert_eq!(path.file_name().unwrap(), "order_A.csv");
        let content = fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(
            lines,
            vec![
                "Item Number,Item Quantity,Item Price,Total Price",
                "item1,2,$5.00,$10.00",
                "item2,1,$3.00,$3.00",
                "Grand Total,-,-,$13.00",
            ]
        );
    }

    #[test]
    fn write_order_fn_quotes_amounts_with_thousands_separators() {
        let dir = tempfile::tempdir().unwrap();
        let order = Order {
            id: "B".to_string(),
            lines: vec![Line {
                item: "item1".to_string(),
                qty: 1,
                price: Usd::from_cents(123_450),
                total: Usd::from_cents(123_450),
            }],
            grand_total: Usd::from_cents(123_450),
        };
        let path = write_order(&order, dir.path()).unwrap();
        let content = fs::read_to_string(&path).unwrap();
        assert!(
            content.contains("\"$1,234.50\""),
            "amount not quoted: {content}"
        );
    }

    #[test]
    fn write_order_fn_overwrites_existing_sheet() {
        let dir = tempfile::tempdir().unwrap();
        let stale = dir.path().join("order_A.csv");
        fs::write(&stale, "stale content\n").unwrap();
        let path = write_order(&order_a(), dir.path()).unwrap();
        assert_eq!(path, stale);
        let content = fs::read_to_string(&path).unwrap();
        assert!(!content.contains("stale"), "not overwritten: {content}");
    }

    #[test]
    fn write_orders_fn_creates_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("out").join("orders");
        let written = write_orders(&[order_a()], &nested).unwrap();
        assert_eq!(written.len(), 1);
        assert!(written[0].is_file());
    }

    #[test]
    fn write_orders_fn_returns_output_error_for_unwritable_dir() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("orders");
        fs::write(&blocker, "a file, not a directory").unwrap();
        let err = write_orders(&[order_a()], &blocker).unwrap_err();
        assert!(matches!(err, Error::Output(_)), "wrong error: {err}");
    }
}
