use std::collections::HashMap;

use crate::error::Error;
use crate::ledger::Record;
use crate::usd::Usd;

/// Label for the item-number cell of the summary row appended to every
/// order sheet.
pub const GRAND_TOTAL: &str = "Grand Total";

/// Placeholder for the quantity and price cells of the summary row.
const PLACEHOLDER: &str = "-";

/// One line item of an order, with its computed total.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    pub item: String,
    pub qty: u32,
    pub price: Usd,
    pub total: Usd,
}

/// All line items sharing one order ID, sorted by item number, plus the
/// grand total over their line totals.
///
/// Orders are non-empty by construction: one exists only because at least
/// one ledger row named its ID.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Order {
    pub id: String,
    pub lines: Vec<Line>,
    pub grand_total: Usd,
}

impl Order {
    /// Returns the sheet rows for this order: one per line item, in sorted
    /// order, with the grand-total row last. The grand total is computed
    /// from the line totals alone; the summary row never feeds back into it.
    #[must_use]
    pub fn rows(&self) -> Vec<[String; 4]> {
        let mut rows: Vec<[String; 4]> = self
            .lines
            .iter()
            .map(|line| {
                [
                    line.item.clone(),
                    line.qty.to_string(),
                    line.price.to_string(),
                    line.total.to_string(),
                ]
            })
            .collect();
        rows.push([
            GRAND_TOTAL.to_string(),
            PLACEHOLDER.to_string(),
            PLACEHOLDER.to_string(),
            self.grand_total.to_string(),
        ]);
        rows
    }
}

/// Partitions ledger rows into one [`Order`] per distinct order ID.
///
/// Orders come back in the order their IDs first appear in the ledger.
/// Within each order, lines are sorted ascending by item number; rows with
/// equal item numbers keep their original relative order. The address
/// fields of each [`Record`] are dropped here.
///
/// # Errors
///
/// Returns [`Error::Computation`] if any line total (quantity times price)
/// overflows. Nothing has been written when that happens, so a bad row
/// aborts the run with no partial output.
pub fn split_orders(records: Vec<Record>) -> Result<Vec<Order>, Error> {
    let mut orders: Vec<Order> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();
    for record in records {
        let total = record.price.checked_mul(record.qty).ok_or_else(|| {
            Error::Computation(format!(
                "order {}, item {}: line total overflows ({} units at {})",
                record.order_id, record.item, record.qty, record.price
            ))
        })?;
        let line = Line {
            item: record.item,
            qty: record.qty,
            price: record.price,
            total,
        };
        let idx = match index.get(&record.order_id) {
            Some(&i) => i,
            None => {
                let i = orders.len();
                index.insert(record.order_id.clone(), i);
                orders.push(Order {
                    id: record.order_id,
                    lines: Vec::new(),
                    grand_total: Usd::default(),
                });
                i
            }
        };
        orders[idx].lines.push(line);
    }
    for order in &mut orders {
        order.lines.sort_by(|a, b| a.item.cmp(&b.item));
        let mut grand_total = Usd::default();
        for line in &order.lines {
            grand_total += line.total;
        }
        order.grand_total = grand_total;
    }
    Ok(orders)
}
