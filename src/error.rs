use thiserror::Error;

/// Any failure in the pipeline: reading the ledger, computing totals, or
/// writing the per-order sheets.
///
/// No stage recovers from another stage's failure; every error propagates to
/// the caller and ends the run.
#[derive(Debug, Error)]
pub enum Error {
    /// The ledger file could not be opened or parsed as CSV with the
    /// expected columns.
    #[error("reading ledger: {0}")]
    Input(String),
    /// A quantity or price needed for a total was missing, malformed, or
    /// produced an overflowing total.
    #[error("computing totals: {0}")]
    Computation(String),
    /// An order sheet, or the directory holding it, could not be written.
    #[error("writing order sheets: {0}")]
    Output(String),
}
