use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use order_split::Config;

/// Splits a sales ledger CSV into one spreadsheet per order, with line-item
/// totals and a grand-total row.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Path of the sales ledger CSV file
    ledger: PathBuf,

    /// Directory for the order sheets (default: `orders`, next to the ledger)
    #[arg(short, long, value_name = "DIR")]
    output: Option<PathBuf>,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();
    let config = Config::new(args.ledger, args.output);
    let written = order_split::run(&config)?;
    println!(
        "wrote {} order sheet(s) to {}",
        written.len(),
        config.orders_dir.display()
    );
    Ok(())
}
