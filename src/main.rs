mod converter;
mod error;
mod handlers;
mod logging;
mod parser;
mod rates;
mod repl;

use anyhow::Error;
use std::io;
use tracing::info;

use rates::RateTable;

fn main() -> Result<(), Error> {
    logging::init_logger();

    let table = RateTable::new()?;

    let (count_categories, count_rates) = table.counts();
    info!(count_categories, count_rates, "loaded rate table");

    let stdin = io::stdin();
    let stdout = io::stdout();

    repl::run(&table, stdin.lock(), stdout.lock())
}
