//! Stock Watch — a demonstration driver for the observer core.
//!
//! This binary constructs one `Stock`, attaches one `Investor` per configured
//! name, and replays a sequence of price changes. Every change is broadcast
//! synchronously to the attached investors, each of which prints one
//! notification line to stdout, in attachment order.
//!
//! Usage example (CLI):
//! ```bash
//! stock_watch --investors Alice Bob --prices 150.5 155.0
//! ```
//!
//! With no arguments the reference scenario runs: investors Alice and Bob,
//! price changes 150.5 and 155.0, producing four notification lines. A price
//! sequence can also be read from a text file with `--path` (one price per
//! line, blank lines ignored).
#![warn(missing_docs)]
mod args;

use crate::args::Args;
use clap::Parser;
use log::info;
use stock_common::prices::PriceParser;
use stock_common::FeedError;
use stock_common::Investor;
use stock_common::Observer;
use stock_common::Result;
use stock_common::Stock;
use std::fs::File;
use std::io::BufReader;
use std::rc::Rc;

fn main() -> Result<(), FeedError> {
    init_logger();
    let args = Args::parse();

    let prices = match &args.path {
        Some(path) => {
            let file = File::open(path).map_err(FeedError::Io)?;
            let prices = f64::parse_from_file(BufReader::new(file))?;
            info!("Loaded {} prices from {}", prices.len(), path.display());
            prices
        }
        None => args.prices.clone(),
    };

    let mut stock = Stock::new();
    for name in &args.investors {
        let investor: Rc<dyn Observer> = Rc::new(Investor::new(name.clone()));
        stock.attach(investor);
        info!("Attached investor {}", name);
    }
    info!(
        "Replaying {} price changes to {} observers",
        prices.len(),
        stock.observer_count()
    );

    for price in prices {
        stock.set_price(price);
    }
    info!("Done. Final price: {}", stock.price());

    Ok(())
}

fn init_logger() {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();
}
