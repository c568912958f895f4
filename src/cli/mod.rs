//! Command-line front end.
//!
//! Holds the book as explicit [`Session`] state and hands it to each command.
//! Identifier generation lives here as well: the book stores whatever
//! identifier it is given.
//!
//! ## Usage
//!
//! ```text
//! price-tree buy 101.5 10      # place a buy order
//! price-tree sell 102 4        # place a sell order
//! price-tree show              # print both sides
//! price-tree                   # interactive menu
//! ```

pub mod menu;
pub mod session;

use std::io::{self, Write};
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use uuid::Uuid;

use crate::error::StoreError;
use crate::store::{JsonStore, DEFAULT_STORE_PATH};
use crate::types::{Price, Side};

pub use menu::run_menu;
pub use session::{placed_message, Session};

/// Command line configuration
#[derive(Parser, Debug, Clone)]
#[command(name = "price-tree")]
#[command(version)]
#[command(about = "Stock market order book simulator", long_about = None)]
pub struct Cli {
    /// Path of the JSON file holding the book
    #[arg(short, long, env = "PRICE_TREE_STORE", default_value = DEFAULT_STORE_PATH)]
    pub store: PathBuf,

    /// Log level, used when RUST_LOG is not set
    #[arg(short = 'l', long, default_value = "warn", value_parser = ["trace", "debug", "info", "warn", "error"])]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Place a buy order
    Buy {
        /// Limit price, e.g. 101.5
        #[arg(allow_hyphen_values = true)]
        price: Price,
        /// Quantity (non-negative integer)
        quantity: u64,
    },
    /// Place a sell order
    Sell {
        /// Limit price, e.g. 101.5
        #[arg(allow_hyphen_values = true)]
        price: Price,
        /// Quantity (non-negative integer)
        quantity: u64,
    },
    /// Print both sides of the book
    Show,
    /// Interactive menu (the default)
    Menu,
}

/// Fresh order identifier: 32 lowercase hex characters
pub fn new_order_id() -> String {
    Uuid::new_v4().simple().to_string()
}

/// Execute one CLI invocation against the configured store
pub fn run(cli: Cli) -> Result<(), StoreError> {
    let mut session = Session::open(JsonStore::new(cli.store))?;
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.command.unwrap_or(Command::Menu) {
        Command::Buy { price, quantity } => {
            let record = session.place(Side::Bid, price, quantity)?;
            writeln!(out, "{}", placed_message(Side::Bid, &record))?;
        }
        Command::Sell { price, quantity } => {
            let record = session.place(Side::Ask, price, quantity)?;
            writeln!(out, "{}", placed_message(Side::Ask, &record))?;
        }
        Command::Show => write!(out, "{}", session.render())?,
        Command::Menu => run_menu(&mut session, io::stdin().lock(), &mut out)?,
    }
    Ok(())
}

// ============================================================================
// Unit Tests
// ============================================================================
