//! Interactive menu loop.
//!
//! Reads choices line by line from any `BufRead` and writes prompts to any
//! `Write`, so the loop runs the same against a terminal or a test buffer.
//! End of input behaves like choosing Exit.

use std::io::{BufRead, Write};

use crate::cli::session::{placed_message, Session};
use crate::error::StoreError;
use crate::types::{Price, Side};

const BANNER: &str = "\n====================================\n  Stock Market Order Book Simulator\n====================================\n1. Place Buy Order\n2. Place Sell Order\n3. View Order Book\n4. Exit";

/// Run the menu until the user exits or input ends
pub fn run_menu<R: BufRead, W: Write>(
    session: &mut Session,
    mut input: R,
    output: &mut W,
) -> Result<(), StoreError> {
    loop {
        writeln!(output, "{BANNER}")?;
        let Some(choice) = prompt(&mut input, output, "Enter your choice: ")? else {
            break;
        };

        match choice.as_str() {
            "1" => place_from_input(session, &mut input, output, Side::Bid)?,
            "2" => place_from_input(session, &mut input, output, Side::Ask)?,
            "3" => write!(output, "{}", session.render())?,
            "4" => break,
            _ => writeln!(output, "Invalid choice. Please select a valid option.")?,
        }
    }

    writeln!(output, "Exiting Stock Market Order Book Simulator. Goodbye!")?;
    Ok(())
}

fn place_from_input<R: BufRead, W: Write>(
    session: &mut Session,
    input: &mut R,
    output: &mut W,
    side: Side,
) -> Result<(), StoreError> {
    let label = match side {
        Side::Bid => "Buy",
        Side::Ask => "Sell",
    };

    let Some(price) = prompt(input, output, &format!("Enter {label} Order Price: "))? else {
        return Ok(());
    };
    let price = match price.parse::<Price>() {
        Ok(price) => price,
        Err(e) => {
            writeln!(output, "{e}")?;
            return Ok(());
        }
    };

    let Some(quantity) = prompt(input, output, &format!("Enter {label} Order Quantity: "))? else {
        return Ok(());
    };
    let quantity = match parse_quantity(&quantity) {
        Ok(quantity) => quantity,
        Err(e) => {
            writeln!(output, "{e}")?;
            return Ok(());
        }
    };

    let record = session.place(side, price, quantity)?;
    writeln!(output, "{}", placed_message(side, &record))?;
    Ok(())
}

/// Parse a non-negative integer quantity
pub fn parse_quantity(s: &str) -> Result<u64, StoreError> {
    s.trim()
        .parse::<u64>()
        .map_err(|_| StoreError::Quantity(s.to_string()))
}

/// Write `message`, read one trimmed line; `None` at end of input
fn prompt<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    message: &str,
) -> Result<Option<String>, StoreError> {
    write!(output, "{message}")?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

// ============================================================================
// Unit Tests
// ============================================================================
