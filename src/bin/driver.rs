//! Command-line driver: runs a line-based text protocol against one
//! [`OrderBook`].
//!
//! Each input file holds one command per line, comma-separated. Malformed
//! lines are reported and skipped; the book is left untouched.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use clap::Parser;
use limit_order_book::{Order, OrderBook, OrderId, Side, TradeId, UserId};
use tracing::{info, warn};

#[derive(Parser, Debug)]
#[command(about = "Runs a text-protocol command file against a limit order book")]
struct Cli {
    /// Input files to process, in order.
    files: Vec<PathBuf>,

    /// Raise the log verbosity (repeatable).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress per-line informational logging; command output is unaffected.
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose, cli.quiet);

    if cli.files.is_empty() {
        warn!("no input files given");
        return ExitCode::FAILURE;
    }

    let book = OrderBook::new();
    let mut any_opened = false;

    for path in &cli.files {
        match process_file(&book, path) {
            Ok(()) => any_opened = true,
            Err(err) => warn!(path = %path.display(), %err, "could not process file, skipping"),
        }
    }

    if !any_opened {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

/// Opens and runs one command file against `book`, line by line.
///
/// Only the file open itself is a hard failure (propagated via `anyhow`
/// so the caller can log it and move on to the next file); a line that
/// fails to read or parse is reported and skipped without aborting the
/// rest of the file, per the malformed-input handling in the driver
/// protocol.
fn process_file(book: &OrderBook, path: &Path) -> Result<()> {
    let file = File::open(path).with_context(|| format!("opening {}", path.display()))?;
    println!("Processing file: {}", path.display());
    info!(path = %path.display(), "processing file");

    for (lineno, line) in BufReader::new(file).lines().enumerate() {
        let line = match line {
            Ok(l) => l,
            Err(err) => {
                warn!(path = %path.display(), line = lineno + 1, %err, "failed to read line");
                continue;
            }
        };
        if line.trim().is_empty() {
            continue;
        }
        process_line(book, &line);
    }
    Ok(())
}

fn init_tracing(verbose: u8, quiet: bool) {
    use tracing_subscriber::EnvFilter;

    let default_level = if quiet {
        "warn"
    } else {
        match verbose {
            0 => "info",
            1 => "debug",
            _ => "trace",
        }
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// Converts a textual side to [`Side`]. Anything other than a
/// case-insensitive `"buy"` is treated as `sell` — preserved from the
/// original driver's permissive `convert_side`.
fn convert_side(side_str: &str) -> Side {
    if side_str.eq_ignore_ascii_case("buy") {
        Side::Buy
    } else {
        Side::Sell
    }
}

fn process_line(book: &OrderBook, line: &str) {
    let mut fields = line.split(',');
    let Some(command) = fields.next() else {
        warn!("ignoring empty line or parse error");
        return;
    };

    match command.to_ascii_uppercase().as_str() {
        "ADD" => process_add(book, line, fields),
        "REMOVE" => process_remove(book, line, fields),
        "SHOW_BEST" => {
            println!("Best Bid: {:.2}, Best Ask: {:.2}", book.best_bid(), book.best_ask());
        }
        "BEST_BID" => println!("Best Bid: {:.2}", book.best_bid()),
        "BEST_ASK" => println!("Best Ask: {:.2}", book.best_ask()),
        "SHOW_TOP" => process_show_top(book, line, fields),
        "SHOW_ALL_TRADES" => process_show_all_trades(book),
        "GET_TRADE" => process_get_trade(book, line, fields),
        other => warn!(command = other, "unrecognized command, skipping line"),
    }
}

fn process_add<'a>(book: &OrderBook, line: &str, mut fields: impl Iterator<Item = &'a str>) {
    let (Some(order_id), Some(user_id), Some(side), Some(price), Some(quantity)) =
        (fields.next(), fields.next(), fields.next(), fields.next(), fields.next())
    else {
        warn!(line, "invalid ADD format, skipping line");
        return;
    };

    let (Ok(order_id), Ok(user_id)) = (OrderId::new(order_id), UserId::new(user_id)) else {
        warn!(line, "invalid ADD id, skipping line");
        return;
    };
    let Ok(price) = price.parse::<f64>() else {
        warn!(line, "invalid ADD price, skipping line");
        return;
    };
    let Ok(quantity) = quantity.parse::<u64>() else {
        warn!(line, "invalid ADD quantity, skipping line");
        return;
    };
    let side = convert_side(side);

    let timestamp = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);
    let order = match Order::new(order_id, user_id, quantity, side, price, timestamp) {
        Ok(order) => order,
        Err(err) => {
            warn!(line, %err, "rejected ADD order");
            return;
        }
    };

    match book.submit(order) {
        Ok(trade_ids) if trade_ids.is_empty() => {
            println!("No trades executed when adding order {order_id}.");
        }
        Ok(trade_ids) => {
            println!("Executed {} trades when adding order {order_id}:", trade_ids.len());
            for trade_id in &trade_ids {
                println!("  Trade ID: {trade_id}");
            }
        }
        Err(err) => warn!(line, %err, "order submission failed"),
    }
}

fn process_remove<'a>(book: &OrderBook, line: &str, mut fields: impl Iterator<Item = &'a str>) {
    let Some(order_id) = fields.next() else {
        warn!(line, "invalid REMOVE format, skipping line");
        return;
    };
    let Ok(order_id) = OrderId::new(order_id) else {
        warn!(line, "invalid REMOVE id, skipping line");
        return;
    };
    if book.cancel(&order_id) {
        println!("Successfully removed order {order_id}.");
    } else {
        println!("Order {order_id} not found.");
    }
}

fn process_show_top<'a>(book: &OrderBook, line: &str, mut fields: impl Iterator<Item = &'a str>) {
    let Some(k_str) = fields.next() else {
        warn!(line, "invalid SHOW_TOP format, skipping line");
        return;
    };
    let Ok(k) = k_str.parse::<usize>() else {
        warn!(line, "invalid SHOW_TOP k, skipping line");
        return;
    };
    let (bids, asks) = book.top_levels(k);
    let label = if k == 0 { -1 } else { k as i64 };
    println!("Top {label} Bid Levels:");
    for (price, size) in bids {
        println!("  Price: {price:.2}, Size: {size}");
    }
    println!("Top {label} Ask Levels:");
    for (price, size) in asks {
        println!("  Price: {price:.2}, Size: {size}");
    }
}

fn process_show_all_trades(book: &OrderBook) {
    let trades = book.trades();
    println!("All {} trades so far:", trades.len());
    for trade in &trades {
        println!(
            "  Trade ID: {} | Buy Order: {} (User {}) | Sell Order: {} (User {}) | Size: {} | Price: {:.2} | Timestamp: {}",
            trade.trade_id,
            trade.buy_order_id,
            trade.buy_user_id,
            trade.sell_order_id,
            trade.sell_user_id,
            trade.size,
            trade.price,
            trade.timestamp,
        );
    }
}

fn process_get_trade<'a>(book: &OrderBook, line: &str, mut fields: impl Iterator<Item = &'a str>) {
    let Some(trade_id_str) = fields.next() else {
        warn!(line, "invalid GET_TRADE format, skipping line");
        return;
    };
    let Ok(trade_id) = TradeId::new(trade_id_str) else {
        warn!(line, "invalid GET_TRADE id, skipping line");
        return;
    };
    match book.lookup_trade(&trade_id) {
        Some(trade) => println!(
            "Trade found: ID: {} | Buy Order: {} (User {}) | Sell Order: {} (User {}) | Size: {} | Price: {:.2} | Timestamp: {}",
            trade.trade_id,
            trade.buy_order_id,
            trade.buy_user_id,
            trade.sell_order_id,
            trade.sell_user_id,
            trade.size,
            trade.price,
            trade.timestamp,
        ),
        None => println!("No trade found with ID '{trade_id_str}'"),
    }
}
