//! End-to-end tests for the `orderbook-driver` binary: writes a command
//! file with `tempfile` and checks the protocol output on stdout.

use std::io::Write;
use std::process::Command;

fn run_driver(commands: &str) -> String {
    let mut file = tempfile::NamedTempFile::new().expect("create temp command file");
    write!(file, "{commands}").expect("write commands");

    let output = Command::new(env!("CARGO_BIN_EXE_orderbook-driver"))
        .arg(file.path())
        .output()
        .expect("run orderbook-driver");
    assert!(output.status.success(), "driver exited non-zero: {output:?}");
    String::from_utf8(output.stdout).expect("stdout is valid utf-8")
}

#[test]
fn add_then_show_best_reports_resting_prices() {
    let stdout = run_driver(
        "ADD,ask1,alice,sell,101.0,100\n\
         ADD,bid1,bob,buy,99.0,50\n\
         SHOW_BEST\n",
    );
    assert!(stdout.contains("No trades executed when adding order ask1."));
    assert!(stdout.contains("No trades executed when adding order bid1."));
    assert!(stdout.contains("Best Bid: 99.00, Best Ask: 101.00"));
}

#[test]
fn crossing_add_reports_executed_trades() {
    let stdout = run_driver(
        "ADD,ask1,seller1,sell,100.0,100\n\
         ADD,bid1,buyer1,buy,101.0,50\n\
         GET_TRADE,TRADE-00000000\n",
    );
    assert!(stdout.contains("Executed 1 trades when adding order bid1:"));
    assert!(stdout.contains("Trade ID: TRADE-00000000"));
    assert!(stdout.contains("Trade found: ID: TRADE-00000000"));
}

#[test]
fn remove_reports_found_and_not_found() {
    let stdout = run_driver(
        "ADD,bid1,bob,buy,99.0,100\n\
         REMOVE,bid1\n\
         REMOVE,bid1\n",
    );
    assert!(stdout.contains("Successfully removed order bid1."));
    assert!(stdout.contains("Order bid1 not found."));
}

#[test]
fn malformed_line_is_skipped_without_aborting_the_file() {
    let stdout = run_driver(
        "ADD,bid1,bob,buy,not-a-price,100\n\
         ADD,bid2,bob,buy,99.0,100\n\
         SHOW_BEST\n",
    );
    assert!(stdout.contains("Best Bid: 99.00"));
}

#[test]
fn missing_input_file_exits_non_zero() {
    let output = Command::new(env!("CARGO_BIN_EXE_orderbook-driver"))
        .arg("/nonexistent/path/does-not-exist.csv")
        .output()
        .expect("run orderbook-driver");
    assert!(!output.status.success());
}
