//! Simplified example demonstrating key `lap_tracker` types working together.
//!
//! This example shows how to use the main types in the `lap_tracker` package:
//! - `Trace`: Records named sections and the laps inside them
//! - `Report`: The rendered elapsed-time report
//!
//! Run with: `cargo run --example lap_tracker_basic`.

use std::thread;
use std::time::Duration;

use lap_tracker::Trace;

fn main() -> lap_tracker::Result<()> {
    println!("=== Interval Tracking Example ===");
    println!();

    // Create a trace - the explicit store all recording goes through.
    let mut trace = Trace::new();

    trace.start("request")?;

    // Simulate parsing work.
    thread::sleep(Duration::from_millis(20));
    trace.lap("headers_parsed")?;

    // Simulate reading the body.
    thread::sleep(Duration::from_millis(35));
    trace.lap("body_read")?;

    // Simulate building the response.
    thread::sleep(Duration::from_millis(10));
    trace.stop("request")?;

    println!("Recorded {} section(s)", trace.sections().count());
    println!();

    // Elapsed time between consecutive laps plus the section total.
    let report = trace.to_text_report()?;
    report.print_to_stdout();

    println!();
    println!("Raw deltas computed during rendering:");
    for record in trace.debug_log() {
        println!("  {record}");
    }

    Ok(())
}
