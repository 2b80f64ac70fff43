//! Demonstrates persisting rendered reports as timestamped artifacts.
//!
//! A `DirectorySink` appends each report under
//! `<base>/<logicalName>_<timestamp>.<extension>` in a base directory fixed
//! at construction.
//!
//! Run with: `cargo run --example lap_tracker_artifacts`.

use std::thread;
use std::time::Duration;

use lap_tracker::{DirectorySink, Trace};

fn main() -> lap_tracker::Result<()> {
    let mut trace = Trace::new();

    trace.start("startup")?;
    thread::sleep(Duration::from_millis(15));
    trace.lap("config_loaded")?;
    thread::sleep(Duration::from_millis(25));
    trace.stop("startup")?;

    let sink = DirectorySink::new(std::env::temp_dir());

    let text = trace.to_text_report()?.with_logical_name("startup_timings");
    let text_path = sink.write(&text)?;
    println!("text report:    {}", text_path.display());

    let csv = trace.to_csv_report()?.with_logical_name("startup_timings");
    let csv_path = sink.write(&csv)?;
    println!("tabular report: {}", csv_path.display());

    Ok(())
}
