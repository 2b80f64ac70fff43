//! Demonstrates nested sections and loop instrumentation with iterator keys.
//!
//! Starting a section while another is open makes the new one its child;
//! stopping it restores the parent as current. Laps recorded in a loop use
//! `lap_keyed` so every call registers a unique identifier.
//!
//! Run with: `cargo run --example lap_tracker_nested`.

use std::thread;
use std::time::Duration;

use lap_tracker::Trace;

fn main() -> lap_tracker::Result<()> {
    let mut trace = Trace::new();

    trace.start("import")?;
    thread::sleep(Duration::from_millis(5));

    // A child section for the database phase of the import.
    trace.start("database")?;
    for i in 0..3 {
        thread::sleep(Duration::from_millis(8));
        trace.lap_keyed("batch_inserted", &i.to_string())?;
    }
    trace.stop("database")?;

    // "import" is current again.
    thread::sleep(Duration::from_millis(5));
    trace.lap("files_cleaned")?;
    trace.stop("import")?;

    for section in trace.sections() {
        match section.parent() {
            Some(parent) => println!("section '{}' (child of '{parent}')", section.name()),
            None => println!("section '{}' (root)", section.name()),
        }
    }
    println!();

    let report = trace.to_text_report()?;
    report.print_to_stdout();

    Ok(())
}
