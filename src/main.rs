use std::process;

use imgbench::codec::ImageCodec;
use imgbench::error::ErrorFormatter;
use imgbench::report::Reporter;
use imgbench::runner::BenchmarkRunner;
use imgbench::{loader, stats};

/// Image re-encoding benchmark
///
/// Loads the built-in sample set, re-encodes every sample into every target
/// format at maximum quality, and prints raw and aggregate result tables.
/// Takes no arguments; any failure aborts the run without a partial report.
fn main() {
    // Initialize logger (use RUST_LOG env var to control verbosity)
    env_logger::init();

    if let Err(e) = run() {
        eprintln!("{}", ErrorFormatter::format(&e));
        process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let samples = loader::load_samples()?;

    let runner = BenchmarkRunner::new(samples, ImageCodec::new());
    let run = runner.run()?;

    let stats = stats::aggregate(&run);
    Reporter::print(&run, &stats);

    Ok(())
}
