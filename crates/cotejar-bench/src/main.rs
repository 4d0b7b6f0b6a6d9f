//! cotejar-bench CLI entry point.

use std::time::Instant;

use clap::Parser;

use cotejar_bench::{BenchConfig, Harness, Summary};
use cotejar_common::cli::styles;

/// There is nothing to configure: trial and key counts are compiled in,
/// no input is read, and the report always goes to stdout.
#[derive(Parser)]
#[command(name = "cotejar-bench")]
#[command(about = "Compare insert/lookup/traversal cost across four container kinds")]
#[command(version)]
struct Cli {}

fn main() {
    let _cli = Cli::parse();

    if let Err(e) = run() {
        eprintln!("{}", styles::error(&format!("error: [{}] {e}", e.code())));
        std::process::exit(1);
    }
}

fn run() -> cotejar_common::Result<()> {
    println!("{}", styles::header("Container Comparison"));

    let clock = Instant::now();
    let mut harness = Harness::new(BenchConfig::default());
    let outcome = harness.run();
    let elapsed = clock.elapsed();

    println!(
        "{}",
        styles::info(&format!(
            "Time taken (minutes): {:.2} or about {} minutes and {} seconds",
            elapsed.as_secs_f64() / 60.0,
            elapsed.as_secs() / 60,
            elapsed.as_secs() % 60
        ))
    );

    let summary = Summary::from_outcome(&outcome)?;
    print!("{}", summary.render()?);
    println!("{}", styles::success("Benchmark complete"));

    Ok(())
}
