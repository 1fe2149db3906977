//! eta - demo driver for the progress-estimation adapter.
//!
//! Iterates over a synthetic workload with an optional per-item delay and
//! lets the adapter report progress, the loop the library exists for.

use clap::Parser;
use eta::Eta;
use std::thread;
use std::time::Duration;

/// Demo driver for the eta progress-estimation adapter.
#[derive(Debug, Parser)]
#[command(name = "eta", version, about)]
struct Args {
    /// Number of items to process.
    #[arg(long, default_value_t = 42)]
    count: usize,

    /// Simulated per-item work, in milliseconds.
    #[arg(long, default_value_t = 100)]
    delay_ms: u64,

    /// Append one status line per item instead of rewriting in place.
    #[arg(long)]
    no_overwrite: bool,

    /// Suppress the live status line and print the final stats as JSON.
    #[arg(long)]
    quiet: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let progress = Eta::new(0..args.count)?
        .overwrite(!args.no_overwrite)
        .auto_print(!args.quiet);

    let mut last = None;
    for (_item, stats) in progress {
        if args.delay_ms > 0 {
            thread::sleep(Duration::from_millis(args.delay_ms));
        }
        last = Some(stats);
    }

    if args.quiet {
        if let Some(stats) = last {
            println!("{}", stats.to_json()?);
        }
    } else if !args.no_overwrite && last.is_some() {
        // The rewritten status line has no trailing newline.
        println!();
    }

    Ok(())
}
