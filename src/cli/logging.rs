use std::io;

use clap::ArgMatches;
use tracing_subscriber::EnvFilter;

// Install the process-wide `tracing` subscriber.
//
// Must be called once, before any command runs. Log output goes to stderr
// so that stdout carries only command results. `RUST_LOG`, when set,
// replaces the level chosen by `-q`/`-v`.
pub(crate) fn init(matches: &ArgMatches) {
    let level = level(matches.is_present("quiet"), matches.occurrences_of("verbose"));
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(filter)
        .init();
}

fn level(quiet: bool, verbose: u64) -> &'static str {
    if quiet {
        return "error";
    }

    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}
