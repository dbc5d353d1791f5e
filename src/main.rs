use anyhow::Context;
use bavarian_clock::clapper::Args;
use clap::Parser;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let phrase = bavarian_clock::run(&args).context("could not tell the time")?;
    println!("{phrase}");
    Ok(())
}

/// Logs go to stderr, stdout only ever carries the phrase.
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
