use std::path::PathBuf;

use thiserror::Error;
use tracing::info;

pub mod clapper;
pub mod clock;
pub mod config;
pub mod phrase;

use clock::{ClockSource, FixedClock, SystemClock, TimeSample};
use config::{Configuration, FileConfig};

pub use phrase::build_phrase;

#[derive(Error, Debug)]
pub enum ClockError {
    #[error("invalid date format `{pattern}`")]
    InvalidDateFormat { pattern: String },
    #[error("`{input}` is not a time of day, expected HH:MM or HH:MM:SS")]
    InvalidTime { input: String },
    #[error("config file {} does not exist", path.display())]
    ConfigNotFound { path: PathBuf },
    #[error("could not load the configuration")]
    Config {
        #[from]
        source: twelf::Error,
    },
}

/// Picks the clock the arguments ask for.
pub fn clock_for(args: &clapper::Args) -> Result<Box<dyn ClockSource>, ClockError> {
    match &args.at {
        Some(at) => {
            let time = clock::parse_time_of_day(at)?;
            Ok(Box::new(FixedClock(TimeSample::today_at(time))))
        }
        None => Ok(Box::new(SystemClock { delay: args.delay })),
    }
}

/// Resolves the configuration, reads the clock once and returns the phrase.
pub fn run(args: &clapper::Args) -> Result<String, ClockError> {
    let file = FileConfig::load(args.config.as_deref())?;
    let config = Configuration::from_layers(args, file)?;
    info!(?config, "resolved configuration");

    let sample = clock_for(args)?.now();
    Ok(build_phrase(&config, &sample))
}
