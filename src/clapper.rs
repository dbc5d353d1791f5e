use std::path::PathBuf;

use clap::Parser;

use crate::phrase::Style;

/// A very precise bavarian clock.
///
/// Relative markers can be set individually for the times around 15, 30 and
/// 45 minutes. The choices are (for the example of 18:15): 'last' relates it
/// to the last full hour, i.e. "quarter past 6". 'next' relates it to the
/// next hour, i.e. "quarter 7". 'nextTo' relates it to the next hour by
/// what is left, i.e. "three quarters to 7".
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Args {
    /// Append the date to the time using this strftime format string.
    ///
    /// Nothing is put between the time and the date, so start the pattern
    /// with a space or comma if you want one. The time only knows its UTC
    /// offset, so `%Z` prints the offset (e.g. `+02:00`), not a zone name.
    #[arg(short = 'd', long = "dateFormat")]
    pub date_format: Option<String>,

    /// Add a short intro prefix.
    #[arg(short = 'i', long = "addIntro", default_value_t = false)]
    pub add_intro: bool,

    /// Add a morning/midday/night suffix.
    #[arg(short = 'p', long = "addDayTag", default_value_t = false)]
    pub add_day_tag: bool,

    /// Relative marker style for the minutes around 15 [default: last]
    #[arg(short = '1', long = "quarterStyle", value_enum)]
    pub quarter_style: Option<Style>,

    /// Relative marker style for the minutes around 30 [default: next]
    #[arg(short = '2', long = "halfStyle", value_enum)]
    pub half_style: Option<Style>,

    /// Relative marker style for the minutes around 45 [default: next]
    #[arg(short = '3', long = "threeQuarterStyle", value_enum)]
    pub three_quarter_style: Option<Style>,

    /// Read defaults from this TOML file.
    ///
    /// Keys are `date_format`, `add_intro`, `add_day_tag`, `quarter_style`,
    /// `half_style` and `three_quarter_style`. `BAVARIAN_CLOCK_*`
    /// environment variables override the file, flags override both.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Tell this time of day (HH:MM or HH:MM:SS) instead of the current one.
    #[arg(short, long, value_name = "TIME")]
    pub at: Option<String>,

    /// Shift the current time by this many seconds (at most one year either way).
    #[arg(
        long,
        default_value_t = 0,
        allow_negative_numbers = true,
        value_parser = clap::value_parser!(i64).range(-31_536_000..=31_536_000)
    )]
    pub delay: i64,

    /// Log more to stderr (-v info, -vv debug).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}
