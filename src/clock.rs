use chrono::{DateTime, Duration, FixedOffset, Local, NaiveTime, Offset, TimeZone, Timelike};

use crate::{config::DateFormat, ClockError};

/// One reading of the wall clock, in local time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeSample(DateTime<FixedOffset>);

impl TimeSample {
    pub fn new(at: DateTime<FixedOffset>) -> Self {
        Self(at)
    }

    /// A sample at the given time of day on 2000-01-01 UTC.
    ///
    /// Returns `None` if the fields are out of range.
    pub fn from_hms(hour: u32, minute: u32, second: u32) -> Option<Self> {
        FixedOffset::east_opt(0)?
            .with_ymd_and_hms(2000, 1, 1, hour, minute, second)
            .single()
            .map(Self)
    }

    /// Today's date in the local timezone at the given time of day.
    pub fn today_at(time: NaiveTime) -> Self {
        let now = Local::now();
        let now = now.with_timezone(&now.offset().fix());
        // same date, only the time of day moves
        Self(now + time.signed_duration_since(now.time()))
    }

    pub fn hour(&self) -> u32 {
        self.0.hour()
    }

    pub fn minute(&self) -> u32 {
        self.0.minute()
    }

    pub fn second(&self) -> u32 {
        self.0.second()
    }

    /// Seconds elapsed since the start of the current hour, `0..3600`.
    pub fn seconds_into_hour(&self) -> u32 {
        self.minute() * 60 + self.second()
    }

    /// Seconds elapsed since midnight, `0..86400`.
    pub fn seconds_into_day(&self) -> u32 {
        self.hour() * 3600 + self.seconds_into_hour()
    }

    /// Minutes with the seconds as fraction, i.e. 1min 30sec is `1.5`.
    pub fn fractional_minute(&self) -> f64 {
        self.minute() as f64 + self.second() as f64 / 60.0
    }

    /// Hours with minutes and seconds as fraction, `0.0..24.0`.
    pub fn fractional_hour(&self) -> f64 {
        self.hour() as f64 + self.fractional_minute() / 60.0
    }

    pub fn format(&self, date_format: &DateFormat) -> String {
        self.0.format(date_format.as_str()).to_string()
    }
}

/// Where the current time comes from.
pub trait ClockSource {
    fn now(&self) -> TimeSample;
}

/// The host clock, optionally shifted by `delay` seconds.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock {
    pub delay: i64,
}

impl ClockSource for SystemClock {
    fn now(&self) -> TimeSample {
        let now = Local::now() + Duration::seconds(self.delay);
        TimeSample(now.with_timezone(&now.offset().fix()))
    }
}

/// Always reports the same sample. Used for `--at`.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub TimeSample);

impl ClockSource for FixedClock {
    fn now(&self) -> TimeSample {
        self.0
    }
}

/// Parses `HH:MM` or `HH:MM:SS` (24 hour clock).
pub fn parse_time_of_day(input: &str) -> Result<NaiveTime, ClockError> {
    let input = input.trim();
    NaiveTime::parse_from_str(input, "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(input, "%H:%M"))
        .map_err(|_| ClockError::InvalidTime {
            input: input.to_string(),
        })
}
