use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{clock::TimeSample, config::Configuration};

/// Dialect names of the hours 1 to 12, `HOUR_NAMES[0]` being one o'clock.
pub const HOUR_NAMES: [&str; 12] = [
    "Oans", "Zwoa", "Drei", "Viere", "Fümwe", "Sechse", "Siemme", "Ochte", "Neine", "Zehne",
    "Eife", "Zweife",
];

pub const INTRO: &str = "Ezzad iss grod";

const LAST_MARKERS: [&str; 3] = ["vddl noch", "hoib noch", "dreivddl noch"];
const NEXT_MARKERS: [&str; 3] = ["vddl", "hoibe", "dreivddl"];
const NEXT_TO_MARKERS: [&str; 3] = ["dreivddl vor", "hoibe vor", "vddl vor"];

/// Returns the name of hour `h`, wrapping any integer into `1..=12`.
pub fn hour_name(h: i32) -> &'static str {
    HOUR_NAMES[(i64::from(h) - 1).rem_euclid(12) as usize]
}

/// How the quarter, half and three-quarter marks are phrased.
///
/// For 18:15: `last` is "quarter past 6", `next` is "quarter 7" and
/// `nextTo` is "three quarters to 7".
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Style {
    /// Relative to the last full hour
    Last,
    /// Relative to the next hour
    Next,
    /// Relative to the next hour, counting what is left
    #[value(name = "nextTo")]
    NextTo,
}

impl Style {
    fn markers(self) -> &'static [&'static str; 3] {
        match self {
            Style::Last => &LAST_MARKERS,
            Style::Next => &NEXT_MARKERS,
            Style::NextTo => &NEXT_TO_MARKERS,
        }
    }

    /// Whether the marker is followed by the next hour instead of the current.
    fn anchors_to_next_hour(self) -> bool {
        !matches!(self, Style::Last)
    }
}

/// The five ranges the minutes of an hour are rounded into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bucket {
    /// `[0, 7.5]` minutes
    OnTheHour,
    /// `(7.5, 22.5]`
    Quarter,
    /// `(22.5, 37.5]`
    Half,
    /// `(37.5, 52.5]`
    ThreeQuarter,
    /// `(52.5, 60)`
    NextHour,
}

impl Bucket {
    pub fn of(sample: &TimeSample) -> Self {
        // whole seconds, so 7.5 min is exactly 450
        match sample.seconds_into_hour() {
            0..=450 => Bucket::OnTheHour,
            451..=1350 => Bucket::Quarter,
            1351..=2250 => Bucket::Half,
            2251..=3150 => Bucket::ThreeQuarter,
            _ => Bucket::NextHour,
        }
    }
}

/// Part of the day appended with `--addDayTag`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayTag {
    Morning,
    Midday,
    Night,
}

impl DayTag {
    pub fn of(sample: &TimeSample) -> Self {
        match sample.seconds_into_day() {
            // [00:00..00:30]
            0..=1800 => DayTag::Night,
            // ]00:30..10:30[
            1801..=37799 => DayTag::Morning,
            // [10:30..15:30[
            37800..=55799 => DayTag::Midday,
            // [15:30..00:00[
            _ => DayTag::Night,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            DayTag::Morning => "in da Friah",
            DayTag::Midday => "am Mittog",
            DayTag::Night => "aufd Nocht",
        }
    }
}

/// Renders `sample` as a spoken phrase, e.g. "vddl noch Sechse" for 18:15.
pub fn build_phrase(config: &Configuration, sample: &TimeSample) -> String {
    let h = (sample.hour() as i32 - 1).rem_euclid(12) + 1;
    let bucket = Bucket::of(sample);

    let mut phrase = String::new();
    if config.add_intro {
        phrase.push_str(INTRO);
        phrase.push(' ');
    }

    debug!(
        minute = sample.fractional_minute(),
        ?bucket,
        "selected minute bucket"
    );
    match bucket {
        Bucket::OnTheHour => phrase.push_str(hour_name(h)),
        Bucket::Quarter => push_marked(&mut phrase, config.quarter_style, 0, h),
        Bucket::Half => push_marked(&mut phrase, config.half_style, 1, h),
        Bucket::ThreeQuarter => push_marked(&mut phrase, config.three_quarter_style, 2, h),
        Bucket::NextHour => phrase.push_str(hour_name(h + 1)),
    }

    if config.add_day_tag {
        let tag = DayTag::of(sample);
        debug!(hour = sample.fractional_hour(), ?tag, "selected day tag");
        phrase.push(' ');
        phrase.push_str(tag.as_str());
    }

    // no separator, the pattern carries its own spacing
    if let Some(date_format) = &config.date_format {
        phrase.push_str(&sample.format(date_format));
    }

    phrase
}

/// Appends marker `index` of `style` and the hour it relates to.
fn push_marked(phrase: &mut String, style: Style, index: usize, h: i32) {
    let anchor = if style.anchors_to_next_hour() { h + 1 } else { h };
    debug!(?style, anchor, "relative marker");
    phrase.push_str(style.markers()[index]);
    phrase.push(' ');
    phrase.push_str(hour_name(anchor));
}
