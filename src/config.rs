use std::path::Path;

use chrono::format::{Item, StrftimeItems};
use tracing::info;
use twelf::{config, Layer};

use crate::{clapper::Args, phrase::Style, ClockError};

/// Prefix of the environment variables read by [`FileConfig::load`],
/// e.g. `BAVARIAN_CLOCK_ADD_INTRO=true`.
pub const ENV_PREFIX: &str = "BAVARIAN_CLOCK_";

/// A strftime pattern that chrono is known to accept.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateFormat(String);

impl DateFormat {
    /// # Errors
    ///
    /// Returns [`ClockError::InvalidDateFormat`] if the pattern contains an
    /// unknown or incomplete `%` specifier.
    pub fn parse(pattern: &str) -> Result<Self, ClockError> {
        if StrftimeItems::new(pattern).any(|item| matches!(item, Item::Error)) {
            return Err(ClockError::InvalidDateFormat {
                pattern: pattern.to_string(),
            });
        }
        Ok(Self(pattern.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Everything that shapes the phrase. Built once per invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Configuration {
    pub date_format: Option<DateFormat>,
    pub add_intro: bool,
    pub add_day_tag: bool,
    pub quarter_style: Style,
    pub half_style: Style,
    pub three_quarter_style: Style,
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            date_format: None,
            add_intro: false,
            add_day_tag: false,
            quarter_style: Style::Last,
            half_style: Style::Next,
            three_quarter_style: Style::Next,
        }
    }
}

impl Configuration {
    /// Merges the command line over the file/env layer over the defaults.
    pub fn from_layers(args: &Args, file: FileConfig) -> Result<Self, ClockError> {
        let defaults = Self::default();

        let date_format = args
            .date_format
            .clone()
            .or(file.date_format)
            .map(|pattern| DateFormat::parse(&pattern))
            .transpose()?;

        Ok(Self {
            date_format,
            add_intro: args.add_intro || file.add_intro.unwrap_or(defaults.add_intro),
            add_day_tag: args.add_day_tag || file.add_day_tag.unwrap_or(defaults.add_day_tag),
            quarter_style: args
                .quarter_style
                .or(file.quarter_style)
                .unwrap_or(defaults.quarter_style),
            half_style: args
                .half_style
                .or(file.half_style)
                .unwrap_or(defaults.half_style),
            three_quarter_style: args
                .three_quarter_style
                .or(file.three_quarter_style)
                .unwrap_or(defaults.three_quarter_style),
        })
    }
}

/// Defaults read from an optional TOML file and the environment.
///
/// ```toml
/// date_format = " (%d.%m.)"
/// add_day_tag = true
/// quarter_style = "nextTo"
/// ```
#[config]
#[derive(Debug, Default)]
pub struct FileConfig {
    pub date_format: Option<String>,
    pub add_intro: Option<bool>,
    pub add_day_tag: Option<bool>,
    pub quarter_style: Option<Style>,
    pub half_style: Option<Style>,
    pub three_quarter_style: Option<Style>,
}

impl FileConfig {
    /// Loads `path` (if given) and then the `BAVARIAN_CLOCK_*` environment
    /// variables, the latter taking precedence.
    ///
    /// # Errors
    ///
    /// Fails if `path` is given but is not a file, or if either layer
    /// cannot be parsed.
    pub fn load(path: Option<&Path>) -> Result<Self, ClockError> {
        let mut layers = vec![];

        if let Some(path) = path {
            if !path.is_file() {
                return Err(ClockError::ConfigNotFound {
                    path: path.to_path_buf(),
                });
            }
            info!(path = %path.display(), "reading config file");
            layers.push(Layer::Toml(path.to_path_buf()));
        }
        layers.push(Layer::Env(Some(ENV_PREFIX.to_string())));

        Ok(Self::with_layers(&layers)?)
    }
}
