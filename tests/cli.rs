use bavarian_clock::{clapper::Args, config::ENV_PREFIX, phrase::Style, ClockError};
use clap::Parser;
use test_case::test_case;

/// Drops any `BAVARIAN_CLOCK_*` settings of the calling shell.
fn run(args: &Args) -> Result<String, ClockError> {
    for (key, _) in std::env::vars().filter(|(key, _)| key.starts_with(ENV_PREFIX)) {
        std::env::remove_var(key);
    }
    bavarian_clock::run(args)
}

fn parse(argv: &[&str]) -> Result<Args, clap::Error> {
    Args::try_parse_from(std::iter::once("bavarian-clock").chain(argv.iter().copied()))
}

#[test]
fn long_flags_match_the_documented_names() {
    let args = parse(&[
        "--dateFormat",
        " %d.%m.",
        "--addIntro",
        "--addDayTag",
        "--quarterStyle",
        "nextTo",
        "--halfStyle",
        "last",
        "--threeQuarterStyle",
        "next",
    ])
    .unwrap();

    assert_eq!(args.date_format.as_deref(), Some(" %d.%m."));
    assert!(args.add_intro);
    assert!(args.add_day_tag);
    assert_eq!(args.quarter_style, Some(Style::NextTo));
    assert_eq!(args.half_style, Some(Style::Last));
    assert_eq!(args.three_quarter_style, Some(Style::Next));
}

#[test]
fn short_flags() {
    let args = parse(&["-i", "-p", "-1", "next", "-2", "nextTo", "-3", "last"]).unwrap();
    assert!(args.add_intro);
    assert!(args.add_day_tag);
    assert_eq!(args.quarter_style, Some(Style::Next));
    assert_eq!(args.half_style, Some(Style::NextTo));
    assert_eq!(args.three_quarter_style, Some(Style::Last));
}

#[test_case("-1" ; "quarter")]
#[test_case("-2" ; "half")]
#[test_case("-3" ; "three quarter")]
fn unknown_style_is_rejected(flag: &str) {
    assert!(parse(&[flag, "soon"]).is_err());
}

#[test]
fn negative_delay() {
    assert_eq!(parse(&["--delay", "-90"]).unwrap().delay, -90);
}

#[test_case(&["--at", "18:15"], "vddl noch Sechse" ; "defaults")]
#[test_case(&["--at", "18:15", "-1", "nextTo"], "dreivddl vor Siemme" ; "next to style")]
#[test_case(&["--at", "18:30"], "hoibe Siemme" ; "default half style")]
#[test_case(&["--at", "18:45"], "dreivddl Siemme" ; "default three quarter style")]
#[test_case(&["--at", "06:00:00", "-i"], "Ezzad iss grod Sechse" ; "intro")]
#[test_case(&["--at", "12:10", "-p"], "vddl noch Zweife am Mittog" ; "day tag")]
#[test_case(&["--at", "23:55", "-p"], "Zweife aufd Nocht" ; "rolls over to midnight")]
#[test_case(&["--at", "18:15", "-d", " %H:%M"], "vddl noch Sechse 18:15" ; "date format")]
fn tells_a_fixed_time(argv: &[&str], expected: &str) {
    assert_eq!(run(&parse(argv).unwrap()).unwrap(), expected);
}

#[test]
fn bad_at_value_is_an_error() {
    let args = parse(&["--at", "noon"]).unwrap();
    assert!(matches!(run(&args), Err(ClockError::InvalidTime { .. })));
}

#[test]
fn bad_date_format_is_an_error() {
    let args = parse(&["--at", "12:00", "-d", "%Q"]).unwrap();
    assert!(matches!(
        run(&args),
        Err(ClockError::InvalidDateFormat { .. })
    ));
}

#[test]
fn reads_the_system_clock_without_at() {
    let phrase = run(&parse(&[]).unwrap()).unwrap();
    assert!(!phrase.is_empty());
}
