use chrono::NaiveDate;
use clap::Parser;
use spesenantrag::domain::ports::Clock;
use spesenantrag::{CliConfig, LetterEngine, RequestFile, Tone};
use std::io::Write;
use tempfile::NamedTempFile;

struct FixedClock;

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 3, 5).unwrap()
    }
}

#[test]
fn test_request_file_overrides_cli_fields() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(
        br#"
[request]
first_name = "Anna"
last_name = "Muster"
role = "Lehrperson"
pensum = 80
device_allowance = true
mobility_allowance = true
tone = "happy"
"#,
    )
    .unwrap();

    let config = CliConfig::parse_from([
        "spesenantrag",
        "--first-name",
        "Ignored",
        "--pensum",
        "50",
    ]);
    let mut input = config.to_request_input();

    let request_file = RequestFile::from_file(file.path()).unwrap();
    request_file.apply(&mut input);

    assert_eq!(input.first_name, "Anna");
    assert_eq!(input.pensum_pct, 80);
    assert_eq!(input.tone, Tone::Happy);

    let generated = LetterEngine::new(FixedClock).generate(&input);
    assert!(generated.letter.text.contains("Name: Anna Muster"));
    assert!(generated.letter.text.contains("Total (jährlich): CHF 350.-"));
}

#[test]
fn test_partial_request_file_keeps_cli_values() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(b"[request]\nrole = \"Schulleitung\"\n")
        .unwrap();

    let config = CliConfig::parse_from([
        "spesenantrag",
        "--first-name",
        "Anna",
        "--last-name",
        "Muster",
        "--pensum",
        "60",
    ]);
    let mut input = config.to_request_input();

    RequestFile::from_file(file.path()).unwrap().apply(&mut input);

    assert_eq!(input.first_name, "Anna");
    assert_eq!(input.role, "Schulleitung");
    assert_eq!(input.pensum_pct, 60);
}

#[test]
fn test_missing_request_file_is_an_error() {
    let result = RequestFile::from_file("/nonexistent/antrag.toml");
    assert!(result.is_err());
}

#[test]
fn test_unknown_tone_in_file_defaults_to_neutral() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(b"[request]\ntone = \"sarcastic\"\n").unwrap();

    let config = CliConfig::parse_from(["spesenantrag", "--tone", "happy"]);
    let mut input = config.to_request_input();
    assert_eq!(input.tone, Tone::Happy);

    RequestFile::from_file(file.path()).unwrap().apply(&mut input);
    assert_eq!(input.tone, Tone::Neutral);
}
