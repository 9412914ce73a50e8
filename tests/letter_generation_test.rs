use chrono::NaiveDate;
use clap::Parser;
use spesenantrag::domain::ports::Clock;
use spesenantrag::{CliConfig, LetterEngine, RequestInput, Tone};

struct FixedClock(NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

fn engine() -> LetterEngine<FixedClock> {
    LetterEngine::new(FixedClock(NaiveDate::from_ymd_opt(2026, 3, 5).unwrap()))
}

fn anna_muster() -> RequestInput {
    RequestInput {
        first_name: "Anna".to_string(),
        last_name: "Muster".to_string(),
        role: "Lehrperson".to_string(),
        pensum_pct: 80,
        include_device: true,
        include_mobility: true,
        tone: Tone::Neutral,
    }
}

#[test]
fn test_end_to_end_anna_muster_scenario() {
    let generated = engine().generate(&anna_muster());

    assert_eq!(generated.summary.total, 350.0);
    assert_eq!(generated.summary.line_items.len(), 2);
    assert_eq!(generated.summary.line_items[0].annual_amount, 200.0);
    assert_eq!(generated.summary.line_items[1].annual_amount, 150.0);

    let text = &generated.letter.text;
    assert!(text.contains("Datum: 05.03.2026"));
    assert!(text.contains("Name: Anna Muster"));
    assert!(text.contains("Funktion: Lehrperson"));
    assert!(text.contains("- Mobiltelefonpauschale (jährlich): CHF 200.-"));
    assert!(text.contains("- Mobilitätspauschale (jährlich): CHF 150.-"));
    assert!(text.contains("Total (jährlich): CHF 350.-"));
}

#[test]
fn test_empty_names_render_placeholders() {
    let mut input = anna_muster();
    input.first_name = "".to_string();
    input.last_name = "   ".to_string();

    let generated = engine().generate(&input);

    assert!(generated.letter.text.contains("Name: [Vorname] [Nachname]"));
    assert!(!generated.letter.text.contains("Name:  \n"));
}

#[test]
fn test_tone_leaves_itemization_and_total_untouched() {
    let mut input = anna_muster();

    let neutral = engine().generate(&input);
    input.tone = Tone::Happy;
    let happy = engine().generate(&input);
    input.tone = Tone::Grumpy;
    let grumpy = engine().generate(&input);

    for generated in [&happy, &grumpy] {
        assert_eq!(generated.summary, neutral.summary);
        assert_ne!(generated.letter.text, neutral.letter.text);
        for line in neutral.letter.text.lines() {
            if line.starts_with('-') || line.starts_with("Total") {
                assert!(generated.letter.text.contains(line));
            }
        }
    }
}

#[test]
fn test_generation_is_idempotent_with_fixed_clock() {
    let input = anna_muster();
    let first = engine().generate(&input);
    let second = engine().generate(&input);
    assert_eq!(first.letter.text, second.letter.text);
    assert_eq!(first, second);
}

#[test]
fn test_cli_input_with_out_of_range_pensum() {
    let config = CliConfig::parse_from(["spesenantrag", "--pensum", "150"]);
    let generated = engine().generate(&config.to_request_input());

    // Pensum fell back to 100, so the device allowance is the full CHF 250.
    assert!(generated
        .letter
        .text
        .contains("- Mobiltelefonpauschale (jährlich): CHF 250.-"));
    assert!(generated.letter.text.contains("Total (jährlich): CHF 400.-"));
}

#[test]
fn test_no_allowances_selected() {
    let mut input = anna_muster();
    input.include_device = false;
    input.include_mobility = false;

    let generated = engine().generate(&input);

    assert!(generated.summary.line_items.is_empty());
    assert_eq!(generated.summary.total, 0.0);
    assert!(generated
        .letter
        .text
        .contains("- (keine Pauschalen ausgewählt)"));
    assert!(generated.letter.text.contains("Total (jährlich): CHF 0.-"));
}
