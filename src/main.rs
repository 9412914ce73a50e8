use anyhow::Context;
use clap::Parser;
use spesenantrag::adapters::dictation::UNAVAILABLE_STATUS;
use spesenantrag::core::{compose, dictation::DictationController};
use spesenantrag::domain::ports::{Clipboard, MailLauncher, SpeechRecognizer};
use spesenantrag::utils::error::ErrorSeverity;
use spesenantrag::utils::{logger, validation::Validate};
use spesenantrag::{
    CliConfig, LetterEngine, RequestFile, SystemClipboard, SystemClock, SystemMailer,
    UnavailableRecognizer,
};

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting spesenantrag CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    let mut input = config.to_request_input();

    if let Some(path) = &config.request_file {
        match RequestFile::from_file(path) {
            Ok(file) => {
                tracing::info!("Loaded request fields from {}", path);
                file.apply(&mut input);
            }
            Err(e) => {
                tracing::error!(
                    "❌ Failed to load request file: {} (Category: {:?}, Severity: {:?})",
                    e,
                    e.category(),
                    e.severity()
                );
                eprintln!("❌ {}", e.user_friendly_message());
                eprintln!("💡 {}", e.recovery_suggestion());
                std::process::exit(match e.severity() {
                    ErrorSeverity::Low => 0,
                    ErrorSeverity::Medium => 2,
                    ErrorSeverity::High => 1,
                    ErrorSeverity::Critical => 3,
                });
            }
        }
    }

    let engine = LetterEngine::new(SystemClock);
    let mut generated = engine.generate(&input);

    if config.dictate {
        let mut recognizer = UnavailableRecognizer;
        if recognizer.is_available() {
            generated.letter.text = run_dictation(&mut recognizer, generated.letter.text)?;
        } else {
            eprintln!("{}", UNAVAILABLE_STATUS);
        }
    }

    if config.json {
        let json = serde_json::to_string_pretty(&generated)
            .context("failed to serialize generated request")?;
        println!("{}", json);
    } else {
        println!("{}", generated.letter.text);
    }

    if config.copy {
        match SystemClipboard.copy(&generated.letter.text) {
            Ok(()) => {
                eprintln!("Kopiert ✓");
            }
            Err(e) => {
                tracing::warn!("Clipboard copy failed: {}", e);
                eprintln!("❌ {}", e.user_friendly_message());
                eprintln!("💡 {}", e.recovery_suggestion());
            }
        }
    }

    if config.mail {
        let mailer = SystemMailer::new(config.recipient.clone());
        match mailer.open_draft(compose::SUBJECT, generated.letter.text.trim()) {
            Ok(()) => {
                eprintln!("Mailfenster wird geöffnet…");
            }
            Err(e) => {
                tracing::warn!("Mail handler launch failed: {}", e);
                eprintln!("❌ {}", e.user_friendly_message());
                eprintln!("💡 {}", e.recovery_suggestion());
            }
        }
    }

    Ok(())
}

/// Feeds recognizer events through the controller until the session ends and
/// returns the edited letter text.
fn run_dictation<R: SpeechRecognizer>(
    recognizer: &mut R,
    letter_text: String,
) -> spesenantrag::Result<String> {
    let mut controller = DictationController::new(letter_text);

    recognizer.start_session()?;
    while let Some(event) = recognizer.poll_event() {
        controller.handle_event(event);
        if !controller.status().is_empty() {
            eprintln!("{}", controller.status());
        }
        if !controller.is_active() {
            break;
        }
    }
    recognizer.stop_session();

    Ok(controller.buffer().to_string())
}
