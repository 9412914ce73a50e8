use crate::domain::ports::{SpeechRecognizer, TranscriptEvent};
use crate::utils::error::{AntragError, Result};

/// Placeholder recognizer for hosts without a speech-recognition capability.
/// The dictation control is disabled and a static unavailability message is
/// shown; the rest of the tool stays usable.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnavailableRecognizer;

pub const UNAVAILABLE_STATUS: &str = "Diktieren nicht verfügbar (Plattform).";

impl SpeechRecognizer for UnavailableRecognizer {
    fn is_available(&self) -> bool {
        false
    }

    fn start_session(&mut self) -> Result<()> {
        Err(AntragError::DictationError {
            message: "speech recognition is not available on this platform".to_string(),
        })
    }

    fn stop_session(&mut self) {}

    fn poll_event(&mut self) -> Option<TranscriptEvent> {
        None
    }
}
