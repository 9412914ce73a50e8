use crate::utils::error::Result;
use chrono::NaiveDate;

/// Wall-clock boundary. The composer itself stays deterministic; the current
/// date is injected through this port.
pub trait Clock: Send + Sync {
    fn today(&self) -> NaiveDate;
}

/// System clipboard collaborator. Receives the finished letter text; failure
/// is reported so the boundary layer can offer the manual-copy fallback.
pub trait Clipboard: Send + Sync {
    fn copy(&self, text: &str) -> Result<()>;
}

/// Default mail-handler collaborator. Opening a draft is fire-and-forget; no
/// result beyond launch success is observed.
pub trait MailLauncher: Send + Sync {
    fn open_draft(&self, subject: &str, body: &str) -> Result<()>;
}

/// Lifecycle and transcript events delivered by a speech-recognition session.
#[derive(Debug, Clone, PartialEq)]
pub enum TranscriptEvent {
    Started,
    /// Partial transcript, surfaced as status text only.
    Interim(String),
    /// Finalized fragment to insert at the cursor.
    Final(String),
    /// Error code from the recognizer; the session may continue.
    Error(String),
    Ended,
}

/// External speech recognizer capability. The core never interprets transcript
/// content; it only inserts finalized fragments and surfaces status text.
pub trait SpeechRecognizer {
    fn is_available(&self) -> bool;
    fn start_session(&mut self) -> Result<()>;
    fn stop_session(&mut self);
    /// Next pending event, if any. Returns None when the session is idle.
    fn poll_event(&mut self) -> Option<TranscriptEvent>;
}
