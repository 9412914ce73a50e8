// Adapters layer: concrete implementations of the domain ports (clock,
// clipboard, mail handler, speech recognizer).

pub mod clipboard;
pub mod clock;
pub mod dictation;
pub mod mailer;

pub use clipboard::SystemClipboard;
pub use clock::SystemClock;
pub use dictation::UnavailableRecognizer;
pub use mailer::SystemMailer;
