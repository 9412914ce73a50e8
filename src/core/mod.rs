pub mod allowance;
pub mod compose;
pub mod dictation;
pub mod engine;
pub mod format;

pub use crate::domain::model::{AllowanceLineItem, AllowanceSummary, GeneratedRequest};
pub use crate::domain::ports::{Clipboard, Clock, MailLauncher, SpeechRecognizer};
pub use crate::utils::error::Result;
