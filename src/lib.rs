pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use adapters::{SystemClipboard, SystemClock, SystemMailer, UnavailableRecognizer};
pub use config::{request_file::RequestFile, CliConfig};
pub use core::engine::LetterEngine;
pub use domain::model::{
    AllowanceLineItem, AllowanceSummary, ComposedLetter, GeneratedRequest, RequestInput, Tone,
};
pub use utils::error::{AntragError, Result};
