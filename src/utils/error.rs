use thiserror::Error;

#[derive(Error, Debug)]
pub enum AntragError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error in {field}: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Clipboard error: {message}")]
    ClipboardError { message: String },

    #[error("Mail handler error: {message}")]
    MailError { message: String },

    #[error("Dictation error: {message}")]
    DictationError { message: String },
}

pub type Result<T> = std::result::Result<T, AntragError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Configuration,
    Integration,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    /// The letter was produced; only a convenience action failed.
    Low,
    /// The requested action failed but the tool remains usable.
    Medium,
    /// The run cannot proceed as requested.
    High,
    /// Unexpected system failure.
    Critical,
}

impl AntragError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            AntragError::ConfigValidationError { .. }
            | AntragError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            AntragError::ClipboardError { .. }
            | AntragError::MailError { .. }
            | AntragError::DictationError { .. } => ErrorCategory::Integration,
            AntragError::IoError(_) | AntragError::SerializationError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            // Collaborator failures are never fatal: the letter text stays
            // available for manual copying.
            AntragError::ClipboardError { .. } | AntragError::DictationError { .. } => {
                ErrorSeverity::Low
            }
            AntragError::MailError { .. } => ErrorSeverity::Medium,
            AntragError::ConfigValidationError { .. }
            | AntragError::InvalidConfigValueError { .. } => ErrorSeverity::High,
            AntragError::IoError(_) | AntragError::SerializationError(_) => {
                ErrorSeverity::Critical
            }
        }
    }

    /// Status text shown to the user, in the language of the generated letter.
    pub fn user_friendly_message(&self) -> String {
        match self {
            AntragError::ClipboardError { .. } => {
                "Kopieren fehlgeschlagen. Text bitte manuell markieren und kopieren.".to_string()
            }
            AntragError::MailError { .. } => {
                "Mailfenster konnte nicht geöffnet werden.".to_string()
            }
            AntragError::DictationError { message } => {
                format!("Diktierfehler: {}", message)
            }
            AntragError::ConfigValidationError { field, message } => {
                format!("Ungültige Konfiguration ({}): {}", field, message)
            }
            AntragError::InvalidConfigValueError { field, value, .. } => {
                format!("Ungültiger Wert für {}: '{}'", field, value)
            }
            AntragError::IoError(e) => format!("Dateifehler: {}", e),
            AntragError::SerializationError(e) => format!("Ausgabefehler: {}", e),
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            AntragError::ClipboardError { .. } => {
                "Install wl-copy, xclip, xsel or pbcopy, or copy the printed letter manually"
                    .to_string()
            }
            AntragError::MailError { .. } => {
                "Check that a default mail client is configured, or paste the letter manually"
                    .to_string()
            }
            AntragError::DictationError { .. } => {
                "Dictation is optional; type the text instead".to_string()
            }
            AntragError::ConfigValidationError { field, .. }
            | AntragError::InvalidConfigValueError { field, .. } => {
                format!("Check the value supplied for '{}'", field)
            }
            AntragError::IoError(_) => "Check that the file exists and is readable".to_string(),
            AntragError::SerializationError(_) => "Re-run without --json".to_string(),
        }
    }
}
