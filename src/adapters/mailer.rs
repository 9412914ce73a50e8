use crate::domain::ports::MailLauncher;
use crate::utils::error::{AntragError, Result};
use crate::utils::validation::validate_mailto_url;
use std::process::Command;

/// Recipient of the reimbursement request.
pub const DEFAULT_RECIPIENT: &str = "stefan.baettig@pswaedenswil";

/// Builds a `mailto:` URI with recipient, subject and body percent-encoded.
pub fn mailto_url(to: &str, subject: &str, body: &str) -> String {
    format!(
        "mailto:{}?subject={}&body={}",
        urlencoding::encode(to),
        urlencoding::encode(subject),
        urlencoding::encode(body)
    )
}

/// Opens a mail draft through the platform's default handler. Fire-and-forget:
/// beyond launch success nothing is observed.
#[derive(Debug, Clone)]
pub struct SystemMailer {
    recipient: String,
}

impl SystemMailer {
    pub fn new(recipient: String) -> Self {
        Self { recipient }
    }
}

impl MailLauncher for SystemMailer {
    fn open_draft(&self, subject: &str, body: &str) -> Result<()> {
        let url = mailto_url(&self.recipient, subject, body);
        validate_mailto_url("mailto", &url)?;

        let status = opener_command(&url)
            .status()
            .map_err(|e| AntragError::MailError {
                message: format!("failed to launch mail handler: {}", e),
            })?;

        if !status.success() {
            return Err(AntragError::MailError {
                message: format!("mail handler exited with {}", status),
            });
        }

        tracing::debug!("Opened mail draft for {}", self.recipient);
        Ok(())
    }
}

fn opener_command(url: &str) -> Command {
    if cfg!(target_os = "macos") {
        let mut cmd = Command::new("open");
        cmd.arg(url);
        cmd
    } else if cfg!(target_os = "windows") {
        let mut cmd = Command::new("cmd");
        cmd.args(["/C", "start", "", url]);
        cmd
    } else {
        let mut cmd = Command::new("xdg-open");
        cmd.arg(url);
        cmd
    }
}
