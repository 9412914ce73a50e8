use crate::domain::ports::Clipboard;
use crate::utils::error::{AntragError, Result};
use std::io::Write;
use std::process::{Command, Stdio};

/// Candidate clipboard commands, tried in order. Covers Wayland, X11 and
/// macOS.
const CLIPBOARD_COMMANDS: &[(&str, &[&str])] = &[
    ("wl-copy", &[]),
    ("xclip", &["-selection", "clipboard"]),
    ("xsel", &["--clipboard", "--input"]),
    ("pbcopy", &[]),
];

/// Copies text by piping it into the first available clipboard command.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClipboard;

impl Clipboard for SystemClipboard {
    fn copy(&self, text: &str) -> Result<()> {
        for (program, args) in CLIPBOARD_COMMANDS {
            match pipe_to_command(program, args, text) {
                Ok(true) => {
                    tracing::debug!("Copied letter via {}", program);
                    return Ok(());
                }
                Ok(false) => {
                    tracing::debug!("{} exited with failure, trying next command", program);
                }
                Err(e) if e.kind() == std::io::ErrorKind::NotFound => continue,
                Err(e) => {
                    tracing::debug!("{} failed: {}, trying next command", program, e);
                }
            }
        }

        Err(AntragError::ClipboardError {
            message: "no clipboard command available (wl-copy, xclip, xsel, pbcopy)".to_string(),
        })
    }
}

fn pipe_to_command(program: &str, args: &[&str], text: &str) -> std::io::Result<bool> {
    let mut child = Command::new(program)
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()?;

    if let Some(mut stdin) = child.stdin.take() {
        stdin.write_all(text.as_bytes())?;
    }

    Ok(child.wait()?.success())
}
