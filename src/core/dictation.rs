use crate::domain::ports::TranscriptEvent;

pub const STATUS_RUNNING: &str = "Diktieren läuft…";
pub const STATUS_INSERTED: &str = "✓ eingefügt";

/// Inserts a transcript fragment into `text`, replacing the `start..end`
/// selection. A separating space is prepended when the preceding character is
/// neither a newline nor a space, and one trailing space is appended. Returns
/// the new text and the cursor position after the insertion.
///
/// `start` and `end` are byte offsets; offsets past the end or inside a
/// character are clamped back to the nearest boundary.
pub fn insert_at_cursor(text: &str, start: usize, end: usize, fragment: &str) -> (String, usize) {
    let start = clamp_to_boundary(text, start);
    let end = clamp_to_boundary(text, end).max(start);

    let before = &text[..start];
    let after = &text[end..];

    let needs_space = !before.is_empty() && !before.ends_with('\n') && !before.ends_with(' ');

    let mut inserted = String::new();
    if needs_space {
        inserted.push(' ');
    }
    inserted.push_str(fragment.trim());
    inserted.push(' ');

    let cursor = start + inserted.len();
    (format!("{}{}{}", before, inserted, after), cursor)
}

fn clamp_to_boundary(text: &str, mut offset: usize) -> usize {
    offset = offset.min(text.len());
    while !text.is_char_boundary(offset) {
        offset -= 1;
    }
    offset
}

/// Applies speech-recognition events to a text buffer and keeps the status
/// line the user sees. Transcript content is inserted verbatim, never
/// interpreted or corrected.
#[derive(Debug)]
pub struct DictationController {
    buffer: String,
    cursor: usize,
    status: String,
    active: bool,
}

impl DictationController {
    /// Starts from an existing buffer with the cursor at its end.
    pub fn new(buffer: String) -> Self {
        let cursor = buffer.len();
        Self {
            buffer,
            cursor,
            status: String::new(),
            active: false,
        }
    }

    pub fn handle_event(&mut self, event: TranscriptEvent) {
        match event {
            TranscriptEvent::Started => {
                self.active = true;
                self.status = STATUS_RUNNING.to_string();
            }
            TranscriptEvent::Interim(text) => {
                let trimmed = text.trim();
                if !trimmed.is_empty() {
                    self.status = format!("…{}", trimmed);
                }
            }
            TranscriptEvent::Final(text) => {
                if !text.trim().is_empty() {
                    let (buffer, cursor) =
                        insert_at_cursor(&self.buffer, self.cursor, self.cursor, &text);
                    self.buffer = buffer;
                    self.cursor = cursor;
                    self.status = STATUS_INSERTED.to_string();
                }
            }
            TranscriptEvent::Error(code) => {
                self.status = format!("Diktierfehler: {}", code);
            }
            TranscriptEvent::Ended => {
                self.active = false;
                self.status.clear();
            }
        }
    }

    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    pub fn status(&self) -> &str {
        &self.status
    }

    pub fn is_active(&self) -> bool {
        self.active
    }
}
