use serde::{Deserialize, Serialize};
use std::fmt;

/// Pensum used when the supplied employment percentage is unusable.
pub const DEFAULT_PENSUM_PCT: u32 = 100;

pub const MIN_PENSUM_PCT: u32 = 1;
pub const MAX_PENSUM_PCT: u32 = 100;

/// Rhetorical register of the generated letter. Affects only the opening and
/// closing sentences, never the itemization or the total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    #[default]
    Neutral,
    Happy,
    Grumpy,
}

impl Tone {
    /// Total lookup: anything that is not a known tone falls back to neutral.
    pub fn parse(value: &str) -> Tone {
        match value.trim().to_ascii_lowercase().as_str() {
            "happy" => Tone::Happy,
            "grumpy" => Tone::Grumpy,
            _ => Tone::Neutral,
        }
    }
}

/// The form fields a request is generated from. Recomputed in full on every
/// generation; nothing is persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RequestInput {
    pub first_name: String,
    pub last_name: String,
    pub role: String,
    /// Employment percentage in [1,100], already normalized.
    pub pensum_pct: u32,
    pub include_device: bool,
    pub include_mobility: bool,
    pub tone: Tone,
}

/// Normalizes a numeric pensum value: values inside [1,100] pass through,
/// anything else falls back to the full pensum.
pub fn clamp_pensum(value: i64) -> u32 {
    if (MIN_PENSUM_PCT as i64..=MAX_PENSUM_PCT as i64).contains(&value) {
        value as u32
    } else {
        DEFAULT_PENSUM_PCT
    }
}

/// Normalizes free-text pensum input ("80", " 80 ", "abc", "150"). Non-numeric
/// input falls back to the full pensum.
pub fn parse_pensum(raw: &str) -> u32 {
    match raw.trim().parse::<i64>() {
        Ok(value) => clamp_pensum(value),
        Err(_) => DEFAULT_PENSUM_PCT,
    }
}

/// One requested allowance with its annual amount in francs. Amounts stay
/// unrounded; only the display layer rounds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AllowanceLineItem {
    pub label: String,
    pub annual_amount: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AllowanceSummary {
    /// Included items in fixed order: device allowance before mobility.
    pub line_items: Vec<AllowanceLineItem>,
    /// Exact sum of the included items' amounts; 0 when nothing is included.
    pub total: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComposedLetter {
    pub text: String,
}

impl fmt::Display for ComposedLetter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// Result of one generation run: the formatted date the letter carries, the
/// computed summary and the composed letter text.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GeneratedRequest {
    pub date: String,
    pub summary: AllowanceSummary,
    pub letter: ComposedLetter,
}
