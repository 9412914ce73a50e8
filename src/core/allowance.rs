use crate::domain::model::{AllowanceLineItem, AllowanceSummary};

/// Art. 12: CHF 250 per year at full pensum, proportional to the pensum.
pub const DEVICE_ALLOWANCE_FULL_PENSUM: f64 = 250.0;

/// Flat CHF 150 per year, independent of the pensum.
pub const MOBILITY_ALLOWANCE_ANNUAL: f64 = 150.0;

pub const DEVICE_ALLOWANCE_LABEL: &str = "Mobiltelefonpauschale (jährlich)";
pub const MOBILITY_ALLOWANCE_LABEL: &str = "Mobilitätspauschale (jährlich)";

pub fn device_allowance_annual(pensum_pct: u32) -> f64 {
    DEVICE_ALLOWANCE_FULL_PENSUM * pensum_pct as f64 / 100.0
}

pub fn mobility_allowance_annual() -> f64 {
    MOBILITY_ALLOWANCE_ANNUAL
}

/// Builds the summary for the enabled toggles, device allowance first. Amounts
/// are exact; rounding happens in the display layer only.
pub fn compute_summary(
    pensum_pct: u32,
    include_device: bool,
    include_mobility: bool,
) -> AllowanceSummary {
    let mut line_items = Vec::new();

    if include_device {
        line_items.push(AllowanceLineItem {
            label: DEVICE_ALLOWANCE_LABEL.to_string(),
            annual_amount: device_allowance_annual(pensum_pct),
        });
    }

    if include_mobility {
        line_items.push(AllowanceLineItem {
            label: MOBILITY_ALLOWANCE_LABEL.to_string(),
            annual_amount: mobility_allowance_annual(),
        });
    }

    let total = line_items.iter().map(|item| item.annual_amount).sum();

    AllowanceSummary { line_items, total }
}
