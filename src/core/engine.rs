use crate::core::allowance::compute_summary;
use crate::core::compose::compose_letter;
use crate::core::format::format_date;
use crate::domain::model::{GeneratedRequest, RequestInput};
use crate::domain::ports::Clock;

/// Runs the generation flow: date formatting, allowance computation, letter
/// composition. The clock is the only non-pure dependency.
pub struct LetterEngine<C: Clock> {
    clock: C,
}

impl<C: Clock> LetterEngine<C> {
    pub fn new(clock: C) -> Self {
        Self { clock }
    }

    pub fn generate(&self, input: &RequestInput) -> GeneratedRequest {
        let date = format_date(self.clock.today());
        tracing::debug!("Generating request dated {}", date);

        let summary = compute_summary(
            input.pensum_pct,
            input.include_device,
            input.include_mobility,
        );
        tracing::debug!(
            "Computed {} line item(s), total {}",
            summary.line_items.len(),
            summary.total
        );

        let letter = compose_letter(input, &summary, &date);
        tracing::debug!("Composed letter of {} bytes", letter.text.len());

        GeneratedRequest {
            date,
            summary,
            letter,
        }
    }
}
