use chrono::NaiveDate;

/// de-CH thousands separator.
const GROUP_SEPARATOR: char = '\u{2019}';

/// Renders an amount as a whole-franc figure, e.g. `CHF 2’500.-`. Rounds half
/// up; the `.-` marker states that no decimal component is tracked.
pub fn format_chf(amount: f64) -> String {
    let rounded = (amount + 0.5).floor() as i64;
    format!("CHF {}.-", group_thousands(rounded))
}

/// Renders a date as `dd.mm.yyyy` (de-CH convention).
pub fn format_date(date: NaiveDate) -> String {
    date.format("%d.%m.%Y").to_string()
}

fn group_thousands(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(GROUP_SEPARATOR);
        }
        grouped.push(ch);
    }

    if value < 0 {
        format!("-{}", grouped)
    } else {
        grouped
    }
}
