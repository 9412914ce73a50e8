use crate::core::format::format_chf;
use crate::domain::model::{AllowanceSummary, ComposedLetter, RequestInput, Tone};

/// Fixed sender block; the recipient's postal address, not the applicant's.
pub const SENDER_BLOCK: &str = "Schulverwaltung\n\
Stefan Bättig\n\
Eintrachtstrasse 24\n\
8820 Wädenswil";

pub const SUBJECT: &str = "Antrag auf pauschale Spesenentschädigungen";

const SALUTATION: &str = "Lieber Stefan";

const NO_ITEMS_LINE: &str = "- (keine Pauschalen ausgewählt)";

const FIRST_NAME_PLACEHOLDER: &str = "[Vorname]";
const LAST_NAME_PLACEHOLDER: &str = "[Nachname]";
const ROLE_PLACEHOLDER: &str = "[Funktion]";

const CLOSING_REQUEST: &str = "Ich bitte um Bestätigung der Auszahlung (inkl. \
Stichtag/Abrechnungsmodus) sowie um kurze Rückmeldung, falls ergänzende Angaben \
benötigt werden.";

const VALEDICTION: &str = "Freundliche Grüsse";

fn opening_sentence(tone: Tone) -> &'static str {
    match tone {
        Tone::Neutral => {
            "Hiermit beantrage ich die Ausrichtung der pauschalen \
             Spesenentschädigungen gemäss den geltenden Regelungen. Meine Angaben:"
        }
        Tone::Happy => {
            "Sehr gerne beantrage ich die Ausrichtung der pauschalen \
             Spesenentschädigungen gemäss den geltenden Regelungen. Meine Angaben:"
        }
        Tone::Grumpy => {
            "Einmal mehr bleibt mir nichts anderes übrig, als die Ausrichtung der \
             pauschalen Spesenentschädigungen gemäss den geltenden Regelungen zu \
             beantragen. Meine Angaben:"
        }
    }
}

fn closing_sentence(tone: Tone) -> &'static str {
    match tone {
        Tone::Neutral => "Besten Dank für die Bearbeitung.",
        Tone::Happy => "Herzlichen Dank im Voraus für die rasche Bearbeitung!",
        Tone::Grumpy => "Ich gehe davon aus, dass die Bearbeitung diesmal zügig erfolgt.",
    }
}

fn field_or_placeholder<'a>(value: &'a str, placeholder: &'a str) -> &'a str {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        placeholder
    } else {
        trimmed
    }
}

fn itemization(summary: &AllowanceSummary) -> String {
    if summary.line_items.is_empty() {
        return NO_ITEMS_LINE.to_string();
    }

    summary
        .line_items
        .iter()
        .map(|item| format!("- {}: {}", item.label, format_chf(item.annual_amount)))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Renders the full letter. Total over any input: empty fields become
/// placeholders, the date is injected by the caller, and the tone only selects
/// the opening and closing sentences.
pub fn compose_letter(
    input: &RequestInput,
    summary: &AllowanceSummary,
    today: &str,
) -> ComposedLetter {
    let first_name = field_or_placeholder(&input.first_name, FIRST_NAME_PLACEHOLDER);
    let last_name = field_or_placeholder(&input.last_name, LAST_NAME_PLACEHOLDER);
    let role = field_or_placeholder(&input.role, ROLE_PLACEHOLDER);

    let text = format!(
        "{sender}\n\
         \n\
         Datum: {today}\n\
         \n\
         Betreff: {subject}\n\
         \n\
         {salutation}\n\
         \n\
         {opening}\n\
         \n\
         Name: {first_name} {last_name}\n\
         Funktion: {role}\n\
         Anstellungsgrad: vgl. Pensenvereinbarung\n\
         \n\
         Beantragte Pauschalen:\n\
         {items}\n\
         \n\
         Total (jährlich): {total}\n\
         \n\
         {closing_request}\n\
         \n\
         {closing}\n\
         \n\
         {valediction}\n\
         {first_name}\n",
        sender = SENDER_BLOCK,
        today = today,
        subject = SUBJECT,
        salutation = SALUTATION,
        opening = opening_sentence(input.tone),
        first_name = first_name,
        last_name = last_name,
        role = role,
        items = itemization(summary),
        total = format_chf(summary.total),
        closing_request = CLOSING_REQUEST,
        closing = closing_sentence(input.tone),
        valediction = VALEDICTION,
    );

    ComposedLetter { text }
}
