use chrono::{DateTime, Datelike, Timelike, Utc};

static SPANISH_MONTHS: [&str; 12] = [
    "enero",
    "febrero",
    "marzo",
    "abril",
    "mayo",
    "junio",
    "julio",
    "agosto",
    "septiembre",
    "octubre",
    "noviembre",
    "diciembre",
];

pub fn current_time_in_millis() -> i64 {
    Utc::now().timestamp_millis()
}

pub fn current_time_rfc3339() -> String {
    Utc::now().to_rfc3339()
}

/// Long-form Spanish date used in customer emails, e.g. `19 de octubre de 2026, 10:05 UTC`.
pub fn format_purchase_date(date: &DateTime<Utc>) -> String {
    format!(
        "{} de {} de {}, {:02}:{:02} UTC",
        date.day(),
        SPANISH_MONTHS[date.month0() as usize],
        date.year(),
        date.hour(),
        date.minute()
    )
}
