use chrono::{Local, NaiveDate};

/// Date format used throughout rendered documents.
const DOCUMENT_DATE_FORMAT: &str = "%d.%m.%Y";

pub fn format_date(date: NaiveDate) -> String {
    date.format(DOCUMENT_DATE_FORMAT).to_string()
}

/// Today's date in document format, used for the tender submission date field.
pub fn today() -> String {
    Local::now().date_naive().format(DOCUMENT_DATE_FORMAT).to_string()
}
