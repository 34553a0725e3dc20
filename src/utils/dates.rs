use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use thiserror::Error;

const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DueDateError {
    #[error("Invalid due date '{0}'. Expected YYYY-MM-DD")]
    Malformed(String),

    #[error("Due date {0} is in the past")]
    InPast(NaiveDate),
}

/// Date portion (`YYYY-MM-DD`) of a wire date or date-time value.
#[must_use]
pub fn date_portion(value: &str) -> String {
    value.chars().take(10).collect()
}

/// Today's date in the local timezone.
#[must_use]
pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

/// Parse the text of a due-date form field.
///
/// Blank text means "no due date" and yields `Ok(None)`, never an empty
/// string. Dates before `today` are rejected.
pub fn parse_due_date(text: &str, today: NaiveDate) -> Result<Option<NaiveDate>, DueDateError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    let date = NaiveDate::parse_from_str(trimmed, DATE_FORMAT)
        .map_err(|_| DueDateError::Malformed(trimmed.to_string()))?;
    if date < today {
        return Err(DueDateError::InPast(date));
    }
    Ok(Some(date))
}

/// Start of day for a due date, as sent to date-time typed fields.
#[must_use]
pub fn midnight(date: NaiveDate) -> NaiveDateTime {
    date.and_time(NaiveTime::MIN)
}

#[cfg(test)]
#[path = "dates_tests.rs"]
mod tests;
