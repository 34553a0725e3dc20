use super::*;

fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn test_date_portion_truncates_date_time() {
    assert_eq!(date_portion("2026-11-02T15:04:05+00:00"), "2026-11-02");
}

#[test]
fn test_date_portion_keeps_plain_date() {
    assert_eq!(date_portion("2026-11-02"), "2026-11-02");
}

#[test]
fn test_date_portion_short_value() {
    assert_eq!(date_portion("2026"), "2026");
    assert_eq!(date_portion(""), "");
}

#[test]
fn test_parse_due_date_blank_is_absent() {
    let today = day(2026, 10, 15);
    assert_eq!(parse_due_date("", today), Ok(None));
    assert_eq!(parse_due_date("   ", today), Ok(None));
}

#[test]
fn test_parse_due_date_valid() {
    let today = day(2026, 10, 15);
    assert_eq!(
        parse_due_date("2026-12-01", today),
        Ok(Some(day(2026, 12, 1)))
    );
    assert_eq!(parse_due_date(" 2026-10-15 ", today), Ok(Some(today)));
}

#[test]
fn test_parse_due_date_malformed() {
    let today = day(2026, 10, 15);
    let err = parse_due_date("12/01/2026", today).unwrap_err();
    assert_eq!(err, DueDateError::Malformed("12/01/2026".to_string()));
    assert!(err.to_string().contains("YYYY-MM-DD"));
}

#[test]
fn test_parse_due_date_rejects_past() {
    let today = day(2026, 10, 15);
    let err = parse_due_date("2026-10-14", today).unwrap_err();
    assert_eq!(err, DueDateError::InPast(day(2026, 10, 14)));
}

#[test]
fn test_midnight() {
    let at = midnight(day(2026, 12, 1));
    assert_eq!(
        at.format("%Y-%m-%dT%H:%M:%S").to_string(),
        "2026-12-01T00:00:00"
    );
}
