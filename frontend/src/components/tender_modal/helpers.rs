//! Formatting and browser helpers for the tender modal.

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime};
use num_format::{CustomFormat, Grouping, ToFormattedString};

/// Display pattern of the publication date, e.g. `05/03/24 в 14:07`.
const DATE_PATTERN: &str = "%d/%m/%y в %H:%M";

/// Offset-less date-time layouts the registry is known to emit, read as local time.
const NAIVE_PATTERNS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

/// Formats a publication timestamp as `DD/MM/YY в HH:mm` in the browser's time zone.
///
/// RFC 3339 values are converted to local time. Naive date-times are taken
/// as local already, and a bare `YYYY-MM-DD` is shown at midnight. Anything
/// else is shown as received.
pub fn format_date(raw: &str) -> String {
    let raw = raw.trim();
    if let Ok(date) = DateTime::parse_from_rfc3339(raw) {
        return date.with_timezone(&Local).format(DATE_PATTERN).to_string();
    }
    for pattern in NAIVE_PATTERNS {
        if let Ok(date) = NaiveDateTime::parse_from_str(raw, pattern) {
            return date.format(DATE_PATTERN).to_string();
        }
    }
    if let Some(midnight) = NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|day| day.and_hms_opt(0, 0, 0))
    {
        return midnight.format(DATE_PATTERN).to_string();
    }
    raw.to_string()
}

/// Formats an amount with space-grouped thousands and a comma before kopecks,
/// which are omitted when zero: `12 000,50`, `340`.
pub fn format_amount(amount: f64) -> String {
    let total_cents = (amount.abs() * 100.0).round() as i64;
    let whole = match CustomFormat::builder()
        .grouping(Grouping::Standard)
        .separator(" ")
        .build()
    {
        Ok(format) => (total_cents / 100).to_formatted_string(&format),
        Err(_) => (total_cents / 100).to_string(),
    };
    let cents = total_cents % 100;
    let sign = if amount < 0.0 && total_cents != 0 { "-" } else { "" };

    if cents == 0 {
        format!("{}{}", sign, whole)
    } else {
        format!("{}{},{:02}", sign, whole, cents)
    }
}

/// Sends the browser to `url`; the backend answers with an attachment, so the
/// page stays where it is and a download starts.
pub fn navigate_to(url: &str) {
    let Some(window) = web_sys::window() else {
        return;
    };
    if let Err(err) = window.location().set_href(url) {
        gloo_console::error!(format!("failed to navigate to {}", url), err);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rfc3339_is_shown_in_local_time() {
        let expected = DateTime::parse_from_rfc3339("2024-03-05T12:07:00Z")
            .unwrap()
            .with_timezone(&Local)
            .format(DATE_PATTERN)
            .to_string();
        assert_eq!(format_date("2024-03-05T12:07:00Z"), expected);
        // same instant written with another offset
        assert_eq!(format_date("2024-03-05T14:07:00+02:00"), expected);
    }

    #[test]
    fn formats_naive_iso_datetime() {
        assert_eq!(format_date("2023-12-31T09:05:59.123"), "31/12/23 в 09:05");
        assert_eq!(format_date("2024-03-05T14:07:00"), "05/03/24 в 14:07");
    }

    #[test]
    fn formats_datetime_without_seconds() {
        assert_eq!(format_date("2024-03-05T14:07"), "05/03/24 в 14:07");
        assert_eq!(format_date("2024-03-05 14:07"), "05/03/24 в 14:07");
    }

    #[test]
    fn formats_space_separated_datetime() {
        assert_eq!(format_date("2024-03-05 14:07:00"), "05/03/24 в 14:07");
    }

    #[test]
    fn date_only_renders_at_midnight() {
        assert_eq!(format_date("2024-03-05"), "05/03/24 в 00:00");
    }

    #[test]
    fn unparseable_date_is_shown_verbatim() {
        assert_eq!(format_date("скоро"), "скоро");
    }

    #[test]
    fn amounts_group_thousands() {
        assert_eq!(format_amount(340.0), "340");
        assert_eq!(format_amount(1_234_567.0), "1 234 567");
        assert_eq!(format_amount(12_000.5), "12 000,50");
        assert_eq!(format_amount(0.07), "0,07");
    }
}
