//! Status and date normalization utilities.
//!
//! Pure functions mapping raw domain values to the small closed set of UI
//! badge categories and to human-readable date/time strings. All of them
//! degrade to a defined default or pass the input through rather than
//! failing; the presentation layer never has to handle an error from here.

use chrono::{DateTime, Datelike, Local, NaiveDate, Timelike};

use wardboard_types::StatusType;

/// Map a raw appointment status string to a UI badge category.
///
/// Case-insensitive; unrecognised input maps to `Pending`.
pub fn map_appointment_status_to_status_type(raw: &str) -> StatusType {
    match raw.trim().to_lowercase().as_str() {
        "in progress" => StatusType::Active,
        "scheduled" => StatusType::Pending,
        "completed" => StatusType::Completed,
        "cancelled" => StatusType::Cancelled,
        "no-show" | "no show" => StatusType::Inactive,
        _ => StatusType::Pending,
    }
}

/// Map a raw patient status string to a UI badge category.
///
/// Case-insensitive; unrecognised input maps to `Active`.
pub fn map_patient_status_to_status_type(raw: &str) -> StatusType {
    match raw.trim().to_lowercase().as_str() {
        "in treatment" => StatusType::Active,
        "scheduled" => StatusType::Pending,
        "critical" => StatusType::Critical,
        "discharged" => StatusType::Inactive,
        _ => StatusType::Active,
    }
}

/// Map a raw staff duty status string to a UI badge category.
///
/// Case-insensitive; unrecognised input maps to `Active`.
pub fn map_staff_status_to_status_type(raw: &str) -> StatusType {
    match raw.trim().to_lowercase().as_str() {
        "on duty" => StatusType::Active,
        "on call" => StatusType::Pending,
        "off duty" | "on leave" => StatusType::Inactive,
        _ => StatusType::Active,
    }
}

/// Format an ISO date (`YYYY-MM-DD`) as a long human-readable date, e.g.
/// `"August 30, 2026"`. Returns the input unchanged if it does not parse.
pub fn format_long_date(raw: &str) -> String {
    match NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d") {
        Ok(date) => format!("{} {}, {}", month_name(date.month()), date.day(), date.year()),
        Err(_) => raw.to_string(),
    }
}

/// Normalise a 24-hour `HH:MM` string to `H:MM AM/PM`.
///
/// Strings already containing `AM`/`PM` pass through unchanged, as does
/// anything that does not parse as a time.
pub fn format_time_12h(raw: &str) -> String {
    let trimmed = raw.trim();
    let upper = trimmed.to_uppercase();
    if upper.contains("AM") || upper.contains("PM") {
        return trimmed.to_string();
    }

    let Some((hour_part, minute_part)) = trimmed.split_once(':') else {
        return raw.to_string();
    };
    let (Ok(hour), Ok(minute)) = (hour_part.parse::<u32>(), minute_part.parse::<u32>()) else {
        return raw.to_string();
    };
    if hour > 23 || minute > 59 {
        return raw.to_string();
    }

    let meridiem = if hour < 12 { "AM" } else { "PM" };
    let display_hour = match hour % 12 {
        0 => 12,
        h => h,
    };
    format!("{display_hour}:{minute:02} {meridiem}")
}

/// Format an ISO timestamp relative to the current local date:
/// `"Today at 2:30 PM"`, `"Yesterday at 9:05 AM"`, or an absolute
/// date + time for anything older. Returns the input unchanged if it does
/// not parse.
pub fn format_relative_timestamp(iso: &str) -> String {
    format_relative_timestamp_at(iso, Local::now())
}

/// [`format_relative_timestamp`] against an explicit "now", for callers
/// that need determinism.
pub fn format_relative_timestamp_at(iso: &str, now: DateTime<Local>) -> String {
    let Ok(parsed) = DateTime::parse_from_rfc3339(iso.trim()) else {
        return iso.to_string();
    };
    let local = parsed.with_timezone(&Local);
    let time = format_time_12h(&format!("{:02}:{:02}", local.hour(), local.minute()));

    let days_apart = now
        .date_naive()
        .signed_duration_since(local.date_naive())
        .num_days();
    match days_apart {
        0 => format!("Today at {time}"),
        1 => format!("Yesterday at {time}"),
        _ => {
            let date = local.date_naive();
            format!(
                "{} {}, {} at {time}",
                month_name(date.month()),
                date.day(),
                date.year()
            )
        }
    }
}

fn month_name(month: u32) -> &'static str {
    match month {
        1 => "January",
        2 => "February",
        3 => "March",
        4 => "April",
        5 => "May",
        6 => "June",
        7 => "July",
        8 => "August",
        9 => "September",
        10 => "October",
        11 => "November",
        12 => "December",
        _ => "",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn appointment_statuses_map_case_insensitively() {
        assert_eq!(
            map_appointment_status_to_status_type("COMPLETED"),
            StatusType::Completed
        );
        assert_eq!(
            map_appointment_status_to_status_type("No-show"),
            StatusType::Inactive
        );
        assert_eq!(
            map_appointment_status_to_status_type("something else"),
            StatusType::Pending
        );
    }

    #[test]
    fn patient_statuses_default_to_active() {
        assert_eq!(
            map_patient_status_to_status_type("critical"),
            StatusType::Critical
        );
        assert_eq!(map_patient_status_to_status_type("???"), StatusType::Active);
    }

    #[test]
    fn staff_statuses_map_to_badges() {
        assert_eq!(map_staff_status_to_status_type("On Duty"), StatusType::Active);
        assert_eq!(
            map_staff_status_to_status_type("on leave"),
            StatusType::Inactive
        );
    }

    #[test]
    fn long_date_formats_and_passes_through() {
        assert_eq!(format_long_date("2026-08-30"), "August 30, 2026");
        assert_eq!(format_long_date("2026-01-05"), "January 5, 2026");
        assert_eq!(format_long_date("tomorrow"), "tomorrow");
    }

    #[test]
    fn time_converts_to_twelve_hour() {
        assert_eq!(format_time_12h("14:30"), "2:30 PM");
        assert_eq!(format_time_12h("09:05"), "9:05 AM");
        assert_eq!(format_time_12h("00:15"), "12:15 AM");
        assert_eq!(format_time_12h("12:00"), "12:00 PM");
    }

    #[test]
    fn time_with_meridiem_passes_through() {
        assert_eq!(format_time_12h("2:30 PM"), "2:30 PM");
        assert_eq!(format_time_12h("half past"), "half past");
    }

    #[test]
    fn relative_timestamps_use_the_given_now() {
        let now = Local::now();
        let today = now.to_rfc3339();
        let yesterday = (now - Duration::days(1)).to_rfc3339();
        let last_month = (now - Duration::days(40)).to_rfc3339();

        assert!(format_relative_timestamp_at(&today, now).starts_with("Today at "));
        assert!(format_relative_timestamp_at(&yesterday, now).starts_with("Yesterday at "));
        let absolute = format_relative_timestamp_at(&last_month, now);
        assert!(!absolute.starts_with("Today"));
        assert!(absolute.contains(" at "));
    }

    #[test]
    fn unparseable_timestamp_passes_through() {
        assert_eq!(format_relative_timestamp("not a timestamp"), "not a timestamp");
    }
}
