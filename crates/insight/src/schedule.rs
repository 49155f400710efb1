use crate::models::DayInfo;
use time::OffsetDateTime;

// Both tables are Sunday-indexed: Sunday = 0 through Saturday = 6.
const LANGUAGE_SCHEDULE: [&str; 7] = [
    "Wildcard",   // Sunday
    "Python",     // Monday
    "Java",       // Tuesday
    "JavaScript", // Wednesday
    "Go",         // Thursday
    "Wildcard",   // Friday
    "Wildcard",   // Saturday
];

const DAY_NAMES: [&str; 7] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];

/// Resolve the day name, scheduled language, and ISO date for a UTC instant.
pub fn day_info_for(moment: OffsetDateTime) -> DayInfo {
    let index = moment.weekday().number_days_from_sunday() as usize;
    DayInfo {
        day_name: DAY_NAMES[index].to_string(),
        language: LANGUAGE_SCHEDULE[index].to_string(),
        date: moment.date().to_string(),
    }
}

pub fn current_day_info() -> DayInfo {
    day_info_for(OffsetDateTime::now_utc())
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::datetime;

    #[test]
    fn schedule_covers_every_weekday() {
        // 2025-06-01 is a Sunday; walk one full week.
        let expected = [
            ("Sunday", "Wildcard"),
            ("Monday", "Python"),
            ("Tuesday", "Java"),
            ("Wednesday", "JavaScript"),
            ("Thursday", "Go"),
            ("Friday", "Wildcard"),
            ("Saturday", "Wildcard"),
        ];

        let sunday = datetime!(2025-06-01 12:00 UTC);
        for (offset, (day_name, language)) in expected.iter().enumerate() {
            let info = day_info_for(sunday + time::Duration::days(offset as i64));
            assert_eq!(info.day_name, *day_name);
            assert_eq!(info.language, *language);
        }
    }

    #[test]
    fn monday_is_scheduled_for_python() {
        let info = day_info_for(datetime!(2025-06-02 09:00 UTC));
        assert_eq!(info.day_name, "Monday");
        assert_eq!(info.language, "Python");
    }

    #[test]
    fn date_renders_as_iso_calendar_date() {
        let info = day_info_for(datetime!(2025-06-02 23:59 UTC));
        assert_eq!(info.date, "2025-06-02");
    }
}
