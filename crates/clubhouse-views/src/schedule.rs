//! Upcoming/past split and French date display.

use chrono::{DateTime, Datelike, Timelike, Utc};
use clubhouse_protocol::Event;

/// Shown instead of a date for events without one.
pub const ONGOING_LABEL: &str = "Événement en cours";

const MONTHS: [&str; 12] = [
    "janvier",
    "février",
    "mars",
    "avril",
    "mai",
    "juin",
    "juillet",
    "août",
    "septembre",
    "octobre",
    "novembre",
    "décembre",
];

/// An event is upcoming if it has no date (ongoing) or if its date is
/// not before `now`.
pub fn is_upcoming(date: Option<DateTime<Utc>>, now: DateTime<Utc>) -> bool {
    date.is_none_or(|date| date >= now)
}

/// Splits events into `(upcoming, past)`, keeping their relative order.
pub fn partition(events: &[Event], now: DateTime<Utc>) -> (Vec<Event>, Vec<Event>) {
    events
        .iter()
        .cloned()
        .partition(|event| is_upcoming(event.date, now))
}

/// `5 mars 2025`
pub fn format_date(date: DateTime<Utc>) -> String {
    let month = MONTHS[date.month0() as usize];
    format!("{} {} {}", date.day(), month, date.year())
}

/// `14:05`
pub fn format_time(date: DateTime<Utc>) -> String {
    format!("{:02}:{:02}", date.hour(), date.minute())
}

/// The date line of an event card.
pub fn date_label(date: Option<DateTime<Utc>>) -> String {
    date.map(format_date)
        .unwrap_or_else(|| ONGOING_LABEL.to_string())
}

/// `3/10 participants`
pub fn seats_label(event: &Event) -> String {
    format!("{}/{} participants", event.seats_taken(), event.member_limit)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use clubhouse_protocol::{Activity, EventId};

    fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, h, min, 0).unwrap()
    }

    fn event(id: &str, date: Option<DateTime<Utc>>) -> Event {
        Event {
            id: EventId::new(id),
            activity: Activity::Chess,
            title: id.into(),
            description: String::new(),
            date,
            location: String::new(),
            member_limit: 10,
            members: vec![],
        }
    }

    #[test]
    fn test_is_upcoming_boundaries() {
        let now = at(2025, 3, 5, 12, 0);
        assert!(is_upcoming(Some(now), now));
        assert!(is_upcoming(Some(at(2025, 3, 5, 12, 1)), now));
        assert!(!is_upcoming(Some(at(2025, 3, 5, 11, 59)), now));
        assert!(is_upcoming(None, now));
    }

    #[test]
    fn test_partition_keeps_order_and_puts_ongoing_upcoming() {
        let now = at(2025, 3, 5, 12, 0);
        let events = vec![
            event("old", Some(at(2024, 1, 1, 0, 0))),
            event("ongoing", None),
            event("next", Some(at(2025, 4, 1, 9, 0))),
            event("older", Some(at(2023, 1, 1, 0, 0))),
        ];

        let (upcoming, past) = partition(&events, now);

        fn ids(events: &[Event]) -> Vec<String> {
            events.iter().map(|e| e.id.to_string()).collect()
        }
        assert_eq!(ids(&upcoming), ["ongoing", "next"]);
        assert_eq!(ids(&past), ["old", "older"]);
    }

    #[test]
    fn test_format_date_french_long_form() {
        assert_eq!(format_date(at(2025, 3, 5, 0, 0)), "5 mars 2025");
        assert_eq!(format_date(at(2024, 8, 15, 0, 0)), "15 août 2024");
        assert_eq!(format_date(at(2023, 12, 31, 0, 0)), "31 décembre 2023");
    }

    #[test]
    fn test_format_time_is_zero_padded() {
        assert_eq!(format_time(at(2025, 3, 5, 9, 5)), "09:05");
        assert_eq!(format_time(at(2025, 3, 5, 18, 30)), "18:30");
    }

    #[test]
    fn test_date_label_absent_is_ongoing() {
        assert_eq!(date_label(None), "Événement en cours");
        assert_eq!(date_label(Some(at(2025, 2, 1, 0, 0))), "1 février 2025");
    }

    #[test]
    fn test_seats_label() {
        let mut e = event("E1", None);
        e.members = vec!["a".into(), "b".into(), "c".into()];
        assert_eq!(seats_label(&e), "3/10 participants");
    }
}
